//! Utility modules
//!
//! - Display names: translation lookup contract and crop labels

pub mod display_name;

pub use display_name::{display_name, full_display_name, MapTranslator, NoTranslation, Translator};
