//! Crop display name handling
//!
//! Labels come from an external translation lookup (`t(key)`):
//! 1. Translated label for the crop's `label_key`
//! 2. The crop's own (Swedish) name
//!
//! Labels are presentational only and never feed the arithmetic.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use crate::catalog::CropDefinition;

/// String-localization lookup
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> Option<String>;
}

/// Lookup that knows no keys; every crop keeps its own name
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Key → label table
#[derive(Debug, Clone, Default)]
pub struct MapTranslator {
    entries: FxHashMap<String, String>,
}

impl MapTranslator {
    /// Load a flat JSON object of `key → label`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations: {:?}", path))?;

        let entries: FxHashMap<String, String> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse translations JSON")?;

        Ok(Self { entries })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapTranslator {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Translator for MapTranslator {
    fn translate(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Label for a crop: translation if available, otherwise its name
pub fn display_name(crop: &CropDefinition, translator: &dyn Translator) -> String {
    if crop.label_key.trim().is_empty() {
        return crop.name.clone();
    }

    match translator.translate(&crop.label_key) {
        Some(label) if !label.trim().is_empty() => label.trim().to_string(),
        _ => crop.name.clone(),
    }
}

/// Returns: "Label (Scientific name)" or just "Label"
pub fn full_display_name(crop: &CropDefinition, translator: &dyn Translator) -> String {
    let label = display_name(crop, translator);

    if crop.scientific_name.trim().is_empty() {
        label
    } else {
        format!("{} ({})", label, crop.scientific_name)
    }
}
