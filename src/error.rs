//! Planner Errors
//!
//! Typed reasons a plan computation can fail internally. These never reach
//! callers of `GardenPlanner::plan` as errors: the assembler converts them into
//! a degraded outcome and keeps the reason for diagnostics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum PlanError {
    /// Garden area was NaN or infinite
    #[error("invalid garden size: {0}")]
    InvalidGardenSize(f64),

    /// A crop volume override was NaN or infinite
    #[error("invalid volume for '{crop}': {value}")]
    InvalidVolume { crop: String, value: f64 },

    /// An aggregate overflowed to a non-finite value
    #[error("non-finite result while computing {0}")]
    NonFiniteResult(String),

    /// A crop definition failed catalog validation
    #[error("invalid crop '{name}': {reason}")]
    InvalidCrop { name: String, reason: String },

    #[error("duplicate crop name '{0}'")]
    DuplicateCrop(String),
}
