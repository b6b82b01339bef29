//! Planner Configuration
//!
//! Tunable constants for the estimation engine. Defaults are the values the
//! planner ships with; a JSON file can override any subset of them.
//!
//! Intensity tiers must stay strictly increasing (low < medium < high) for both
//! the yield multiplier and the cost factor.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

use crate::profile::CultivationIntensity;

/// Estimation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Daily energy need per person (kcal)
    pub daily_kcal_per_person: f64,

    /// Realized output per m² relative to the catalog constants
    pub yield_multipliers: TierValues,

    /// Establishment cost per cultivated m² (SEK) at medium intensity
    pub cost_per_m2: f64,

    /// Cost scaling per intensity tier
    pub cost_factors: TierValues,

    /// Crops used when a plan has to be recomputed after an internal fault
    pub fallback_crops: Vec<String>,

    /// Static hints shown next to the calorie split
    pub grocery_suggestions: Vec<String>,
}

/// One value per cultivation intensity tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierValues {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl TierValues {
    pub fn get(&self, intensity: CultivationIntensity) -> f64 {
        match intensity {
            CultivationIntensity::Low => self.low,
            CultivationIntensity::Medium => self.medium,
            CultivationIntensity::High => self.high,
        }
    }

    fn is_strictly_increasing(&self) -> bool {
        [self.low, self.medium, self.high].iter().all(|v| v.is_finite() && *v > 0.0)
            && self.low < self.medium
            && self.medium < self.high
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            daily_kcal_per_person: 2000.0,
            yield_multipliers: TierValues { low: 0.7, medium: 1.0, high: 1.3 },
            cost_per_m2: 25.0,
            cost_factors: TierValues { low: 0.8, medium: 1.0, high: 1.4 },
            fallback_crops: vec![
                "Potatis".to_string(),
                "Morötter".to_string(),
                "Vitkål".to_string(),
            ],
            grocery_suggestions: vec![
                "Baljväxter och nötter för protein".to_string(),
                "Fullkornsprodukter för energi och fibrer".to_string(),
                "Mejeriprodukter eller berikade alternativ för kalcium".to_string(),
                "Fisk eller rapsolja för omega-3".to_string(),
                "Frukt och bär för C-vitamin under vintern".to_string(),
            ],
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a JSON file
    ///
    /// Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read planner config: {:?}", path))?;

        let config: PlannerConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse planner config JSON")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.daily_kcal_per_person.is_finite() || self.daily_kcal_per_person <= 0.0 {
            anyhow::bail!(
                "daily_kcal_per_person must be positive, got {}",
                self.daily_kcal_per_person
            );
        }
        if !self.cost_per_m2.is_finite() || self.cost_per_m2 < 0.0 {
            anyhow::bail!("cost_per_m2 must be non-negative, got {}", self.cost_per_m2);
        }
        if !self.yield_multipliers.is_strictly_increasing() {
            anyhow::bail!("yield_multipliers must be positive and increase low < medium < high");
        }
        if !self.cost_factors.is_strictly_increasing() {
            anyhow::bail!("cost_factors must be positive and increase low < medium < high");
        }
        Ok(())
    }

    /// Yearly energy need for a household
    pub fn annual_calorie_need(&self, household_size: u32) -> f64 {
        household_size as f64 * self.daily_kcal_per_person * 365.0
    }
}
