//! Crop Catalog
//!
//! Immutable, indexed table of crop definitions. The built-in table is
//! materialized once per process; custom catalogs can be loaded from JSON and
//! are validated before use.
//!
//! Crops are addressed by position (arena-style) once resolved, so the
//! calculators never clone definitions.

mod lookup_tables;
pub mod month;

pub use month::Month;

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::profile::{ClimateZone, Difficulty};
use lookup_tables::CROP_ROWS;

/// A supported crop with its agronomic constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDefinition {
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    /// Translation key for the display label
    #[serde(default)]
    pub label_key: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    pub difficulty: Difficulty,
    pub sowing_months: Vec<Month>,
    pub harvest_months: Vec<Month>,
    /// m² per planting unit
    pub space_required: f64,
    /// kg per planting unit
    #[serde(rename = "yield")]
    pub yield_kg: f64,
    /// kcal per planting unit
    pub calories: f64,
    #[serde(default = "all_zones")]
    pub zones: Vec<ClimateZone>,
    /// Derived: `space_required / max(yield, 1)`; recomputed when a catalog is built
    #[serde(default)]
    pub space_per_plant: f64,
}

fn all_zones() -> Vec<ClimateZone> {
    ClimateZone::all().to_vec()
}

impl CropDefinition {
    pub fn sows_in(&self, month: Month) -> bool {
        self.sowing_months.contains(&month)
    }

    pub fn harvests_in(&self, month: Month) -> bool {
        self.harvest_months.contains(&month)
    }

    /// Calories per m² of bed, before intensity
    pub fn calories_per_m2(&self) -> f64 {
        self.calories / self.space_required
    }

    fn derive_space_per_plant(&mut self) {
        self.space_per_plant = self.space_required / self.yield_kg.max(1.0);
    }

    /// Check that the constants can drive the calculators
    fn validate(&self) -> std::result::Result<(), PlanError> {
        let invalid = |reason: &str| PlanError::InvalidCrop {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if !self.space_required.is_finite() || self.space_required <= 0.0 {
            return Err(invalid("spaceRequired must be a positive number"));
        }
        if !self.yield_kg.is_finite() || self.yield_kg < 0.0 {
            return Err(invalid("yield must be a non-negative number"));
        }
        if !self.calories.is_finite() || self.calories < 0.0 {
            return Err(invalid("calories must be a non-negative number"));
        }
        Ok(())
    }
}

impl CropDefinition {
    fn from_row(row: &lookup_tables::CropRow) -> Self {
        Self {
            name: row.name.to_string(),
            scientific_name: row.scientific_name.to_string(),
            label_key: row.label_key.to_string(),
            icon: row.icon.to_string(),
            color: row.color.to_string(),
            difficulty: row.difficulty,
            sowing_months: row.sowing.to_vec(),
            harvest_months: row.harvest.to_vec(),
            space_required: row.space,
            yield_kg: row.yield_kg,
            calories: row.calories,
            zones: row.zones.to_vec(),
            space_per_plant: 0.0,
        }
    }
}

/// Ordered crop table with a name index
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: Vec<CropDefinition>,
    index: FxHashMap<String, usize>,
}

static BUILTIN: OnceLock<CropCatalog> = OnceLock::new();

impl CropCatalog {
    /// Shared built-in catalog, same order on every call
    pub fn builtin() -> &'static CropCatalog {
        BUILTIN.get_or_init(|| Self::materialize(CROP_ROWS.iter().map(CropDefinition::from_row).collect()))
    }

    /// Build a catalog from caller-supplied definitions
    ///
    /// Rejects empty or duplicate names and constants that would make the
    /// arithmetic meaningless (non-positive space, negative yield/calories).
    pub fn from_definitions(definitions: Vec<CropDefinition>) -> std::result::Result<Self, PlanError> {
        {
            let mut seen = FxHashSet::default();
            for def in &definitions {
                def.validate()?;
                if !seen.insert(def.name.trim()) {
                    return Err(PlanError::DuplicateCrop(def.name.clone()));
                }
            }
        }
        Ok(Self::materialize(definitions))
    }

    /// Load a catalog from a JSON array of crop definitions
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crop catalog: {:?}", path))?;

        let definitions: Vec<CropDefinition> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse crop catalog JSON")?;

        let catalog = Self::from_definitions(definitions)
            .with_context(|| format!("Invalid crop catalog: {:?}", path))?;

        tracing::info!("Loaded {} crops from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    fn materialize(mut crops: Vec<CropDefinition>) -> Self {
        let mut index = FxHashMap::default();
        for (i, crop) in crops.iter_mut().enumerate() {
            crop.name = crop.name.trim().to_string();
            dedup_months(&mut crop.sowing_months);
            dedup_months(&mut crop.harvest_months);
            crop.derive_space_per_plant();
            index.insert(crop.name.clone(), i);
        }
        Self { crops, index }
    }

    pub fn get(&self, name: &str) -> Option<&CropDefinition> {
        self.index_of(name).map(|i| &self.crops[i])
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name.trim()).copied()
    }

    /// Crop at a position returned by `index_of` / `resolve`
    pub fn at(&self, index: usize) -> &CropDefinition {
        &self.crops[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropDefinition> {
        self.crops.iter()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Resolve selected names to catalog positions
    ///
    /// Keeps input order, drops repeats, and skips names the catalog does not
    /// know (stale selections are not an error).
    pub fn resolve<S: AsRef<str>>(&self, selected: &[S]) -> Vec<usize> {
        let mut seen = FxHashSet::default();
        let mut resolved = Vec::with_capacity(selected.len());

        for name in selected {
            let name = name.as_ref();
            match self.index_of(name) {
                Some(i) => {
                    if seen.insert(i) {
                        resolved.push(i);
                    }
                }
                None => tracing::debug!("Ignoring unknown crop '{}'", name),
            }
        }

        resolved
    }
}

fn dedup_months(months: &mut Vec<Month>) {
    months.sort();
    months.dedup();
}
