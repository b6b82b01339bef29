//! Nutrition Enrichment
//!
//! Optional per-crop nutrition facts attached to a finished plan. Lookups are
//! best-effort: a failing or silent source leaves `nutrition` empty and never
//! touches the calorie, space or cost figures.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::planner::GardenPlan;

/// Nutrients per 100 g edible portion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    pub protein_g: f64,
    pub carbohydrates_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub vitamin_c_mg: f64,
}

/// Provider of nutrition facts keyed by crop name
pub trait NutritionSource: Send + Sync {
    /// `Ok(None)` when the source does not know the crop
    fn nutrition_for(&self, crop: &str) -> Result<Option<NutritionFacts>>;
}

/// Source that never has data
pub struct NoNutrition;

impl NutritionSource for NoNutrition {
    fn nutrition_for(&self, _crop: &str) -> Result<Option<NutritionFacts>> {
        Ok(None)
    }
}

/// In-memory nutrition table
#[derive(Debug, Clone, Default)]
pub struct StaticNutritionTable {
    facts: FxHashMap<String, NutritionFacts>,
}

impl StaticNutritionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, crop: impl Into<String>, facts: NutritionFacts) {
        self.facts.insert(crop.into(), facts);
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Load a JSON object of `crop name → facts`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read nutrition table: {:?}", path))?;

        let facts: FxHashMap<String, NutritionFacts> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse nutrition table JSON")?;

        Ok(Self { facts })
    }
}

impl NutritionSource for StaticNutritionTable {
    fn nutrition_for(&self, crop: &str) -> Result<Option<NutritionFacts>> {
        Ok(self.facts.get(crop).cloned())
    }
}

/// Attach nutrition facts to each planned crop
///
/// Returns the number of crops that received data. Source errors are logged
/// and leave that crop without nutrition.
pub fn enrich_with_nutrition(plan: &mut GardenPlan, source: &dyn NutritionSource) -> usize {
    let mut enriched = 0;

    for crop in plan.crops.iter_mut() {
        match source.nutrition_for(&crop.definition.name) {
            Ok(Some(facts)) => {
                crop.nutrition = Some(facts);
                enriched += 1;
            }
            Ok(None) => crop.nutrition = None,
            Err(e) => {
                tracing::warn!("Nutrition lookup failed for {}: {:#}", crop.definition.name, e);
                crop.nutrition = None;
            }
        }
    }

    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{GardenPlanner, PlanRequest};
    use crate::profile::HouseholdProfile;

    struct FailingSource;

    impl NutritionSource for FailingSource {
        fn nutrition_for(&self, crop: &str) -> Result<Option<NutritionFacts>> {
            anyhow::bail!("provider unavailable for {}", crop)
        }
    }

    fn sample_plan() -> GardenPlan {
        let request = PlanRequest::new(
            HouseholdProfile::new(2, 20.0),
            vec!["Potatis".to_string(), "Morötter".to_string()],
        );
        GardenPlanner::builtin().plan(&request).into_plan()
    }

    fn potato_facts() -> NutritionFacts {
        NutritionFacts {
            protein_g: 2.0,
            carbohydrates_g: 17.0,
            fat_g: 0.1,
            fiber_g: 2.2,
            vitamin_c_mg: 19.7,
        }
    }

    #[test]
    fn test_enrichment_attaches_known_crops() {
        let mut table = StaticNutritionTable::new();
        table.insert("Potatis", potato_facts());

        let mut plan = sample_plan();
        let enriched = enrich_with_nutrition(&mut plan, &table);

        assert_eq!(enriched, 1);
        assert_eq!(plan.crops[0].nutrition, Some(potato_facts()));
        assert_eq!(plan.crops[1].nutrition, None);
    }

    #[test]
    fn test_enrichment_never_changes_numbers() {
        let baseline = sample_plan();

        let mut table = StaticNutritionTable::new();
        table.insert("Potatis", potato_facts());

        for source in [&table as &dyn NutritionSource, &NoNutrition, &FailingSource] {
            let mut plan = sample_plan();
            enrich_with_nutrition(&mut plan, source);
            assert_eq!(plan.calories_from_garden, baseline.calories_from_garden);
            assert_eq!(plan.self_sufficiency_percent, baseline.self_sufficiency_percent);
            assert_eq!(plan.total_space, baseline.total_space);
            assert_eq!(plan.estimated_cost, baseline.estimated_cost);
        }
    }

    #[test]
    fn test_failing_source_leaves_nutrition_absent() {
        let mut plan = sample_plan();
        assert_eq!(enrich_with_nutrition(&mut plan, &FailingSource), 0);
        assert!(plan.crops.iter().all(|c| c.nutrition.is_none()));
    }

    #[test]
    fn test_load_table_from_json() {
        let path = std::env::temp_dir().join("garden_planner_nutrition_test.json");
        fs::write(
            &path,
            r#"{"Morötter": {"proteinG": 0.9, "carbohydratesG": 9.6, "fatG": 0.2, "fiberG": 2.8, "vitaminCMg": 5.9}}"#,
        )
        .unwrap();

        let table = StaticNutritionTable::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(table.len(), 1);
        let carrot = table.nutrition_for("Morötter").unwrap().unwrap();
        assert_eq!(carrot.fiber_g, 2.8);
    }
}
