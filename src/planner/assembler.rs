//! Plan Assembler
//!
//! Turns a household profile and crop selection into a `GardenPlan`:
//! annual need, calorie split, crop list, calendar and totals.
//!
//! Internal faults never reach the caller. The assembler recomputes with the
//! configured fallback crops and returns `PlanOutcome::Degraded` carrying the
//! reason; if even that fails, an all-zero plan is returned.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{CropCatalog, CropDefinition};
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::nutrition::NutritionFacts;
use crate::profile::{CultivationIntensity, HouseholdProfile};
use crate::utils::display_name::{display_name, NoTranslation, Translator};
use super::production::{calculate_production, CropAllocation, ProductionSummary};
use super::tasks::{derive_monthly_tasks, empty_calendar, MonthlyTask};
use super::CropVolumes;

/// Everything a caller supplies for one plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanRequest {
    pub profile: HouseholdProfile,
    /// Replaces `profile.garden_size` when set
    pub garden_size_override: Option<f64>,
    pub selected_crops: Vec<String>,
    pub intensity: CultivationIntensity,
    pub crop_volumes: CropVolumes,
}

impl PlanRequest {
    pub fn new(profile: HouseholdProfile, selected_crops: Vec<String>) -> Self {
        Self {
            profile,
            selected_crops,
            ..Self::default()
        }
    }

    fn garden_size(&self) -> f64 {
        self.garden_size_override.unwrap_or(self.profile.garden_size)
    }
}

/// A selected crop with its share of the garden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedCrop {
    #[serde(flatten)]
    pub definition: CropDefinition,
    pub display_name: String,
    /// m²
    pub allotted_area: f64,
    pub planting_units: f64,
    pub estimated_yield_kg: f64,
    pub estimated_calories: f64,
    /// Absent unless a nutrition source was consulted and knew the crop
    pub nutrition: Option<NutritionFacts>,
}

/// Self-sufficiency estimate for one household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenPlan {
    /// Not capped at 100
    pub self_sufficiency_percent: u32,
    pub calories_from_garden: f64,
    /// `max(0, need - garden)`
    pub calories_from_groceries: f64,
    pub annual_calorie_need: f64,
    pub crops: Vec<PlannedCrop>,
    pub monthly_tasks: Vec<MonthlyTask>,
    /// m², rounded but never above the garden unless overrides exceed it
    pub total_space: f64,
    /// SEK, rounded
    pub estimated_cost: f64,
    pub total_yield_kg: f64,
    pub space_exceeds_garden: bool,
    pub garden_size: f64,
    pub intensity: CultivationIntensity,
    pub grocery_suggestions: Vec<String>,
}

/// Result of a planning call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlanOutcome {
    Computed { plan: GardenPlan },
    /// Fallback crops were used because the requested plan failed
    Degraded { plan: GardenPlan, reason: PlanError },
}

impl PlanOutcome {
    pub fn plan(&self) -> &GardenPlan {
        match self {
            PlanOutcome::Computed { plan } | PlanOutcome::Degraded { plan, .. } => plan,
        }
    }

    pub fn into_plan(self) -> GardenPlan {
        match self {
            PlanOutcome::Computed { plan } | PlanOutcome::Degraded { plan, .. } => plan,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, PlanOutcome::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&PlanError> {
        match self {
            PlanOutcome::Computed { .. } => None,
            PlanOutcome::Degraded { reason, .. } => Some(reason),
        }
    }
}

/// Plan assembler bound to a catalog and configuration
pub struct GardenPlanner<'a> {
    catalog: &'a CropCatalog,
    config: PlannerConfig,
    translator: &'a dyn Translator,
}

impl GardenPlanner<'static> {
    /// Built-in catalog with default configuration
    pub fn builtin() -> Self {
        Self {
            catalog: CropCatalog::builtin(),
            config: PlannerConfig::default(),
            translator: &NoTranslation,
        }
    }
}

impl<'a> GardenPlanner<'a> {
    /// Rejects a configuration that fails `PlannerConfig::validate`
    pub fn new(catalog: &'a CropCatalog, config: PlannerConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            translator: &NoTranslation,
        })
    }

    /// Use `translator` for crop display names
    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = translator;
        self
    }

    pub fn catalog(&self) -> &CropCatalog {
        self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Compute a plan, degrading to the fallback crop set on internal faults
    pub fn plan(&self, request: &PlanRequest) -> PlanOutcome {
        let garden_size = request.garden_size();

        match self.compute(
            &request.profile,
            garden_size,
            &request.selected_crops,
            request.intensity,
            &request.crop_volumes,
        ) {
            Ok(plan) => {
                tracing::info!(
                    "Planned {} crops on {:.1} m²: {}% self-sufficient",
                    plan.crops.len(),
                    plan.total_space,
                    plan.self_sufficiency_percent
                );
                PlanOutcome::Computed { plan }
            }
            Err(reason) => {
                tracing::warn!("Garden plan failed ({}), using fallback crops", reason);
                let plan = self.fallback_plan(request);
                PlanOutcome::Degraded { plan, reason }
            }
        }
    }

    /// Plan independent requests in parallel, preserving order
    pub fn plan_many(&self, requests: &[PlanRequest]) -> Vec<PlanOutcome> {
        requests.par_iter().map(|request| self.plan(request)).collect()
    }

    fn compute(
        &self,
        profile: &HouseholdProfile,
        garden_size: f64,
        selected: &[String],
        intensity: CultivationIntensity,
        volumes: &CropVolumes,
    ) -> Result<GardenPlan, PlanError> {
        let production = calculate_production(
            self.catalog,
            selected,
            garden_size,
            intensity,
            volumes,
            &self.config,
        )?;
        // Nothing planted (empty selection or no area): keep the calendar empty
        let monthly_tasks = if production.allocations.is_empty() {
            empty_calendar()
        } else {
            derive_monthly_tasks(self.catalog, selected, volumes)
        };

        Ok(self.assemble(profile, garden_size, intensity, production, monthly_tasks))
    }

    fn fallback_plan(&self, request: &PlanRequest) -> GardenPlan {
        let garden_size = [request.garden_size_override, Some(request.profile.garden_size)]
            .into_iter()
            .flatten()
            .find(|size| size.is_finite())
            .map(|size| size.max(0.0))
            .unwrap_or(0.0);

        match self.compute(
            &request.profile,
            garden_size,
            &self.config.fallback_crops,
            CultivationIntensity::Medium,
            &CropVolumes::default(),
        ) {
            Ok(plan) => plan,
            Err(err) => {
                tracing::warn!("Fallback plan failed ({}), returning empty plan", err);
                self.assemble(
                    &request.profile,
                    0.0,
                    CultivationIntensity::Medium,
                    ProductionSummary::empty(),
                    empty_calendar(),
                )
            }
        }
    }

    fn assemble(
        &self,
        profile: &HouseholdProfile,
        garden_size: f64,
        intensity: CultivationIntensity,
        production: ProductionSummary,
        monthly_tasks: Vec<MonthlyTask>,
    ) -> GardenPlan {
        let annual_calorie_need = self.config.annual_calorie_need(profile.household_size);
        let calories_from_garden = production.total_calories.round();

        let self_sufficiency_percent = if annual_calorie_need > 0.0 {
            (calories_from_garden / annual_calorie_need * 100.0).round() as u32
        } else {
            0
        };

        let mut total_space = production.total_space.round();
        if !production.space_exceeds_garden {
            total_space = total_space.min(garden_size.max(0.0));
        }

        let crops = production
            .allocations
            .iter()
            .map(|allocation| self.planned_crop(allocation))
            .collect();

        GardenPlan {
            self_sufficiency_percent,
            calories_from_garden,
            calories_from_groceries: (annual_calorie_need - calories_from_garden).max(0.0),
            annual_calorie_need,
            crops,
            monthly_tasks,
            total_space,
            estimated_cost: production.total_cost.round(),
            total_yield_kg: (production.total_yield_kg * 10.0).round() / 10.0,
            space_exceeds_garden: production.space_exceeds_garden,
            garden_size: garden_size.max(0.0),
            intensity,
            grocery_suggestions: self.config.grocery_suggestions.clone(),
        }
    }

    fn planned_crop(&self, allocation: &CropAllocation) -> PlannedCrop {
        let definition = self.catalog.at(allocation.crop_index);
        PlannedCrop {
            display_name: display_name(definition, self.translator),
            definition: definition.clone(),
            allotted_area: allocation.area,
            planting_units: allocation.planting_units,
            estimated_yield_kg: allocation.yield_kg,
            estimated_calories: allocation.calories,
            nutrition: None,
        }
    }
}

/// Plan with the built-in catalog and default configuration
pub fn generate_garden_plan(
    profile: &HouseholdProfile,
    garden_size_override: f64,
    selected_crops: &[String],
    intensity: CultivationIntensity,
    crop_volumes: &CropVolumes,
) -> PlanOutcome {
    let request = PlanRequest {
        profile: profile.clone(),
        garden_size_override: Some(garden_size_override),
        selected_crops: selected_crops.to_vec(),
        intensity,
        crop_volumes: crop_volumes.clone(),
    };
    GardenPlanner::builtin().plan(&request)
}
