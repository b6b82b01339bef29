//! Garden Self-Sufficiency Planner
//!
//! Estimates how much of a household's yearly energy need a home garden can
//! cover, and what the garden year looks like.
//!
//! Module layout:
//! - `catalog/`: built-in crop table, month names, custom catalogs
//! - `profile`: household profile, experience, climate zone, intensity tiers
//! - `planner/`: production calculator, task calendar, plan assembler, recommendations
//! - `nutrition`: optional best-effort nutrition enrichment
//! - `config`: tunable constants (daily need, multipliers, cost, fallback crops)
//! - `utils/`: display names via a translation lookup

pub mod catalog;
pub mod config;
pub mod error;
pub mod nutrition;
pub mod planner;
pub mod profile;
pub mod utils;

// Re-export commonly used types
pub use catalog::{CropCatalog, CropDefinition, Month};
pub use config::PlannerConfig;
pub use error::PlanError;
pub use nutrition::{enrich_with_nutrition, NutritionFacts, NutritionSource};
pub use planner::{
    generate_garden_plan, recommend_crops, CropVolumes, GardenPlan, GardenPlanner, MonthlyTask,
    PlanOutcome, PlanRequest, TaskPriority,
};
pub use profile::{ClimateZone, CultivationIntensity, Difficulty, ExperienceLevel, HouseholdProfile};
