//! Garden Planner
//!
//! Estimation pipeline, leaf first:
//! - `production`: area split and calorie/yield/cost aggregation
//! - `tasks`: 12-month sowing/harvest calendar
//! - `assembler`: household-level plan with fallback on internal faults
//! - `recommend`: experience- and climate-filtered crop suggestions

pub mod assembler;
pub mod production;
pub mod recommend;
pub mod tasks;

use rustc_hash::FxHashMap;

/// Planting-unit overrides keyed by crop name
pub type CropVolumes = FxHashMap<String, f64>;

pub use assembler::{generate_garden_plan, GardenPlan, GardenPlanner, PlanOutcome, PlanRequest, PlannedCrop};
pub use production::{calculate_production, CropAllocation, ProductionSummary};
pub use recommend::recommend_crops;
pub use tasks::{derive_monthly_tasks, MonthlyTask, TaskPriority};
