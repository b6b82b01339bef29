//! Garden Plan Integration Tests
//!
//! Exercises the public planning API end to end: request JSON in, plan out.
//! Covers the calorie split, calendar shape, robustness against stale
//! selections and the degraded path.

use approx::assert_relative_eq;
use garden_planner::utils::MapTranslator;
use garden_planner::{
    enrich_with_nutrition, generate_garden_plan, CropCatalog, CropVolumes, CultivationIntensity,
    GardenPlanner, HouseholdProfile, Month, NutritionFacts, PlanOutcome, PlanRequest,
    PlannerConfig, TaskPriority,
};
use garden_planner::nutrition::StaticNutritionTable;

fn names(crops: &[&str]) -> Vec<String> {
    crops.iter().map(|c| c.to_string()).collect()
}

fn plan_for(household: u32, garden: f64, crops: &[&str], intensity: CultivationIntensity) -> PlanOutcome {
    let mut request = PlanRequest::new(HouseholdProfile::new(household, garden), names(crops));
    request.intensity = intensity;
    GardenPlanner::builtin().plan(&request)
}

// =========================================================================
// Calorie split
// =========================================================================

#[test]
fn test_reference_household() {
    let outcome = generate_garden_plan(
        &HouseholdProfile::new(2, 0.0),
        20.0,
        &names(&["Potatis", "Morötter"]),
        CultivationIntensity::Medium,
        &CropVolumes::default(),
    );
    let plan = outcome.plan();

    assert_relative_eq!(plan.annual_calorie_need, 1_460_000.0);
    assert_relative_eq!(plan.calories_from_garden, 184_000.0);
    assert_eq!(plan.self_sufficiency_percent, 13);
    assert_relative_eq!(plan.calories_from_groceries, 1_460_000.0 - 184_000.0);
}

#[test]
fn test_grocery_clamp_holds_everywhere() {
    for household in [0, 1, 3, 6] {
        for garden in [0.0, 10.0, 80.0, 400.0] {
            for intensity in [CultivationIntensity::Low, CultivationIntensity::Medium, CultivationIntensity::High] {
                let plan = plan_for(household, garden, &["Potatis", "Jordärtskocka", "Grönkål"], intensity).into_plan();
                let expected = (plan.annual_calorie_need - plan.calories_from_garden).max(0.0);
                assert_relative_eq!(plan.calories_from_groceries, expected);
                assert!(plan.calories_from_groceries >= 0.0);
            }
        }
    }
}

#[test]
fn test_monotonic_in_garden_size() {
    let crops = ["Potatis", "Bondbönor", "Rödbetor", "Squash"];
    let mut last_calories = 0.0;
    let mut last_space = 0.0;
    for garden in [0.0, 2.0, 7.5, 20.0, 55.0, 300.0] {
        let plan = plan_for(3, garden, &crops, CultivationIntensity::High).into_plan();
        assert!(plan.calories_from_garden >= last_calories);
        assert!(plan.total_space >= last_space);
        last_calories = plan.calories_from_garden;
        last_space = plan.total_space;
    }
}

#[test]
fn test_space_within_garden_under_default_allocation() {
    let all: Vec<&str> = CropCatalog::builtin().iter().map(|c| c.name.as_str()).collect();
    for garden in [1.0, 9.0, 9.5, 33.3, 250.5] {
        let plan = plan_for(2, garden, &all, CultivationIntensity::Medium).into_plan();
        assert!(plan.total_space <= garden, "{} m² > {} m²", plan.total_space, garden);
        assert!(!plan.space_exceeds_garden);
    }
}

// =========================================================================
// Selection handling
// =========================================================================

#[test]
fn test_empty_selection_is_zero() {
    let plan = plan_for(2, 50.0, &[], CultivationIntensity::High).into_plan();
    assert_relative_eq!(plan.calories_from_garden, 0.0);
    assert_relative_eq!(plan.total_space, 0.0);
    assert_eq!(plan.self_sufficiency_percent, 0);
    assert_eq!(plan.monthly_tasks.len(), 12);
    assert!(plan.monthly_tasks.iter().all(|m| m.tasks.is_empty()));
}

#[test]
fn test_unknown_crop_same_as_omitted() {
    let with_stale = plan_for(2, 20.0, &["Potatis", "Kiwano", "Morötter"], CultivationIntensity::Medium);
    let without = plan_for(2, 20.0, &["Potatis", "Morötter"], CultivationIntensity::Medium);
    assert_eq!(with_stale, without);
}

#[test]
fn test_volume_override_beyond_garden_is_reported() {
    let mut request = PlanRequest::new(HouseholdProfile::new(2, 10.0), names(&["Potatis"]));
    request.crop_volumes.insert("Potatis".to_string(), 25.0);

    let plan = GardenPlanner::builtin().plan(&request).into_plan();
    assert!(plan.space_exceeds_garden);
    assert_relative_eq!(plan.total_space, 25.0);
}

// =========================================================================
// Calendar
// =========================================================================

#[test]
fn test_calendar_always_complete() {
    let catalog = CropCatalog::builtin();
    let all: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();

    for selection in [&all[..1], &all[..5], &all[..]] {
        let plan = plan_for(2, 60.0, selection, CultivationIntensity::Medium).into_plan();
        let months: Vec<Month> = plan.monthly_tasks.iter().map(|m| m.month).collect();
        assert_eq!(months, Month::ALL.to_vec());
    }
}

#[test]
fn test_harvest_months_are_high_priority() {
    let plan = plan_for(2, 20.0, &["Potatis", "Morötter"], CultivationIntensity::Medium).into_plan();
    let september = &plan.monthly_tasks[Month::September.index()];
    assert_eq!(september.tasks, vec!["Skörda Potatis", "Skörda Morötter"]);
    assert_eq!(september.priority, TaskPriority::High);
    assert_eq!(plan.monthly_tasks[Month::February.index()].priority, TaskPriority::Low);
}

// =========================================================================
// Degraded path
// =========================================================================

#[test]
fn test_fault_returns_well_formed_plan() {
    let outcome = plan_for(2, f64::INFINITY, &["Potatis"], CultivationIntensity::Medium);

    assert!(outcome.is_degraded());
    let plan = outcome.plan();
    assert_eq!(plan.monthly_tasks.len(), 12);
    assert_relative_eq!(plan.annual_calorie_need, 1_460_000.0);
    assert_relative_eq!(plan.calories_from_groceries, plan.annual_calorie_need - plan.calories_from_garden);
    assert!(!plan.grocery_suggestions.is_empty());

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["reason"]["kind"], "invalid_garden_size");
}

#[test]
fn test_fault_uses_override_size_when_profile_is_broken() {
    let mut request = PlanRequest::new(HouseholdProfile::new(2, f64::NAN), names(&["Potatis"]));
    request.crop_volumes.insert("Potatis".to_string(), f64::NAN);
    request.garden_size_override = Some(15.0);

    let outcome = GardenPlanner::builtin().plan(&request);
    assert!(outcome.is_degraded());
    assert_relative_eq!(outcome.plan().total_space, 15.0);
    assert_eq!(outcome.plan().crops.len(), 3);
}

// =========================================================================
// Request parsing, configuration and collaborators
// =========================================================================

#[test]
fn test_request_from_json() {
    let json = r#"{
        "profile": {"householdSize": 2, "gardenSize": 20.0, "experienceLevel": "intermediate", "climateZone": "northern"},
        "selectedCrops": ["Potatis", "Morötter"],
        "intensity": "medium",
        "cropVolumes": {}
    }"#;
    let request: PlanRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.garden_size_override, None);

    let plan = GardenPlanner::builtin().plan(&request).into_plan();
    assert_eq!(plan.self_sufficiency_percent, 13);
}

#[test]
fn test_negative_household_in_request_means_no_need() {
    let json = r#"{
        "profile": {"householdSize": -1, "gardenSize": 20.0},
        "selectedCrops": ["Potatis"]
    }"#;
    let request: PlanRequest = serde_json::from_str(json).unwrap();

    let outcome = GardenPlanner::builtin().plan(&request);
    assert!(!outcome.is_degraded());
    let plan = outcome.plan();
    assert_relative_eq!(plan.annual_calorie_need, 0.0);
    assert_eq!(plan.self_sufficiency_percent, 0);
    assert_relative_eq!(plan.calories_from_groceries, 0.0);
}

#[test]
fn test_planner_rejects_config_that_breaks_invariants() {
    let mut config = PlannerConfig::default();
    config.yield_multipliers.low = -1.0;
    assert!(GardenPlanner::new(CropCatalog::builtin(), config).is_err());
}

#[test]
fn test_custom_config_changes_need_and_fallback() {
    let config = PlannerConfig {
        daily_kcal_per_person: 2500.0,
        fallback_crops: vec!["Jordärtskocka".to_string()],
        ..PlannerConfig::default()
    };
    let planner = GardenPlanner::new(CropCatalog::builtin(), config).unwrap();

    let ok = planner.plan(&PlanRequest::new(HouseholdProfile::new(1, 10.0), names(&["Potatis"])));
    assert_relative_eq!(ok.plan().annual_calorie_need, 912_500.0);

    let degraded = planner.plan(&PlanRequest::new(HouseholdProfile::new(1, f64::NAN), names(&["Potatis"])));
    assert!(degraded.is_degraded());
}

#[test]
fn test_translated_display_names() {
    let english: MapTranslator = [("crops.potato", "Potato"), ("crops.carrot", "Carrots")]
        .into_iter()
        .collect();
    let planner = GardenPlanner::builtin().with_translator(&english);

    let plan = planner
        .plan(&PlanRequest::new(HouseholdProfile::new(2, 20.0), names(&["Potatis", "Morötter", "Vitkål"])))
        .into_plan();
    let labels: Vec<&str> = plan.crops.iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(labels, vec!["Potato", "Carrots", "Vitkål"]);
}

#[test]
fn test_nutrition_is_optional() {
    let mut plan = plan_for(2, 20.0, &["Potatis", "Morötter"], CultivationIntensity::Medium).into_plan();
    let before = plan.clone();

    let mut table = StaticNutritionTable::new();
    table.insert("Morötter", NutritionFacts { fiber_g: 2.8, ..NutritionFacts::default() });
    assert_eq!(enrich_with_nutrition(&mut plan, &table), 1);

    assert!(plan.crops[0].nutrition.is_none());
    assert!(plan.crops[1].nutrition.is_some());
    assert_eq!(plan.calories_from_garden, before.calories_from_garden);
    assert_eq!(plan.monthly_tasks, before.monthly_tasks);
}
