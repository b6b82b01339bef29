//! Production Calculator
//!
//! Splits the garden area across the selected crops and aggregates calories,
//! yield, space and cost.
//!
//! Allocation:
//!   1. Crops with a volume override get `units × space_required` m².
//!   2. Whatever area is left is shared equally by the remaining crops.
//!   3. Output scales linearly with `area / space_required`, then by the
//!      intensity yield multiplier.
//!
//! Cost is `area × cost_per_m2 × cost_factor(intensity)`, so it grows with both
//! space and intensity.

use serde::{Deserialize, Serialize};

use crate::catalog::CropCatalog;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::profile::CultivationIntensity;
use super::CropVolumes;

/// Area and output assigned to one crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropAllocation {
    /// Position in the catalog
    pub crop_index: usize,
    /// m²
    pub area: f64,
    pub planting_units: f64,
    pub calories: f64,
    pub yield_kg: f64,
    pub cost: f64,
    /// Area came from a volume override rather than the equal share
    pub overridden: bool,
}

/// Aggregate production for a selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub allocations: Vec<CropAllocation>,
    pub total_calories: f64,
    /// m²
    pub total_space: f64,
    pub total_cost: f64,
    pub total_yield_kg: f64,
    /// Overrides asked for more area than the garden has
    pub space_exceeds_garden: bool,
}

impl ProductionSummary {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Compute production totals for the selected crops
///
/// # Arguments
/// * `selected` - Crop names in user order; unknown names are ignored
/// * `garden_size` - Total area in m²; values ≤ 0 produce an empty summary
/// * `intensity` - Cultivation tier
/// * `volumes` - Per-crop planting-unit overrides
///
/// # Errors
/// `InvalidGardenSize` / `InvalidVolume` for NaN or infinite inputs,
/// `NonFiniteResult` if an aggregate overflows.
pub fn calculate_production<S: AsRef<str>>(
    catalog: &CropCatalog,
    selected: &[S],
    garden_size: f64,
    intensity: CultivationIntensity,
    volumes: &CropVolumes,
    config: &PlannerConfig,
) -> Result<ProductionSummary, PlanError> {
    if !garden_size.is_finite() {
        return Err(PlanError::InvalidGardenSize(garden_size));
    }

    let resolved = catalog.resolve(selected);
    if resolved.is_empty() || garden_size <= 0.0 {
        return Ok(ProductionSummary::empty());
    }

    let yield_multiplier = config.yield_multipliers.get(intensity);
    let cost_per_m2 = config.cost_per_m2 * config.cost_factors.get(intensity);

    // Pass 1: fixed areas from overrides
    let mut fixed_areas: Vec<Option<f64>> = Vec::with_capacity(resolved.len());
    let mut override_total = 0.0;
    for &i in &resolved {
        let crop = catalog.at(i);
        match volumes.get(&crop.name) {
            Some(&units) => {
                if !units.is_finite() {
                    return Err(PlanError::InvalidVolume {
                        crop: crop.name.clone(),
                        value: units,
                    });
                }
                let area = units.max(0.0) * crop.space_required;
                override_total += area;
                fixed_areas.push(Some(area));
            }
            None => fixed_areas.push(None),
        }
    }

    // Pass 2: equal share of the remainder
    let shared_count = fixed_areas.iter().filter(|a| a.is_none()).count();
    let share = if shared_count > 0 {
        (garden_size - override_total).max(0.0) / shared_count as f64
    } else {
        0.0
    };

    let mut summary = ProductionSummary::empty();
    for (&i, fixed) in resolved.iter().zip(&fixed_areas) {
        let crop = catalog.at(i);
        let area = fixed.unwrap_or(share);
        let planting_units = area / crop.space_required;

        let allocation = CropAllocation {
            crop_index: i,
            area,
            planting_units,
            calories: planting_units * crop.calories * yield_multiplier,
            yield_kg: planting_units * crop.yield_kg * yield_multiplier,
            cost: area * cost_per_m2,
            overridden: fixed.is_some(),
        };

        tracing::debug!(
            "{}: {:.2} m² ({:.1} units) -> {:.0} kcal",
            crop.name, allocation.area, allocation.planting_units, allocation.calories
        );

        summary.total_calories += allocation.calories;
        summary.total_space += allocation.area;
        summary.total_cost += allocation.cost;
        summary.total_yield_kg += allocation.yield_kg;
        summary.allocations.push(allocation);
    }

    summary.space_exceeds_garden = override_total > garden_size;

    for (label, value) in [
        ("calories", summary.total_calories),
        ("space", summary.total_space),
        ("cost", summary.total_cost),
        ("yield", summary.total_yield_kg),
    ] {
        if !value.is_finite() {
            return Err(PlanError::NonFiniteResult(label.to_string()));
        }
    }

    Ok(summary)
}
