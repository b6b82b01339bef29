//! Crop Recommendations
//!
//! Suggests crops a household can realistically grow: difficulty within its
//! experience level, reliable in its climate zone, ranked by energy per m².

use crate::catalog::{CropCatalog, CropDefinition};
use crate::profile::HouseholdProfile;

/// Up to `limit` suitable crops, most calories per m² first
///
/// Ties keep catalog order.
pub fn recommend_crops<'c>(
    catalog: &'c CropCatalog,
    profile: &HouseholdProfile,
    limit: usize,
) -> Vec<&'c CropDefinition> {
    let mut suitable: Vec<&CropDefinition> = catalog
        .iter()
        .filter(|crop| profile.experience_level.can_grow(crop.difficulty))
        .filter(|crop| crop.zones.contains(&profile.climate_zone))
        .collect();

    suitable.sort_by(|a, b| b.calories_per_m2().total_cmp(&a.calories_per_m2()));
    suitable.truncate(limit);

    tracing::debug!(
        "Recommended {} crops for {:?} / {:?}",
        suitable.len(),
        profile.experience_level,
        profile.climate_zone
    );

    suitable
}
