//! Household Profile and Cultivation Tiers
//!
//! Caller-supplied description of the household and the coarse tiers the
//! planner works with. Climate zones follow the Swedish growing-zone map
//! (odlingszon 1-8) grouped into three bands.

use serde::{Deserialize, Deserializer, Serialize};

/// Household description supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HouseholdProfile {
    /// Non-positive sizes read as 0
    #[serde(deserialize_with = "household_size_from_int")]
    pub household_size: u32,
    /// Available cultivation area in m²
    pub garden_size: f64,
    pub experience_level: ExperienceLevel,
    pub climate_zone: ClimateZone,
    pub has_children: bool,
    pub has_elderly: bool,
    pub has_pets: bool,
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        Self {
            household_size: 1,
            garden_size: 0.0,
            experience_level: ExperienceLevel::Beginner,
            climate_zone: ClimateZone::Central,
            has_children: false,
            has_elderly: false,
            has_pets: false,
        }
    }
}

impl HouseholdProfile {
    pub fn new(household_size: u32, garden_size: f64) -> Self {
        Self {
            household_size,
            garden_size,
            ..Self::default()
        }
    }
}

fn household_size_from_int<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let size = i64::deserialize(deserializer)?;
    Ok(size.clamp(0, u32::MAX as i64) as u32)
}

/// Gardening experience, ordered from least to most
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// How demanding a crop is to grow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Whether a household at this level can be expected to manage the crop
    pub fn can_grow(self, difficulty: Difficulty) -> bool {
        let ceiling = match self {
            ExperienceLevel::Beginner => Difficulty::Beginner,
            ExperienceLevel::Intermediate => Difficulty::Intermediate,
            ExperienceLevel::Advanced => Difficulty::Advanced,
        };
        difficulty <= ceiling
    }
}

/// Growing-zone bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateZone {
    /// Zones 1-2: Skåne, Blekinge, west coast
    Southern,

    /// Zones 3-5: Svealand, southern Norrland coast
    Central,

    /// Zones 6-8: inland and northern Norrland
    Northern,
}

impl ClimateZone {
    /// Parse a free-form zone label such as "zon 3", "4" or "norra"
    ///
    /// Unknown labels default to Central.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();

        if let Some(zone) = label
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse::<u8>()
            .ok()
        {
            return match zone {
                0..=2 => ClimateZone::Southern,
                3..=5 => ClimateZone::Central,
                _ => ClimateZone::Northern,
            };
        }

        match label.as_str() {
            "southern" | "south" | "södra" | "syd" => ClimateZone::Southern,
            "northern" | "north" | "norra" | "norr" => ClimateZone::Northern,
            _ => ClimateZone::Central,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateZone::Southern => "Södra Sverige (zon 1-2)",
            ClimateZone::Central => "Mellansverige (zon 3-5)",
            ClimateZone::Northern => "Norra Sverige (zon 6-8)",
        }
    }

    pub fn all() -> &'static [ClimateZone] {
        &[ClimateZone::Southern, ClimateZone::Central, ClimateZone::Northern]
    }
}

/// How intensively the allotted area is cultivated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CultivationIntensity {
    Low,
    #[default]
    Medium,
    High,
}
