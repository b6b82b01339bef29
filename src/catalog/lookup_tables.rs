//! Built-in Crop Table
//!
//! Agronomic constants for the crops the planner supports out of the box.
//! Values are per planting unit: `space` m² yields `yield_kg` kg holding
//! `calories` kcal.
//!
//! Sowing months are outdoor sowing/planting for a central Swedish season;
//! tomatoes are started indoors in March.

use super::month::Month::{self, *};
use crate::profile::ClimateZone::{self, *};
use crate::profile::Difficulty;

/// Compile-time crop row, materialized into a `CropDefinition` once per process
pub(crate) struct CropRow {
    pub name: &'static str,
    pub scientific_name: &'static str,
    pub label_key: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub difficulty: Difficulty,
    pub sowing: &'static [Month],
    pub harvest: &'static [Month],
    pub space: f64,
    pub yield_kg: f64,
    pub calories: f64,
    pub zones: &'static [ClimateZone],
}

const ALL_ZONES: &[ClimateZone] = &[Southern, Central, Northern];
const MILD_ZONES: &[ClimateZone] = &[Southern, Central];

// ============================================================================
// EMBEDDED CROP DATA
// ============================================================================

pub(crate) static CROP_ROWS: &[CropRow] = &[
    CropRow {
        name: "Potatis",
        scientific_name: "Solanum tuberosum",
        label_key: "crops.potato",
        icon: "🥔",
        color: "#8B6F47",
        difficulty: Difficulty::Beginner,
        sowing: &[April, May],
        harvest: &[July, August, September],
        space: 1.0,
        yield_kg: 15.0,
        calories: 12000.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Morötter",
        scientific_name: "Daucus carota",
        label_key: "crops.carrot",
        icon: "🥕",
        color: "#ED8936",
        difficulty: Difficulty::Beginner,
        sowing: &[April, May, June],
        harvest: &[August, September, October],
        space: 0.5,
        yield_kg: 8.0,
        calories: 3200.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Vitkål",
        scientific_name: "Brassica oleracea var. capitata",
        label_key: "crops.cabbage",
        icon: "🥬",
        color: "#68D391",
        difficulty: Difficulty::Intermediate,
        sowing: &[March, April],
        harvest: &[September, October],
        space: 0.5,
        yield_kg: 4.0,
        calories: 1000.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Gul lök",
        scientific_name: "Allium cepa",
        label_key: "crops.onion",
        icon: "🧅",
        color: "#D69E2E",
        difficulty: Difficulty::Beginner,
        sowing: &[April, May],
        harvest: &[August, September],
        space: 0.25,
        yield_kg: 2.0,
        calories: 800.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Bondbönor",
        scientific_name: "Vicia faba",
        label_key: "crops.broad_bean",
        icon: "🫘",
        color: "#48BB78",
        difficulty: Difficulty::Beginner,
        sowing: &[April, May],
        harvest: &[July, August],
        space: 0.5,
        yield_kg: 1.5,
        calories: 1300.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Ärter",
        scientific_name: "Pisum sativum",
        label_key: "crops.pea",
        icon: "🫛",
        color: "#38A169",
        difficulty: Difficulty::Beginner,
        sowing: &[April, May],
        harvest: &[July, August],
        space: 0.5,
        yield_kg: 1.2,
        calories: 950.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Grönkål",
        scientific_name: "Brassica oleracea var. sabellica",
        label_key: "crops.kale",
        icon: "🥬",
        color: "#276749",
        difficulty: Difficulty::Beginner,
        sowing: &[April, May],
        harvest: &[September, October, November, December],
        space: 0.5,
        yield_kg: 2.0,
        calories: 980.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Rödbetor",
        scientific_name: "Beta vulgaris",
        label_key: "crops.beetroot",
        icon: "🟣",
        color: "#97266D",
        difficulty: Difficulty::Beginner,
        sowing: &[May, June],
        harvest: &[August, September, October],
        space: 0.25,
        yield_kg: 2.5,
        calories: 1075.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Palsternacka",
        scientific_name: "Pastinaca sativa",
        label_key: "crops.parsnip",
        icon: "🥕",
        color: "#F6E05E",
        difficulty: Difficulty::Intermediate,
        sowing: &[April, May],
        harvest: &[October, November],
        space: 0.25,
        yield_kg: 2.0,
        calories: 1500.0,
        zones: MILD_ZONES,
    },
    CropRow {
        name: "Jordärtskocka",
        scientific_name: "Helianthus tuberosus",
        label_key: "crops.jerusalem_artichoke",
        icon: "🌻",
        color: "#B7791F",
        difficulty: Difficulty::Beginner,
        sowing: &[April],
        harvest: &[October, November],
        space: 1.0,
        yield_kg: 6.0,
        calories: 4400.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Squash",
        scientific_name: "Cucurbita pepo",
        label_key: "crops.squash",
        icon: "🥒",
        color: "#9AE6B4",
        difficulty: Difficulty::Intermediate,
        sowing: &[May],
        harvest: &[July, August, September],
        space: 1.0,
        yield_kg: 8.0,
        calories: 1360.0,
        zones: MILD_ZONES,
    },
    CropRow {
        name: "Tomater",
        scientific_name: "Solanum lycopersicum",
        label_key: "crops.tomato",
        icon: "🍅",
        color: "#E53E3E",
        difficulty: Difficulty::Advanced,
        sowing: &[March],
        harvest: &[July, August, September],
        space: 0.5,
        yield_kg: 4.0,
        calories: 720.0,
        zones: MILD_ZONES,
    },
    CropRow {
        name: "Vitlök",
        scientific_name: "Allium sativum",
        label_key: "crops.garlic",
        icon: "🧄",
        color: "#E2E8F0",
        difficulty: Difficulty::Intermediate,
        sowing: &[October],
        harvest: &[July],
        space: 0.1,
        yield_kg: 0.5,
        calories: 745.0,
        zones: MILD_ZONES,
    },
    CropRow {
        name: "Spenat",
        scientific_name: "Spinacia oleracea",
        label_key: "crops.spinach",
        icon: "🌿",
        color: "#2F855A",
        difficulty: Difficulty::Beginner,
        sowing: &[April, August],
        harvest: &[June, September],
        space: 0.25,
        yield_kg: 1.0,
        calories: 230.0,
        zones: ALL_ZONES,
    },
    CropRow {
        name: "Sallad",
        scientific_name: "Lactuca sativa",
        label_key: "crops.lettuce",
        icon: "🥗",
        color: "#C6F6D5",
        difficulty: Difficulty::Beginner,
        sowing: &[April, May, June, July],
        harvest: &[June, July, August, September],
        space: 0.1,
        yield_kg: 0.5,
        calories: 75.0,
        zones: ALL_ZONES,
    },
];
