//! Garden Plan CLI
//!
//! Reads a plan request (JSON) and prints the resulting plan as JSON.
//!
//! Usage:
//!   garden_plan [request.json|-]
//!   garden_plan --recommend [request.json|-]
//!
//! Environment:
//!   GARDEN_PLANNER_CONFIG   optional planner config JSON
//!   GARDEN_PLANNER_CATALOG  optional crop catalog JSON
//!   GARDEN_PLANNER_TRANSLATIONS  optional `label key → label` JSON for crop names
//!   RUST_LOG                log filter (logs go to stderr)

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use garden_planner::utils::{full_display_name, MapTranslator, NoTranslation, Translator};
use garden_planner::{recommend_crops, CropCatalog, GardenPlanner, PlanRequest, PlannerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const RECOMMENDATION_LIMIT: usize = 6;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garden_planner=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let recommend = match args.iter().position(|a| a == "--recommend") {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    };
    let input = args.first().map(String::as_str).unwrap_or("-");

    let config = match std::env::var("GARDEN_PLANNER_CONFIG") {
        Ok(path) => PlannerConfig::load(Path::new(&path))?,
        Err(_) => PlannerConfig::default(),
    };

    let custom_catalog = match std::env::var("GARDEN_PLANNER_CATALOG") {
        Ok(path) => Some(CropCatalog::load(Path::new(&path))?),
        Err(_) => None,
    };
    let catalog = custom_catalog.as_ref().unwrap_or_else(|| CropCatalog::builtin());

    let translator: Box<dyn Translator> = match std::env::var("GARDEN_PLANNER_TRANSLATIONS") {
        Ok(path) => Box::new(MapTranslator::load(Path::new(&path))?),
        Err(_) => Box::new(NoTranslation),
    };

    let request = read_request(input)?;
    tracing::debug!("Request: {:?}", request);

    if recommend {
        let names: Vec<String> = recommend_crops(catalog, &request.profile, RECOMMENDATION_LIMIT)
            .into_iter()
            .map(|crop| full_display_name(crop, translator.as_ref()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    let planner = GardenPlanner::new(catalog, config)?.with_translator(translator.as_ref());
    let outcome = planner.plan(&request);
    if let Some(reason) = outcome.reason() {
        tracing::warn!("Returned fallback plan: {}", reason);
    }

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn read_request(input: &str) -> Result<PlanRequest> {
    let contents = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read request file: {}", input))?
    };

    serde_json::from_str(&contents).context("Failed to parse plan request JSON")
}
