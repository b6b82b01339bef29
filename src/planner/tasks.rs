//! Task Deriver
//!
//! Builds the 12-month garden calendar from each selected crop's sowing and
//! harvest windows. Every month is present, January first, even when it has
//! nothing to do.
//!
//! Priority rules:
//! - High: any harvest, or a sowing in the last month of that crop's window
//! - Medium: only routine sowing or in-season care
//! - Low: no tasks

use serde::{Deserialize, Serialize};

use crate::catalog::{CropCatalog, CropDefinition, Month};
use super::CropVolumes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// One calendar slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTask {
    pub month: Month,
    pub tasks: Vec<String>,
    pub priority: TaskPriority,
}

impl MonthlyTask {
    fn empty(month: Month) -> Self {
        Self {
            month,
            tasks: Vec::new(),
            priority: TaskPriority::Low,
        }
    }
}

/// Calendar with one empty entry per month
pub fn empty_calendar() -> Vec<MonthlyTask> {
    Month::ALL.iter().map(|&m| MonthlyTask::empty(m)).collect()
}

/// Derive the monthly calendar for the selected crops
///
/// Tasks within a month follow the order of `selected`. Unknown crops and
/// crops overridden to zero planting units contribute nothing.
pub fn derive_monthly_tasks<S: AsRef<str>>(
    catalog: &CropCatalog,
    selected: &[S],
    volumes: &CropVolumes,
) -> Vec<MonthlyTask> {
    let mut calendar = empty_calendar();

    let planted: Vec<&CropDefinition> = catalog
        .resolve(selected)
        .into_iter()
        .map(|i| catalog.at(i))
        .filter(|crop| match volumes.get(&crop.name) {
            Some(&units) => units > 0.0,
            None => true,
        })
        .collect();

    for crop in planted {
        let growing = growing_months(crop);

        for entry in calendar.iter_mut() {
            let month = entry.month;
            let sows = crop.sows_in(month);
            let harvests = crop.harvests_in(month);

            if sows {
                entry.tasks.push(format!("Så {}", crop.name));
                let critical = !crop.sows_in(month.next());
                raise(entry, if critical { TaskPriority::High } else { TaskPriority::Medium });
            }
            if harvests {
                entry.tasks.push(format!("Skörda {}", crop.name));
                raise(entry, TaskPriority::High);
            }
            if !sows && !harvests && growing[month.index()] {
                entry.tasks.push(format!("Sköt om {} (vattna, rensa ogräs)", crop.name));
                raise(entry, TaskPriority::Medium);
            }
        }
    }

    calendar
}

fn raise(entry: &mut MonthlyTask, priority: TaskPriority) {
    entry.priority = entry.priority.max(priority);
}

/// Months a crop is in the ground between sowing and its first harvest
///
/// Walks forward (wrapping at December) from the start of the sowing window
/// until the first harvest month.
fn growing_months(crop: &CropDefinition) -> [bool; 12] {
    let mut growing = [false; 12];

    let Some(start) = window_start(&crop.sowing_months) else {
        return growing;
    };
    if crop.harvest_months.is_empty() {
        return growing;
    }

    let mut month = start.next();
    for _ in 0..11 {
        if crop.harvests_in(month) {
            break;
        }
        growing[month.index()] = true;
        month = month.next();
    }

    growing
}

/// First month of a (possibly wrapping) window
fn window_start(months: &[Month]) -> Option<Month> {
    if months.is_empty() {
        return None;
    }
    Month::ALL
        .iter()
        .copied()
        .find(|m| months.contains(m) && !months.contains(&Month::from_index(m.index() + 11)))
        .or(Some(Month::January))
}
