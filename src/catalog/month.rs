//! Calendar Months
//!
//! Swedish month names used by the crop table and the task calendar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    #[serde(rename = "Januari")]
    January,
    #[serde(rename = "Februari")]
    February,
    #[serde(rename = "Mars")]
    March,
    #[serde(rename = "April")]
    April,
    #[serde(rename = "Maj")]
    May,
    #[serde(rename = "Juni")]
    June,
    #[serde(rename = "Juli")]
    July,
    #[serde(rename = "Augusti")]
    August,
    #[serde(rename = "September")]
    September,
    #[serde(rename = "Oktober")]
    October,
    #[serde(rename = "November")]
    November,
    #[serde(rename = "December")]
    December,
}

impl Month {
    /// All months in calendar order, January first
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based position in the calendar (January = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Month {
        Month::ALL[index % 12]
    }

    /// Following month, wrapping December → January
    pub fn next(self) -> Month {
        Month::from_index(self.index() + 1)
    }

    pub fn swedish_name(self) -> &'static str {
        match self {
            Month::January => "Januari",
            Month::February => "Februari",
            Month::March => "Mars",
            Month::April => "April",
            Month::May => "Maj",
            Month::June => "Juni",
            Month::July => "Juli",
            Month::August => "Augusti",
            Month::September => "September",
            Month::October => "Oktober",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Parse a Swedish month name (case-insensitive)
    pub fn from_swedish(name: &str) -> Option<Month> {
        let name = name.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.swedish_name().eq_ignore_ascii_case(name))
    }
}
