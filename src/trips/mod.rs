//! Trip records and the labels shown on a trip card.

use crate::dates::{long_label, parse_iso_date, short_label};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planning,
    Upcoming,
    Ongoing,
    Completed,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Planning => "Planning",
            TripStatus::Upcoming => "Upcoming",
            TripStatus::Ongoing => "In Progress",
            TripStatus::Completed => "Completed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TripStatus::Planning => "trip-planning",
            TripStatus::Upcoming => "trip-upcoming",
            TripStatus::Ongoing => "trip-ongoing",
            TripStatus::Completed => "trip-completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub destination: String,
    /// ISO date
    pub start_date: String,
    /// ISO date, inclusive
    pub end_date: String,
    pub travelers: u32,
    pub status: TripStatus,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl Trip {
    /// "Mar 3 – Mar 10, 2025", or "Dec 28, 2024 – Jan 4, 2025" across years.
    /// Falls back to the raw strings when either date is unparsable.
    pub fn date_range_label(&self) -> String {
        match (parse_iso_date(&self.start_date), parse_iso_date(&self.end_date)) {
            (Some(start), Some(end)) if start == end => long_label(start),
            (Some(start), Some(end)) if start.year() == end.year() => {
                format!("{} \u{2013} {}", short_label(start), long_label(end))
            }
            (Some(start), Some(end)) => {
                format!("{} \u{2013} {}", long_label(start), long_label(end))
            }
            _ => format!("{} \u{2013} {}", self.start_date, self.end_date),
        }
    }

    /// Length in days counting both ends. `None` if the dates don't parse
    /// or the trip ends before it starts.
    pub fn length_days(&self) -> Option<u32> {
        let start = parse_iso_date(&self.start_date)?;
        let end = parse_iso_date(&self.end_date)?;
        let days = end.signed_duration_since(start).num_days();
        u32::try_from(days).ok().map(|d| d + 1)
    }

    pub fn length_label(&self) -> Option<String> {
        self.length_days().map(|d| match d {
            1 => "1 day".to_string(),
            n => format!("{} days", n),
        })
    }

    pub fn travelers_label(&self) -> String {
        match self.travelers {
            1 => "1 traveler".to_string(),
            n => format!("{} travelers", n),
        }
    }
}

/// Example trips for the landing page.
pub fn sample_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "trip-lisbon".to_string(),
            title: "Spring in Lisbon".to_string(),
            destination: "Lisbon, Portugal".to_string(),
            start_date: "2025-04-12".to_string(),
            end_date: "2025-04-19".to_string(),
            travelers: 4,
            status: TripStatus::Upcoming,
            cover_image: Some("/images/lisbon.jpg".to_string()),
        },
        Trip {
            id: "trip-kyoto".to_string(),
            title: "Kyoto Temples".to_string(),
            destination: "Kyoto, Japan".to_string(),
            start_date: "2025-10-30".to_string(),
            end_date: "2025-11-08".to_string(),
            travelers: 2,
            status: TripStatus::Planning,
            cover_image: None,
        },
        Trip {
            id: "trip-patagonia".to_string(),
            title: "New Year in Patagonia".to_string(),
            destination: "El Chalt\u{e9}n, Argentina".to_string(),
            start_date: "2024-12-28".to_string(),
            end_date: "2025-01-04".to_string(),
            travelers: 1,
            status: TripStatus::Completed,
            cover_image: None,
        },
    ]
}
