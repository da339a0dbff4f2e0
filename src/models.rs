//! Data models for grievance intake and triage
//!
//! This module contains the persisted grievance record, the closed label sets it is
//! built from, and the small view structs the dashboard hands out.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GrievanceError;

/// Name recorded when a citizen leaves the name field blank
pub const ANONYMOUS: &str = "Anonymous";

/// Timestamp layout of the `created_at` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Column order of the backing file
pub const COLUMNS: [&str; 11] = [
    "id",
    "name",
    "city",
    "location",
    "type",
    "description",
    "department",
    "sentiment",
    "priority",
    "status",
    "created_at",
];

/// Case-insensitive label match that treats `-`, `_` and spaces alike, so
/// `in-progress` and `In Progress` name the same status.
fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Generates `as_str`, `ALL`, `Display` and `FromStr` for a closed label set.
macro_rules! label_enum {
    ($name:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant in display order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The label stored in the backing file
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = GrievanceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_label(v.as_str()) == wanted)
                    .ok_or_else(|| GrievanceError::invalid($field, s))
            }
        }
    };
}

/// Kind of area the grievance comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// City proper
    Urban,
    /// Town or city outskirts
    #[serde(rename = "Semi-Urban")]
    SemiUrban,
    /// Village
    Rural,
}

label_enum!(Location, "location", {
    Urban => "Urban",
    SemiUrban => "Semi-Urban",
    Rural => "Rural",
});

/// Grievance category chosen by the citizen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Crime, hazards, emergencies
    #[serde(rename = "Public Safety")]
    PublicSafety,
    /// Garbage, drainage, cleanliness
    Sanitation,
    /// Roads, bridges, public works
    Infrastructure,
    /// Hospitals and clinics
    Healthcare,
    /// Power and water supply
    Utilities,
    /// Schools
    Education,
    /// Stalled paperwork
    #[serde(rename = "Administrative Delay")]
    AdministrativeDelay,
    /// Anything else
    Other,
}

label_enum!(Category, "category", {
    PublicSafety => "Public Safety",
    Sanitation => "Sanitation",
    Infrastructure => "Infrastructure",
    Healthcare => "Healthcare",
    Utilities => "Utilities",
    Education => "Education",
    AdministrativeDelay => "Administrative Delay",
    Other => "Other",
});

/// Emotional tone of the description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Score at or above 0.1
    Positive,
    /// Score in [-0.3, 0.1)
    Neutral,
    /// Score below -0.3
    Negative,
}

label_enum!(Sentiment, "sentiment", {
    Positive => "Positive",
    Neutral => "Neutral",
    Negative => "Negative",
});

/// Urgency tier assigned by keyword matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Danger or emergency keywords
    High,
    /// Delay or malfunction keywords
    Medium,
    /// No keyword hit
    Low,
}

label_enum!(Priority, "priority", {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

/// Lifecycle stage of a grievance. Any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Freshly filed
    Submitted,
    /// Picked up by a department
    #[serde(rename = "In Progress")]
    InProgress,
    /// Closed
    Resolved,
}

label_enum!(Status, "status", {
    Submitted => "Submitted",
    InProgress => "In Progress",
    Resolved => "Resolved",
});

/// A citizen grievance as stored in the backing file.
///
/// Field order matches [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grievance {
    /// Short unique token
    pub id: String,
    /// Submitter name, `Anonymous` when left blank
    pub name: String,
    /// City as typed by the citizen
    pub city: String,
    /// Kind of area
    pub location: Location,
    /// Category chosen on submission
    #[serde(rename = "type")]
    pub category: Category,
    /// Free-text complaint
    pub description: String,
    /// Routed department, fixed at creation
    pub department: String,
    /// Tone of the description, fixed at creation
    pub sentiment: Sentiment,
    /// Urgency tier, fixed at creation
    pub priority: Priority,
    /// The only field that changes after creation
    pub status: Status,
    /// Submission time, minute precision
    #[serde(with = "minute_timestamp")]
    pub created_at: NaiveDateTime,
}

/// What a citizen fills in on the submission form
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    /// Optional name
    pub name: Option<String>,
    /// Required city
    pub city: String,
    /// Area type
    pub location: Location,
    /// Category, drives department routing
    pub category: Category,
    /// Required complaint text
    pub description: String,
}

/// Dashboard headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// All grievances
    pub total: usize,
    /// Status is `Resolved`
    pub resolved: usize,
    /// Status is anything but `Resolved`
    pub pending: usize,
}

/// One bar of the per-department chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    /// Department name
    pub department: String,
    /// Grievances routed there
    pub count: usize,
}

/// One circle on the per-city map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityMarker {
    /// City as stored on the grievances
    pub city: String,
    /// Grievances reported from the city
    pub count: usize,
    /// Marker latitude
    pub latitude: f64,
    /// Marker longitude
    pub longitude: f64,
    /// Marker radius, grows with the count
    pub radius: usize,
    /// Popup text
    pub label: String,
}

/// Serde adapter for the minute-precision `created_at` column
mod minute_timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| serde::de::Error::custom(format!("invalid created_at '{raw}': {e}")))
    }
}
