//! Rendering of citizen and admin views.
//!
//! Every view is available as plain text for the terminal or as JSON for another front
//! end. The bar chart and map are drawn as their data: one bar per department, one
//! marker per city.

use std::fmt::Write;

use serde::Serialize;
use tracing::warn;

use crate::classification::DEPARTMENTS;
use crate::error::{GrievanceError, Result};
use crate::models::{CityMarker, DepartmentCount, Grievance, Summary, TIMESTAMP_FORMAT};

/// Widest bar in the department chart
const BAR_WIDTH: usize = 40;

/// Output format for views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text format
    Txt,
    /// JSON format
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = GrievanceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            _ => Err(GrievanceError::invalid("format", s)),
        }
    }
}

/// Render `value` as pretty JSON, or as text with `text`
pub fn render<T, F>(format: OutputFormat, value: &T, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Txt => Ok(text(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
    }
}

/// Shown in place of any admin view while the store holds no grievances
pub const EMPTY_STORE_NOTICE: &str = "No complaints available yet\n";

/// Turn an empty store into [`EMPTY_STORE_NOTICE`]; every other outcome passes through
pub fn or_empty_notice(view: Result<String>) -> Result<String> {
    match view {
        Err(GrievanceError::EmptyStore) => {
            warn!("No complaints available yet");
            Ok(EMPTY_STORE_NOTICE.to_string())
        }
        other => other,
    }
}

/// Confirmation shown after a successful submission
#[must_use]
pub fn submission_result(grievance: &Grievance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Grievance submitted successfully!");
    let _ = writeln!(out, "Reference ID: {}", grievance.id);
    let _ = writeln!(out);
    let _ = writeln!(out, "Analysis");
    let _ = writeln!(out, "  Sentiment:  {}", grievance.sentiment);
    let _ = writeln!(out, "  Priority:   {}", grievance.priority);
    let _ = writeln!(out, "  Department: {}", grievance.department);
    out
}

/// One line per grievance
#[must_use]
pub fn grievance_table(records: &[Grievance]) -> String {
    if records.is_empty() {
        return "No grievances found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8}  {:<16}  {:<14}  {:<20}  {:<6}  {:<11}  {}",
        "ID", "Created", "City", "Type", "Prio", "Status", "Department"
    );
    for g in records {
        let _ = writeln!(
            out,
            "{:<8}  {:<16}  {:<14}  {:<20}  {:<6}  {:<11}  {}",
            g.id,
            g.created_at.format(TIMESTAMP_FORMAT).to_string(),
            truncate(&g.city, 14),
            g.category,
            g.priority,
            g.status,
            g.department
        );
    }
    out
}

/// Every field of one grievance
#[must_use]
pub fn grievance_details(g: &Grievance) -> String {
    let created_at = g.created_at.format(TIMESTAMP_FORMAT).to_string();
    let fields: [(&str, &str); 11] = [
        ("id", g.id.as_str()),
        ("name", g.name.as_str()),
        ("city", g.city.as_str()),
        ("location", g.location.as_str()),
        ("type", g.category.as_str()),
        ("description", g.description.as_str()),
        ("department", g.department.as_str()),
        ("sentiment", g.sentiment.as_str()),
        ("priority", g.priority.as_str()),
        ("status", g.status.as_str()),
        ("created_at", created_at.as_str()),
    ];

    let mut out = String::new();
    for (label, value) in fields {
        let _ = writeln!(out, "{label:<12} {value}");
    }
    out
}

/// Dashboard headline numbers
#[must_use]
pub fn summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total complaints: {}", summary.total);
    let _ = writeln!(out, "Resolved:         {}", summary.resolved);
    let _ = writeln!(out, "Pending:          {}", summary.pending);
    out
}

/// Horizontal bar chart, bars scaled to the busiest department
#[must_use]
pub fn department_chart(counts: &[DepartmentCount]) -> String {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    let label_width = counts
        .iter()
        .map(|c| c.department.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "Number of Complaints per Department");
    for c in counts {
        let bar = if max == 0 { 0 } else { (c.count * BAR_WIDTH).div_ceil(max) };
        let _ = writeln!(
            out,
            "{:<width$} | {} {}",
            c.department,
            "#".repeat(bar),
            c.count,
            width = label_width
        );
    }
    out
}

/// Marker table for the city map
#[must_use]
pub fn city_map(markers: &[CityMarker]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16}  {:>5}  {:>9}  {:>9}  {:>6}  {}",
        "City", "Count", "Latitude", "Longitude", "Radius", "Label"
    );
    for m in markers {
        let _ = writeln!(
            out,
            "{:<16}  {:>5}  {:>9.4}  {:>9.4}  {:>6}  {}",
            truncate(&m.city, 16),
            m.count,
            m.latitude,
            m.longitude,
            m.radius,
            m.label
        );
    }
    out
}

/// Category to department table shown next to the submission form
#[must_use]
pub fn category_guide() -> String {
    let mut out = String::new();
    for (category, department) in DEPARTMENTS {
        let _ = writeln!(out, "{:<22} -> {department}", category.as_str());
    }
    out
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
