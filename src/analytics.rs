//! Dashboard aggregations over the full grievance list.
//!
//! Everything here is recomputed from the records on every call.

use std::collections::BTreeMap;

use crate::geo::coordinates_for;
use crate::models::{CityMarker, DepartmentCount, Grievance, Status, Summary};

/// Smallest marker radius, for a city with no grievances
const BASE_RADIUS: usize = 5;
/// Radius added per grievance
const RADIUS_PER_GRIEVANCE: usize = 2;

/// Total, resolved and pending counts
#[must_use]
pub fn summarize(records: &[Grievance]) -> Summary {
    let resolved = records
        .iter()
        .filter(|g| g.status == Status::Resolved)
        .count();

    Summary {
        total: records.len(),
        resolved,
        pending: records.len() - resolved,
    }
}

fn count_by<'a, F>(records: &'a [Grievance], key: F) -> BTreeMap<&'a str, usize>
where
    F: Fn(&'a Grievance) -> &'a str,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

/// Grievances per department, ordered by department name
#[must_use]
pub fn department_counts(records: &[Grievance]) -> Vec<DepartmentCount> {
    count_by(records, |g| g.department.as_str())
        .into_iter()
        .map(|(department, count)| DepartmentCount {
            department: department.to_string(),
            count,
        })
        .collect()
}

/// One map marker per city, ordered by city name
#[must_use]
pub fn city_markers(records: &[Grievance]) -> Vec<CityMarker> {
    count_by(records, |g| g.city.as_str())
        .into_iter()
        .map(|(city, count)| {
            let (latitude, longitude) = coordinates_for(city);
            CityMarker {
                city: city.to_string(),
                count,
                latitude,
                longitude,
                radius: BASE_RADIUS + count * RADIUS_PER_GRIEVANCE,
                label: format!("{city} : {count} complaints"),
            }
        })
        .collect()
}

/// The last `limit` grievances filed under `name`, oldest first
#[must_use]
pub fn recent_for_name<'a>(records: &'a [Grievance], name: &str, limit: usize) -> Vec<&'a Grievance> {
    let mine: Vec<&Grievance> = records.iter().filter(|g| g.name == name).collect();
    let skip = mine.len().saturating_sub(limit);
    mine.into_iter().skip(skip).collect()
}
