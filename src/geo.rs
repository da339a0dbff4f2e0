//! City coordinates for the dashboard map.

/// Map center; also where cities without known coordinates are drawn
pub const DEFAULT_CENTER: (f64, f64) = (20.59, 78.96);

/// Known cities as `(name, latitude, longitude)`
pub const CITY_COORDINATES: [(&str, f64, f64); 22] = [
    ("Nagpur", 21.1458, 79.0882),
    ("Wardha", 20.7453, 78.6022),
    ("Jabalpur", 23.1815, 79.9864),
    ("Bhopal", 23.2599, 77.4126),
    ("Patna", 25.5941, 85.1376),
    ("Jamshedpur", 22.8046, 86.2029),
    ("Solapur", 17.6599, 75.9064),
    ("Pune", 18.5204, 73.8567),
    ("Mumbai", 19.0760, 72.8777),
    ("Nashik", 19.9975, 73.7898),
    ("Aurangabad", 19.8762, 75.3433),
    ("Indore", 22.7196, 75.8577),
    ("Gwalior", 26.2183, 78.1828),
    ("Ranchi", 23.3441, 85.3096),
    ("Gaya", 24.7914, 85.0002),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Surat", 21.1702, 72.8311),
    ("Bangalore", 12.9716, 77.5946),
    ("Mysore", 12.2958, 76.6394),
    ("Kolkata", 22.5726, 88.3639),
    ("Hyderabad", 17.3850, 78.4867),
    ("Delhi", 28.6139, 77.2090),
];

/// Latitude and longitude of `city`, or [`DEFAULT_CENTER`]. Names match exactly.
#[must_use]
pub fn coordinates_for(city: &str) -> (f64, f64) {
    CITY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == city)
        .map_or(DEFAULT_CENTER, |(_, lat, lon)| (*lat, *lon))
}

/// City names offered as suggestions on the submission form
pub fn known_cities() -> impl Iterator<Item = &'static str> {
    CITY_COORDINATES.iter().map(|(name, _, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city() {
        assert_eq!(coordinates_for("Pune"), (18.5204, 73.8567));
    }

    #[test]
    fn test_unknown_city_uses_center() {
        assert_eq!(coordinates_for("Atlantis"), DEFAULT_CENTER);
        assert_eq!(coordinates_for("pune"), DEFAULT_CENTER);
    }

    #[test]
    fn test_known_cities_are_unique() {
        let mut names: Vec<_> = known_cities().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CITY_COORDINATES.len());
    }
}
