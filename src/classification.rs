//! Grievance triage: sentiment label, priority tier and department routing.
//!
//! All three are pure functions of the submission and run exactly once, when the
//! grievance is created.

use crate::models::{Category, Priority, Sentiment};
use crate::nlp::PolarityScorer;

/// Scores below this are `Negative`
pub const NEGATIVE_BELOW: f32 = -0.3;
/// Scores at or above this are `Positive`
pub const POSITIVE_FROM: f32 = 0.1;

/// Any of these makes a grievance `High` priority
pub const HIGH_PRIORITY_KEYWORDS: [&str; 5] = ["urgent", "danger", "accident", "death", "fire"];
/// Any of these (without a high keyword) makes it `Medium`
pub const MEDIUM_PRIORITY_KEYWORDS: [&str; 3] = ["delay", "problem", "not working"];

/// Department for anything that does not route elsewhere
pub const GENERAL_ADMIN: &str = "General Admin";

/// Category to department table
pub const DEPARTMENTS: [(Category, &str); 8] = [
    (Category::PublicSafety, "Police"),
    (Category::Sanitation, "Municipal"),
    (Category::Infrastructure, "PWD"),
    (Category::Healthcare, "Health Dept"),
    (Category::Utilities, "Electricity Board"),
    (Category::Education, "Education Dept"),
    (Category::AdministrativeDelay, GENERAL_ADMIN),
    (Category::Other, GENERAL_ADMIN),
];

/// Map a polarity score onto a sentiment label
#[must_use]
pub fn sentiment_from_score(score: f32) -> Sentiment {
    if score < NEGATIVE_BELOW {
        Sentiment::Negative
    } else if score < POSITIVE_FROM {
        Sentiment::Neutral
    } else {
        Sentiment::Positive
    }
}

/// Score `text` and label it
pub fn analyze_sentiment(scorer: &dyn PolarityScorer, text: &str) -> (Sentiment, f32) {
    let score = scorer.polarity(text);
    (sentiment_from_score(score), score)
}

/// Keyword tiers, first match wins. Matching is by substring on the lowercased text.
#[must_use]
pub fn detect_priority(text: &str) -> Priority {
    let folded = text.to_lowercase();

    if HIGH_PRIORITY_KEYWORDS.iter().any(|k| folded.contains(k)) {
        Priority::High
    } else if MEDIUM_PRIORITY_KEYWORDS.iter().any(|k| folded.contains(k)) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

impl Category {
    /// Department this category routes to
    #[must_use]
    pub fn department(self) -> &'static str {
        DEPARTMENTS
            .iter()
            .find(|(category, _)| *category == self)
            .map_or(GENERAL_ADMIN, |(_, department)| *department)
    }
}

/// Route a raw category label. Unknown labels go to [`GENERAL_ADMIN`].
#[must_use]
pub fn route_department(label: &str) -> &'static str {
    label
        .parse::<Category>()
        .map_or(GENERAL_ADMIN, Category::department)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_boundaries() {
        assert_eq!(sentiment_from_score(-1.0), Sentiment::Negative);
        assert_eq!(sentiment_from_score(-0.31), Sentiment::Negative);
        assert_eq!(sentiment_from_score(-0.3), Sentiment::Neutral);
        assert_eq!(sentiment_from_score(0.0), Sentiment::Neutral);
        assert_eq!(sentiment_from_score(0.09), Sentiment::Neutral);
        assert_eq!(sentiment_from_score(0.1), Sentiment::Positive);
        assert_eq!(sentiment_from_score(1.0), Sentiment::Positive);
    }

    #[test]
    fn test_priority_tiers() {
        assert_eq!(detect_priority("URGENT: wires hanging"), Priority::High);
        assert_eq!(detect_priority("Pump not working, long delay"), Priority::Medium);
        assert_eq!(detect_priority("Please repaint the bench"), Priority::Low);
        assert_eq!(detect_priority(""), Priority::Low);
    }

    #[test]
    fn test_high_tier_beats_medium() {
        assert_eq!(
            detect_priority("Delay in response to the fire near the school"),
            Priority::High
        );
    }

    #[test]
    fn test_every_category_has_a_department() {
        for category in Category::ALL {
            assert!(DEPARTMENTS.iter().any(|(c, _)| c == category));
        }
        assert_eq!(Category::PublicSafety.department(), "Police");
        assert_eq!(Category::Other.department(), GENERAL_ADMIN);
    }

    #[test]
    fn test_route_unknown_label() {
        assert_eq!(route_department("Traffic"), GENERAL_ADMIN);
        assert_eq!(route_department(""), GENERAL_ADMIN);
        assert_eq!(route_department("Utilities"), "Electricity Board");
    }
}
