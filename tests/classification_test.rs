//! Tests for sentiment, priority and department triage

use grievance_redressal::classification::{
    analyze_sentiment, detect_priority, route_department, sentiment_from_score, GENERAL_ADMIN,
    HIGH_PRIORITY_KEYWORDS, MEDIUM_PRIORITY_KEYWORDS,
};
use grievance_redressal::{Category, LexiconScorer, Priority, Sentiment};
use proptest::prelude::*;

#[test]
fn test_department_table() {
    let expected = [
        ("Public Safety", "Police"),
        ("Sanitation", "Municipal"),
        ("Infrastructure", "PWD"),
        ("Healthcare", "Health Dept"),
        ("Utilities", "Electricity Board"),
        ("Education", "Education Dept"),
        ("Administrative Delay", "General Admin"),
        ("Other", "General Admin"),
    ];

    for (label, department) in expected {
        assert_eq!(route_department(label), department, "routing {label}");
    }
    assert_eq!(Category::ALL.len(), expected.len());
}

#[test]
fn test_route_department_falls_back() {
    assert_eq!(route_department("Potholes"), GENERAL_ADMIN);
    assert_eq!(route_department("🚨 Public Safety"), GENERAL_ADMIN);
}

#[test]
fn test_priority_examples() {
    assert_eq!(detect_priority("There is a fire emergency"), Priority::High);
    assert_eq!(detect_priority("Road ACCIDENT near the bridge"), Priority::High);
    assert_eq!(detect_priority("Streetlight not working"), Priority::Medium);
    assert_eq!(detect_priority("Problem with ration card"), Priority::Medium);
    assert_eq!(detect_priority("Request for a new park bench"), Priority::Low);
}

#[test]
fn test_priority_matches_substrings() {
    // Substring semantics: "firewood" contains "fire", "delayed" contains "delay".
    assert_eq!(detect_priority("firewood stall blocking lane"), Priority::High);
    assert_eq!(detect_priority("pension delayed"), Priority::Medium);
}

#[test]
fn test_sentiment_with_fixed_scores() {
    let negative = |_: &str| -0.5_f32;
    let neutral = |_: &str| -0.3_f32;
    let positive = |_: &str| 0.1_f32;

    assert_eq!(analyze_sentiment(&negative, "x").0, Sentiment::Negative);
    assert_eq!(analyze_sentiment(&neutral, "x").0, Sentiment::Neutral);
    assert_eq!(analyze_sentiment(&positive, "x").0, Sentiment::Positive);
}

#[test]
fn test_sentiment_with_lexicon() {
    let scorer = LexiconScorer::new().expect("Failed to create scorer");

    let (label, _) = analyze_sentiment(&scorer, "Terrible, filthy drains everywhere");
    assert_eq!(label, Sentiment::Negative);

    let (label, _) = analyze_sentiment(&scorer, "Thanks, the new road is excellent");
    assert_eq!(label, Sentiment::Positive);

    let (label, score) = analyze_sentiment(&scorer, "");
    assert_eq!(label, Sentiment::Neutral);
    assert_eq!(score, 0.0);
}

fn mixed_case(word: &str, mask: &[bool]) -> String {
    word.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_fire_is_always_high(
        prefix in "[a-z ]{0,30}",
        suffix in "[a-z ]{0,30}",
        mask in prop::collection::vec(any::<bool>(), 1..8),
        medium in prop::sample::select(MEDIUM_PRIORITY_KEYWORDS.to_vec()),
    ) {
        let text = format!("{prefix} {medium} {} {suffix}", mixed_case("fire", &mask));
        prop_assert_eq!(detect_priority(&text), Priority::High);
    }

    #[test]
    fn prop_medium_keywords_without_high_are_medium(
        prefix in "[bkqxz ]{0,30}",
        suffix in "[bkqxz ]{0,30}",
        keyword in prop::sample::select(MEDIUM_PRIORITY_KEYWORDS.to_vec()),
    ) {
        let text = format!("{prefix} {} {suffix}", keyword.to_uppercase());
        prop_assert_eq!(detect_priority(&text), Priority::Medium);
    }

    #[test]
    fn prop_no_keywords_is_low(text in "[bkqxz .,!]{0,60}") {
        prop_assert_eq!(detect_priority(&text), Priority::Low);
    }

    #[test]
    fn prop_high_keyword_wins(
        keyword in prop::sample::select(HIGH_PRIORITY_KEYWORDS.to_vec()),
        noise in "[a-z ]{0,40}",
    ) {
        let text = format!("{noise} {keyword}");
        prop_assert_eq!(detect_priority(&text), Priority::High);
    }

    #[test]
    fn prop_routing_is_total(label in ".{0,30}") {
        let department = route_department(&label);
        prop_assert!(!department.is_empty());
        prop_assert_eq!(department, route_department(&label));
    }

    #[test]
    fn prop_sentiment_partitions_scores(score in -1.0_f32..=1.0) {
        let expected = if score < -0.3 {
            Sentiment::Negative
        } else if score < 0.1 {
            Sentiment::Neutral
        } else {
            Sentiment::Positive
        };
        prop_assert_eq!(sentiment_from_score(score), expected);
    }
}
