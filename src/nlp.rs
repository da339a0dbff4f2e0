//! Text polarity scoring.
//!
//! The sentiment classifier only needs a number in `[-1.0, 1.0]` for a piece of text.
//! [`PolarityScorer`] is that seam; [`LexiconScorer`] is the built-in implementation, a
//! weighted word list with intensifier and negation handling.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{GrievanceError, Result};

/// Anything that can rate the tone of a text.
pub trait PolarityScorer {
    /// Polarity of `text`, clamped to `[-1.0, 1.0]`. Text with no signal scores `0.0`.
    fn polarity(&self, text: &str) -> f32;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f32,
{
    fn polarity(&self, text: &str) -> f32 {
        self(text)
    }
}

const POSITIVE_WORDS: &[(&str, f32)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("wonderful", 1.0),
    ("happy", 0.8),
    ("glad", 0.5),
    ("thank", 0.4),
    ("thanks", 0.4),
    ("grateful", 0.6),
    ("appreciate", 0.5),
    ("helpful", 0.5),
    ("prompt", 0.4),
    ("quick", 0.3),
    ("clean", 0.4),
    ("safe", 0.5),
    ("satisfied", 0.5),
    ("pleased", 0.5),
    ("resolved", 0.3),
    ("fixed", 0.3),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("love", 0.5),
];

const NEGATIVE_WORDS: &[(&str, f32)] = &[
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("poor", -0.4),
    ("dirty", -0.6),
    ("filthy", -0.8),
    ("broken", -0.4),
    ("damaged", -0.4),
    ("unsafe", -0.5),
    ("dangerous", -0.6),
    ("angry", -0.5),
    ("upset", -0.5),
    ("frustrated", -0.7),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("useless", -0.5),
    ("pathetic", -1.0),
    ("corrupt", -0.6),
    ("rude", -0.3),
    ("negligent", -0.6),
    ("unacceptable", -0.8),
    ("hate", -0.8),
    ("sick", -0.7),
    ("scared", -0.6),
    ("worried", -0.4),
];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("really", 1.2),
    ("totally", 1.4),
    ("completely", 1.4),
    ("absolutely", 1.5),
    ("so", 1.2),
    ("quite", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "nothing", "hardly", "neither", "nor"];

/// Negated words flip and lose half their weight.
const NEGATION_FACTOR: f32 = -0.5;

/// Word-list polarity scorer
pub struct LexiconScorer {
    url_regex: Regex,
    contraction_regex: Regex,
    special_chars_regex: Regex,
    extra_spaces_regex: Regex,
}

impl LexiconScorer {
    /// Build the scorer, compiling its text-cleaning expressions
    pub fn new() -> Result<Self> {
        let url_regex = Regex::new(r"https?://\S+|www\.\S+")
            .map_err(|e| GrievanceError::Other(format!("Failed to compile URL regex: {e}")))?;
        let contraction_regex = Regex::new(r"(?i)n['’]t\b").map_err(|e| {
            GrievanceError::Other(format!("Failed to compile contraction regex: {e}"))
        })?;
        let special_chars_regex = Regex::new(r"[^\w\s]").map_err(|e| {
            GrievanceError::Other(format!("Failed to compile special chars regex: {e}"))
        })?;
        let extra_spaces_regex = Regex::new(r"\s+").map_err(|e| {
            GrievanceError::Other(format!("Failed to compile spaces regex: {e}"))
        })?;

        Ok(Self {
            url_regex,
            contraction_regex,
            special_chars_regex,
            extra_spaces_regex,
        })
    }

    /// Normalize unicode, drop URLs, spell out `n't` as ` not`, drop punctuation,
    /// collapse whitespace, lowercase
    #[must_use]
    pub fn clean_text(&self, text: &str) -> String {
        let normalized = text.nfc().collect::<String>();
        let no_urls = self.url_regex.replace_all(&normalized, " ");
        let expanded = self.contraction_regex.replace_all(&no_urls, " not");
        let no_special = self.special_chars_regex.replace_all(&expanded, " ");
        let collapsed = self.extra_spaces_regex.replace_all(&no_special, " ");
        collapsed.trim().to_lowercase()
    }

    fn weight(word: &str) -> Option<f32> {
        POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .find(|(w, _)| *w == word)
            .map(|(_, weight)| *weight)
    }

    fn intensity(word: &str) -> Option<f32> {
        INTENSIFIERS
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, factor)| *factor)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f32 {
        let cleaned = self.clean_text(text);
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let mut total = 0.0_f32;
        let mut hits = 0_u16;

        for (i, word) in words.iter().enumerate() {
            let Some(mut score) = Self::weight(word) else {
                continue;
            };

            let prev = i.checked_sub(1).map(|j| words[j]);
            let prev2 = i.checked_sub(2).map(|j| words[j]);

            if let Some(factor) = prev.and_then(Self::intensity) {
                score *= factor;
            }

            let negated = [prev, prev2]
                .into_iter()
                .flatten()
                .any(|w| NEGATIONS.contains(&w));
            if negated {
                score *= NEGATION_FACTOR;
            }

            total += score;
            hits = hits.saturating_add(1);
        }

        if hits == 0 {
            0.0
        } else {
            (total / f32::from(hits)).clamp(-1.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        let scorer = LexiconScorer::new().expect("Failed to create scorer");

        let cleaned = scorer.clean_text("See https://example.com for the   PHOTO!!");
        assert_eq!(cleaned, "see for the photo");
    }

    #[test]
    fn test_polarity_direction() {
        let scorer = LexiconScorer::new().expect("Failed to create scorer");

        assert!(scorer.polarity("Thank you, the staff were very helpful") > 0.1);
        assert!(scorer.polarity("The toilets are filthy and the road is terrible") < -0.3);
        assert_eq!(scorer.polarity("The streetlight on 5th lane"), 0.0);
        assert_eq!(scorer.polarity(""), 0.0);
    }

    #[test]
    fn test_negation_flips_sign() {
        let scorer = LexiconScorer::new().expect("Failed to create scorer");

        assert!(scorer.polarity("the water is good") > 0.0);
        assert!(scorer.polarity("the water is not good") < 0.0);
    }

    #[test]
    fn test_clean_text_spells_out_negated_contractions() {
        let scorer = LexiconScorer::new().expect("Failed to create scorer");

        assert_eq!(scorer.clean_text("The road isn't safe"), "the road is not safe");
        assert_eq!(scorer.clean_text("They DON’T care"), "they do not care");
        assert_eq!(scorer.clean_text("Ravi's shop"), "ravi s shop");
    }

    #[test]
    fn test_negated_contractions_score_negative() {
        let scorer = LexiconScorer::new().expect("Failed to create scorer");

        assert!(scorer.polarity("The road isn't safe") < 0.0);
        assert!(scorer.polarity("Water doesn't look clean") < 0.0);
        assert!(scorer.polarity("The staff aren't helpful") < 0.0);
        assert!(scorer.polarity("The staff weren't helpful at all") < 0.0);
    }

    #[test]
    fn test_polarity_is_clamped() {
        let scorer = LexiconScorer::new().expect("Failed to create scorer");

        let score = scorer.polarity("absolutely excellent excellent wonderful");
        assert!(score <= 1.0);
        let score = scorer.polarity("extremely terrible horrible awful");
        assert!(score >= -1.0);
    }

    #[test]
    fn test_closures_are_scorers() {
        let fixed = |_: &str| 0.42_f32;
        assert!((fixed.polarity("anything") - 0.42).abs() < f32::EPSILON);
    }
}
