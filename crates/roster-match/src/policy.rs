//! Confidence thresholds for classifying match candidates.

/// Default floor a fuzzy candidate must exceed to count as a match.
pub const DEFAULT_FUZZY_FLOOR: f64 = 0.6;

/// Default boundary above which a match counts as high confidence.
pub const DEFAULT_HIGH_CONFIDENCE: f64 = 0.8;

/// Tier of an accepted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceTier {
    /// Confidence in `(fuzzy_floor, high_confidence]` — accepted, but worth
    /// a second look.
    Moderate,
    /// Confidence above `high_confidence` — counted toward accuracy.
    High,
}

/// Configurable classification thresholds.
///
/// Both boundaries are strict: a candidate must *exceed* `fuzzy_floor` to be
/// accepted at all, and *exceed* `high_confidence` to count as high tier.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    /// Minimum confidence (exclusive) for any fuzzy candidate.
    pub fuzzy_floor: f64,
    /// Boundary (exclusive) between moderate and high confidence.
    pub high_confidence: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            fuzzy_floor: DEFAULT_FUZZY_FLOOR,
            high_confidence: DEFAULT_HIGH_CONFIDENCE,
        }
    }
}

impl MatchPolicy {
    /// Tighter thresholds for rosters with many similar names.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            fuzzy_floor: 0.7,
            high_confidence: 0.9,
        }
    }

    /// Relaxed thresholds for noisy uploads (heavy PDF extraction
    /// artifacts, aggressive abbreviations).
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            fuzzy_floor: 0.5,
            high_confidence: 0.75,
        }
    }

    /// Categorize a confidence score.
    ///
    /// Returns `None` when the score does not clear the fuzzy floor, i.e.
    /// the input stays unknown.
    #[must_use]
    pub fn categorize(&self, confidence: f64) -> Option<ConfidenceTier> {
        if confidence > self.high_confidence {
            Some(ConfidenceTier::High)
        } else if confidence > self.fuzzy_floor {
            Some(ConfidenceTier::Moderate)
        } else {
            None
        }
    }
}
