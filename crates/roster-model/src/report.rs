//! Reconciliation output consumed by the display and persistence layers.

use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;

/// Three-way classification of one reconciliation run.
///
/// `present` carries the matched roster entries' display names (duplicates
/// possible when several uploaded names map to the same entry — not
/// deduplicated). `absentees` carries roster display names with no matching
/// upload, in roster order. `unknowns` carries the raw uploaded strings that
/// matched nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub present: Vec<String>,
    pub absentees: Vec<String>,
    pub unknowns: Vec<String>,
    /// Count of unique uploaded names after trimming and deduplication.
    pub total_processed: usize,
    /// One verdict per unique uploaded name, in input order.
    pub match_details: Vec<MatchResult>,
}

impl ReconciliationReport {
    /// Percentage of processed names matched above `high_confidence`,
    /// rounded to the nearest integer. Zero when nothing was processed.
    #[must_use]
    pub fn accuracy(&self, high_confidence: f64) -> u8 {
        if self.total_processed == 0 {
            return 0;
        }
        let high = self
            .match_details
            .iter()
            .filter(|detail| detail.confidence > high_confidence)
            .count();
        let percent = (high as f64 / self.total_processed as f64) * 100.0;
        percent.round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{MatchMethod, MatchResult};
    use crate::roster::RosterEntry;

    fn detail(input: &str, confidence: f64, method: MatchMethod) -> MatchResult {
        let matched = match method {
            MatchMethod::Unknown => None,
            _ => Some(RosterEntry::new(input, 0)),
        };
        MatchResult {
            input: input.to_string(),
            matched,
            confidence,
            method,
        }
    }

    #[test]
    fn accuracy_counts_only_high_confidence_details() {
        let report = ReconciliationReport {
            present: vec!["A".to_string(), "B".to_string()],
            absentees: vec![],
            unknowns: vec!["C".to_string()],
            total_processed: 3,
            match_details: vec![
                detail("A", 1.0, MatchMethod::Exact),
                detail("B", 0.7, MatchMethod::Fuzzy),
                detail("C", 0.0, MatchMethod::Unknown),
            ],
        };
        assert_eq!(report.accuracy(0.8), 33);
    }

    #[test]
    fn accuracy_is_zero_for_empty_report() {
        let report = ReconciliationReport {
            present: vec![],
            absentees: vec![],
            unknowns: vec![],
            total_processed: 0,
            match_details: vec![],
        };
        assert_eq!(report.accuracy(0.8), 0);
    }

    #[test]
    fn accuracy_threshold_is_strict() {
        let report = ReconciliationReport {
            present: vec!["A".to_string()],
            absentees: vec![],
            unknowns: vec![],
            total_processed: 1,
            match_details: vec![detail("A", 0.8, MatchMethod::Fuzzy)],
        };
        // 0.8 is fuzzy tier, not high confidence.
        assert_eq!(report.accuracy(0.8), 0);
    }
}
