//! Per-name match verdicts produced by the reconciliation engine.

use serde::{Deserialize, Serialize};

use crate::roster::RosterEntry;

/// The stage of the matching algorithm that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Normalized key hit the master index directly.
    Exact,
    /// Best edit-distance candidate above the confidence floor.
    Fuzzy,
    /// No candidate cleared the confidence floor.
    Unknown,
}

/// Verdict for a single uploaded name. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Uploaded surface form, trimmed.
    pub input: String,
    /// Matched roster entry, if any.
    pub matched: Option<RosterEntry>,
    /// Similarity in [0, 1]: 1.0 for exact key hits, 0.0 when unmatched.
    pub confidence: f64,
    /// Stage that produced this verdict.
    pub method: MatchMethod,
}

impl MatchResult {
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }
}
