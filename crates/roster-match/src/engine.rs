//! Exact-then-fuzzy matching of one uploaded name against the master index.

use rapidfuzz::distance::levenshtein;

use roster_model::{MatchMethod, MatchResult};

use crate::index::MasterIndex;
use crate::normalize::normalize;
use crate::policy::MatchPolicy;

/// Levenshtein similarity between two normalized keys.
///
/// `1 - distance / max(len_a, len_b)`, with both-empty inputs treated as
/// identical (similarity 1.0) to avoid the zero division.
#[must_use]
pub fn key_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein::distance(a.chars(), b.chars());
    1.0 - distance as f64 / max_len as f64
}

/// Match a single uploaded name against the index.
///
/// The exact stage is an O(1) key lookup and takes precedence over any fuzzy
/// candidate regardless of score. The fuzzy stage scans every indexed key in
/// first-insertion order and keeps the first candidate whose similarity
/// strictly exceeds both the current best and the policy floor; ties never
/// replace the incumbent. Total over any input and any index, including an
/// empty one.
#[must_use]
pub fn find_best_match(input: &str, index: &MasterIndex, policy: &MatchPolicy) -> MatchResult {
    let key = normalize(input);

    if let Some(entry) = index.get(&key) {
        return MatchResult {
            input: input.to_string(),
            matched: Some(entry.clone()),
            confidence: 1.0,
            method: MatchMethod::Exact,
        };
    }

    let mut best: Option<(&roster_model::RosterEntry, f64)> = None;
    for (candidate_key, candidate) in index.iter() {
        let confidence = key_similarity(&key, candidate_key);
        let incumbent = best.map_or(0.0, |(_, score)| score);
        if confidence > incumbent && confidence > policy.fuzzy_floor {
            best = Some((candidate, confidence));
        }
    }

    match best {
        Some((entry, confidence)) => MatchResult {
            input: input.to_string(),
            matched: Some(entry.clone()),
            confidence,
            method: MatchMethod::Fuzzy,
        },
        None => MatchResult {
            input: input.to_string(),
            matched: None,
            confidence: 0.0,
            method: MatchMethod::Unknown,
        },
    }
}
