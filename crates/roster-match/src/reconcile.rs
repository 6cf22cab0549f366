//! Full reconciliation of an uploaded name list against the master roster.

use std::collections::HashSet;

use tracing::debug;

use roster_model::{MatchResult, ReconciliationReport, RosterEntry};

use crate::engine::find_best_match;
use crate::index::MasterIndex;
use crate::normalize::normalize;
use crate::policy::MatchPolicy;

/// Trim, drop blanks, and deduplicate case-insensitively, keeping the first
/// occurrence order and the first trimmed surface form of each unique name.
fn unique_trimmed(uploaded: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    uploaded
        .iter()
        .map(|raw| raw.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Reconcile uploaded names against the roster.
///
/// Pure computation over the supplied arguments: deduplicates the upload,
/// builds the index, matches every unique name, and derives absentees as the
/// roster complement of the matched entries by normalized key. A roster
/// entry is never both present and absent; uploads matching the same entry
/// repeat it in `present` without duplicating it in `absentees`.
#[must_use]
pub fn reconcile(
    uploaded: &[String],
    roster: &[RosterEntry],
    policy: &MatchPolicy,
) -> ReconciliationReport {
    let unique = unique_trimmed(uploaded);
    let index = MasterIndex::build(roster);
    debug!(
        uploaded = uploaded.len(),
        unique = unique.len(),
        roster = roster.len(),
        "reconciling attendance"
    );

    let match_details: Vec<MatchResult> = unique
        .iter()
        .map(|name| find_best_match(name, &index, policy))
        .collect();

    let present: Vec<String> = match_details
        .iter()
        .filter(|detail| policy.categorize(detail.confidence).is_some())
        .filter_map(|detail| detail.matched.as_ref())
        .map(|entry| entry.name.clone())
        .collect();

    let unknowns: Vec<String> = match_details
        .iter()
        .filter(|detail| policy.categorize(detail.confidence).is_none())
        .map(|detail| detail.input.clone())
        .collect();

    let present_keys: HashSet<String> = present.iter().map(|name| normalize(name)).collect();
    let absentees: Vec<String> = roster
        .iter()
        .filter(|entry| !present_keys.contains(&normalize(&entry.name)))
        .map(|entry| entry.name.clone())
        .collect();

    ReconciliationReport {
        present,
        absentees,
        unknowns,
        total_processed: unique.len(),
        match_details,
    }
}
