use std::collections::HashSet;

use proptest::prelude::*;

use roster_match::{MatchPolicy, MasterIndex, find_best_match, normalize, reconcile};
use roster_model::{MatchMethod, RosterEntry};

fn name_strategy() -> impl Strategy<Value = String> {
    // Covers the formatting noise real uploads exhibit: mixed case, padding,
    // punctuation, digits.
    proptest::string::string_regex("[A-Za-z0-9 .,'-]{0,16}").expect("valid regex")
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in any::<String>()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalization_emits_only_lowercase_alphanumerics(raw in any::<String>()) {
        let key = normalize(&raw);
        prop_assert!(key.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
    }

    #[test]
    fn exact_key_equality_always_wins(
        roster_names in proptest::collection::vec(name_strategy(), 1..8),
    ) {
        let roster = RosterEntry::sequence(roster_names.iter().cloned());
        let index = MasterIndex::build(&roster);
        for entry in &roster {
            if normalize(&entry.name).is_empty() {
                continue;
            }
            // Re-dress the name with formatting that normalizes away.
            let dressed = format!("  {}  ", entry.name.to_uppercase());
            let result = find_best_match(&dressed, &index, &MatchPolicy::default());
            prop_assert_eq!(result.method, MatchMethod::Exact);
            prop_assert_eq!(result.confidence, 1.0);
        }
    }

    #[test]
    fn present_and_absent_partition_the_roster(
        roster_names in proptest::collection::vec(name_strategy(), 0..10),
        uploaded in proptest::collection::vec(name_strategy(), 0..10),
    ) {
        let roster = RosterEntry::sequence(roster_names.iter().cloned());
        let report = reconcile(&uploaded, &roster, &MatchPolicy::default());

        let roster_keys: HashSet<String> =
            roster.iter().map(|entry| normalize(&entry.name)).collect();
        let present_keys: HashSet<String> =
            report.present.iter().map(|name| normalize(name)).collect();
        let absent_keys: HashSet<String> =
            report.absentees.iter().map(|name| normalize(name)).collect();

        prop_assert!(present_keys.intersection(&absent_keys).next().is_none());
        let union: HashSet<String> = present_keys.union(&absent_keys).cloned().collect();
        prop_assert_eq!(union, roster_keys);
    }

    #[test]
    fn accuracy_is_a_percentage(
        roster_names in proptest::collection::vec(name_strategy(), 0..10),
        uploaded in proptest::collection::vec(name_strategy(), 0..10),
    ) {
        let roster = RosterEntry::sequence(roster_names.iter().cloned());
        let policy = MatchPolicy::default();
        let report = reconcile(&uploaded, &roster, &policy);
        prop_assert!(report.accuracy(policy.high_confidence) <= 100);
        if report.total_processed == 0 {
            prop_assert_eq!(report.accuracy(policy.high_confidence), 0);
        }
    }

    #[test]
    fn confidence_stays_in_unit_interval(
        roster_names in proptest::collection::vec(name_strategy(), 0..10),
        input in name_strategy(),
    ) {
        let roster = RosterEntry::sequence(roster_names.iter().cloned());
        let index = MasterIndex::build(&roster);
        let result = find_best_match(&input, &index, &MatchPolicy::default());
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }
}
