use roster_match::{MatchPolicy, reconcile};
use roster_model::{MatchMethod, RosterEntry};

fn uploaded(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn roster(values: &[&str]) -> Vec<RosterEntry> {
    RosterEntry::sequence(values.iter().copied())
}

#[test]
fn mixed_upload_partitions_into_all_three_buckets() {
    let report = reconcile(
        &uploaded(&["charan", "john  smith", "unknown person"]),
        &roster(&["Charan", "John Smith", "Jane Doe"]),
        &MatchPolicy::default(),
    );

    assert_eq!(report.present, vec!["Charan", "John Smith"]);
    assert_eq!(report.absentees, vec!["Jane Doe"]);
    assert_eq!(report.unknowns, vec!["unknown person"]);
    assert_eq!(report.total_processed, 3);
}

#[test]
fn single_deletion_typo_is_accepted_as_fuzzy_presence() {
    let report = reconcile(
        &uploaded(&["charn"]),
        &roster(&["Charan"]),
        &MatchPolicy::default(),
    );

    assert_eq!(report.present, vec!["Charan"]);
    assert!(report.absentees.is_empty());

    let detail = &report.match_details[0];
    assert_eq!(detail.method, MatchMethod::Fuzzy);
    // edit distance 1 over max key length 6
    assert!((detail.confidence - 5.0 / 6.0).abs() < 1e-9);
    assert!(detail.confidence > 0.8);
}

#[test]
fn formatting_variants_of_one_name_collapse_to_a_single_upload() {
    let report = reconcile(
        &uploaded(&["Charan", "charan", " Charan "]),
        &roster(&["Charan"]),
        &MatchPolicy::default(),
    );

    assert_eq!(report.total_processed, 1);
    assert_eq!(report.present, vec!["Charan"]);
}

#[test]
fn empty_roster_yields_only_unknowns() {
    let report = reconcile(&uploaded(&["Anyone"]), &[], &MatchPolicy::default());

    assert!(report.present.is_empty());
    assert!(report.absentees.is_empty());
    assert_eq!(report.unknowns, vec!["Anyone"]);
    assert_eq!(report.accuracy(MatchPolicy::default().high_confidence), 0);
}

#[test]
fn group_suffixed_names_still_reconcile() {
    // Formatting noise like cohort suffixes collapses under normalization.
    let report = reconcile(
        &uploaded(&["charan g4vlsi"]),
        &roster(&["Charan - G4 VLSI"]),
        &MatchPolicy::default(),
    );

    assert_eq!(report.present, vec!["Charan - G4 VLSI"]);
    assert_eq!(report.match_details[0].method, MatchMethod::Exact);
}

#[test]
fn noisy_extraction_artifacts_surface_as_unknowns_not_errors() {
    let report = reconcile(
        &uploaded(&["12:01:22", "56 min 8s", "###", "Jane Doe"]),
        &roster(&["Jane Doe"]),
        &MatchPolicy::default(),
    );

    assert_eq!(report.present, vec!["Jane Doe"]);
    assert_eq!(report.unknowns.len(), 3);
    assert!(report.absentees.is_empty());
}
