use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use roster_match::MatchPolicy;
use roster_model::ReconciliationReport;

/// Where the master roster came from for one reconcile run.
#[derive(Debug)]
pub enum RosterSource {
    File(PathBuf),
    Cache(PathBuf),
}

#[derive(Debug)]
pub struct ReconcileOutcome {
    pub upload: PathBuf,
    pub date: NaiveDate,
    pub roster_source: RosterSource,
    pub roster_count: usize,
    /// Raw candidate names before deduplication.
    pub uploaded_count: usize,
    pub policy: MatchPolicy,
    pub report: ReconciliationReport,
    /// Unknowns after the meeting-artifact filter (equal to
    /// `report.unknowns` when the filter is disabled).
    pub display_unknowns: Vec<String>,
    pub accuracy: u8,
    pub elapsed: Duration,
    pub saved_rows: Option<usize>,
    pub report_path: Option<PathBuf>,
    pub copy_lists: bool,
    pub show_details: bool,
}
