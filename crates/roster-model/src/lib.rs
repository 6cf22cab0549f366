pub mod error;
pub mod matching;
pub mod report;
pub mod roster;

pub use error::{Result, RosterError};
pub use matching::{MatchMethod, MatchResult};
pub use report::ReconciliationReport;
pub use roster::{AttendanceStatus, RosterEntry};
