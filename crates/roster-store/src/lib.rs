#![deny(unsafe_code)]

pub mod attendance_log;
pub mod cache;
pub mod error;
pub mod hash;
pub mod roster_file;

pub use attendance_log::AttendanceLog;
pub use cache::{DEFAULT_MAX_AGE_MINUTES, RosterCache};
pub use error::StoreError;
pub use roster_file::load_roster;
