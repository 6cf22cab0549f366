//! Master roster entries and attendance status values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// One row of the master roster.
///
/// The roster is the ground truth for presence/absence. Order is irrelevant
/// for matching but preserved for display, so each entry carries its
/// zero-based ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Display name exactly as the roster records it.
    pub name: String,
    /// Zero-based position of the entry in the roster.
    pub position: usize,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// Number roster display names in their original order.
    pub fn sequence<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(position, name)| Self::new(name, position))
            .collect()
    }
}

/// Attendance verdict recorded in the append-only log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = RosterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(RosterError::Message(format!(
                "unknown attendance status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_entries_in_order() {
        let roster = RosterEntry::sequence(["Charan", "John Smith"]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], RosterEntry::new("Charan", 0));
        assert_eq!(roster[1], RosterEntry::new("John Smith", 1));
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "present".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Present
        );
        assert_eq!(
            " ABSENT ".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Absent
        );
        assert!("late".parse::<AttendanceStatus>().is_err());
    }
}
