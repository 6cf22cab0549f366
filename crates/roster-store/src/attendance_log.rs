//! Append-only attendance log.
//!
//! The log is the persistence target of a reconciliation run: one row per
//! student per save, `date,name,status`. Rows are only ever appended —
//! corrections are new rows with a later save, never rewrites.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use roster_model::{AttendanceStatus, ReconciliationReport};

use crate::error::{Result, StoreError};

const LOG_HEADER: [&str; 3] = ["date", "name", "status"];

/// CSV-file-backed attendance log.
#[derive(Debug, Clone)]
pub struct AttendanceLog {
    path: PathBuf,
}

impl AttendanceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row per present and absent student for `date`.
    ///
    /// Unknown uploads are deliberately not persisted — they belong to no
    /// enrolled student. Returns the number of rows appended.
    pub fn append_bulk(&self, date: NaiveDate, report: &ReconciliationReport) -> Result<usize> {
        let mut rows: Vec<(&str, AttendanceStatus)> = Vec::new();
        rows.extend(
            report
                .present
                .iter()
                .map(|name| (name.as_str(), AttendanceStatus::Present)),
        );
        rows.extend(
            report
                .absentees
                .iter()
                .map(|name| (name.as_str(), AttendanceStatus::Absent)),
        );
        self.append_rows(date, &rows)?;
        info!(
            path = %self.path.display(),
            date = %date,
            present = report.present.len(),
            absent = report.absentees.len(),
            "saved attendance"
        );
        Ok(rows.len())
    }

    /// Append a single attendance row (self-service marking).
    pub fn mark_individual(
        &self,
        date: NaiveDate,
        name: &str,
        status: AttendanceStatus,
    ) -> Result<()> {
        self.append_rows(date, &[(name, status)])?;
        info!(path = %self.path.display(), date = %date, status = %status, "marked individual attendance");
        Ok(())
    }

    fn append_rows(&self, date: NaiveDate, rows: &[(&str, AttendanceStatus)]) -> Result<()> {
        let needs_header = !self.path.exists()
            || self
                .path
                .metadata()
                .map(|metadata| metadata.len() == 0)
                .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::io(&self.path, source))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let csv_error = |source: csv::Error| StoreError::Csv {
            path: self.path.clone(),
            message: source.to_string(),
        };

        if needs_header {
            writer.write_record(LOG_HEADER).map_err(csv_error)?;
        }
        let date = date.format("%Y-%m-%d").to_string();
        for (name, status) in rows {
            writer
                .write_record([date.as_str(), name, status.as_str()])
                .map_err(csv_error)?;
        }
        writer
            .flush()
            .map_err(|source| StoreError::io(&self.path, source))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn unique_log_path(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "attendance-reconciler-log-{}-{}-{}.csv",
            name,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        dir
    }

    fn sample_report() -> ReconciliationReport {
        ReconciliationReport {
            present: vec!["Charan".to_string()],
            absentees: vec!["Jane Doe".to_string()],
            unknowns: vec!["ghost".to_string()],
            total_processed: 2,
            match_details: vec![],
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn bulk_save_appends_present_and_absent_rows() {
        let log = AttendanceLog::new(unique_log_path("bulk"));
        let appended = log.append_bulk(date(), &sample_report()).unwrap();
        assert_eq!(appended, 2);

        let contents = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "date,name,status",
                "2025-09-01,Charan,Present",
                "2025-09-01,Jane Doe,Absent",
            ]
        );
    }

    #[test]
    fn header_is_written_only_once() {
        let log = AttendanceLog::new(unique_log_path("header"));
        log.append_bulk(date(), &sample_report()).unwrap();
        log.mark_individual(date(), "Charan", AttendanceStatus::Absent)
            .unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        let headers = contents
            .lines()
            .filter(|line| *line == "date,name,status")
            .count();
        assert_eq!(headers, 1);
        assert!(contents.lines().count() > 3);
    }

    #[test]
    fn individual_mark_appends_one_row() {
        let log = AttendanceLog::new(unique_log_path("individual"));
        log.mark_individual(date(), "Jane Doe", AttendanceStatus::Present)
            .unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("2025-09-01,Jane Doe,Present"));
    }
}
