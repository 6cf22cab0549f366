//! CLI argument definitions for the attendance reconciler.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_model::AttendanceStatus;
use roster_store::DEFAULT_MAX_AGE_MINUTES;

#[derive(Parser)]
#[command(
    name = "attendance-reconciler",
    version,
    about = "Attendance Reconciler - Match uploaded attendance sheets against a master roster",
    long_about = "Reconcile an uploaded attendance sheet (CSV export or PDF-extracted text)\n\
                  against the master roster of enrolled students.\n\
                  Classifies every name as present, absent, or unknown and can append\n\
                  the outcome to an attendance log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow student names in log output (names are redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile an uploaded attendance sheet against the master roster.
    Reconcile(ReconcileArgs),

    /// List the master roster.
    Students(StudentsArgs),

    /// Mark a single student present or absent for a date.
    Mark(MarkArgs),
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Path to the uploaded attendance sheet.
    #[arg(value_name = "UPLOAD")]
    pub upload: PathBuf,

    /// Master roster file (.csv, .txt, or .json). Optional when a fresh
    /// cache exists under --cache-dir.
    #[arg(long = "roster", value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Treat the upload as PDF-extracted text instead of a delimited file.
    #[arg(long = "pdf-text")]
    pub pdf_text: bool,

    /// Directory for the local roster cache.
    #[arg(long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Cache freshness window in minutes.
    #[arg(
        long = "cache-ttl-mins",
        value_name = "MINUTES",
        default_value_t = DEFAULT_MAX_AGE_MINUTES
    )]
    pub cache_ttl_mins: i64,

    /// Tighter matching thresholds for rosters with many similar names.
    #[arg(long = "strict", conflicts_with = "relaxed")]
    pub strict: bool,

    /// Relaxed matching thresholds for noisy uploads.
    #[arg(long = "relaxed")]
    pub relaxed: bool,

    /// Attendance date (defaults to today).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Append the outcome to this attendance log.
    #[arg(long = "save-log", value_name = "PATH")]
    pub save_log: Option<PathBuf>,

    /// Write the full reconciliation report as JSON.
    #[arg(long = "json-report", value_name = "PATH")]
    pub json_report: Option<PathBuf>,

    /// Print numbered present/absent lists ready for pasting.
    #[arg(long = "copy-lists")]
    pub copy_lists: bool,

    /// Print the per-name match detail table.
    #[arg(long = "details")]
    pub details: bool,

    /// Keep meeting-export noise (times, headers, codes) in the unknown list.
    #[arg(long = "keep-artifacts")]
    pub keep_artifacts: bool,
}

#[derive(Parser)]
pub struct StudentsArgs {
    /// Master roster file (.csv, .txt, or .json).
    #[arg(long = "roster", value_name = "PATH")]
    pub roster: PathBuf,
}

#[derive(Parser)]
pub struct MarkArgs {
    /// Student display name as enrolled.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Attendance status to record.
    #[arg(long = "status", value_enum)]
    pub status: StatusArg,

    /// Attendance log to append to.
    #[arg(long = "log", value_name = "PATH")]
    pub log: PathBuf,

    /// Master roster used to verify enrollment before marking.
    #[arg(long = "roster", value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Attendance date (defaults to today).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Present,
    Absent,
}

impl From<StatusArg> for AttendanceStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Present => Self::Present,
            StatusArg::Absent => Self::Absent,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
