use std::fs;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::{Duration, Utc};
use comfy_table::Table;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use roster_cli::logging::redact_value;
use roster_ingest::{extract_names_from_text, filter_artifacts, flatten_delimited};
use roster_match::{MasterIndex, MatchPolicy, normalize, reconcile};
use roster_model::{ReconciliationReport, RosterEntry};
use roster_store::{AttendanceLog, RosterCache, load_roster};

use crate::cli::{MarkArgs, ReconcileArgs, StudentsArgs};
use crate::summary::apply_table_style;
use crate::types::{ReconcileOutcome, RosterSource};

pub fn run_reconcile(args: &ReconcileArgs) -> Result<ReconcileOutcome> {
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let span = info_span!("reconcile", upload = %args.upload.display(), date = %date);
    let _guard = span.enter();

    // Stage 1: ingest the uploaded sheet.
    let ingest_span = info_span!("ingest");
    let uploaded = ingest_span.in_scope(|| -> Result<Vec<String>> {
        let names = if args.pdf_text {
            let text = fs::read_to_string(&args.upload)
                .with_context(|| format!("failed to read upload {}", args.upload.display()))?;
            extract_names_from_text(&text)
        } else {
            flatten_delimited(&args.upload)?
        };
        info!(candidates = names.len(), "ingested upload");
        Ok(names)
    })?;

    // Stage 2: materialize the master roster (cache first, then file).
    let (roster, roster_source) = resolve_roster(args)?;
    info!(entries = roster.len(), "loaded master roster");

    // Stage 3: match and classify.
    let policy = select_policy(args);
    let started = Instant::now();
    let report = reconcile(&uploaded, &roster, &policy);
    let elapsed = started.elapsed();
    let accuracy = report.accuracy(policy.high_confidence);
    info!(
        present = report.present.len(),
        absent = report.absentees.len(),
        unknown = report.unknowns.len(),
        accuracy,
        elapsed_ms = elapsed.as_millis() as u64,
        "reconciliation finished"
    );

    let display_unknowns = if args.keep_artifacts {
        report.unknowns.clone()
    } else {
        filter_artifacts(&report.unknowns)
    };

    // Stage 4: persistence, when asked for.
    let saved_rows = match &args.save_log {
        Some(path) => {
            let log = AttendanceLog::new(path);
            Some(log.append_bulk(date, &report)?)
        }
        None => None,
    };
    let report_path = match &args.json_report {
        Some(path) => {
            write_json_report(path, date, accuracy, &report)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(ReconcileOutcome {
        upload: args.upload.clone(),
        date,
        roster_source,
        roster_count: roster.len(),
        uploaded_count: uploaded.len(),
        policy,
        report,
        display_unknowns,
        accuracy,
        elapsed,
        saved_rows,
        report_path,
        copy_lists: args.copy_lists,
        show_details: args.details,
    })
}

pub fn run_students(args: &StudentsArgs) -> Result<()> {
    let roster = load_roster(&args.roster)
        .with_context(|| format!("failed to load roster {}", args.roster.display()))?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Name"]);
    apply_table_style(&mut table);
    for entry in &roster {
        table.add_row(vec![(entry.position + 1).to_string(), entry.name.clone()]);
    }
    println!("{table}");
    println!("{} students enrolled", roster.len());
    Ok(())
}

pub fn run_mark(args: &MarkArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    if let Some(roster_path) = &args.roster {
        let roster = load_roster(roster_path)
            .with_context(|| format!("failed to load roster {}", roster_path.display()))?;
        let index = MasterIndex::build(&roster);
        if !index.contains_key(&normalize(&args.name)) {
            warn!(
                name = redact_value(&args.name),
                "marking a name that is not on the master roster"
            );
        }
    }

    let log = AttendanceLog::new(&args.log);
    log.mark_individual(date, &args.name, args.status.into())?;
    println!(
        "Marked {} as {} for {}",
        args.name,
        roster_model::AttendanceStatus::from(args.status),
        date
    );
    Ok(())
}

fn select_policy(args: &ReconcileArgs) -> MatchPolicy {
    if args.strict {
        MatchPolicy::strict()
    } else if args.relaxed {
        MatchPolicy::relaxed()
    } else {
        MatchPolicy::default()
    }
}

/// Prefer a fresh cache; fall back to the roster file and refresh the cache
/// from it.
fn resolve_roster(args: &ReconcileArgs) -> Result<(Vec<RosterEntry>, RosterSource)> {
    if let Some(cache_dir) = &args.cache_dir {
        let cache = RosterCache::new(cache_dir);
        let max_age = Duration::minutes(args.cache_ttl_mins);
        if let Some(roster) = cache.load(max_age)? {
            debug!(dir = %cache_dir.display(), "using cached roster");
            return Ok((roster, RosterSource::Cache(cache_dir.clone())));
        }
        let Some(roster_path) = &args.roster else {
            bail!(
                "no fresh roster cache under {} and no --roster file given",
                cache_dir.display()
            );
        };
        let roster = load_roster(roster_path)
            .with_context(|| format!("failed to load roster {}", roster_path.display()))?;
        cache.store(&roster)?;
        return Ok((roster, RosterSource::File(roster_path.clone())));
    }

    let Some(roster_path) = &args.roster else {
        bail!("--roster is required unless --cache-dir holds a fresh cache");
    };
    let roster = load_roster(roster_path)
        .with_context(|| format!("failed to load roster {}", roster_path.display()))?;
    Ok((roster, RosterSource::File(roster_path.clone())))
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    date: String,
    accuracy: u8,
    #[serde(flatten)]
    report: &'a ReconciliationReport,
}

fn write_json_report(
    path: &std::path::Path,
    date: chrono::NaiveDate,
    accuracy: u8,
    report: &ReconciliationReport,
) -> Result<()> {
    let document = ReportDocument {
        date: date.format("%Y-%m-%d").to_string(),
        accuracy,
        report,
    };
    let bytes = serde_json::to_vec_pretty(&document).context("serialize reconciliation report")?;
    fs::write(path, bytes)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    info!(path = %path.display(), "wrote JSON report");
    Ok(())
}
