use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width};

use roster_model::{MatchMethod, MatchResult};

use crate::types::{ReconcileOutcome, RosterSource};

pub fn print_summary(outcome: &ReconcileOutcome) {
    println!(
        "Upload: {} ({} candidate names)",
        outcome.upload.display(),
        outcome.uploaded_count
    );
    match &outcome.roster_source {
        RosterSource::File(path) => println!("Roster: {} ({} students)", path.display(), outcome.roster_count),
        RosterSource::Cache(dir) => println!(
            "Roster: cached under {} ({} students)",
            dir.display(),
            outcome.roster_count
        ),
    }
    println!("Date: {}", outcome.date);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Present"),
        header_cell("Absent"),
        header_cell("Unknown"),
        header_cell("Processed"),
        header_cell("Accuracy"),
        header_cell("Elapsed"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 0..6 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    table.add_row(vec![
        count_cell(outcome.report.present.len(), Color::Green),
        count_cell(outcome.report.absentees.len(), Color::Red),
        count_cell(outcome.report.unknowns.len(), Color::Yellow),
        Cell::new(outcome.report.total_processed),
        accuracy_cell(outcome.accuracy),
        Cell::new(format!("{}ms", outcome.elapsed.as_millis())),
    ]);
    println!("{table}");

    if let Some(rows) = outcome.saved_rows {
        println!("Attendance log: {rows} rows appended");
    }
    if let Some(path) = &outcome.report_path {
        println!("JSON report: {}", path.display());
    }

    if outcome.copy_lists {
        print_copy_lists(outcome);
    }
    if !outcome.display_unknowns.is_empty() {
        print_unknowns(outcome);
    }
    if outcome.show_details {
        print_details(&outcome.report.match_details, outcome.policy.high_confidence);
    }
}

/// Numbered paste-ready lists, matching what the classroom group chat
/// expects.
fn print_copy_lists(outcome: &ReconcileOutcome) {
    println!();
    println!("Attended:");
    if outcome.report.present.is_empty() {
        println!("  (none)");
    }
    for (index, name) in outcome.report.present.iter().enumerate() {
        println!("{}. {name}", index + 1);
    }
    println!();
    println!("Not attended:");
    if outcome.report.absentees.is_empty() {
        println!("  (none)");
    }
    for (index, name) in outcome.report.absentees.iter().enumerate() {
        println!("{}. {name}", index + 1);
    }
}

fn print_unknowns(outcome: &ReconcileOutcome) {
    println!();
    println!("Unknown ({}):", outcome.display_unknowns.len());
    for name in &outcome.display_unknowns {
        println!("- {name}");
    }
    let hidden = outcome.report.unknowns.len() - outcome.display_unknowns.len();
    if hidden > 0 {
        println!("({hidden} export artifacts hidden, --keep-artifacts shows them)");
    }
}

fn print_details(details: &[MatchResult], high_confidence: f64) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Matched"),
        header_cell("Confidence"),
        header_cell("Method"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for detail in details {
        table.add_row(vec![
            Cell::new(detail.input.clone()),
            Cell::new(
                detail
                    .matched
                    .as_ref()
                    .map_or("-".to_string(), |entry| entry.name.clone()),
            ),
            confidence_cell(detail.confidence, high_confidence),
            method_cell(detail.method),
        ]);
    }
    println!();
    println!("Match details:");
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn accuracy_cell(accuracy: u8) -> Cell {
    let cell = Cell::new(format!("{accuracy}%"));
    if accuracy >= 80 {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Yellow)
    }
}

fn confidence_cell(confidence: f64, high_confidence: f64) -> Cell {
    let cell = Cell::new(format!("{:.0}%", confidence * 100.0));
    if confidence > high_confidence {
        cell.fg(Color::Green)
    } else if confidence > 0.0 {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::Red)
    }
}

fn method_cell(method: MatchMethod) -> Cell {
    match method {
        MatchMethod::Exact => Cell::new("exact").fg(Color::Green),
        MatchMethod::Fuzzy => Cell::new("fuzzy").fg(Color::Yellow),
        MatchMethod::Unknown => Cell::new("unknown").fg(Color::Red),
    }
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ColumnConstraint::LowerBoundary(Width::Fixed(11)),
        ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
    ]);
}
