//! Flattening of delimited attendance uploads.
//!
//! Attendance sheets arrive with arbitrary shapes (one name per row, grids
//! exported from meeting tools, stray metadata columns). The upload contract
//! is simply "a flat sequence of candidate name strings", so every non-empty
//! cell is taken in row-major order. Duplicate removal is the reconciler's
//! job, not the ingest layer's.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

fn clean_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Flatten every non-empty trimmed cell of a delimited file, in row-major
/// order. Rows may have ragged lengths; no header row is assumed.
pub fn flatten_delimited(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open upload {}", path.display()))?;
    let names = flatten_delimited_reader(file)
        .with_context(|| format!("failed to parse upload {}", path.display()))?;
    debug!(path = %path.display(), cells = names.len(), "flattened delimited upload");
    Ok(names)
}

/// Reader-based variant of [`flatten_delimited`].
pub fn flatten_delimited_reader<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut names = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("malformed delimited record")?;
        for cell in record.iter() {
            let value = clean_cell(cell);
            if !value.is_empty() {
                names.push(value.to_string());
            }
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_rows_in_order_and_drops_blanks() {
        let data = "Charan,John Smith\n,Jane Doe\n  ,\n";
        let names = flatten_delimited_reader(data.as_bytes()).unwrap();
        assert_eq!(names, vec!["Charan", "John Smith", "Jane Doe"]);
    }

    #[test]
    fn keeps_duplicates_for_downstream_dedup() {
        let data = "Charan\nCharan\n";
        let names = flatten_delimited_reader(data.as_bytes()).unwrap();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn trims_cells_and_byte_order_marks() {
        let data = "\u{feff}Charan ,  John Smith\n";
        let names = flatten_delimited_reader(data.as_bytes()).unwrap();
        assert_eq!(names, vec!["Charan", "John Smith"]);
    }

    #[test]
    fn tolerates_ragged_rows() {
        let data = "a,b,c\nd\ne,f\n";
        let names = flatten_delimited_reader(data.as_bytes()).unwrap();
        assert_eq!(names, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let names = flatten_delimited_reader("".as_bytes()).unwrap();
        assert!(names.is_empty());
    }
}
