//! Master roster loading from disk.

use std::fs::{self, File};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::RosterEntry;

use crate::error::{Result, StoreError};

/// Title-row spellings skipped when a roster CSV starts with a header.
const HEADER_CELLS: [&str; 4] = ["name", "student name", "student", "participant name"];

/// Load the master roster from disk.
///
/// `.json` files hold an array of display names; `.csv`/`.txt` files hold
/// one name per row in the first column, with an optional title row.
/// Entries keep their file order and are numbered from zero.
pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let names = match extension.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv" | "txt") => load_csv(path)?,
        _ => {
            return Err(StoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    if names.is_empty() {
        return Err(StoreError::EmptyRoster {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), entries = names.len(), "loaded master roster");
    Ok(RosterEntry::sequence(names))
}

fn load_json(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| StoreError::io(path, source))?;
    let names: Vec<String> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}

fn load_csv(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| StoreError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut names = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;
        let Some(first) = record.iter().next() else {
            continue;
        };
        let name = first.trim().trim_matches('\u{feff}');
        if name.is_empty() {
            continue;
        }
        if row == 0 && is_header_cell(name) {
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names)
}

fn is_header_cell(value: &str) -> bool {
    HEADER_CELLS
        .iter()
        .any(|header| header.eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unique_temp_file(name: &str, extension: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "attendance-reconciler-{}-{}-{}.{}",
            name,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos(),
            extension,
        ));
        dir
    }

    #[test]
    fn loads_csv_first_column_and_skips_title_row() {
        let path = unique_temp_file("roster", "csv");
        fs::write(&path, "Name,Group\nCharan,G4\nJane Doe,G2\n").unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], RosterEntry::new("Charan", 0));
        assert_eq!(roster[1], RosterEntry::new("Jane Doe", 1));
    }

    #[test]
    fn loads_json_name_array() {
        let path = unique_temp_file("roster", "json");
        fs::write(&path, r#"["Charan", "  Jane Doe  ", ""]"#).unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].name, "Jane Doe");
    }

    #[test]
    fn rejects_unknown_extensions() {
        let path = unique_temp_file("roster", "xlsx");
        fs::write(&path, "whatever").unwrap();
        assert!(matches!(
            load_roster(&path),
            Err(StoreError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn rejects_empty_rosters() {
        let path = unique_temp_file("roster", "csv");
        fs::write(&path, "\n\n").unwrap();
        assert!(matches!(
            load_roster(&path),
            Err(StoreError::EmptyRoster { .. })
        ));
    }
}
