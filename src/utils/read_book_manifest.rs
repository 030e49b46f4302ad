use crate::constants::MANIFEST_PATH_COLUMN;
use crate::models::Error;
use csv::ReaderBuilder;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Reads a CSV manifest listing the books to analyze.
///
/// The manifest must have a header row containing a `path` column; any other
/// columns (e.g. `title`) are ignored. Relative paths are resolved against the
/// directory containing the manifest. Rows with an empty path are skipped.
pub fn read_book_manifest(manifest_path: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(manifest_path)?;

    let path_column = reader
        .headers()?
        .iter()
        .position(|header| header.eq_ignore_ascii_case(MANIFEST_PATH_COLUMN))
        .ok_or_else(|| {
            Error::ManifestError(format!(
                "{} has no '{}' column",
                manifest_path.display(),
                MANIFEST_PATH_COLUMN
            ))
        })?;

    let base_directory = manifest_path.parent().unwrap_or_else(|| Path::new(""));

    let mut book_paths = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;

        match record.get(path_column) {
            Some(path) if !path.is_empty() => {
                book_paths.push(base_directory.join(path));
            }
            _ => {
                // Header is row 1
                warn!(
                    "Skipping manifest row {} without a path: {:?}",
                    row_index + 2,
                    record
                );
            }
        }
    }

    debug!(
        "Read {} book path(s) from {}",
        book_paths.len(),
        manifest_path.display()
    );

    Ok(book_paths)
}
