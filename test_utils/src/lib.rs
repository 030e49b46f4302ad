pub mod constants;

use constants::{END_MARKER_LINE, START_MARKER_LINE};
use std::path::{Path, PathBuf};

/// Resolves a file name inside the shared test files directory.
pub fn test_file_path(file_name: &str) -> PathBuf {
    constants::TEST_FILES_DIRECTORY.join(file_name)
}

/// Builds the text of a Gutenberg-style book with the given header, body and
/// license lines, wrapped in the usual `***` marker lines.
pub fn gutenberg_text(header: &[&str], body: &[&str], license: &[&str]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    lines.extend_from_slice(header);
    lines.push(START_MARKER_LINE);
    lines.extend_from_slice(body);
    lines.push(END_MARKER_LINE);
    lines.extend_from_slice(license);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Converts string literals into owned words.
pub fn words(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|word| word.to_string()).collect()
}

/// Helper function to get the expected top words from a text file.
///
/// Lines starting with `EXPECTED:` hold one expected word each, in rank order.
pub fn get_expected_words(file_path: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(file_path).expect("Failed to read expectation file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("EXPECTED:")
                .map(|word| word.trim().to_string())
        })
        .collect()
}
