use crate::models::{BoundaryMode, ContentBoundary, Error};
use crate::types::Word;
use crate::utils::{normalize_word, open_text_source};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use std::path::Path;

// Runs of word characters and apostrophes
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w']+").unwrap());

/// Extracts normalized words from book text.
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer {
    pub boundary_mode: BoundaryMode,
}

impl Tokenizer {
    pub fn new(boundary_mode: BoundaryMode) -> Self {
        Self { boundary_mode }
    }

    /// Configuration reproducing the long-standing marker handling
    pub fn legacy() -> Self {
        Self::new(BoundaryMode::Legacy)
    }

    /// Configuration which only reads text between the Gutenberg markers
    pub fn markers() -> Self {
        Self::new(BoundaryMode::Markers)
    }

    /// Extracts and normalizes every token of a single line, ignoring boundaries.
    ///
    /// Empty words produced by normalization are kept.
    pub fn tokenize_line(self, line: &str) -> Vec<Word> {
        TOKEN_REGEX
            .find_iter(line)
            .map(|token| normalize_word(token.as_str()))
            .collect()
    }

    /// Reads `reader` to the end and returns the words of every content line,
    /// in source order.
    ///
    /// Lines must be valid UTF-8; the first invalid line aborts with
    /// `Error::DecodingError`.
    pub fn word_list_from_reader<R: BufRead>(self, mut reader: R) -> Result<Vec<Word>, Error> {
        let mut boundary = ContentBoundary::new(self.boundary_mode);
        let mut words = Vec::new();
        let mut buffer = Vec::new();
        let mut line_number = 0;
        let mut content_line_count = 0;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_number += 1;

            let line = std::str::from_utf8(&buffer).map_err(|err| Error::DecodingError {
                line_number,
                message: err.to_string(),
            })?;
            let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

            if boundary.accept_line(line) {
                content_line_count += 1;
                words.extend(self.tokenize_line(line));
            }
        }

        debug!(
            "Read {} line(s), {} in content ({} mode), {} word(s)",
            line_number,
            content_line_count,
            self.boundary_mode,
            words.len()
        );

        Ok(words)
    }

    /// Opens the book at `path` and returns its word list.
    ///
    /// The file is closed before this returns, on success and on error.
    pub fn word_list_from_path(self, path: &Path) -> Result<Vec<Word>, Error> {
        let reader = open_text_source(path)?;
        self.word_list_from_reader(reader)
    }
}
