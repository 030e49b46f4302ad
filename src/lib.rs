#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod constants;
pub use constants::{
    DEFAULT_TOP_N, DEFAULT_WORD_FREQUENCY_CONFIG, END_MARKER, START_MARKER,
};
pub mod models;
pub use models::{
    BookReport, BookSummary, BoundaryMode, ContentBoundary, Error, FrequencyTable,
    MarkerScanState, Tokenizer, WordFrequencyConfig,
};
pub mod types;
pub use types::{Word, WordFrequency, WordFrequencyMap, WordRef};
mod utils;
pub use utils::{count_word_frequencies, normalize_word, read_book_manifest, sort_results};

use log::{error, info};
use std::path::Path;

/// Reads the Project Gutenberg book at `path` and returns its words.
///
/// Words are lowercased with punctuation and whitespace stripped, in the order
/// they appear. Uses `BoundaryMode::Legacy` for locating the book body.
pub fn get_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, Error> {
    get_word_list_with_mode(path, BoundaryMode::Legacy)
}

pub fn get_word_list_with_mode<P: AsRef<Path>>(
    path: P,
    boundary_mode: BoundaryMode,
) -> Result<Vec<Word>, Error> {
    Tokenizer::new(boundary_mode).word_list_from_path(path.as_ref())
}

/// Returns the `n` most frequently occurring words, most frequent first.
///
/// Ties are broken by reverse lexicographic order. A negative `n` is rejected
/// with `Error::InvalidArgument`.
pub fn get_top_n_words(words: &[Word], n: i64) -> Result<Vec<Word>, Error> {
    let n = usize::try_from(n).map_err(|_| {
        Error::InvalidArgument(format!("word count must be non-negative, got {}", n))
    })?;

    Ok(top_n_words(words, n))
}

pub fn top_n_words(words: &[Word], n: usize) -> Vec<Word> {
    FrequencyTable::from_words(words).top_n(n)
}

/// Reads one book and computes its word statistics.
pub fn analyze_book<P: AsRef<Path>>(
    path: P,
    top_n: usize,
    boundary_mode: BoundaryMode,
) -> Result<BookSummary, Error> {
    let words = get_word_list_with_mode(path, boundary_mode)?;
    let frequency_table = FrequencyTable::from_words(&words);

    Ok(BookSummary {
        word_count: words.len(),
        distinct_word_count: frequency_table.len(),
        top_words: frequency_table.top_n(top_n),
    })
}

/// Analyzes every book listed in `config`.
///
/// A failing book does not stop the batch: its error is logged and kept in the
/// returned report, and the next book is processed.
pub fn run(config: &WordFrequencyConfig) -> Vec<BookReport> {
    config
        .book_paths
        .iter()
        .map(|path| {
            info!("Processing {}", path.display());

            let result = analyze_book(path, config.top_n, config.boundary_mode);
            match &result {
                Ok(summary) => info!(
                    "{}: {} words, {} distinct",
                    path.display(),
                    summary.word_count,
                    summary.distinct_word_count
                ),
                Err(err) => error!("Error processing {}: {}", path.display(), err),
            }

            BookReport {
                path: path.clone(),
                result,
            }
        })
        .collect()
}
