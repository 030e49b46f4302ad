use crate::models::Error;
use crate::types::Word;
use std::path::PathBuf;

/// Word statistics for a single book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    /// Number of words in the book body, duplicates included.
    pub word_count: usize,
    pub distinct_word_count: usize,
    /// Most frequent words, most frequent first.
    pub top_words: Vec<Word>,
}

/// Outcome of analyzing one book of a batch.
#[derive(Debug)]
pub struct BookReport {
    pub path: PathBuf,
    pub result: Result<BookSummary, Error>,
}

impl BookReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
