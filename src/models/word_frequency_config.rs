use crate::models::BoundaryMode;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequencyConfig {
    /// Books to analyze, processed in order.
    pub book_paths: Vec<PathBuf>,
    /// Number of top words reported per book.
    pub top_n: usize,
    pub boundary_mode: BoundaryMode,
}
