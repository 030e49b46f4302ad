use crate::models::{BoundaryMode, WordFrequencyConfig};

/// Marker text announcing the beginning of a Project Gutenberg book body.
pub const START_MARKER: &str = "START OF THIS PROJECT GUTENBERG EBOOK";

/// Marker text announcing the end of a Project Gutenberg book body.
pub const END_MARKER: &str = "END OF THIS PROJECT GUTENBERG EBOOK";

/// Number of top words reported per book when no count is given.
pub const DEFAULT_TOP_N: usize = 100;

/// File extension which causes a text source to be read through a gzip decoder.
pub const GZIP_EXTENSION: &str = "gz";

/// Column of a book manifest holding the path of each book.
pub const MANIFEST_PATH_COLUMN: &str = "path";

pub const DEFAULT_WORD_FREQUENCY_CONFIG: WordFrequencyConfig = WordFrequencyConfig {
    book_paths: Vec::new(),
    top_n: DEFAULT_TOP_N,
    boundary_mode: BoundaryMode::Legacy,
};
