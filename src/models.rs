pub mod boundary_mode;
pub use boundary_mode::{BoundaryMode, ContentBoundary, MarkerScanState};

pub mod book_report;
pub use book_report::{BookReport, BookSummary};

pub mod error;
pub use error::Error;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod word_frequency_config;
pub use word_frequency_config::WordFrequencyConfig;
