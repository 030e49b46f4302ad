#![allow(unused)] // Ignore due to all constants not being utilized across all environemnts

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static SAMPLE_BOOK_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "sample_book.txt"));

pub static BOOK_MANIFEST_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "books.csv"));

pub const START_MARKER_LINE: &str =
    "*** START OF THIS PROJECT GUTENBERG EBOOK THE SAMPLE BOOK ***";

pub const END_MARKER_LINE: &str = "*** END OF THIS PROJECT GUTENBERG EBOOK THE SAMPLE BOOK ***";
