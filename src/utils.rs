pub mod count_word_frequencies;
pub mod normalize_word;
pub mod open_text_source;
pub mod read_book_manifest;
pub mod sort_results;

pub use count_word_frequencies::count_word_frequencies;
pub use normalize_word::normalize_word;
pub use open_text_source::open_text_source;
pub use read_book_manifest::read_book_manifest;
pub use sort_results::sort_results;
