use flate2::write::GzEncoder;
use flate2::Compression;
use gutenberg_word_frequency::{
    get_top_n_words, get_word_list, get_word_list_with_mode, BoundaryMode, Error,
};
use std::io::Write;
use test_utils::constants::SAMPLE_BOOK_PATH;
use test_utils::{get_expected_words, gutenberg_text, test_file_path, words};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_book_legacy() {
        let word_list = get_word_list(&*SAMPLE_BOOK_PATH).unwrap();

        assert_eq!(word_list.len(), 123);
        assert_eq!(
            &word_list[..6],
            &words(&["the", "project", "gutenberg", "ebook", "of", "the"])[..]
        );

        let expected = get_expected_words(&test_file_path("sample_book_legacy_top.txt"));
        let top = get_top_n_words(&word_list, expected.len() as i64).unwrap();
        assert_eq!(top, expected);
    }

    #[test]
    fn test_sample_book_markers() {
        let word_list = get_word_list_with_mode(&*SAMPLE_BOOK_PATH, BoundaryMode::Markers).unwrap();

        assert_eq!(word_list.len(), 58);
        assert_eq!(&word_list[..3], &words(&["chapter", "i", "the"])[..]);
        assert!(word_list.contains(&"seabird".to_string()));
        assert!(!word_list.contains(&"license".to_string()));

        let expected = get_expected_words(&test_file_path("sample_book_markers_top.txt"));
        let top = get_top_n_words(&word_list, expected.len() as i64).unwrap();
        assert_eq!(top, expected);
    }

    #[test]
    fn test_gzip_source() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("book.txt.gz");

        let text = gutenberg_text(&["Header"], &["Gzipped body, gzipped!"], &[]);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let word_list = get_word_list_with_mode(&path, BoundaryMode::Markers).unwrap();
        assert_eq!(word_list, words(&["gzipped", "body", "gzipped"]));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = get_word_list(test_file_path("does_not_exist.txt"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_invalid_utf8_is_decoding_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"good line\nbad \xc3\x28 line\n").unwrap();

        match get_word_list(file.path()) {
            Err(Error::DecodingError { line_number, .. }) => assert_eq!(line_number, 2),
            other => panic!("expected decoding error, got {:?}", other),
        }
    }
}
