use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// A normalized token: lowercased, with ASCII punctuation and whitespace removed.
///
/// A word may be empty when normalization strips every character of its token
/// (e.g. a lone apostrophe). Empty words are kept and counted like any other.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. This is used when ownership is not required.
pub type WordRef = str;

/// Represents the total number of occurrences of a word within a word sequence.
pub type WordFrequency = usize;

/// Represents a map of words to their occurrence counts.
/// The key is the `Word`, and the value is the `WordFrequency`.
pub type WordFrequencyMap = HashMap<Word, WordFrequency>;

/// A 1-based line number within a text source.
pub type LineNumber = usize;
