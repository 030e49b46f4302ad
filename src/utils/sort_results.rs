use crate::types::{Word, WordFrequency, WordFrequencyMap};

/// Sorts a mapping of words to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in
///   descending lexicographical order, so `"b"` comes before `"a"`.
///
/// Both keys are descending, which keeps the ordering identical to reports
/// produced by sorting `(count, word)` pairs in reverse.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use gutenberg_word_frequency::sort_results;
///
/// let mut results = HashMap::new();
/// results.insert("whale".to_string(), 10);
/// results.insert("sea".to_string(), 15);
/// results.insert("ahab".to_string(), 10);
///
/// let sorted = sort_results(&results);
/// assert_eq!(sorted, vec![
///     ("sea".to_string(), 15),
///     ("whale".to_string(), 10),
///     ("ahab".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(results: &WordFrequencyMap) -> Vec<(Word, WordFrequency)> {
    let mut sorted_results: Vec<(Word, WordFrequency)> = results
        .iter()
        .map(|(word, frequency)| (word.to_owned(), *frequency))
        .collect();

    sorted_results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| b.0.cmp(&a.0)) // Secondary sort by word (descending)
    });

    sorted_results
}
