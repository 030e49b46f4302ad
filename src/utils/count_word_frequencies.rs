use crate::types::{Word, WordFrequencyMap};

/// Counts the frequency of words in the given sequence.
///
/// # Arguments
/// * `words` - A slice of words to analyze.
///
/// # Returns
/// * A `WordFrequencyMap` where the keys are words and the values are their
///   respective frequencies. The counts sum to `words.len()`.
pub fn count_word_frequencies(words: &[Word]) -> WordFrequencyMap {
    let mut frequencies = WordFrequencyMap::new();

    for word in words {
        *frequencies.entry(word.clone()).or_insert(0) += 1;
    }

    frequencies
}
