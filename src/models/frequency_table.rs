use crate::types::{Word, WordFrequency, WordFrequencyMap, WordRef};
use crate::utils::{count_word_frequencies, sort_results};

/// Occurrence counts of the words in a word sequence.
///
/// The table is built once from a word sequence and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    frequencies: WordFrequencyMap,
    total_count: usize,
}

impl FrequencyTable {
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            frequencies: count_word_frequencies(words),
            total_count: words.len(),
        }
    }

    /// Number of occurrences of `word`; zero when it never appeared.
    pub fn get(&self, word: &WordRef) -> WordFrequency {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum of all counts, equal to the length of the source word sequence.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WordRef, WordFrequency)> {
        self.frequencies
            .iter()
            .map(|(word, frequency)| (word.as_str(), *frequency))
    }

    /// All `(word, count)` pairs ordered by count, then word, both descending.
    pub fn sorted_entries(&self) -> Vec<(Word, WordFrequency)> {
        sort_results(&self.frequencies)
    }

    /// The `n` most frequent words, most frequent first.
    ///
    /// Returns every distinct word when `n` exceeds `len()`.
    pub fn top_n(&self, n: usize) -> Vec<Word> {
        if n == 0 {
            return Vec::new();
        }

        self.sorted_entries()
            .into_iter()
            .take(n)
            .map(|(word, _)| word)
            .collect()
    }
}
