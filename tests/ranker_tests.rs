use gutenberg_word_frequency::{get_top_n_words, top_n_words, Error, FrequencyTable};
use proptest::prelude::*;
use std::collections::HashSet;
use test_utils::words;

#[cfg(test)]
mod top_n_words_tests {
    use super::*;

    #[test]
    fn test_frequency_order() {
        let ranked = get_top_n_words(&words(&["a", "a", "b", "a", "b"]), 2).unwrap();
        assert_eq!(ranked, words(&["a", "b"]));
    }

    #[test]
    fn test_ties_break_reverse_lexicographically() {
        let ranked = get_top_n_words(&words(&["b", "a"]), 2).unwrap();
        assert_eq!(ranked, words(&["b", "a"]));

        let ranked = get_top_n_words(&words(&["a", "c", "b"]), 3).unwrap();
        assert_eq!(ranked, words(&["c", "b", "a"]));
    }

    #[test]
    fn test_zero_returns_empty() {
        let ranked = get_top_n_words(&words(&["a", "b"]), 0).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_n_larger_than_distinct_returns_all() {
        let ranked = top_n_words(&words(&["x", "y", "x"]), 10);
        assert_eq!(ranked, words(&["x", "y"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(top_n_words(&[], 5).is_empty());
    }

    #[test]
    fn test_empty_word_is_ranked() {
        let ranked = top_n_words(&words(&["", "", "a"]), 2);
        assert_eq!(ranked, words(&["", "a"]));
    }

    #[test]
    fn test_negative_n_is_rejected() {
        let result = get_top_n_words(&words(&["a"]), -1);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}

fn word_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,2}", 0..60)
}

proptest! {
    #[test]
    fn prop_length_is_min_of_n_and_distinct(source in word_sequence(), n in 0usize..40) {
        let distinct: HashSet<&String> = source.iter().collect();
        let ranked = top_n_words(&source, n);

        prop_assert_eq!(ranked.len(), n.min(distinct.len()));
    }

    #[test]
    fn prop_result_has_no_duplicates(source in word_sequence(), n in 0usize..40) {
        let ranked = top_n_words(&source, n);
        let unique: HashSet<&String> = ranked.iter().collect();

        prop_assert_eq!(unique.len(), ranked.len());
    }

    #[test]
    fn prop_selected_words_outrank_the_rest(source in word_sequence(), n in 0usize..40) {
        let table = FrequencyTable::from_words(&source);
        let ranked = top_n_words(&source, n);
        let selected: HashSet<&str> = ranked.iter().map(String::as_str).collect();

        let lowest_selected = ranked.iter().map(|word| table.get(word)).min();
        let highest_rest = table
            .iter()
            .filter(|(word, _)| !selected.contains(word))
            .map(|(_, count)| count)
            .max();

        if let (Some(lowest), Some(highest)) = (lowest_selected, highest_rest) {
            prop_assert!(lowest >= highest);
        }
    }

    #[test]
    fn prop_counts_sum_to_sequence_length(source in word_sequence()) {
        let table = FrequencyTable::from_words(&source);
        let sum: usize = table.iter().map(|(_, count)| count).sum();

        prop_assert_eq!(sum, source.len());
        prop_assert_eq!(table.total_count(), source.len());
    }

    #[test]
    fn prop_checked_and_unchecked_agree(source in word_sequence(), n in 0i64..40) {
        let checked = get_top_n_words(&source, n).unwrap();
        prop_assert_eq!(checked, top_n_words(&source, n as usize));
    }
}
