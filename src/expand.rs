use itertools::iproduct;

use crate::index::DictionaryIndex;
use crate::key::TUPLE_LEN;
use crate::search::KeyCombination;

/// Five concrete words, one per key of a combination.
pub type WordTuple<'a> = [&'a str; TUPLE_LEN];

/// Gather word solutions from a key combination.
///
/// Yields the cartesian product of the words behind each key, so a key with
/// several anagrams multiplies the number of tuples.
///
/// # Panics
///
/// If a key of `combination` is not a candidate of `index`.
pub fn expand(
    index: &DictionaryIndex,
    combination: KeyCombination,
) -> impl Iterator<Item = WordTuple<'_>> + '_ {
    let [k1, k2, k3, k4, k5] = combination.map(|k| index.words(k));
    iproduct!(
        k1.iter().map(String::as_str),
        k2.iter().map(String::as_str),
        k3.iter().map(String::as_str),
        k4.iter().map(String::as_str),
        k5.iter().map(String::as_str)
    )
    .map(|(w1, w2, w3, w4, w5)| [w1, w2, w3, w4, w5])
}

/// Number of tuples [`expand`] yields for `combination`.
pub fn expanded_len(index: &DictionaryIndex, combination: KeyCombination) -> usize {
    combination.iter().map(|&k| index.words(k).len()).product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::LetterKey;
    use itertools::Itertools;

    fn combination(words: [&str; 5]) -> KeyCombination {
        words.map(LetterKey::from_word)
    }

    #[test]
    fn one_word_per_key() {
        let index = DictionaryIndex::build(["fjord", "gucks", "nymph", "vibex", "waltz"]);
        let tuples = expand(&index, combination(["fjord", "gucks", "nymph", "vibex", "waltz"]))
            .collect_vec();
        assert_eq!(tuples, [["fjord", "gucks", "nymph", "vibex", "waltz"]]);
    }

    #[test]
    fn anagrams_fan_out() {
        let index = DictionaryIndex::build([
            "abcde", "edcba", "fghij", "klmno", "onmlk", "lkmno", "pqrst", "uvwxy",
        ]);
        let combo = combination(["abcde", "fghij", "klmno", "pqrst", "uvwxy"]);
        let tuples = expand(&index, combo).collect_vec();
        assert_eq!(tuples.len(), 2 * 3);
        assert_eq!(expanded_len(&index, combo), 6);
        assert!(tuples.iter().all_unique());
        for t in &tuples {
            assert!(["abcde", "edcba"].contains(&t[0]));
            assert!(["klmno", "onmlk", "lkmno"].contains(&t[2]));
            assert_eq!(t[1], "fghij");
        }
    }

    #[test]
    #[should_panic]
    fn foreign_key_panics() {
        let index = DictionaryIndex::build(["abcde", "fghij", "klmno", "pqrst"]);
        let _ = expand(&index, combination(["abcde", "fghij", "klmno", "pqrst", "uvwxy"]));
    }
}
