use std::collections::HashMap;
use std::ops::Deref;

use itertools::Itertools;

use crate::key::LetterKey;

/// The distinct qualifying keys in a fixed order.
///
/// The search only ever walks strictly increasing index tuples over this
/// list, so the order decides scheduling but never which combinations are
/// found. Keys are kept ascending, which also makes the list deterministic
/// across runs regardless of input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList(Vec<LetterKey>);

impl CandidateList {
    pub fn new(keys: impl IntoIterator<Item = LetterKey>) -> Self {
        CandidateList(keys.into_iter().sorted().dedup().collect())
    }

    pub fn as_slice(&self) -> &[LetterKey] {
        &self.0
    }
}

impl Deref for CandidateList {
    type Target = [LetterKey];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub words_read: usize,
    pub qualifying_words: usize,
    pub distinct_keys: usize,
}

/// Qualifying words grouped by letter key.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    words_by_key: HashMap<LetterKey, Vec<String>>,
    candidates: CandidateList,
    stats: IndexStats,
}

impl DictionaryIndex {
    /// Keeps every word of [`WORD_LEN`](crate::key::WORD_LEN) distinct
    /// letters and drops the rest. Words sharing a key stay in input order,
    /// repeated spellings included.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut words_by_key: HashMap<LetterKey, Vec<String>> = HashMap::new();
        let mut stats = IndexStats::default();

        for word in words {
            let word = word.into();
            stats.words_read += 1;
            if let Some(key) = LetterKey::qualifying(&word) {
                stats.qualifying_words += 1;
                words_by_key.entry(key).or_default().push(word);
            }
        }

        let candidates = CandidateList::new(words_by_key.keys().copied());
        stats.distinct_keys = candidates.len();

        DictionaryIndex {
            words_by_key,
            candidates,
            stats,
        }
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    /// Words that produced `key`.
    ///
    /// # Panics
    ///
    /// If `key` was not built into this index. Keys taken from
    /// [`candidates`](Self::candidates) are always present.
    pub fn words(&self, key: LetterKey) -> &[String] {
        match self.words_by_key.get(&key) {
            Some(words) => words,
            None => panic!("key {key:?} is not a candidate of this index"),
        }
    }
}
