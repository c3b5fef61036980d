use std::fmt::{self, Debug, Display, Formatter};

/// Letters in the alphabet. Keys never set a bit at or above this.
pub const ALPHABET_LEN: u32 = 26;
/// Length of a qualifying word.
pub const WORD_LEN: usize = 5;
/// Words per solution.
pub const TUPLE_LEN: usize = 5;
/// Distinct letters covered by a full solution.
pub const COVERED_LETTERS: u32 = (WORD_LEN * TUPLE_LEN) as u32;

/// One bit per letter as bitset.
///
/// Bit `i` is set iff the word contains letter `'a' + i` at least once, so
/// anagrams (and respellings with the same letters) share a key.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterKey(u32);

impl LetterKey {
    pub const EMPTY: LetterKey = LetterKey(0);

    /// Encodes `word`, which must consist of lowercase ASCII letters.
    pub fn from_word(word: &str) -> Self {
        let mut mask = 0u32;
        for c in word.bytes() {
            let letter_idx = c.wrapping_sub(b'a') as u32;
            debug_assert!(letter_idx < ALPHABET_LEN, "{word:?} is not lowercase ascii");
            mask |= 1 << letter_idx;
        }
        LetterKey(mask)
    }

    /// The key of `word` if it is a candidate: exactly [`WORD_LEN`] letters,
    /// none repeated.
    pub fn qualifying(word: &str) -> Option<Self> {
        if word.len() != WORD_LEN {
            return None;
        }
        let key = Self::from_word(word);
        (key.letter_count() == WORD_LEN as u32).then_some(key)
    }

    pub fn from_bits(bits: u32) -> Self {
        debug_assert!(bits >> ALPHABET_LEN == 0);
        LetterKey(bits)
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn letter_count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_disjoint(self, other: LetterKey) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    pub fn union(self, other: LetterKey) -> LetterKey {
        LetterKey(self.0 | other.0)
    }

    pub fn contains(self, letter: u8) -> bool {
        let idx = letter.wrapping_sub(b'a') as u32;
        idx < ALPHABET_LEN && self.0 & (1 << idx) != 0
    }

    /// Letters in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = char> {
        let mut t = self.0;
        std::iter::from_fn(move || {
            if t == 0 {
                return None;
            }
            let digit = t.trailing_zeros();
            t &= t - 1;
            Some((b'a' + digit as u8) as char)
        })
    }
}

impl Display for LetterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.letters() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Debug for LetterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LetterKey({self})")
    }
}
