//! Sets of five five-letter words whose 25 letters are all distinct.
//!
//! Words are reduced to [`LetterKey`] bitsets, grouped by key in a
//! [`DictionaryIndex`], and the distinct keys are searched for pairwise
//! disjoint 5-combinations in parallel. Each accepted key combination is then
//! expanded back into every matching tuple of words.

pub mod expand;
pub mod index;
pub mod io;
pub mod key;
pub mod runtime;
pub mod search;
pub mod solve;

pub use expand::{expand, WordTuple};
pub use index::{CandidateList, DictionaryIndex, IndexStats};
pub use key::LetterKey;
pub use runtime::ThreadConfig;
pub use search::{KeyCombination, Strategy};
pub use solve::{canonical_order, solve, SolveConfig, Solutions};
