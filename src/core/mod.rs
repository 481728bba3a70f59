//! Core domain types for Word Scramble
//!
//! Pure value types with no I/O: the root word of a round, candidate
//! normalization, and the rejection kinds a submission can produce.

mod rejection;
mod word;

pub use rejection::{Rejection, Verdict};
pub use word::{DEFAULT_ROOT_WORD, MIN_WORD_LENGTH, RootWord, normalize, word_length};
