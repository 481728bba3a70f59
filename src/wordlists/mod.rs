//! Word lists for Word Scramble
//!
//! Root words and the spelling dictionary are embedded in the binary; both
//! can be replaced by files at runtime.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use source::{StartWords, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_words_count_matches_const() {
        assert_eq!(ROOT_WORDS.len(), ROOT_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn root_words_are_valid() {
        for &word in ROOT_WORDS {
            assert!(!word.is_empty(), "Empty root word in list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_lowercase() {
        for &word in &DICTIONARY[..50] {
            // Just check the first 50 for speed
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn root_words_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for root in ["silkworm", "astronomer"] {
            assert!(ROOT_WORDS.contains(&root));
            assert!(
                dictionary.contains(&root),
                "Root word '{root}' not in dictionary"
            );
        }
    }
}
