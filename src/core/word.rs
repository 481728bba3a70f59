//! Root word representation and candidate normalization

use crate::error::WordError;
use std::fmt;

/// Root word used when the word list has nothing to offer
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 3;

/// The word whose letters bound what a player may spell during a round
///
/// Always lowercase, non-empty and made of letters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

impl RootWord {
    /// Create a root word from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than letters.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("Silkworm").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("").is_err());
    /// assert!(RootWord::new("silk worm").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// The fallback root word, "silkworm"
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            text: DEFAULT_ROOT_WORD.to_string(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the root word
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        word_length(&self.text)
    }

    /// The root's letters as a mutable pool for derivability checks
    pub(crate) fn letter_pool(&self) -> Vec<char> {
        self.text.chars().collect()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Normalize raw player input: lowercase, surrounding whitespace trimmed
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Stone\n"), "stone");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word in characters
///
/// Scores and the minimum-length rule count characters, not bytes.
#[inline]
#[must_use]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_word_creation_valid() {
        let root = RootWord::new("astronomer").unwrap();
        assert_eq!(root.text(), "astronomer");
        assert_eq!(root.letter_count(), 10);
    }

    #[test]
    fn root_word_normalized() {
        let root = RootWord::new("  SilkWorm \n").unwrap();
        assert_eq!(root.text(), "silkworm");
    }

    #[test]
    fn root_word_rejects_empty() {
        assert_eq!(RootWord::new(""), Err(WordError::Empty));
        assert_eq!(RootWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn root_word_rejects_non_letters() {
        assert!(matches!(
            RootWord::new("silk worm"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(RootWord::new("silkw0rm").is_err()); // Digit
        assert!(RootWord::new("silk-worm").is_err()); // Punctuation
    }

    #[test]
    fn root_word_accepts_non_ascii_letters() {
        let root = RootWord::new("Café").unwrap();
        assert_eq!(root.text(), "café");
        assert_eq!(root.letter_count(), 4);
    }

    #[test]
    fn fallback_is_silkworm() {
        assert_eq!(RootWord::fallback().text(), DEFAULT_ROOT_WORD);
        assert_eq!(RootWord::fallback(), RootWord::new("silkworm").unwrap());
    }

    #[test]
    fn letter_pool_keeps_duplicates() {
        let root = RootWord::new("book").unwrap();
        assert_eq!(root.letter_pool(), vec!['b', 'o', 'o', 'k']);
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("Stone"), "stone");
        assert_eq!(normalize("\t stone  "), "stone");
        assert_eq!(normalize("st one"), "st one"); // Inner whitespace kept
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn word_length_counts_chars() {
        assert_eq!(word_length("stone"), 5);
        assert_eq!(word_length("café"), 4);
        assert_eq!(word_length(""), 0);
    }

    #[test]
    fn root_word_display() {
        let root = RootWord::new("silkworm").unwrap();
        assert_eq!(format!("{root}"), "silkworm");
    }
}
