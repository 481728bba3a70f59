//! Spelling oracle
//!
//! Defines the `SpellChecker` trait the validator consults for the
//! real-word check, and a word-set implementation backed by a dictionary.

use crate::error::WordListError;
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::load_from_file;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::info;

/// Language tag passed to the spelling oracle
pub const ENGLISH: &str = "en";

/// A source of truth for whether a word is spelled correctly
pub trait SpellChecker {
    /// Return true if `word` is not a recognized word in `language`
    fn is_misspelled(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        (**self).is_misspelled(word, language)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        (**self).is_misspelled(word, language)
    }
}

/// English dictionary held as a set of lowercase words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validation::{Dictionary, SpellChecker, ENGLISH};
    ///
    /// let dictionary = Dictionary::from_words(["stone", "Notes"]);
    /// assert!(!dictionary.is_misspelled("notes", ENGLISH));
    /// assert!(dictionary.is_misspelled("stoen", ENGLISH));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the file cannot be read or holds no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        info!("Loading dictionary from {}", path.display());

        let dictionary = Self::from_words(load_from_file(path)?);

        info!("Loaded {} words from dictionary", dictionary.len());
        Ok(dictionary)
    }

    /// Check whether the dictionary contains a word (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl SpellChecker for Dictionary {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        // Only English words are known; nothing else can be vouched for
        language != ENGLISH || !self.contains(word)
    }
}
