//! Root word providers
//!
//! A round starts by asking a `WordSource` for a random root word.

use super::ROOT_WORDS;
use super::loader::{load_from_file, root_words_from_slice};
use crate::core::RootWord;
use crate::error::WordListError;
use rand::prelude::IndexedRandom;
use std::path::Path;
use tracing::info;

/// Supplies root words for new rounds
pub trait WordSource {
    /// Pick a random root word
    ///
    /// Returns `Ok(None)` if the pool has nothing to offer.
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the pool cannot be reached at all.
    fn random_word(&self) -> Result<Option<String>, WordListError>;
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn random_word(&self) -> Result<Option<String>, WordListError> {
        (**self).random_word()
    }
}

/// A fixed pool of root words, sampled uniformly
#[derive(Debug, Clone, Default)]
pub struct StartWords {
    words: Vec<RootWord>,
}

impl StartWords {
    #[must_use]
    pub const fn new(words: Vec<RootWord>) -> Self {
        Self { words }
    }

    /// Root words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(root_words_from_slice(ROOT_WORDS))
    }

    /// Load root words from a file with one word per line
    ///
    /// Lines that are not valid root words are skipped.
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the file cannot be read or contains no
    /// usable root word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        info!("Loading start words from {}", path.display());

        let words = root_words_from_slice(&load_from_file(path)?);
        if words.is_empty() {
            return Err(WordListError::Empty(path.display().to_string()));
        }

        info!("Loaded {} start words", words.len());
        Ok(Self::new(words))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for StartWords {
    fn random_word(&self) -> Result<Option<String>, WordListError> {
        Ok(self
            .words
            .choose(&mut rand::rng())
            .map(|word| word.text().to_string()))
    }
}
