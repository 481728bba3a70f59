//! Runtime configuration
//!
//! Resolves where the root words and the spelling dictionary come from.

use crate::error::WordListError;
use crate::validation::Dictionary;
use crate::wordlists::StartWords;
use std::path::PathBuf;
use tracing::info;

/// Where a word list is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// The list compiled into the binary
    Embedded,
    /// A file with one word per line
    File(PathBuf),
}

impl ListSource {
    /// Parse a command-line value
    ///
    /// `embedded_name` (and "embedded") select the built-in list; anything
    /// else is treated as a path.
    #[must_use]
    pub fn from_arg(value: &str, embedded_name: &str) -> Self {
        if value == embedded_name || value == "embedded" {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

/// Word list configuration for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub start_words: ListSource,
    pub dictionary: ListSource,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: ListSource::Embedded,
            dictionary: ListSource::Embedded,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(start_words: ListSource, dictionary: ListSource) -> Self {
        Self {
            start_words,
            dictionary,
        }
    }

    /// Load the root word pool
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if a configured file cannot be loaded.
    pub fn load_start_words(&self) -> Result<StartWords, WordListError> {
        match &self.start_words {
            ListSource::Embedded => {
                let words = StartWords::embedded();
                info!("Using {} embedded start words", words.len());
                Ok(words)
            }
            ListSource::File(path) => StartWords::from_file(path),
        }
    }

    /// Load the spelling dictionary
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if a configured file cannot be loaded.
    pub fn load_dictionary(&self) -> Result<Dictionary, WordListError> {
        match &self.dictionary {
            ListSource::Embedded => {
                let dictionary = Dictionary::embedded();
                info!("Using {} embedded dictionary words", dictionary.len());
                Ok(dictionary)
            }
            ListSource::File(path) => Dictionary::from_file(path),
        }
    }
}
