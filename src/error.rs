//! Error types
//!
//! Validation outcomes are plain values (see [`crate::core::Rejection`]); the
//! types here cover the failures a caller has to handle: unusable root
//! words and word lists that cannot be loaded.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid root words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Root word must not be empty")]
    Empty,

    #[error("Root word '{0}' must contain only letters")]
    InvalidCharacters(String),
}

/// Failure to obtain a word list (root words or dictionary)
#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list {0} contains no usable words")]
    Empty(String),

    #[error("Word list is unavailable: {0}")]
    Unavailable(String),
}

/// Failure to start a round
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Could not obtain a root word: {0}")]
    WordList(#[from] WordListError),

    #[error("Word list produced an unusable root word: {0}")]
    RootWord(#[from] WordError),
}

/// Result type for starting rounds
pub type Result<T> = std::result::Result<T, GameError>;
