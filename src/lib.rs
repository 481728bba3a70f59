//! Word Scramble
//!
//! A word game: spell as many words as you can from the letters of a root word.
//! Words must be real, new this round, at least three letters long, and must not
//! simply start with the root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, RootWord};
//! use word_scramble::game::{GameSession, Submission};
//! use word_scramble::validation::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["stone", "an"]);
//! let root = RootWord::new("astronomer").unwrap();
//! let mut session = GameSession::with_root(dictionary, root);
//!
//! assert!(matches!(session.submit("stone"), Submission::Accepted { score: 5, .. }));
//! assert_eq!(session.submit("an"), Submission::Rejected(Rejection::TooShort));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Candidate validation and the spelling oracle
pub mod validation;

// Round state
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{GameError, WordError, WordListError};
