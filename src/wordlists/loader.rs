//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::RootWord;
use crate::error::WordListError;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty(path.display().to_string()));
    }

    Ok(words)
}

/// Convert a list of strings to root words, skipping invalid entries
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::root_words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = root_words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn root_words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<RootWord> {
    slice
        .iter()
        .filter_map(|word| RootWord::new(word).ok())
        .collect()
}
