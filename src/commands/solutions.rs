//! Solutions command
//!
//! Finds every dictionary word a player could score with against a root word.

use crate::core::{RootWord, word_length};
use crate::error::WordError;
use crate::validation::{Dictionary, WordValidator};
use rustc_hash::FxHashMap;

/// Every acceptable word for a root, longest first
pub struct SolutionsResult {
    pub root_word: RootWord,
    pub words: Vec<String>,
    pub max_score: usize,
    /// Number of solutions per word length
    pub distribution: FxHashMap<usize, usize>,
}

/// List the words from `dictionary` that a fresh round on `root` accepts
///
/// # Errors
///
/// Returns `WordError` if `root` is not a valid root word.
pub fn find_solutions(root: &str, dictionary: &Dictionary) -> Result<SolutionsResult, WordError> {
    let root_word = RootWord::new(root)?;
    let validator = WordValidator::new(dictionary);

    let mut words: Vec<String> = dictionary
        .iter()
        .filter(|word| validator.validate(word, &root_word, &[]).is_accepted())
        .map(str::to_string)
        .collect();

    words.sort_by(|a, b| word_length(b).cmp(&word_length(a)).then_with(|| a.cmp(b)));

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for word in &words {
        *distribution.entry(word_length(word)).or_insert(0) += 1;
    }

    let max_score = distribution.iter().map(|(len, count)| len * count).sum();

    Ok(SolutionsResult {
        root_word,
        words,
        max_score,
        distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "stone", "tone", "note", "an", "astronomer", "moon", "xylophone", "roast", "onset",
        ])
    }

    #[test]
    fn finds_acceptable_words() {
        let result = find_solutions("astronomer", &dictionary()).unwrap();

        assert_eq!(
            result.words,
            vec!["onset", "roast", "stone", "moon", "note", "tone"]
        );
        assert_eq!(result.max_score, 5 * 3 + 4 * 3);
    }

    #[test]
    fn excludes_root_short_and_impossible_words() {
        let result = find_solutions("astronomer", &dictionary()).unwrap();

        assert!(!result.words.contains(&"astronomer".to_string()));
        assert!(!result.words.contains(&"an".to_string()));
        assert!(!result.words.contains(&"xylophone".to_string()));
    }

    #[test]
    fn distribution_counts_lengths() {
        let result = find_solutions("astronomer", &dictionary()).unwrap();

        assert_eq!(result.distribution.get(&5), Some(&3));
        assert_eq!(result.distribution.get(&4), Some(&3));
        assert_eq!(result.distribution.get(&9), None);
    }

    #[test]
    fn embedded_dictionary_has_solutions_for_silkworm() {
        let result = find_solutions("silkworm", &Dictionary::embedded()).unwrap();
        assert!(result.words.contains(&"milk".to_string()));
        assert!(result.words.contains(&"worm".to_string()));
        assert!(!result.words.contains(&"silkworm".to_string()));
    }

    #[test]
    fn invalid_root_returns_error() {
        assert!(find_solutions("", &dictionary()).is_err());
    }
}
