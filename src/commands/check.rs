//! Word checking command
//!
//! Plays a list of words against a fixed root word and records each verdict.

use crate::core::RootWord;
use crate::error::WordError;
use crate::game::{GameSession, Submission};
use crate::validation::SpellChecker;

/// Result of checking a list of words
pub struct CheckResult {
    pub root_word: RootWord,
    pub steps: Vec<CheckStep>,
    pub score: usize,
}

/// A single submitted word and its outcome
pub struct CheckStep {
    pub input: String,
    pub submission: Submission,
}

impl CheckResult {
    /// Number of accepted words
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.submission, Submission::Accepted { .. }))
            .count()
    }
}

/// Submit `words` in order to a fresh round on `root`
///
/// # Errors
///
/// Returns `WordError` if `root` is not a valid root word.
pub fn check_words<S, I, T>(root: &str, words: I, checker: S) -> Result<CheckResult, WordError>
where
    S: SpellChecker,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let root_word = RootWord::new(root)?;
    let mut session = GameSession::with_root(checker, root_word.clone());

    let steps = words
        .into_iter()
        .map(|word| CheckStep {
            input: word.as_ref().to_string(),
            submission: session.submit(word.as_ref()),
        })
        .collect();

    Ok(CheckResult {
        root_word,
        steps,
        score: session.score(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::validation::Dictionary;

    #[test]
    fn check_records_each_step() {
        let dictionary = Dictionary::from_words(["stone", "an", "astronomer"]);
        let result = check_words(
            "astronomer",
            ["stone", "stone", "xyz", "an", "astronomer"],
            &dictionary,
        )
        .unwrap();

        let outcomes: Vec<_> = result.steps.iter().map(|s| &s.submission).collect();
        assert_eq!(
            outcomes,
            [
                &Submission::Accepted {
                    word: "stone".to_string(),
                    score: 5
                },
                &Submission::Rejected(Rejection::AlreadyUsed),
                &Submission::Rejected(Rejection::NotPossible),
                &Submission::Rejected(Rejection::TooShort),
                &Submission::Rejected(Rejection::RootPrefix),
            ]
        );
        assert_eq!(result.score, 5);
        assert_eq!(result.accepted_count(), 1);
    }

    #[test]
    fn embedded_dictionary_accepts_everyday_words() {
        let words = ["roots", "tenor", "rats", "mare", "manor", "ransom", "stone"];
        let result = check_words("astronomer", words, &Dictionary::embedded()).unwrap();

        assert_eq!(result.accepted_count(), words.len());
        assert_eq!(result.score, 5 + 5 + 4 + 4 + 5 + 6 + 5);
    }

    #[test]
    fn check_keeps_raw_input() {
        let dictionary = Dictionary::from_words(["stone"]);
        let result = check_words("astronomer", [" Stone "], &dictionary).unwrap();
        assert_eq!(result.steps[0].input, " Stone ");
    }

    #[test]
    fn check_invalid_root_returns_error() {
        let dictionary = Dictionary::default();
        let result = check_words("not a root", ["stone"], &dictionary);
        assert!(result.is_err());
    }

    #[test]
    fn check_without_words() {
        let dictionary = Dictionary::default();
        let words: [&str; 0] = [];
        let result = check_words("silkworm", words, &dictionary).unwrap();
        assert!(result.steps.is_empty());
        assert_eq!(result.score, 0);
    }
}
