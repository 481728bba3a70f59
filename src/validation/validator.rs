//! Ordered candidate checks
//!
//! A candidate is accepted only if it passes every check below, in order.
//! The first failing check decides the rejection the player sees.

use super::spelling::{ENGLISH, SpellChecker};
use crate::core::{MIN_WORD_LENGTH, Rejection, RootWord, Verdict, word_length};
use tracing::debug;

/// Validates candidates against a root word, the words already used, and a
/// spelling oracle
///
/// Never mutates session state; the caller applies an accepted word.
#[derive(Debug, Clone)]
pub struct WordValidator<S> {
    checker: S,
}

impl<S: SpellChecker> WordValidator<S> {
    #[must_use]
    pub const fn new(checker: S) -> Self {
        Self { checker }
    }

    /// Run all checks on an already-normalized candidate
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, RootWord, Verdict};
    /// use word_scramble::validation::{Dictionary, WordValidator};
    ///
    /// let validator = WordValidator::new(Dictionary::from_words(["stone", "an"]));
    /// let root = RootWord::new("astronomer").unwrap();
    ///
    /// assert_eq!(validator.validate("stone", &root, &[]), Verdict::Accepted);
    /// assert_eq!(
    ///     validator.validate("an", &root, &[]),
    ///     Verdict::Rejected(Rejection::TooShort)
    /// );
    /// ```
    pub fn validate(&self, candidate: &str, root: &RootWord, used_words: &[String]) -> Verdict {
        let verdict = self.check(candidate, root, used_words);
        debug!(candidate, root = root.text(), ?verdict, "validated candidate");
        verdict
    }

    fn check(&self, candidate: &str, root: &RootWord, used_words: &[String]) -> Verdict {
        if candidate.is_empty() {
            return Verdict::Ignored;
        }

        if !is_original(candidate, used_words) {
            return Verdict::Rejected(Rejection::AlreadyUsed);
        }

        if !is_possible(candidate, root) {
            return Verdict::Rejected(Rejection::NotPossible);
        }

        if !self.is_real_word(candidate) {
            return Verdict::Rejected(Rejection::NotRealWord);
        }

        if !is_long_enough(candidate) {
            return Verdict::Rejected(Rejection::TooShort);
        }

        if is_root_derivative(candidate, root) {
            return Verdict::Rejected(Rejection::RootPrefix);
        }

        Verdict::Accepted
    }

    /// Ask the spelling oracle whether the word is real English
    pub fn is_real_word(&self, word: &str) -> bool {
        !self.checker.is_misspelled(word, ENGLISH)
    }
}

/// True if the word has not been accepted yet this round
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// True if the word can be spelled from the root's letters
///
/// Each letter of the root can be spent once per occurrence, so "book"
/// allows one 'b' and two 'o's. Order does not matter.
///
/// # Examples
/// ```
/// use word_scramble::core::RootWord;
/// use word_scramble::validation::is_possible;
///
/// let root = RootWord::new("book").unwrap();
/// assert!(is_possible("boo", &root));
/// assert!(!is_possible("bb", &root));
/// ```
#[must_use]
pub fn is_possible(word: &str, root: &RootWord) -> bool {
    let mut pool = root.letter_pool();

    for letter in word.chars() {
        match pool.iter().position(|&available| available == letter) {
            Some(index) => {
                pool.swap_remove(index);
            }
            None => return false,
        }
    }

    true
}

/// True if the word meets the minimum length
#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word_length(word) >= MIN_WORD_LENGTH
}

/// True if the word begins with the root word, which covers the root itself
#[must_use]
pub fn is_root_derivative(word: &str, root: &RootWord) -> bool {
    word.starts_with(root.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Dictionary;

    /// Oracle that knows every word
    struct Lenient;

    impl SpellChecker for Lenient {
        fn is_misspelled(&self, _word: &str, _language: &str) -> bool {
            false
        }
    }

    fn root(word: &str) -> RootWord {
        RootWord::new(word).unwrap()
    }

    fn validator() -> WordValidator<Dictionary> {
        WordValidator::new(Dictionary::from_words([
            "stone",
            "an",
            "astronomer",
            "astronomers",
            "moon",
            "boo",
            "to",
        ]))
    }

    #[test]
    fn empty_candidate_is_ignored() {
        let verdict = validator().validate("", &root("astronomer"), &[]);
        assert_eq!(verdict, Verdict::Ignored);
    }

    #[test]
    fn accepts_valid_word() {
        let verdict = validator().validate("stone", &root("astronomer"), &[]);
        assert_eq!(verdict, Verdict::Accepted);
    }

    #[test]
    fn rejects_used_word() {
        let used = vec!["stone".to_string()];
        let verdict = validator().validate("stone", &root("astronomer"), &used);
        assert_eq!(verdict, Verdict::Rejected(Rejection::AlreadyUsed));
    }

    #[test]
    fn rejects_impossible_word() {
        let verdict = validator().validate("xyz", &root("astronomer"), &[]);
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotPossible));
    }

    #[test]
    fn rejects_unknown_word() {
        // "roots" is derivable but absent from the test dictionary
        let verdict = validator().validate("roots", &root("astronomer"), &[]);
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotRealWord));
    }

    #[test]
    fn rejects_short_word() {
        let verdict = validator().validate("an", &root("astronomer"), &[]);
        assert_eq!(verdict, Verdict::Rejected(Rejection::TooShort));

        let verdict = validator().validate("to", &root("astronomer"), &[]);
        assert_eq!(verdict, Verdict::Rejected(Rejection::TooShort));
    }

    #[test]
    fn rejects_root_word_itself() {
        let verdict = validator().validate("astronomer", &root("astronomer"), &[]);
        assert_eq!(verdict, Verdict::Rejected(Rejection::RootPrefix));
    }

    #[test]
    fn root_word_is_rejected_for_any_root() {
        let lenient = WordValidator::new(Lenient);
        for word in ["silkworm", "astronomer", "cab", "book"] {
            assert_eq!(
                lenient.validate(word, &root(word), &[]),
                Verdict::Rejected(Rejection::RootPrefix),
                "root '{word}' submitted as its own candidate"
            );
        }
    }

    #[test]
    fn short_words_rejected_when_otherwise_valid() {
        let lenient = WordValidator::new(Lenient);
        let root = root("astronomer");
        for word in ["a", "an", "as", "to", "so", "or"] {
            assert_eq!(
                lenient.validate(word, &root, &[]),
                Verdict::Rejected(Rejection::TooShort)
            );
        }
    }

    #[test]
    fn checks_run_in_order() {
        let used = vec!["xyz".to_string()];
        // Used beats not possible
        assert_eq!(
            validator().validate("xyz", &root("astronomer"), &used),
            Verdict::Rejected(Rejection::AlreadyUsed)
        );
        // Not possible beats not real
        assert_eq!(
            validator().validate("qqq", &root("astronomer"), &[]),
            Verdict::Rejected(Rejection::NotPossible)
        );
        // Not real beats too short
        assert_eq!(
            validator().validate("ot", &root("astronomer"), &[]),
            Verdict::Rejected(Rejection::NotRealWord)
        );
    }

    #[test]
    fn is_possible_is_multiset_based() {
        assert!(!is_possible("bb", &root("book")));
        assert!(!is_possible("aabb", &root("ab")));
        assert!(is_possible("ba", &root("ab")));
        assert!(is_possible("koob", &root("book")));
        assert!(is_possible("", &root("book")));
    }

    #[test]
    fn is_possible_uses_repeated_letters() {
        let root = root("astronomer");
        assert!(is_possible("moon", &root)); // Two o's available
        assert!(is_possible("roar", &root)); // Two r's available
        assert!(!is_possible("rrr", &root)); // Only two r's
    }

    #[test]
    fn is_possible_rejects_non_letters() {
        let root = root("astronomer");
        assert!(!is_possible("st1ne", &root));
        assert!(!is_possible("st one", &root));
        assert!(!is_possible("stone!", &root));
    }

    #[test]
    fn is_original_checks_exact_match() {
        let used = vec!["stone".to_string(), "moon".to_string()];
        assert!(!is_original("stone", &used));
        assert!(is_original("stones", &used));
        assert!(is_original("stone", &[]));
    }

    #[test]
    fn is_long_enough_boundaries() {
        assert!(!is_long_enough("an"));
        assert!(is_long_enough("ant"));
        assert!(is_long_enough("stone"));
    }

    #[test]
    fn is_root_derivative_prefix_only() {
        let root = root("silk");
        assert!(is_root_derivative("silk", &root));
        assert!(is_root_derivative("silks", &root));
        assert!(!is_root_derivative("sil", &root));
        assert!(!is_root_derivative("milk", &root));
    }

    #[test]
    fn longer_root_derivative_fails_derivability_first() {
        let lenient = WordValidator::new(Lenient);
        // "astronomers" needs a second 's' that the root lacks
        assert_eq!(
            lenient.validate("astronomers", &root("astronomer"), &[]),
            Verdict::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn rejection_is_repeatable() {
        let validator = validator();
        let root = root("astronomer");
        let first = validator.validate("xyz", &root, &[]);
        let second = validator.validate("xyz", &root, &[]);
        assert_eq!(first, second);
    }
}
