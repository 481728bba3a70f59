//! Round state and submission handling

use crate::core::{Rejection, RootWord, Verdict, normalize, word_length};
use crate::error::Result;
use crate::validation::{SpellChecker, WordValidator};
use crate::wordlists::WordSource;
use tracing::{debug, info, warn};

/// Result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty after normalization; nothing happened
    Ignored,
    /// The word was added to the front of the used words
    Accepted { word: String, score: usize },
    /// The word failed a check; state is unchanged
    Rejected(Rejection),
}

/// Owned copy of a round's state after the latest change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub root_word: RootWord,
    pub used_words: Vec<String>,
    pub score: usize,
}

/// One round of Word Scramble
///
/// Used words are kept most recent first, and the score always equals the
/// sum of their lengths.
#[derive(Debug, Clone)]
pub struct GameSession<S> {
    validator: WordValidator<S>,
    root_word: RootWord,
    used_words: Vec<String>,
    score: usize,
}

impl<S: SpellChecker> GameSession<S> {
    /// Create a session and start its first round from `source`
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the source cannot be reached or offers an
    /// unusable root word.
    pub fn new<W: WordSource>(checker: S, source: &W) -> Result<Self> {
        let mut session = Self::with_root(checker, RootWord::fallback());
        session.start_round(source)?;
        Ok(session)
    }

    /// Create a session whose first round uses a known root word
    #[must_use]
    pub fn with_root(checker: S, root_word: RootWord) -> Self {
        Self {
            validator: WordValidator::new(checker),
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Start a new round with a random root word from `source`
    ///
    /// Falls back to "silkworm" when the source has no words. On error the
    /// current round is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the source cannot be reached or offers an
    /// unusable root word.
    pub fn start_round<W: WordSource>(&mut self, source: &W) -> Result<()> {
        let root_word = match source.random_word()? {
            Some(word) => RootWord::new(word)?,
            None => {
                warn!("Word list is empty, using fallback root word");
                RootWord::fallback()
            }
        };

        self.restart_with(root_word);
        Ok(())
    }

    /// Start a new round with a known root word
    pub fn restart_with(&mut self, root_word: RootWord) {
        info!(root = root_word.text(), "Starting round");
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
    }

    /// Submit raw player input
    ///
    /// The input is lowercased and trimmed first. Only an accepted word
    /// changes the session.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, RootWord};
    /// use word_scramble::game::{GameSession, Submission};
    /// use word_scramble::validation::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["stone"]);
    /// let root = RootWord::new("astronomer").unwrap();
    /// let mut session = GameSession::with_root(dictionary, root);
    ///
    /// assert_eq!(
    ///     session.submit(" Stone "),
    ///     Submission::Accepted { word: "stone".to_string(), score: 5 }
    /// );
    /// assert_eq!(session.submit("stone"), Submission::Rejected(Rejection::AlreadyUsed));
    /// ```
    pub fn submit(&mut self, raw: &str) -> Submission {
        let candidate = normalize(raw);

        match self
            .validator
            .validate(&candidate, &self.root_word, &self.used_words)
        {
            Verdict::Ignored => Submission::Ignored,
            Verdict::Rejected(reason) => Submission::Rejected(reason),
            Verdict::Accepted => {
                self.score += word_length(&candidate);
                self.used_words.insert(0, candidate.clone());
                debug!(word = %candidate, score = self.score, "Accepted word");
                Submission::Accepted {
                    word: candidate,
                    score: self.score,
                }
            }
        }
    }

    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Owned copy of the current state for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            score: self.score,
        }
    }
}
