//! Rejection kinds and their player-facing messages

use super::RootWord;
use std::fmt;

/// Why a candidate word was turned down
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The word was already accepted this round
    AlreadyUsed,
    /// The root word does not have the letters to spell it
    NotPossible,
    /// The spelling oracle does not recognize the word
    NotRealWord,
    /// Fewer than three characters
    TooShort,
    /// The word starts with the root word (including the root word itself)
    RootPrefix,
}

impl Rejection {
    /// Alert title shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotRealWord => "Word not recognized",
            Self::TooShort => "Too short",
            Self::RootPrefix => "Not allowed",
        }
    }

    /// Alert message shown to the player
    ///
    /// Only `NotPossible` mentions the root word.
    #[must_use]
    pub fn message(self, root: &RootWord) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotRealWord => "You can't just make them up, you know!".to_string(),
            Self::TooShort => "Word needs to be longer than 3 characters".to_string(),
            Self::RootPrefix => "Using the same word is not allowed".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of validating one normalized candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Empty input; nothing to report
    Ignored,
    /// Passed every check
    Accepted,
    /// Failed the first check listed in the rejection
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}
