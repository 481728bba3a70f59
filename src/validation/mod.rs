//! Word validation
//!
//! The ordered gameplay checks and the spelling oracle they consult.

pub mod spelling;
mod validator;

pub use spelling::{Dictionary, ENGLISH, SpellChecker};
pub use validator::{
    WordValidator, is_long_enough, is_original, is_possible, is_root_derivative,
};
