//! Game rounds
//!
//! A `GameSession` owns one round's state and applies accepted words.

mod session;

pub use session::{GameSession, Snapshot, Submission};
