//! Formatting utilities for terminal output

use crate::core::{Rejection, RootWord};

/// Format a word length as a circled number badge
///
/// Lengths 1 to 20 use the Unicode circled digits; anything longer falls
/// back to parentheses.
#[must_use]
pub fn length_badge(length: usize) -> String {
    match length {
        1..=20 => char::from_u32(0x2460 + length as u32 - 1)
            .map_or_else(|| format!("({length})"), String::from),
        _ => format!("({length})"),
    }
}

/// Format a rejection as "Title: message"
#[must_use]
pub fn rejection_line(rejection: Rejection, root: &RootWord) -> String {
    format!("{}: {}", rejection.title(), rejection.message(root))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
