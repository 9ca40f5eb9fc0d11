//! Formatting utilities for terminal output

use crate::core::Scores;

/// Circled number badge for a word length, like the list icons in the game
///
/// Lengths 1-20 use the Unicode circled digits; anything else falls back to
/// parentheses.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), |c| c.to_string()),
        _ => format!("({len})"),
    }
}

/// One-line summary of round and session scores
#[must_use]
pub fn score_line(scores: Scores) -> String {
    format!("Word score: {}  Session score: {}", scores.round, scores.session)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
