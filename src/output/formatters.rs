//! Formatting utilities for terminal output

use crate::solver::Ladder;
use colored::Colorize;

/// Position of the single letter that differs between two words
///
/// Returns `None` unless the words are adjacent.
#[must_use]
pub fn changed_position(previous: &str, current: &str) -> Option<usize> {
    if previous.len() != current.len() {
        return None;
    }

    let mut differing = previous
        .bytes()
        .zip(current.bytes())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i);

    match (differing.next(), differing.next()) {
        (Some(position), None) => Some(position),
        _ => None,
    }
}

/// Render a word with the letter at `position` highlighted
#[must_use]
pub fn highlight_letter(word: &str, position: Option<usize>) -> String {
    word.char_indices()
        .map(|(i, c)| {
            if Some(i) == position {
                c.to_string().bright_yellow().bold().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Render a ladder on one line, highlighting the letter changed at each step
#[must_use]
pub fn format_ladder(ladder: &Ladder) -> String {
    let words = ladder.words();
    let arrow = format!(" {} ", "→".bright_black());

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let position = i
                .checked_sub(1)
                .and_then(|prev| changed_position(&words[prev], word));
            highlight_letter(word, position)
        })
        .collect::<Vec<_>>()
        .join(&arrow)
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
