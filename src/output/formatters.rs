//! Formatting utilities for terminal output

use crate::core::{Guess, Tile, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile, e.g. " A " on green
#[must_use]
pub fn colored_tile(letter: u8, tile: Tile) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match tile {
        Tile::Correct => text.black().on_green().bold(),
        Tile::Present => text.black().on_yellow().bold(),
        Tile::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    (0..WORD_LENGTH)
        .map(|i| colored_tile(guess.word.char_at(i), guess.feedback.tile(i)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).max(0.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a candidate score as a bar relative to a perfect word
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    create_progress_bar(score, WORD_LENGTH as f64, width)
}
