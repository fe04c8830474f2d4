//! Core domain types for Wordle
//!
//! Words, per-letter feedback and guesses. Everything here is pure and has no
//! notion of a dictionary or a solving session.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Guess, Tile};
pub use word::{WORD_LENGTH, Word, WordError};
