//! Per-letter feedback for a guess
//!
//! Each position of a guess is tagged with a [`Tile`]:
//! - Absent (gray): letter not in the word
//! - Present (yellow): letter in the word, wrong position
//! - Correct (green): letter in the correct position
//!
//! A [`Feedback`] holds one tile per position and a [`Guess`] pairs it with
//! the word that was played.

use super::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Letter not in the word (gray)
    #[default]
    Absent,
    /// Letter in the word, wrong position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

impl Tile {
    /// Cycle to the next state: Absent → Present → Correct → Absent
    ///
    /// Used by the interactive grid, where each click advances a tile.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `G`/`2`/🟩, `Y`/`1`/🟨 and `-`/`_`/`.`/`0`/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '2' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '0' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Plain-text symbol (`G`, `Y` or `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square for this tile
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for unparseable feedback or guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback must have exactly {expected} tiles, got {0}", expected = WORD_LENGTH)]
    WrongLength(usize),
    #[error("Unknown feedback symbol '{0}' (use G/Y/- or 🟩🟨⬜)")]
    UnknownSymbol(char),
    #[error("Guess must look like 'crane:GY--G', got '{0}'")]
    MalformedGuess(String),
    #[error(transparent)]
    InvalidWord(#[from] super::WordError),
}

/// Feedback tiles for a whole guess, aligned 1:1 with the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([Tile; WORD_LENGTH]);

impl Feedback {
    /// All greens (the guess was the answer)
    pub const SOLVED: Self = Self([Tile::Correct; WORD_LENGTH]);

    /// The tiles, one per position
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.0
    }

    /// The tile at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn tile(&self, position: usize) -> Tile {
        self.0[position]
    }

    /// Advance the tile at `position` to its next state
    pub fn cycle(&mut self, position: usize) {
        self.0[position] = self.0[position].next();
    }

    /// Check if every tile is green
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count the number of green tiles
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Correct).count()
    }

    /// Count the number of yellow tiles
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Present).count()
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's rules for duplicate letters: a letter is never
    /// reported more often than it remains unclaimed in the target.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green and consume that target letter
    /// 2. Second pass: for every other position, mark yellow and consume one
    ///    remaining instance if there is one, otherwise gray
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{Feedback, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let target = Word::new("ankle").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert_eq!(feedback.to_string(), "G--GG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut tiles = [Tile::Absent; WORD_LENGTH];
        let mut unclaimed: [Option<u8>; WORD_LENGTH] = (*target.chars()).map(Some);

        // Allow: Index needed to compare guess[i], target[i] and set tiles[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                tiles[i] = Tile::Correct;
                unclaimed[i] = None;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if tiles[i] == Tile::Correct {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(slot) = unclaimed.iter_mut().find(|slot| **slot == Some(letter)) {
                tiles[i] = Tile::Present;
                *slot = None;
            }
        }

        Self(tiles)
    }

    /// Render as emoji squares, e.g. "🟩⬜⬜🟩🟩"
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Feedback;
    ///
    /// let feedback: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse feedback like "GY-GY", "🟩🟨⬜🟩🟨" or "21021"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::WrongLength(symbols.len()));
        }

        let mut tiles = [Tile::Absent; WORD_LENGTH];
        for (tile, symbol) in tiles.iter_mut().zip(symbols) {
            *tile = Tile::from_symbol(symbol).ok_or(FeedbackError::UnknownSymbol(symbol))?;
        }
        Ok(Self(tiles))
    }
}

/// A played word together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    pub word: Word,
    pub feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// Play `word` against a known `target`
    #[must_use]
    pub fn against(word: Word, target: &Word) -> Self {
        let feedback = Feedback::calculate(&word, target);
        Self { word, feedback }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word, self.feedback)
    }
}

impl FromStr for Guess {
    type Err = FeedbackError;

    /// Parse a guess written as `word:feedback`, e.g. "crane:-Y--G"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, feedback) = s
            .split_once([':', '='])
            .ok_or_else(|| FeedbackError::MalformedGuess(s.to_string()))?;

        Ok(Self {
            word: Word::new(word.trim())?,
            feedback: feedback.parse()?,
        })
    }
}
