//! Word solving command
//!
//! Solves a specific target word by self-play and returns the solution path.

use crate::core::Word;
use crate::solver::{DEFAULT_MAX_ATTEMPTS, Engine, SolveOutcome, Turn};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_attempts: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub target: Word,
    pub turns: Vec<Turn>,
    pub outcome: SolveOutcome,
    pub max_attempts: usize,
}

/// Solve a specific word against `dictionary`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not in the dictionary, so self-play could never find it
pub fn solve_word(config: SolveConfig, dictionary: &[Word]) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    if !dictionary.contains(&target) {
        bail!("Target '{target}' is not in the word list");
    }

    let mut engine = Engine::new(dictionary);
    let game = engine.play(&target, config.max_attempts);

    Ok(SolveResult {
        target,
        turns: game.turns,
        outcome: game.outcome,
        max_attempts: config.max_attempts,
    })
}
