//! Self-play: solve a known target by always guessing the top candidate
//!
//! Each turn asks the engine for its best-ranked word, scores it against the
//! target with [`Feedback::calculate`], and records the result. The loop ends
//! on a match, on an exhausted pool, or when the attempt budget runs out.

use super::engine::Engine;
use crate::core::{Feedback, Guess, Word};
use log::debug;

/// Attempt budget of a standard game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Terminal result of a self-play game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Target found; carries the number of guesses used
    Solved(usize),
    /// Budget exhausted or no candidate left
    Unsolved,
}

impl SolveOutcome {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Number of guesses, if solved
    #[must_use]
    pub const fn attempts(self) -> Option<usize> {
        match self {
            Self::Solved(n) => Some(n),
            Self::Unsolved => None,
        }
    }
}

/// One turn of a self-play game
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Every turn of a game plus how it ended
#[derive(Debug, Clone, PartialEq)]
pub struct Playthrough {
    pub turns: Vec<Turn>,
    pub outcome: SolveOutcome,
}

impl Engine<'_> {
    /// Play a full game against `target`, recording each turn
    ///
    /// The session is reset first, so the game always starts from the full
    /// dictionary. Never makes more than `max_attempts` guesses.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Word;
    /// use wordle_ranker::solver::{Engine, SolveOutcome};
    /// use wordle_ranker::wordlists::loader::words_from_slice;
    ///
    /// let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
    /// let mut engine = Engine::new(&dictionary);
    ///
    /// let game = engine.play(&Word::new("ankle").unwrap(), 6);
    /// assert!(game.outcome.is_solved());
    /// assert_eq!(game.turns.last().unwrap().guess.text(), "ankle");
    /// ```
    pub fn play(&mut self, target: &Word, max_attempts: usize) -> Playthrough {
        self.reset();
        let mut turns = Vec::new();

        while turns.len() < max_attempts {
            let Some(best) = self.best() else {
                debug!("{target}: pool exhausted after {} guesses", turns.len());
                return Playthrough {
                    turns,
                    outcome: SolveOutcome::Unsolved,
                };
            };

            let candidates_before = self.pool_size();
            let guess = Guess::against(best.word.clone(), target);
            let solved = guess.word == *target;
            let feedback = guess.feedback;

            debug!(
                "{target}: turn {} guesses {} ({:.3}) -> {feedback}",
                turns.len() + 1,
                guess.word,
                best.score
            );

            turns.push(Turn {
                guess: guess.word.clone(),
                feedback,
                score: best.score,
                candidates_before,
                candidates_after: 0,
            });
            self.record(guess);

            if let Some(turn) = turns.last_mut() {
                turn.candidates_after = self.pool_size();
            }

            if solved {
                let attempts = turns.len();
                return Playthrough {
                    turns,
                    outcome: SolveOutcome::Solved(attempts),
                };
            }
        }

        debug!("{target}: budget of {max_attempts} guesses exhausted");
        Playthrough {
            turns,
            outcome: SolveOutcome::Unsolved,
        }
    }

    /// Solve `target` and report only the outcome
    pub fn solve(&mut self, target: &Word, max_attempts: usize) -> SolveOutcome {
        self.play(target, max_attempts).outcome
    }
}
