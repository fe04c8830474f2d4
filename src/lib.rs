//! Wordle Ranker
//!
//! A Wordle solver that narrows a word list with the constraints implied by
//! letter feedback and ranks the survivors by positional letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranker::core::{Feedback, Guess, Word};
//! use wordle_ranker::solver::Engine;
//! use wordle_ranker::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
//! let target = Word::new("ankle").unwrap();
//!
//! // Feedback for playing "apple" against "ankle"
//! let guess = Guess::against(Word::new("apple").unwrap(), &target);
//! assert_eq!(guess.feedback.to_string(), "G--GG");
//!
//! let mut engine = Engine::new(&dictionary);
//! engine.record(guess);
//! let best = engine.best().unwrap();
//! println!("Next guess: {} ({:.2})", best.word, best.score);
//!
//! // Or let the engine play against a known target
//! assert!(engine.solve(&target, 6).is_solved());
//! ```

// Core domain types
pub mod core;

// Constraint engine, ranking and self-play
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
