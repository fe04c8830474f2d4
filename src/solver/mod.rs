//! Constraint tracking, ranking and self-play
//!
//! - [`ConstraintSet`] turns a guess history into green/yellow/grey knowledge
//!   and filters the dictionary with it
//! - [`FrequencyTable`] scores words by positional letter frequency
//! - [`Engine`] is one solving session tying the two together

mod constraints;
mod engine;
mod ranking;
mod self_play;

pub use constraints::ConstraintSet;
pub use engine::{Engine, ranked_words};
pub use ranking::{FrequencyTable, RankedWord, rank};
pub use self_play::{DEFAULT_MAX_ATTEMPTS, Playthrough, SolveOutcome, Turn};
