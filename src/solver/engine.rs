//! Solving session: guess history, candidate pool and ranking

use super::constraints::ConstraintSet;
use super::ranking::{RankedWord, rank};
use crate::core::{Guess, Word};
use log::{debug, warn};

/// Rank the words of `dictionary` that are consistent with `history`
///
/// The full dictionary is filtered every time, so the result only depends on
/// the history and never on earlier calls. An empty result means the
/// constraints eliminated every word.
#[must_use]
pub fn ranked_words<'a>(dictionary: &'a [Word], history: &[Guess]) -> Vec<RankedWord<'a>> {
    let pool = ConstraintSet::derive(history).filter(dictionary);
    debug!(
        "{} of {} words consistent with {} guesses",
        pool.len(),
        dictionary.len(),
        history.len()
    );
    rank(&pool)
}

/// A single solving session over a dictionary
///
/// Owns its guess history; the dictionary is borrowed read-only, so many
/// sessions can share one word list across threads.
#[derive(Debug, Clone)]
pub struct Engine<'a> {
    dictionary: &'a [Word],
    history: Vec<Guess>,
    ranked: Vec<RankedWord<'a>>,
}

impl<'a> Engine<'a> {
    /// Start a session with the whole dictionary as candidate pool
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            history: Vec::new(),
            ranked: ranked_words(dictionary, &[]),
        }
    }

    /// Forget all guesses and restore the full dictionary as the pool
    pub fn reset(&mut self) {
        self.history.clear();
        self.refresh();
    }

    /// Record a guess and re-rank the pool
    pub fn record(&mut self, guess: Guess) {
        debug!("recording {guess}");
        self.history.push(guess);
        self.refresh();
    }

    /// Remove the most recent guess, if any, and re-rank the pool
    pub fn undo(&mut self) -> Option<Guess> {
        let guess = self.history.pop()?;
        self.refresh();
        Some(guess)
    }

    fn refresh(&mut self) {
        self.ranked = ranked_words(self.dictionary, &self.history);
        if self.ranked.is_empty() {
            warn!(
                "no candidates remain after {} guesses; feedback may be inconsistent",
                self.history.len()
            );
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Current candidates, best first
    #[must_use]
    pub fn ranked(&self) -> &[RankedWord<'a>] {
        &self.ranked
    }

    /// The best-ranked candidate, or `None` when the pool is exhausted
    #[must_use]
    pub fn best(&self) -> Option<RankedWord<'a>> {
        self.ranked.first().copied()
    }

    /// Up to `count` best candidates
    #[must_use]
    pub fn top(&self, count: usize) -> &[RankedWord<'a>] {
        &self.ranked[..count.min(self.ranked.len())]
    }

    /// Number of words still consistent with the history
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.ranked.len()
    }

    /// Check if the constraints eliminated every word
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup_dictionary() -> Vec<Word> {
        words_from_slice(&["apple", "angle", "ankle", "amble", "crane", "slate"])
    }

    #[test]
    fn new_session_ranks_whole_dictionary() {
        let dictionary = setup_dictionary();
        let engine = Engine::new(&dictionary);

        assert_eq!(engine.pool_size(), dictionary.len());
        assert!(engine.history().is_empty());
        assert!(engine.best().is_some());
    }

    #[test]
    fn record_narrows_pool() {
        let dictionary = setup_dictionary();
        let mut engine = Engine::new(&dictionary);

        let target = Word::new("ankle").unwrap();
        engine.record(Guess::against(Word::new("apple").unwrap(), &target));

        let pool: Vec<&str> = engine.ranked().iter().map(|r| r.word.text()).collect();
        assert!(pool.contains(&"ankle"));
        assert!(!pool.contains(&"apple"));
        assert!(!pool.contains(&"crane"));
        assert_eq!(engine.pool_size(), 3);
    }

    #[test]
    fn reset_restores_dictionary() {
        let dictionary = setup_dictionary();
        let mut engine = Engine::new(&dictionary);
        let fresh: Vec<RankedWord> = engine.ranked().to_vec();

        engine.record("crane:-----".parse().unwrap());
        assert!(engine.pool_size() < dictionary.len());

        engine.reset();
        assert!(engine.history().is_empty());
        assert_eq!(engine.ranked(), fresh.as_slice());
    }

    #[test]
    fn undo_reverts_last_guess() {
        let dictionary = setup_dictionary();
        let mut engine = Engine::new(&dictionary);

        assert!(engine.undo().is_none());

        engine.record("crane:-----".parse().unwrap());
        let undone = engine.undo().unwrap();
        assert_eq!(undone.word.text(), "crane");
        assert_eq!(engine.pool_size(), dictionary.len());
    }

    #[test]
    fn contradictory_feedback_exhausts_pool() {
        let dictionary = setup_dictionary();
        let mut engine = Engine::new(&dictionary);

        engine.record("zzzzz:GGGGG".parse().unwrap());

        assert!(engine.is_exhausted());
        assert!(engine.best().is_none());
        assert!(engine.top(3).is_empty());
    }

    #[test]
    fn top_is_clamped_to_pool() {
        let dictionary = setup_dictionary();
        let engine = Engine::new(&dictionary);

        assert_eq!(engine.top(3).len(), 3);
        assert_eq!(engine.top(100).len(), dictionary.len());
    }

    #[test]
    fn ranked_words_matches_session() {
        let dictionary = setup_dictionary();
        let history: Vec<Guess> = vec!["slate:Y---G".parse().unwrap()];

        let mut engine = Engine::new(&dictionary);
        engine.record(history[0].clone());

        assert_eq!(ranked_words(&dictionary, &history), engine.ranked());
    }

    #[test]
    fn longer_history_never_grows_pool() {
        let dictionary = setup_dictionary();
        let target = Word::new("amble").unwrap();
        let history: Vec<Guess> = ["crane", "slate", "apple"]
            .iter()
            .map(|w| Guess::against(Word::new(*w).unwrap(), &target))
            .collect();

        let sizes: Vec<usize> = (0..=history.len())
            .map(|n| ranked_words(&dictionary, &history[..n]).len())
            .collect();
        assert!(sizes.windows(2).all(|w| w[1] <= w[0]), "{sizes:?}");
    }
}
