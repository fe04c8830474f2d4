//! Constraint derivation and candidate filtering
//!
//! A [`ConstraintSet`] is rebuilt from the whole guess history every round.
//! It is never updated incrementally, so a letter that turns green after
//! being yellow (or gray) cannot leave stale entries behind.

use crate::core::{Guess, Tile, WORD_LENGTH, Word};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Knowledge implied by a guess history
///
/// - green: position → letters confirmed at that position
/// - yellow: letter → positions where it is present but misplaced, for
///   letters not yet green anywhere
/// - misplaced: every position a letter was reported yellow at; kept after
///   the letter turns green so a later guess never loosens the filter
/// - grey: letters confirmed absent (never a green or yellow letter)
/// - rejected: guessed words that did not solve the puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    green: FxHashMap<usize, FxHashSet<u8>>,
    yellow: FxHashMap<u8, FxHashSet<usize>>,
    misplaced: FxHashMap<u8, FxHashSet<usize>>,
    grey: FxHashSet<u8>,
    rejected: FxHashSet<Word>,
}

impl ConstraintSet {
    /// Derive the constraints implied by a full guess history
    ///
    /// Greens are collected first so that green supersedes yellow for a
    /// letter regardless of which guess reported it. Grey letters are added
    /// last and only when the letter is neither yellow nor green anywhere, so
    /// a gray duplicate (the second E of SPEED when the first is green) does
    /// not blacklist the letter. The result does not depend on guess order.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Guess;
    /// use wordle_ranker::solver::ConstraintSet;
    ///
    /// let history: Vec<Guess> = vec!["apple:G--GG".parse().unwrap()];
    /// let constraints = ConstraintSet::derive(&history);
    ///
    /// assert!(constraints.is_grey(b'p'));
    /// assert!(constraints.green_at(0).contains(&b'a'));
    /// ```
    #[must_use]
    pub fn derive(history: &[Guess]) -> Self {
        let mut constraints = Self::default();

        for guess in history {
            for (i, &tile) in guess.feedback.tiles().iter().enumerate() {
                if tile == Tile::Correct {
                    constraints
                        .green
                        .entry(i)
                        .or_default()
                        .insert(guess.word.char_at(i));
                }
            }
        }

        for guess in history {
            for (i, &tile) in guess.feedback.tiles().iter().enumerate() {
                let letter = guess.word.char_at(i);
                if tile == Tile::Present {
                    constraints.misplaced.entry(letter).or_default().insert(i);
                    if constraints.is_green_anywhere(letter) {
                        debug!(
                            "{}: not keeping yellow {} at {i}; already green",
                            guess.word,
                            char::from(letter)
                        );
                        continue;
                    }
                    constraints.yellow.entry(letter).or_default().insert(i);
                }
            }
        }

        for guess in history {
            for (i, &tile) in guess.feedback.tiles().iter().enumerate() {
                let letter = guess.word.char_at(i);
                if tile != Tile::Absent {
                    continue;
                }
                if constraints.yellow.contains_key(&letter) || constraints.is_green_anywhere(letter)
                {
                    debug!(
                        "{}: not adding grey {}; already known present",
                        guess.word,
                        char::from(letter)
                    );
                    continue;
                }
                constraints.grey.insert(letter);
            }

            if !guess.feedback.is_solved() {
                constraints.rejected.insert(guess.word.clone());
            }
        }

        debug!(
            "derived {} green positions, {} yellow letters, {} grey letters from {} guesses",
            constraints.green.len(),
            constraints.yellow.len(),
            constraints.grey.len(),
            history.len()
        );

        constraints
    }

    fn is_green_anywhere(&self, letter: u8) -> bool {
        self.green.values().any(|letters| letters.contains(&letter))
    }

    /// Letters confirmed correct at `position` (empty if unconstrained)
    #[must_use]
    pub fn green_at(&self, position: usize) -> FxHashSet<u8> {
        self.green.get(&position).cloned().unwrap_or_default()
    }

    /// Positions where `letter` is known to be misplaced, if it is yellow
    #[must_use]
    pub fn yellow_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.yellow.get(&letter)
    }

    #[must_use]
    pub fn is_grey(&self, letter: u8) -> bool {
        self.grey.contains(&letter)
    }

    /// Check if the history produced no constraints at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_empty()
            && self.misplaced.is_empty()
            && self.grey.is_empty()
            && self.rejected.is_empty()
    }

    /// Check whether `word` is consistent with every constraint
    ///
    /// Per position: a grey letter is only allowed where that exact letter is
    /// green, and a green position only admits its green letters. Every
    /// yellow letter must occur in the word, and no letter may sit where it
    /// was reported misplaced.
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        if self.rejected.contains(word) {
            return false;
        }

        for i in 0..WORD_LENGTH {
            let letter = word.char_at(i);
            let green = self.green.get(&i);

            if self.grey.contains(&letter) && !green.is_some_and(|g| g.contains(&letter)) {
                return false;
            }

            if green.is_some_and(|g| !g.contains(&letter)) {
                return false;
            }

            if self
                .misplaced
                .get(&letter)
                .is_some_and(|positions| positions.contains(&i))
            {
                return false;
            }
        }

        self.yellow.keys().all(|&letter| word.has_letter(letter))
    }

    /// Keep the words of `pool` that satisfy the constraints, in pool order
    #[must_use]
    pub fn filter<'a>(&self, pool: &'a [Word]) -> Vec<&'a Word> {
        pool.iter().filter(|word| self.allows(word)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::wordlists::loader::words_from_slice;

    fn guess(text: &str) -> Guess {
        text.parse().unwrap()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_history_allows_everything() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
        let constraints = ConstraintSet::derive(&[]);

        assert!(constraints.is_empty());
        assert_eq!(constraints.filter(&dictionary).len(), 4);
    }

    #[test]
    fn derive_records_each_colour() {
        let constraints = ConstraintSet::derive(&[guess("crane:GY--G")]);

        assert_eq!(constraints.green_at(0), FxHashSet::from_iter([b'c']));
        assert_eq!(constraints.green_at(4), FxHashSet::from_iter([b'e']));
        assert!(constraints.green_at(1).is_empty());
        assert_eq!(
            constraints.yellow_positions(b'r'),
            Some(&FxHashSet::from_iter([1]))
        );
        assert!(constraints.is_grey(b'a'));
        assert!(constraints.is_grey(b'n'));
        assert!(!constraints.is_grey(b'c'));
    }

    #[test]
    fn green_supersedes_yellow() {
        // R first misplaced at 1, later confirmed at 2
        let history = [guess("crane:-Y---"), guess("torus:--G--")];
        let constraints = ConstraintSet::derive(&history);

        assert!(constraints.yellow_positions(b'r').is_none());
        assert!(constraints.green_at(2).contains(&b'r'));

        // R is still known not to be at position 1
        assert!(!constraints.allows(&Word::new("brrrr").unwrap()));
        assert!(constraints.allows(&Word::new("birdy").unwrap()));
    }

    #[test]
    fn duplicate_letter_gray_is_not_blacklisted() {
        // SPEED against SPEND: the second E is gray but E is green elsewhere
        let history = [guess("speed:GGG-G")];
        let constraints = ConstraintSet::derive(&history);

        assert!(!constraints.is_grey(b'e'));
        let dictionary = words_from_slice(&["spend", "speed", "spied"]);
        assert_eq!(texts(&constraints.filter(&dictionary)), vec!["spend"]);
    }

    #[test]
    fn yellow_elsewhere_prevents_grey() {
        // The first guess greys T, the second shows it misplaced
        let history = [guess("tepee:-----"), guess("sheet:----Y")];
        let constraints = ConstraintSet::derive(&history);

        assert!(!constraints.is_grey(b't'));
        assert!(constraints.yellow_positions(b't').is_some());
    }

    #[test]
    fn grey_letter_allowed_only_at_its_green_position() {
        let mut constraints = ConstraintSet::default();
        constraints.green.entry(0).or_default().insert(b'a');
        constraints.grey.insert(b'a');

        assert!(constraints.allows(&Word::new("amble").unwrap()));
        assert!(!constraints.allows(&Word::new("llama").unwrap()));
    }

    #[test]
    fn yellow_letter_must_appear_elsewhere() {
        let constraints = ConstraintSet::derive(&[guess("lathe:Y----")]);

        assert!(constraints.allows(&Word::new("world").unwrap()));
        assert!(!constraints.allows(&Word::new("lucky").unwrap()));
        assert!(!constraints.allows(&Word::new("music").unwrap()));
    }

    #[test]
    fn filtering_apple_against_ankle() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
        let target = Word::new("ankle").unwrap();
        let history = [Guess::against(dictionary[0].clone(), &target)];

        assert_eq!(
            history[0].feedback,
            "G--GG".parse::<Feedback>().unwrap()
        );

        let pool = ConstraintSet::derive(&history).filter(&dictionary);
        assert_eq!(texts(&pool), vec!["angle", "ankle", "amble"]);
    }

    #[test]
    fn rejected_guess_is_excluded() {
        let dictionary = words_from_slice(&["spend", "speed"]);
        let constraints = ConstraintSet::derive(&[guess("speed:GGG-G")]);

        assert!(!constraints.allows(&dictionary[1]));

        let solved = ConstraintSet::derive(&[guess("speed:GGGGG")]);
        assert!(solved.allows(&dictionary[1]));
    }

    #[test]
    fn filtering_is_idempotent() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble", "about", "alarm"]);
        let constraints = ConstraintSet::derive(&[guess("apple:G---Y")]);

        let once: Vec<Word> = constraints.filter(&dictionary).into_iter().cloned().collect();
        let twice: Vec<Word> = constraints.filter(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn derivation_ignores_guess_order() {
        let a = guess("crane:-Y--G");
        let b = guess("torus:-GG--");
        let c = guess("speed:---YY");

        let forward = ConstraintSet::derive(&[a.clone(), b.clone(), c.clone()]);
        let backward = ConstraintSet::derive(&[c.clone(), b.clone(), a.clone()]);
        let shuffled = ConstraintSet::derive(&[b, c, a]);

        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }
}
