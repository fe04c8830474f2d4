//! Positional letter-frequency ranking
//!
//! Scores are relative to the current candidate pool: the most common letter
//! at each position is worth 1.0 and every other letter a fraction of that.

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

const ALPHABET_SIZE: usize = 26;

/// Per-position normalized letter frequencies over a candidate pool
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    positions: [[f64; ALPHABET_SIZE]; WORD_LENGTH],
}

impl FrequencyTable {
    /// Count letters per position and divide by each position's maximum count
    ///
    /// An empty pool yields an all-zero table.
    #[must_use]
    pub fn compute<'w, I>(pool: I) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut counts = [[0u32; ALPHABET_SIZE]; WORD_LENGTH];
        for word in pool {
            for (position, &letter) in word.chars().iter().enumerate() {
                counts[position][letter_index(letter)] += 1;
            }
        }

        let mut positions = [[0.0; ALPHABET_SIZE]; WORD_LENGTH];
        for (frequencies, counts) in positions.iter_mut().zip(&counts) {
            let divisor = counts.iter().copied().max().filter(|&m| m > 0).unwrap_or(1);
            for (frequency, &count) in frequencies.iter_mut().zip(counts) {
                *frequency = f64::from(count) / f64::from(divisor);
            }
        }

        Self { positions }
    }

    /// Normalized frequency of `letter` at `position` (0.0 if never seen)
    #[inline]
    #[must_use]
    pub fn frequency(&self, position: usize, letter: u8) -> f64 {
        self.positions[position][letter_index(letter)]
    }

    /// Score a word against this table
    ///
    /// Sums the positional frequency of every letter. Each repeat of a letter
    /// already seen costs 1.0, but still earns its own frequency.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Word;
    /// use wordle_ranker::solver::FrequencyTable;
    ///
    /// let pool = [Word::new("angle").unwrap(), Word::new("ankle").unwrap()];
    /// let table = FrequencyTable::compute(&pool);
    ///
    /// // Every letter of ANGLE is the most common one at its position
    /// assert_eq!(table.score(&pool[0]), 5.0);
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        let mut score = 0.0;
        let mut seen = FxHashSet::default();

        for (position, &letter) in word.chars().iter().enumerate() {
            if !seen.insert(letter) {
                score -= 1.0;
            }
            score += self.frequency(position, letter);
        }

        score
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// A candidate together with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Score every word of `pool` and sort best-first
///
/// Frequencies are computed over `pool` itself. The sort is stable, so words
/// with equal scores keep their pool (dictionary) order.
#[must_use]
pub fn rank<'a>(pool: &[&'a Word]) -> Vec<RankedWord<'a>> {
    let table = FrequencyTable::compute(pool.iter().copied());

    let mut ranked: Vec<RankedWord<'a>> = pool
        .iter()
        .map(|&word| RankedWord {
            word,
            score: table.score(word),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn frequencies_normalized_by_position_maximum() {
        let pool = words_from_slice(&["apple", "angle", "ankle", "amble"]);
        let table = FrequencyTable::compute(&pool);

        assert!((table.frequency(0, b'a') - 1.0).abs() < f64::EPSILON);
        // N is the modal second letter (2 of 4), P and M appear once
        assert!((table.frequency(1, b'n') - 1.0).abs() < f64::EPSILON);
        assert!((table.frequency(1, b'p') - 0.5).abs() < f64::EPSILON);
        assert!((table.frequency(1, b'm') - 0.5).abs() < f64::EPSILON);
        assert!(table.frequency(1, b'z').abs() < f64::EPSILON);
    }

    #[test]
    fn empty_pool_gives_zero_table() {
        let table = FrequencyTable::compute(&[] as &[Word]);
        for position in 0..WORD_LENGTH {
            for letter in b'a'..=b'z' {
                assert!(table.frequency(position, letter).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn duplicate_letters_are_penalized() {
        let pool = words_from_slice(&["sheep", "sheet"]);
        let table = FrequencyTable::compute(&pool);

        // Every position scores 1.0 and the repeated E costs 1.0
        let sheep = table.score(&pool[0]);
        assert!((sheep - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn word_outside_pool_scores_only_known_letters() {
        let pool = words_from_slice(&["angle", "ankle"]);
        let table = FrequencyTable::compute(&pool);

        let outsider = Word::new("zzzzz").unwrap();
        assert!((table.score(&outsider) - -4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rank_orders_best_first() {
        let dictionary = words_from_slice(&["amble", "apple", "angle", "ankle"]);
        let pool: Vec<&Word> = dictionary.iter().collect();
        let ranked = rank(&pool);

        let order: Vec<&str> = ranked.iter().map(|r| r.word.text()).collect();
        // APPLE pays for its double P; ANGLE and ANKLE tie and keep pool order
        assert_eq!(order, vec!["angle", "ankle", "amble", "apple"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn rank_is_deterministic() {
        let dictionary = words_from_slice(&["crane", "crate", "grate", "irate", "slate"]);
        let pool: Vec<&Word> = dictionary.iter().collect();

        assert_eq!(rank(&pool), rank(&pool));
    }

    #[test]
    fn rank_empty_pool() {
        assert!(rank(&[]).is_empty());
    }
}
