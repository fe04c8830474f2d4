//! Suggestion command
//!
//! Ranks the candidates consistent with a guess history given on the command line.

use crate::core::{Guess, Word};
use crate::solver::ranked_words;
use anyhow::{Context, Result};

/// Ranked candidates for a history
#[derive(Debug)]
pub struct SuggestResult {
    pub history: Vec<Guess>,
    pub pool_size: usize,
    pub suggestions: Vec<(Word, f64)>,
}

/// Parse `word:feedback` guesses and rank the remaining candidates
///
/// # Errors
///
/// Returns an error naming the first guess that cannot be parsed.
pub fn suggest(dictionary: &[Word], guesses: &[String], top: usize) -> Result<SuggestResult> {
    let history = guesses
        .iter()
        .map(|g| {
            g.parse::<Guess>()
                .with_context(|| format!("Invalid guess '{g}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let ranked = ranked_words(dictionary, &history);

    Ok(SuggestResult {
        pool_size: ranked.len(),
        suggestions: ranked
            .iter()
            .take(top)
            .map(|r| (r.word.clone(), r.score))
            .collect(),
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn suggest_without_history_ranks_dictionary() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
        let result = suggest(&dictionary, &[], 2).unwrap();

        assert_eq!(result.pool_size, 4);
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.suggestions[0].0.text(), "angle");
    }

    #[test]
    fn suggest_applies_history() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
        let guesses = vec!["apple:G--GG".to_string(), "angle:GG-GG".to_string()];
        let result = suggest(&dictionary, &guesses, 10).unwrap();

        assert_eq!(result.pool_size, 1);
        assert_eq!(result.suggestions[0].0.text(), "ankle");
        assert_eq!(result.history.len(), 2);
    }

    #[test]
    fn suggest_rejects_malformed_guess() {
        let dictionary = words_from_slice(&["apple"]);
        let err = suggest(&dictionary, &["apple:GGX--".to_string()], 3).unwrap_err();

        assert!(err.to_string().contains("apple:GGX--"));
    }

    #[test]
    fn suggest_result_is_debuggable() {
        let dictionary = words_from_slice(&["apple", "angle"]);
        let result = suggest(&dictionary, &[], 1).unwrap();

        let debug = format!("{result:?}");
        assert!(debug.contains("pool_size: 2"));
    }

    #[test]
    fn suggest_reports_exhausted_pool() {
        let dictionary = words_from_slice(&["apple", "angle"]);
        let result = suggest(&dictionary, &["zzzzz:GGGGG".to_string()], 3).unwrap();

        assert_eq!(result.pool_size, 0);
        assert!(result.suggestions.is_empty());
    }
}
