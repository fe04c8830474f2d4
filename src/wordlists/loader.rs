//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Word, WordError};
use log::info;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid word '{text}': {source}")]
    InvalidEntry {
        line: usize,
        text: String,
        source: WordError,
    },
    #[error("word list contains no words")]
    Empty,
}

/// Load words from a file
///
/// Lines are trimmed and blank lines skipped. Repeated words keep their first
/// position only.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, if any entry is not a
/// valid word, or if the list is empty.
///
/// # Examples
/// ```no_run
/// use wordle_ranker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content)?;

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a line-oriented word list
///
/// # Errors
///
/// Returns `LoadError::InvalidEntry` for the first malformed line, or
/// `LoadError::Empty` if no words remain.
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, LoadError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| LoadError::InvalidEntry {
            line: index + 1,
            text: trimmed.to_string(),
            source,
        })?;

        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_ranker::wordlists::loader::words_from_slice;
/// use wordle_ranker::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
