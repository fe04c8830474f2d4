//! Benchmark command
//!
//! Tests solver performance on a random sample of target words.

use crate::core::Word;
use crate::solver::{Engine, SolveOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from `dictionary`
///
/// A fixed `seed` makes the sample reproducible.
#[must_use]
pub fn sample_targets<'a>(
    dictionary: &'a [Word],
    count: usize,
    seed: Option<u64>,
) -> Vec<&'a Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    dictionary.choose_multiple(&mut rng, count).collect()
}

/// Run benchmark on a set of target words
///
/// Every target is solved in its own session, in parallel. Averages only
/// count solved targets.
pub fn run_benchmark(
    dictionary: &[Word],
    target_words: &[&Word],
    max_attempts: usize,
) -> BenchmarkResult {
    let start = Instant::now();

    let outcomes: Vec<SolveOutcome> = target_words
        .par_iter()
        .map(|&target| Engine::new(dictionary).solve(target, max_attempts))
        .collect();

    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for attempts in outcomes.iter().filter_map(|o| o.attempts()) {
        total_guesses += attempts;
        min_guesses = min_guesses.min(attempts);
        max_guesses = max_guesses.max(attempts);
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    let total_words = target_words.len();
    let solved: usize = distribution.values().sum();

    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
