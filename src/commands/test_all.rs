//! Test all words - comprehensive solver evaluation
//!
//! Runs self-play against every dictionary word and generates statistics.

use crate::core::Word;
use crate::solver::Engine;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub max_attempts: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub first_guess: Option<String>,
}

/// Run self-play on every dictionary word (or the first `limit` words)
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_test_all(
    dictionary: &[Word],
    limit: Option<usize>,
    max_attempts: usize,
) -> TestAllStatistics {
    let test_words = &dictionary[..limit.unwrap_or(dictionary.len()).min(dictionary.len())];

    println!("🎯 Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<WordTestResult> = test_words
        .par_iter()
        .map(|target| {
            let game = Engine::new(dictionary).play(target, max_attempts);
            pb.inc(1);
            WordTestResult {
                word: target.text().to_string(),
                guesses: game
                    .turns
                    .iter()
                    .map(|t| t.guess.text().to_string())
                    .collect(),
                success: game.outcome.is_solved(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, max_attempts, total_start.elapsed())
}

fn summarize(
    results: &[WordTestResult],
    max_attempts: usize,
    total_time: Duration,
) -> TestAllStatistics {
    let solved_lengths: Vec<usize> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .collect();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for &n in &solved_lengths {
        *guess_distribution.entry(n).or_insert(0) += 1;
    }

    let solved = solved_lengths.len();
    let average_guesses = if solved > 0 {
        solved_lengths.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst_words: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success && r.guesses.len() + 1 >= max_attempts)
        .map(|r| (r.word.clone(), r.guesses.len()))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed: results.len() - solved,
        max_attempts,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved_lengths.iter().copied().max().unwrap_or(0),
        min_guesses: solved_lengths.iter().copied().min().unwrap_or(0),
        worst_words,
        failed_words: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.word.clone())
            .collect(),
        first_guess: results.first().and_then(|r| r.guesses.first().cloned()),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Total time:          {:.2}s", stats.total_time.as_secs_f64());
    if let Some(word) = &stats.first_guess {
        println!("  Opening guess:       {}", word.to_uppercase());
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_attempts {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved Words".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failed_words.len() > 10 {
            println!("  … and {} more", stats.failed_words.len() - 10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DEFAULT_MAX_ATTEMPTS;
    use crate::wordlists::loader::words_from_slice;

    fn result(word: &str, guesses: &[&str], success: bool) -> WordTestResult {
        WordTestResult {
            word: word.to_string(),
            guesses: guesses.iter().map(|g| (*g).to_string()).collect(),
            success,
        }
    }

    #[test]
    fn test_all_covers_every_word() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
        let stats = run_test_all(&dictionary, None, DEFAULT_MAX_ATTEMPTS);

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.solved, 4);
        assert_eq!(stats.first_guess.as_deref(), Some("angle"));
        assert_eq!(stats.min_guesses, 1);
    }

    #[test]
    fn test_all_respects_limit() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);

        assert_eq!(run_test_all(&dictionary, Some(2), 6).total_words, 2);
        assert_eq!(run_test_all(&dictionary, Some(99), 6).total_words, 4);
    }

    #[test]
    fn summarize_counts_only_solved_games() {
        let results = vec![
            result("angle", &["angle"], true),
            result("ankle", &["angle", "ankle"], true),
            result("zesty", &["angle", "about"], false),
        ];
        let stats = summarize(&results, 6, Duration::from_secs(1));

        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failed, 1);
        assert!((stats.average_guesses - 1.5).abs() < f64::EPSILON);
        assert_eq!(stats.max_guesses, 2);
        assert_eq!(stats.failed_words, vec!["zesty".to_string()]);
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
    }

    #[test]
    fn summarize_flags_words_near_budget() {
        let results = vec![
            result("amble", &["a", "b", "c", "d", "e"], true),
            result("angle", &["angle"], true),
        ];
        let stats = summarize(&results, 6, Duration::ZERO);

        assert_eq!(stats.worst_words, vec![("amble".to_string(), 5)]);
    }
}
