//! Display functions for command results

use super::formatters::{colored_guess, score_bar};
use crate::commands::{BenchmarkResult, SolveResult, SuggestResult};
use crate::core::Guess;
use crate::solver::SolveOutcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        let guess = Guess::new(turn.guess.clone(), turn.feedback);
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&guess),
            turn.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Clues:      {} green, {} yellow",
                turn.feedback.count_correct(),
                turn.feedback.count_present()
            );
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
            println!(
                "  Score:      [{}] {:.3}",
                score_bar(turn.score, 20),
                turn.score
            );
        }
    }

    println!();
    match result.outcome {
        SolveOutcome::Solved(attempts) => println!(
            "{}",
            format!(
                "✅ Solved in {attempts} {}!",
                if attempts == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        SolveOutcome::Unsolved => println!(
            "{}",
            format!(
                "❌ Failed to solve in {} guesses (budget {})",
                result.turns.len(),
                result.max_attempts
            )
            .red()
            .bold()
        ),
    }
}

/// Print the ranked candidates for a history
pub fn print_suggestions(result: &SuggestResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SUGGESTIONS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if !result.history.is_empty() {
        println!();
        for guess in &result.history {
            println!("  {}", colored_guess(guess));
        }
    }

    if result.suggestions.is_empty() {
        println!(
            "\n{}",
            "No candidates remain - the feedback may be inconsistent."
                .red()
                .bold()
        );
        return;
    }

    println!(
        "\n📊 {} candidates remaining\n",
        result.pool_size.to_string().bright_yellow().bold()
    );
    for (rank, (word, score)) in result.suggestions.iter().enumerate() {
        println!(
            "  {:>3}. {}  [{}] {score:.3}",
            rank + 1,
            word.text().to_uppercase().bold(),
            score_bar(*score, 20).green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.total_words.max(1) as f64;
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();
    for (guess_count, count) in counts {
        let pct = (count as f64 / total) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
    if result.failed > 0 {
        let pct = (result.failed as f64 / total) * 100.0;
        println!(
            "   {}: {:>44} ({pct:5.1}%)",
            "X".red(),
            result.failed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{SolveConfig, solve_word, suggest};
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn print_solve_result_verbose() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
        let result = solve_word(SolveConfig::new("apple".to_string()), &dictionary).unwrap();

        let first = result.turns[0].feedback;
        assert_eq!(first.count_correct(), 3);
        assert_eq!(first.count_present(), 0);

        print_solve_result(&result, true);
        print_solve_result(&result, false);
    }

    #[test]
    fn print_suggestions_handles_empty_pool() {
        let dictionary = words_from_slice(&["apple", "angle"]);
        let result = suggest(&dictionary, &["zzzzz:GGGGG".to_string()], 3).unwrap();

        assert!(result.suggestions.is_empty());
        print_suggestions(&result);
    }
}
