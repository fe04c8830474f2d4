//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use crate::core::{Feedback, Guess, Word};
use crate::output::formatters::colored_guess;
use crate::solver::Engine;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What the user typed at the feedback prompt
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Undo,
    Feedback(Feedback),
    Played(Guess),
    Invalid(String),
}

fn parse_input(input: &str) -> Input {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" | "reset" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        "win" | "solved" => Input::Feedback(Feedback::SOLVED),
        other if other.contains(':') || other.contains('=') => match other.parse::<Guess>() {
            Ok(guess) => Input::Played(guess),
            Err(e) => Input::Invalid(e.to_string()),
        },
        other => match other.parse::<Feedback>() {
            Ok(feedback) => Input::Feedback(feedback),
            Err(e) => Input::Invalid(e.to_string()),
        },
    }
}

/// Outcome of a command typed while no candidates remain
#[derive(Debug, PartialEq, Eq)]
enum Recovery {
    Quit,
    Resumed,
    Rejected(String),
}

/// Only quit, new and undo make sense once the pool is exhausted
fn recover(engine: &mut Engine, input: Input) -> Recovery {
    match input {
        Input::Quit => Recovery::Quit,
        Input::NewGame => {
            engine.reset();
            Recovery::Resumed
        }
        Input::Undo => {
            engine.undo();
            Recovery::Resumed
        }
        Input::Invalid(reason) => Recovery::Rejected(reason),
        Input::Feedback(_) | Input::Played(_) => Recovery::Rejected(
            "No candidates remain to give feedback on - type 'undo' or 'new'".to_string(),
        ),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(dictionary: &[Word], top: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses ranked by positional letter frequency.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/2 for green (correct position)");
    println!("  - Use Y/y/1 for yellow (wrong position)");
    println!("  - Use -/_/0 for gray (not in word)");
    println!("  - Or 'word:feedback' if you played a different word\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut engine = Engine::new(dictionary);

    loop {
        let Some(best) = engine.best() else {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match recover(&mut engine, parse_input(&get_user_input("Command")?)) {
                Recovery::Quit => return Ok(()),
                Recovery::Resumed => {}
                Recovery::Rejected(reason) => println!("❌ {reason}\n"),
            }
            continue;
        };

        let turn = engine.history().len() + 1;
        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", engine.pool_size());
        println!("────────────────────────────────────────────────────────────");
        println!(
            "\n📊 Suggested guess: {} (score {:.3})",
            best.word.text().to_uppercase().bright_yellow().bold(),
            best.score
        );

        let others = engine.top(top);
        if others.len() > 1 {
            let list: Vec<String> = others[1..]
                .iter()
                .map(|r| r.word.text().to_uppercase())
                .collect();
            println!("   Alternatives:     {}\n", list.join(", "));
        }

        let guess = match parse_input(&get_user_input("Enter feedback")?) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => {
                engine.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            Input::Undo => {
                if engine.undo().is_some() {
                    println!("✓ Undone! Back to turn {}\n", engine.history().len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            Input::Feedback(feedback) => Guess::new(best.word.clone(), feedback),
            Input::Played(guess) => guess,
            Input::Invalid(reason) => {
                println!("❌ {reason}\n");
                continue;
            }
        };

        let solved = guess.feedback.is_solved();
        engine.record(guess);

        if solved {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "    🎉  W O R D L E   S O L V E D !  🎉    ".bright_green().bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());

            println!("\n  Guess history:");
            for (i, guess) in engine.history().iter().enumerate() {
                println!(
                    "    {}. {}",
                    (i + 1).to_string().bright_black(),
                    colored_guess(guess)
                );
            }
            println!();

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    engine.reset();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_input("q"), Input::Quit);
        assert_eq!(parse_input(" NEW "), Input::NewGame);
        assert_eq!(parse_input("undo"), Input::Undo);
        assert_eq!(parse_input("win"), Input::Feedback(Feedback::SOLVED));
    }

    #[test]
    fn parse_feedback_and_played_word() {
        assert_eq!(
            parse_input("gy-gy"),
            Input::Feedback("GY-GY".parse().unwrap())
        );
        assert_eq!(
            parse_input("Crane:--G--"),
            Input::Played("crane:--G--".parse().unwrap())
        );
    }

    #[test]
    fn exhausted_pool_rejects_feedback_until_undo() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle", "amble"]);
        let mut engine = Engine::new(&dictionary);
        engine.record("apple:-----".parse().unwrap());
        assert!(engine.is_exhausted());

        assert!(matches!(
            recover(&mut engine, parse_input("angle:GG-GG")),
            Recovery::Rejected(_)
        ));
        assert!(matches!(
            recover(&mut engine, parse_input("GGGGG")),
            Recovery::Rejected(_)
        ));
        assert!(engine.is_exhausted());
        assert_eq!(engine.history().len(), 1);

        assert_eq!(recover(&mut engine, parse_input("undo")), Recovery::Resumed);
        assert_eq!(engine.pool_size(), 4);
        assert_eq!(recover(&mut engine, parse_input("quit")), Recovery::Quit);
    }

    #[test]
    fn parse_reports_invalid_input() {
        assert!(matches!(parse_input("gyx"), Input::Invalid(_)));
        assert!(matches!(parse_input("cran:GGGGG"), Input::Invalid(_)));
    }
}
