//! Wordle Ranker - CLI
//!
//! Wordle solver with TUI and CLI modes that ranks candidates by positional
//! letter frequency.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use wordle_ranker::{
    commands::{
        SolveConfig, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        sample_targets, solve_word, suggest,
    },
    core::Word,
    output::{print_benchmark_result, print_solve_result, print_suggestions},
    solver::DEFAULT_MAX_ATTEMPTS,
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_ranker",
    about = "Wordle solver ranking candidates by positional letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Guesses allowed per game in self-play
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Number of ranked suggestions to show
    #[arg(short = 't', long, global = true, default_value_t = 10)]
    top: usize,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Rank candidates for a history of 'word:feedback' guesses
    Suggest {
        /// Guesses such as crane:--G-Y (G=green, Y=yellow, -=gray)
        guesses: Vec<String>,
    },

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts and scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Test solver on every word in the list
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(DICTIONARY),
        path => load_from_file(path).with_context(|| format!("Failed to load word list '{path}'"))?,
    };
    info!("using {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let dictionary = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.top),
        Commands::Simple => run_simple(&dictionary, cli.top),
        Commands::Suggest { guesses } => {
            let result = suggest(&dictionary, &guesses, cli.top)?;
            print_suggestions(&result);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word).with_max_attempts(cli.max_attempts);
            let result = solve_word(config, &dictionary)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&dictionary, count, seed, cli.max_attempts);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&dictionary, limit, cli.max_attempts);
            Ok(())
        }
    }
}

fn run_benchmark_command(
    dictionary: &[Word],
    count: usize,
    seed: Option<u64>,
    max_attempts: usize,
) {
    let targets = sample_targets(dictionary, count, seed);
    println!("Running benchmark on {} random words...", targets.len());

    let result = run_benchmark(dictionary, &targets, max_attempts);
    print_benchmark_result(&result);
}

fn run_test_all_command(dictionary: &[Word], limit: Option<usize>, max_attempts: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Wordle Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} words", dictionary.len());
    println!("Attempt budget: {max_attempts}\n");

    let stats = run_test_all(dictionary, limit, max_attempts);
    print_test_all_statistics(&stats);
}

fn run_play_command(dictionary: &[Word], top: usize) -> Result<()> {
    use wordle_ranker::interactive::{App, run_tui};

    let app = App::new(dictionary, top);
    run_tui(app)
}
