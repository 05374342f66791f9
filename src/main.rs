//! Wordle Entropy - CLI
//!
//! Suggests guesses that maximise expected information, plays simulated
//! games and benchmarks the solver over a word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use std::io;
use std::path::PathBuf;
use wordle_entropy::{
    cache::{CacheOrigin, FeedbackCache},
    commands::{
        Session, SolveConfig, analyze_word, build_cache, prepare_cache, run_benchmark, run_play,
        solve_word,
    },
    config::{DEFAULT_CACHE_PATH, DEFAULT_WORDLIST, SolverConfig},
    output::{
        formatters::progress_style, print_analysis_result, print_benchmark_result,
        print_cache_status, print_solve_result,
    },
    solver::EntropySolver,
    wordlists::{Vocabulary, loader::load_vocabulary},
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy",
    about = "Wordle solver that picks the guess with the highest expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Feedback matrix file, loaded if present and written otherwise
    #[arg(short, long, global = true, default_value = DEFAULT_CACHE_PATH)]
    cache: PathBuf,

    /// Keep the feedback matrix in memory only
    #[arg(long, global = true)]
    no_cache: bool,

    /// Self-test repetitions run on the feedback matrix (at least 1)
    #[arg(
        short,
        long,
        global = true,
        default_value = "3",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    trials: u64,

    /// Seed for tie-breaking and self-test sampling
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short = 'm', long, default_value = "6")]
        max_guesses: usize,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of words to test, from the start of the word list
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Regenerate, self-test and save the feedback matrix
    BuildCache,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        let max_guesses = match &self.command {
            Some(Commands::Solve { max_guesses, .. }) => *max_guesses,
            _ => SolverConfig::default().max_guesses,
        };

        SolverConfig {
            wordlist: self.wordlist.clone(),
            cache_path: (!self.no_cache).then(|| self.cache.clone()),
            self_test_trials: usize::try_from(self.trials).unwrap_or(usize::MAX),
            max_guesses,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    let vocab = load_vocabulary(&config.wordlist)
        .with_context(|| format!("failed to load word list {}", config.wordlist.display()))?;
    println!(
        "Loaded {} words of {} letters",
        vocab.full_len(),
        vocab.word_len()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::BuildCache = command {
        return run_build_cache_command(&config, &vocab);
    }

    let cache = load_cache(&config, &vocab)?;
    let mut solver = EntropySolver::new(vocab, &cache)?;

    match command {
        Commands::Play => run_play_command(&config, solver),
        Commands::Solve { word, verbose, .. } => {
            run_solve_command(&config, &word, verbose, &mut solver)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &solver),
        Commands::Benchmark { count } => run_benchmark_command(&config, count, &solver),
        Commands::BuildCache => Ok(()),
    }
}

fn generation_bar(vocab: &Vocabulary) -> ProgressBar {
    let pb = ProgressBar::new(vocab.full_len() as u64);
    pb.set_style(progress_style());
    pb.set_message("rows");
    pb
}

fn load_cache(config: &SolverConfig, vocab: &Vocabulary) -> Result<FeedbackCache> {
    let mut rng = config.rng();

    let generating = match &config.cache_path {
        Some(path) if path.exists() => {
            println!("Loading precomputed matrix from {}", path.display());
            false
        }
        _ => {
            println!("Generating feedback matrix");
            true
        }
    };

    let pb = if generating {
        generation_bar(vocab)
    } else {
        ProgressBar::hidden()
    };
    let (cache, origin) = prepare_cache(config, vocab, &mut rng, &pb)
        .context("feedback matrix is unusable; delete the file or run build-cache")?;
    pb.finish_with_message("done");

    println!("Performing self-test");
    println!("{}", "Self-test completed successfully".green());
    print_cache_status(origin, cache.size());
    Ok(cache)
}

fn run_build_cache_command(config: &SolverConfig, vocab: &Vocabulary) -> Result<()> {
    let mut rng = config.rng();

    println!("Generating feedback matrix");
    let pb = generation_bar(vocab);
    let cache = build_cache(config, vocab, &mut rng, &pb).context("failed to build matrix")?;
    pb.finish_with_message("done");

    println!("{}", "Self-test completed successfully".green());
    print_cache_status(CacheOrigin::Built, cache.size());
    if let Some(path) = &config.cache_path {
        println!("Saved to {}", path.display());
    }
    Ok(())
}

fn run_play_command(config: &SolverConfig, solver: EntropySolver<'_>) -> Result<()> {
    let mut rng = config.rng();
    let mut session = Session::new(solver);
    run_play(&mut session, &mut io::stdin().lock(), &mut rng)?;
    Ok(())
}

fn run_solve_command(
    config: &SolverConfig,
    word: &str,
    verbose: bool,
    solver: &mut EntropySolver<'_>,
) -> Result<()> {
    let mut rng = config.rng();
    let solve_config = SolveConfig {
        target: word.trim().to_lowercase(),
        max_guesses: config.max_guesses,
    };

    let result = solve_word(solve_config, solver, &mut rng)
        .with_context(|| format!("cannot solve '{word}'"))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(word: &str, solver: &EntropySolver<'_>) -> Result<()> {
    let result = analyze_word(word, solver).with_context(|| format!("cannot analyze '{word}'"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    config: &SolverConfig,
    count: usize,
    solver: &EntropySolver<'_>,
) -> Result<()> {
    let mut rng = config.rng();
    let targets: Vec<&str> = solver
        .vocabulary()
        .full_words()
        .iter()
        .take(count)
        .map(String::as_str)
        .collect();

    println!("Running benchmark on {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(progress_style());
    let result = run_benchmark(solver, &targets, config.max_guesses, &mut rng, &pb)?;
    pb.finish_with_message("Complete!");

    print_benchmark_result(&result);
    Ok(())
}
