//! Benchmark command
//!
//! Tests solver performance across multiple words.

use super::solve::{SolveConfig, solve_word};
use crate::core::Result;
use crate::solver::EntropySolver;
use indicatif::ProgressBar;
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    pub total_guesses: usize,
    /// Average over solved words only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve each target from a fresh game and collect statistics
///
/// `progress` advances once per target. A target not solved within
/// `max_guesses` is listed in [`BenchmarkResult::failed`].
///
/// # Errors
///
/// Returns `UnknownWord` if a target is not in the solver's vocabulary.
pub fn run_benchmark<S, R>(
    solver: &EntropySolver<'_>,
    targets: &[S],
    max_guesses: usize,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<BenchmarkResult>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let start = Instant::now();
    let mut game = solver.clone();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut failed = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for target in targets {
        let config = SolveConfig {
            target: target.as_ref().to_string(),
            max_guesses,
        };
        let result = solve_word(config, &mut game, rng)?;

        if result.success {
            let guesses = result.guesses.len();
            solved += 1;
            total_guesses += guesses;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed.push(result.target);
        }

        if solved > 0 {
            progress.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        progress.inc(1);
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    })
}
