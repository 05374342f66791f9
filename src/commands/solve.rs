//! Word solving command
//!
//! Plays a simulated game against a known answer and records every step.

use crate::config::DEFAULT_MAX_GUESSES;
use crate::core::{Pattern, Result};
use crate::solver::EntropySolver;
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// `None` once only one candidate was left
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target` from a fresh game
///
/// Feedback for each guess is read from the solver's cache.
///
/// # Errors
///
/// Returns `UnknownWord` if the target is not in the vocabulary, and
/// `EmptyCandidates` if the solver runs out of candidates (which only
/// happens with a corrupt cache).
pub fn solve_word<R>(
    config: SolveConfig,
    solver: &mut EntropySolver<'_>,
    rng: &mut R,
) -> Result<SolveResult>
where
    R: Rng + ?Sized,
{
    solver.reset();
    solver.vocabulary().full_index_of(&config.target)?;

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.remaining_count();
        let guess = solver.best_guess_with(rng)?.to_string();

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = solver.metrics_of(&guess)?;
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let pattern = solver
            .cache()
            .lookup(solver.vocabulary(), &guess, &config.target)?;
        solver.apply_feedback(&guess, &pattern)?;
        let solved = pattern.is_solved();

        guesses.push(GuessStep {
            word: guess,
            pattern,
            candidates_before,
            candidates_after: solver.remaining_count(),
            entropy,
            expected_remaining,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
