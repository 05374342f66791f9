//! Entropy-based guess scoring
//!
//! Implements Shannon entropy over pattern histograms and the tie-breaking
//! selection built on it.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, shannon_entropy};
pub use selector::{ENTROPY_TOLERANCE, GuessScore, select_best_guess};
