//! Entropy-maximising solver
//!
//! Scores every vocabulary word by the Shannon entropy of the patterns it
//! would produce against the remaining candidates, and narrows the
//! candidates as feedback arrives.

mod engine;
pub mod entropy;

pub use engine::{EntropySolver, SolverState};
pub use entropy::{GuessMetrics, GuessScore};
