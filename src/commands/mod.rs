//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod build_cache;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use build_cache::{build_cache, prepare_cache};
pub use play::{Session, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
