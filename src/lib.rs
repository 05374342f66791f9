//! Wordle Entropy
//!
//! An entropy-maximising guesser for fixed-length word games with
//! green/yellow/gray feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_entropy::cache::FeedbackCache;
//! use wordle_entropy::core::generate;
//! use wordle_entropy::solver::EntropySolver;
//! use wordle_entropy::wordlists::Vocabulary;
//!
//! let vocab = Vocabulary::new(["crane", "slate", "trace", "crate", "react"]).unwrap();
//! let cache = FeedbackCache::build(&vocab);
//! let mut solver = EntropySolver::new(vocab, &cache).unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let guess = solver.best_guess_with(&mut rng).unwrap().to_string();
//! let pattern = generate(&guess, "trace").unwrap();
//! solver.apply_feedback(&guess, &pattern).unwrap();
//!
//! assert!(solver.remaining_words().any(|w| w == "trace"));
//! ```

// Core domain types
pub mod core;

// Word lists and candidate filtering
pub mod wordlists;

// Precomputed feedback matrix
pub mod cache;

// Solving algorithms
pub mod solver;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
