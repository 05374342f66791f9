//! Runtime settings shared by every command

use crate::cache::validate::DEFAULT_TRIALS;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Default word list file, one word per line
pub const DEFAULT_WORDLIST: &str = "words.txt";

/// Default location of the persisted feedback matrix
pub const DEFAULT_CACHE_PATH: &str = "feedback_matrix.bin";

/// Default guess limit for simulated games
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Settings for loading the vocabulary, preparing the cache and playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub wordlist: PathBuf,
    /// `None` keeps the matrix in memory only
    pub cache_path: Option<PathBuf>,
    pub self_test_trials: usize,
    pub max_guesses: usize,
    /// Fixed seed for tie-breaking and self-test sampling
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            cache_path: Some(PathBuf::from(DEFAULT_CACHE_PATH)),
            self_test_trials: DEFAULT_TRIALS,
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Random source for this run
    ///
    /// Seeded runs are reproducible; otherwise the generator is seeded from
    /// the operating system.
    ///
    /// # Examples
    /// ```
    /// use rand::Rng;
    /// use wordle_entropy::config::SolverConfig;
    ///
    /// let config = SolverConfig {
    ///     seed: Some(7),
    ///     ..SolverConfig::default()
    /// };
    /// let a: u64 = config.rng().random();
    /// let b: u64 = config.rng().random();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.wordlist, PathBuf::from("words.txt"));
        assert_eq!(
            config.cache_path.as_deref(),
            Some(std::path::Path::new("feedback_matrix.bin"))
        );
        assert_eq!(config.self_test_trials, 3);
        assert_eq!(config.max_guesses, 6);
        assert!(config.seed.is_none());
    }

    #[test]
    fn different_seeds_diverge() {
        let a = SolverConfig {
            seed: Some(1),
            ..SolverConfig::default()
        };
        let b = SolverConfig {
            seed: Some(2),
            ..SolverConfig::default()
        };

        let (mut ra, mut rb) = (a.rng(), b.rng());
        let from_a: Vec<u32> = (0..4).map(|_| ra.random()).collect();
        let from_b: Vec<u32> = (0..4).map(|_| rb.random()).collect();
        assert_ne!(from_a, from_b);
    }
}
