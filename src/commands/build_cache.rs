//! Feedback matrix preparation
//!
//! Every other command needs a validated matrix for the loaded vocabulary.

use crate::cache::{CacheOrigin, FeedbackCache};
use crate::config::SolverConfig;
use crate::core::Result;
use crate::wordlists::Vocabulary;
use indicatif::ProgressBar;
use rand::Rng;

/// Load the configured matrix, or build it when missing
///
/// Without a cache path the matrix is built in memory and never written.
/// The result is always self-tested.
///
/// # Errors
/// Any load, save or self-test error.
pub fn prepare_cache<R>(
    config: &SolverConfig,
    vocab: &Vocabulary,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<(FeedbackCache, CacheOrigin)>
where
    R: Rng + ?Sized,
{
    if let Some(path) = &config.cache_path {
        return FeedbackCache::load_or_build(path, vocab, config.self_test_trials, rng, progress);
    }

    let cache = FeedbackCache::build_with_progress(vocab, progress);
    cache.validate(vocab, config.self_test_trials, rng)?;
    Ok((cache, CacheOrigin::Built))
}

/// Rebuild the matrix from scratch, self-test it and save it
///
/// An existing file at the cache path is replaced.
///
/// # Errors
/// Returns `CacheValidationFailure` if the fresh matrix fails its self-test,
/// or `Io` if it cannot be written.
pub fn build_cache<R>(
    config: &SolverConfig,
    vocab: &Vocabulary,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<FeedbackCache>
where
    R: Rng + ?Sized,
{
    let cache = FeedbackCache::build_with_progress(vocab, progress);
    cache.validate(vocab, config.self_test_trials, rng)?;

    if let Some(path) = &config.cache_path {
        cache.save(path)?;
    }

    Ok(cache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Vocabulary {
        Vocabulary::new(["cigar", "rebut", "sissy", "humph", "awake", "blush"]).unwrap()
    }

    fn config_at(name: &str) -> SolverConfig {
        let path = std::env::temp_dir().join(format!(
            "wordle_entropy_cmd_{}_{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        SolverConfig {
            cache_path: Some(path),
            ..SolverConfig::default()
        }
    }

    #[test]
    fn in_memory_when_no_path() {
        let vocab = sample();
        let config = SolverConfig {
            cache_path: None,
            ..SolverConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let (cache, origin) =
            prepare_cache(&config, &vocab, &mut rng, &ProgressBar::hidden()).unwrap();
        assert_eq!(origin, CacheOrigin::Built);
        assert_eq!(cache.size(), 6);
    }

    #[test]
    fn build_then_prepare_loads() {
        let vocab = sample();
        let config = config_at("prepare.bin");
        let mut rng = StdRng::seed_from_u64(4);
        let progress = ProgressBar::hidden();

        let built = build_cache(&config, &vocab, &mut rng, &progress).unwrap();
        let (loaded, origin) = prepare_cache(&config, &vocab, &mut rng, &progress).unwrap();

        if let Some(path) = &config.cache_path {
            std::fs::remove_file(path).unwrap();
        }
        assert_eq!(origin, CacheOrigin::Loaded);
        assert_eq!(loaded, built);
    }

    #[test]
    fn build_reports_every_row() {
        let vocab = sample();
        let config = SolverConfig {
            cache_path: None,
            ..SolverConfig::default()
        };
        let progress = ProgressBar::hidden();
        let mut rng = StdRng::seed_from_u64(2);

        build_cache(&config, &vocab, &mut rng, &progress).unwrap();
        assert_eq!(progress.position(), 6);
    }
}
