//! Word analysis command
//!
//! Reports how much information a word would reveal as the next guess.

use crate::core::Result;
use crate::solver::EntropySolver;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Number of distinct feedback patterns for the word length
    pub pattern_space: usize,
    /// Whether the word could itself be the answer
    pub is_candidate: bool,
}

/// Analyze `word` against the solver's remaining candidates
///
/// # Errors
///
/// Returns `UnknownWord` if the word is not in the vocabulary.
pub fn analyze_word(word: &str, solver: &EntropySolver<'_>) -> Result<AnalysisResult> {
    let word = word.trim().to_lowercase();
    let metrics = solver.metrics_of(&word)?;

    Ok(AnalysisResult {
        is_candidate: solver.vocabulary().contains(&word),
        word,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: solver.remaining_count(),
        pattern_space: solver.cache().pattern_space(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::FeedbackCache;
    use crate::core::{Error, Pattern};
    use crate::wordlists::Vocabulary;

    fn setup() -> (Vocabulary, FeedbackCache) {
        let vocab = Vocabulary::new([
            "cigar", "rebut", "sissy", "humph", "awake", "blush", "focal", "evade",
        ])
        .unwrap();
        let cache = FeedbackCache::build(&vocab);
        (vocab, cache)
    }

    #[test]
    fn analyze_valid_word() {
        let (vocab, cache) = setup();
        let solver = EntropySolver::new(vocab, &cache).unwrap();

        let result = analyze_word("CIGAR", &solver).unwrap();

        assert_eq!(result.word, "cigar");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 8);
        assert_eq!(result.pattern_space, 243);
        assert!(result.is_candidate);
    }

    #[test]
    fn analyze_invalid_word() {
        let (vocab, cache) = setup();
        let solver = EntropySolver::new(vocab, &cache).unwrap();

        assert!(matches!(
            analyze_word("zzzzz", &solver),
            Err(Error::UnknownWord(_))
        ));
    }

    #[test]
    fn entropy_properties() {
        let (vocab, cache) = setup();
        let solver = EntropySolver::new(vocab, &cache).unwrap();

        let result = analyze_word("awake", &solver).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= 8f64.log2() + 1e-12);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= 8.0);
        assert!(result.max_partition >= 1);
    }

    #[test]
    fn analysis_follows_narrowed_candidates() {
        let (vocab, cache) = setup();
        let mut solver = EntropySolver::new(vocab, &cache).unwrap();
        let pattern = cache.lookup(solver.vocabulary(), "cigar", "focal").unwrap();
        solver.apply_feedback("cigar", &pattern).unwrap();

        let result = analyze_word("cigar", &solver).unwrap();
        assert_eq!(result.total_candidates, solver.remaining_count());
        assert!(!result.is_candidate);
        assert_ne!(pattern, Pattern::solved("cigar").unwrap());
    }
}
