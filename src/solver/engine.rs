//! Main solver interface

use super::entropy::{
    GuessMetrics, GuessScore, calculate_metrics, select_best_guess, shannon_entropy,
};
use crate::cache::FeedbackCache;
use crate::core::{Error, Pattern, Result};
use crate::wordlists::Vocabulary;
use rand::Rng;
use rayon::prelude::*;

/// Where a game stands, judged from the remaining candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// More than one candidate remains
    Ready,
    /// Exactly one candidate remains
    Solved,
    /// No candidate is consistent with the feedback
    Exhausted,
}

/// Entropy-maximising solver for one game
///
/// Owns the candidate view of a [`Vocabulary`] and reads a shared
/// [`FeedbackCache`] built for the same vocabulary. Every vocabulary word is
/// considered as a guess; only remaining candidates count as answers.
#[derive(Debug, Clone)]
pub struct EntropySolver<'a> {
    vocabulary: Vocabulary,
    cache: &'a FeedbackCache,
}

impl<'a> EntropySolver<'a> {
    /// Create a solver over `vocabulary`
    ///
    /// # Errors
    /// Returns `SizeMismatch` if `cache` was built for a different number of
    /// words, and `MalformedCache` for a different word length.
    pub fn new(vocabulary: Vocabulary, cache: &'a FeedbackCache) -> Result<Self> {
        if cache.size() != vocabulary.full_len() {
            return Err(Error::SizeMismatch {
                expected: vocabulary.full_len(),
                rows: cache.size(),
                cols: cache.size(),
            });
        }
        if cache.word_len() != vocabulary.word_len() {
            return Err(Error::MalformedCache(format!(
                "matrix holds {}-letter patterns, vocabulary has {}-letter words",
                cache.word_len(),
                vocabulary.word_len()
            )));
        }

        Ok(Self { vocabulary, cache })
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub const fn cache(&self) -> &'a FeedbackCache {
        self.cache
    }

    /// Entropy of every vocabulary word against the remaining candidates
    #[must_use]
    pub fn scores(&self) -> Vec<GuessScore> {
        let remaining = self.vocabulary.remaining_indices();

        (0..self.vocabulary.full_len())
            .into_par_iter()
            .map(|index| GuessScore {
                index,
                entropy: shannon_entropy(&self.cache.bin_counts(index, remaining)),
            })
            .collect()
    }

    /// Best next guess, breaking exact ties with the thread-local RNG
    ///
    /// # Errors
    /// Returns `EmptyCandidates` if no candidate remains.
    pub fn best_guess(&self) -> Result<&str> {
        self.best_guess_with(&mut rand::rng())
    }

    /// Best next guess, breaking exact ties with `rng`
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_entropy::cache::FeedbackCache;
    /// use wordle_entropy::solver::EntropySolver;
    /// use wordle_entropy::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::new(["cigar", "rebut", "sissy", "humph", "awake"]).unwrap();
    /// let cache = FeedbackCache::build(&vocab);
    /// let solver = EntropySolver::new(vocab, &cache).unwrap();
    ///
    /// let guess = solver.best_guess_with(&mut StdRng::seed_from_u64(0)).unwrap();
    /// assert!(solver.vocabulary().contains(guess));
    /// ```
    ///
    /// # Errors
    /// Returns `EmptyCandidates` if no candidate remains.
    pub fn best_guess_with<R>(&self, rng: &mut R) -> Result<&str>
    where
        R: Rng + ?Sized,
    {
        if self.vocabulary.is_empty() {
            return Err(Error::EmptyCandidates);
        }

        let scores = self.scores();
        let remaining = self.vocabulary.remaining_indices();
        let best = select_best_guess(&scores, |i| remaining.binary_search(&i).is_ok(), rng)
            .ok_or(Error::EmptyCandidates)?;

        self.vocabulary
            .full_word_at(best.index)
            .ok_or(Error::EmptyCandidates)
    }

    /// Entropy of guessing `word` now
    ///
    /// # Errors
    /// Returns `UnknownWord` if `word` is not in the vocabulary.
    pub fn entropy_of(&self, word: &str) -> Result<f64> {
        Ok(self.metrics_of(word)?.entropy)
    }

    /// Entropy, expected remaining and worst case of guessing `word` now
    ///
    /// # Errors
    /// Returns `UnknownWord` if `word` is not in the vocabulary.
    pub fn metrics_of(&self, word: &str) -> Result<GuessMetrics> {
        let index = self.vocabulary.full_index_of(word)?;
        let bins = self
            .cache
            .bin_counts(index, self.vocabulary.remaining_indices());
        Ok(calculate_metrics(&bins))
    }

    /// Narrow the candidates with feedback observed for `guess`
    ///
    /// Returns the number of candidates removed.
    ///
    /// # Errors
    /// See [`Vocabulary::narrow`].
    pub fn apply_feedback(&mut self, guess: &str, pattern: &Pattern) -> Result<usize> {
        self.vocabulary.narrow(guess, pattern)
    }

    /// Chance that a particular remaining word is the answer
    ///
    /// `1 / remaining`, or 0.0 once nothing remains.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        match self.vocabulary.len() {
            0 => 0.0,
            n => 1.0 / n as f64,
        }
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn remaining_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.vocabulary.iter()
    }

    #[must_use]
    pub fn state(&self) -> SolverState {
        match self.vocabulary.len() {
            0 => SolverState::Exhausted,
            1 => SolverState::Solved,
            _ => SolverState::Ready,
        }
    }

    /// Start a new game with every word as a candidate
    pub fn reset(&mut self) {
        self.vocabulary.reset();
    }
}
