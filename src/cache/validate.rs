//! Randomised self-test of a feedback matrix
//!
//! A matrix built for a different word list (or an older ordering of the
//! same one) silently corrupts every later decision, so a cache is only used
//! after sampled cells agree with the live feedback rule.

use super::FeedbackCache;
use crate::core::{Error, Result, statuses};
use crate::wordlists::Vocabulary;
use rand::Rng;

/// Default number of self-test repetitions
pub const DEFAULT_TRIALS: usize = 3;

impl FeedbackCache {
    /// Check the matrix against the feedback rule
    ///
    /// Each of `trials` repetitions pairs every vocabulary word, as the
    /// guess, with a uniformly random answer and compares the decoded cell
    /// with freshly generated feedback.
    ///
    /// # Errors
    /// Returns `NoSelfTest` if `trials` is zero, `SizeMismatch` or
    /// `MalformedCache` if the matrix was built for a vocabulary of a
    /// different size or word length, and `CacheValidationFailure` naming the
    /// first disagreeing pair.
    pub fn validate<R>(&self, vocab: &Vocabulary, trials: usize, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        if trials == 0 {
            return Err(Error::NoSelfTest);
        }

        let words = vocab.full_words();
        let size = words.len();

        if self.size() != size {
            return Err(Error::SizeMismatch {
                expected: size,
                rows: self.size(),
                cols: self.size(),
            });
        }
        if self.word_len() != vocab.word_len() {
            return Err(Error::MalformedCache(format!(
                "matrix holds {}-letter patterns, vocabulary has {}-letter words",
                self.word_len(),
                vocab.word_len()
            )));
        }

        for _ in 0..trials {
            for (g, guess) in words.iter().enumerate() {
                let a = rng.random_range(0..size);
                let answer = &words[a];

                let cached = self.get(g, a).decode(self.word_len());
                let fresh = statuses(guess, answer)?;

                if cached.ok().as_ref() != Some(&fresh) {
                    return Err(Error::CacheValidationFailure {
                        guess: guess.clone(),
                        answer: answer.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Boolean form of [`validate`](Self::validate)
    #[must_use]
    pub fn self_test<R>(&self, vocab: &Vocabulary, trials: usize, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        self.validate(vocab, trials, rng).is_ok()
    }
}
