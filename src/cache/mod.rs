//! Precomputed feedback matrix
//!
//! Cell `(g, a)` holds the encoded pattern for guessing word `g` when word `a`
//! is the answer, using full-vocabulary indices. Building the matrix costs
//! O(N²·L) and dominates everything else, so it is persisted between runs
//! (see [`persist`]) and checked against the live rule before use (see
//! [`validate`]).

pub mod persist;
pub mod validate;

pub use persist::CacheOrigin;

use crate::core::{Pattern, PatternCode, Result, code_for, pattern_space};
use crate::wordlists::Vocabulary;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// N×N matrix of pattern codes, row-major by guess index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackCache {
    size: usize,
    word_len: usize,
    cells: Vec<u16>,
}

impl FeedbackCache {
    /// Compute every cell of the matrix for `vocab`
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::cache::FeedbackCache;
    /// use wordle_entropy::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::new(["aaabb", "aabbb", "bbaaa"]).unwrap();
    /// let cache = FeedbackCache::build(&vocab);
    ///
    /// let pattern = cache.lookup(&vocab, "aabbb", "aaabb").unwrap();
    /// assert_eq!(pattern.to_string(), "AA~BB");
    /// ```
    #[must_use]
    pub fn build(vocab: &Vocabulary) -> Self {
        Self::build_with_progress(vocab, &ProgressBar::hidden())
    }

    /// Compute the matrix, advancing `progress` once per finished row
    ///
    /// Rows are independent and written in parallel; no two tasks touch the
    /// same row, so the result does not depend on how rows are scheduled.
    #[must_use]
    pub fn build_with_progress(vocab: &Vocabulary, progress: &ProgressBar) -> Self {
        let words = vocab.full_words();
        let size = words.len();
        let mut cells = vec![0u16; size * size];

        cells
            .par_chunks_mut(size.max(1))
            .zip(words.par_iter())
            .for_each(|(row, guess)| {
                for (cell, answer) in row.iter_mut().zip(words) {
                    *cell = code_for(guess.as_bytes(), answer.as_bytes()).value();
                }
                progress.inc(1);
            });

        Self {
            size,
            word_len: vocab.word_len(),
            cells,
        }
    }

    pub(crate) const fn from_parts(size: usize, word_len: usize, cells: Vec<u16>) -> Self {
        Self {
            size,
            word_len,
            cells,
        }
    }

    /// Number of rows (and columns)
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Word length the matrix was built for
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of distinct pattern codes (`3^word_len`)
    #[inline]
    #[must_use]
    pub const fn pattern_space(&self) -> usize {
        pattern_space(self.word_len)
    }

    /// Encoded pattern for guess index `guess` against answer index `answer`
    ///
    /// # Panics
    /// Panics if either index is not below [`size`](Self::size).
    #[inline]
    #[must_use]
    pub fn get(&self, guess: usize, answer: usize) -> PatternCode {
        assert!(answer < self.size, "answer index {answer} out of range");
        PatternCode::new(self.cells[guess * self.size + answer])
    }

    /// All cells of one guess row
    #[inline]
    pub(crate) fn row(&self, guess: usize) -> &[u16] {
        &self.cells[guess * self.size..(guess + 1) * self.size]
    }

    pub(crate) fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// Decoded pattern for two vocabulary words
    ///
    /// # Errors
    /// Returns `UnknownWord` if either word is not in the vocabulary.
    pub fn lookup(&self, vocab: &Vocabulary, guess: &str, answer: &str) -> Result<Pattern> {
        let g = vocab.full_index_of(guess)?;
        let a = vocab.full_index_of(answer)?;
        Pattern::from_code(guess, self.get(g, a))
    }

    /// How many of `remaining` fall into each pattern when `guess` is played
    ///
    /// The result has one bucket per pattern code, `3^word_len` in total.
    #[must_use]
    pub fn bin_counts(&self, guess: usize, remaining: &[usize]) -> Vec<usize> {
        let mut bins = vec![0usize; self.pattern_space()];
        let row = self.row(guess);
        for &answer in remaining {
            bins[usize::from(row[answer])] += 1;
        }
        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate;

    fn sample() -> Vocabulary {
        Vocabulary::new(["zzzz", "aabb", "abab", "bbaa", "baba", "abba", "baab"]).unwrap()
    }

    #[test]
    fn every_cell_matches_rule() {
        let vocab = sample();
        let cache = FeedbackCache::build(&vocab);

        assert_eq!(cache.size(), 7);
        assert_eq!(cache.word_len(), 4);
        for (g, guess) in vocab.full_words().iter().enumerate() {
            for (a, answer) in vocab.full_words().iter().enumerate() {
                let expected = generate(guess, answer).unwrap().code();
                assert_eq!(cache.get(g, a), expected, "{guess} vs {answer}");
            }
        }
    }

    #[test]
    fn diagonal_is_solved() {
        let vocab = sample();
        let cache = FeedbackCache::build(&vocab);
        for i in 0..cache.size() {
            assert_eq!(cache.get(i, i), PatternCode::solved(4));
        }
    }

    #[test]
    fn build_independent_of_thread_count() {
        let vocab = sample();
        let parallel = FeedbackCache::build(&vocab);
        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| FeedbackCache::build(&vocab));

        assert_eq!(parallel, single);
    }

    #[test]
    fn progress_counts_rows() {
        let vocab = sample();
        let progress = ProgressBar::hidden();
        let _cache = FeedbackCache::build_with_progress(&vocab, &progress);
        assert_eq!(progress.position(), 7);
    }

    #[test]
    fn bin_counts_partition_remaining() {
        let vocab = sample();
        let cache = FeedbackCache::build(&vocab);
        let g = vocab.full_index_of("aabb").unwrap();

        let bins = cache.bin_counts(g, vocab.remaining_indices());

        assert_eq!(bins.len(), 81);
        assert_eq!(bins.iter().sum::<usize>(), 7);
        // "zzzz" is the only all-Absent answer
        assert_eq!(bins[0], 1);
        assert_eq!(bins[usize::from(PatternCode::solved(4).value())], 1);
    }

    #[test]
    fn bin_counts_empty_remaining() {
        let vocab = sample();
        let cache = FeedbackCache::build(&vocab);
        assert!(cache.bin_counts(0, &[]).iter().all(|&c| c == 0));
    }

    #[test]
    fn lookup_unknown_word() {
        let vocab = sample();
        let cache = FeedbackCache::build(&vocab);
        assert!(cache.lookup(&vocab, "cccc", "aabb").is_err());
        assert_eq!(
            cache.lookup(&vocab, "aabb", "bbaa").unwrap().to_string(),
            "aabb"
        );
    }
}
