//! Vocabularies and candidate narrowing
//!
//! A [`Vocabulary`] holds a sorted, deduplicated word arena shared between
//! clones, plus an owned view of the words still consistent with the feedback
//! seen so far. Full-vocabulary indices never change, which keeps them valid
//! as feedback-matrix coordinates between runs.

pub mod filter;
pub mod loader;

use crate::core::{Error, Pattern, Result, check_word};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Fixed-length word set with a narrowing candidate view
///
/// View operations (`len`, `contains`, `index_of`, `word_at`) address the
/// remaining candidates with dense indices; `full_*` operations address the
/// whole vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Arc<[String]>,
    lookup: Arc<FxHashMap<String, usize>>,
    remaining: Vec<usize>,
    word_len: usize,
}

impl Vocabulary {
    /// Build a vocabulary, sorting and deduplicating the words
    ///
    /// # Errors
    /// Returns `InvalidWord` for an empty list or a malformed word, and
    /// `LengthMismatch` if the words are not all the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::new(["slate", "crane", "slate"]).unwrap();
    /// assert_eq!(vocab.len(), 2);
    /// assert_eq!(vocab.word_at(0), Some("crane"));
    /// assert_eq!(vocab.index_of("slate").unwrap(), 1);
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        let mut word_len = None;

        for word in words {
            let word = word.as_ref();
            check_word(word)?;
            match word_len {
                None => word_len = Some(word.len()),
                Some(expected) if expected != word.len() => {
                    return Err(Error::LengthMismatch {
                        expected,
                        actual: word.len(),
                    });
                }
                Some(_) => {}
            }
            list.push(word.to_string());
        }

        let word_len =
            word_len.ok_or_else(|| Error::InvalidWord("vocabulary is empty".to_string()))?;

        list.sort_unstable();
        list.dedup();

        let lookup = list
            .iter()
            .enumerate()
            .map(|(index, word)| (word.clone(), index))
            .collect::<FxHashMap<_, _>>();
        let remaining = (0..list.len()).collect();

        Ok(Self {
            words: list.into(),
            lookup: Arc::new(lookup),
            remaining,
            word_len,
        })
    }

    /// Length of every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Is `word` still a candidate?
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.view_position(word).is_some()
    }

    /// Dense index of `word` among the remaining candidates
    ///
    /// # Errors
    /// Returns `UnknownWord` if `word` is not a remaining candidate.
    pub fn index_of(&self, word: &str) -> Result<usize> {
        self.view_position(word)
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }

    /// Remaining candidate at dense `index`
    #[must_use]
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.remaining.get(index).map(|&full| self.words[full].as_str())
    }

    /// Remaining candidates in order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.remaining.iter().map(|&full| self.words[full].as_str())
    }

    /// Full-vocabulary indices of the remaining candidates, ascending
    #[inline]
    #[must_use]
    pub fn remaining_indices(&self) -> &[usize] {
        &self.remaining
    }

    /// Size of the whole vocabulary
    #[inline]
    #[must_use]
    pub fn full_len(&self) -> usize {
        self.words.len()
    }

    /// Stable index of `word` in the whole vocabulary
    ///
    /// # Errors
    /// Returns `UnknownWord` if `word` is not in the vocabulary.
    pub fn full_index_of(&self, word: &str) -> Result<usize> {
        self.lookup
            .get(word)
            .copied()
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }

    /// Word at stable `index` in the whole vocabulary
    #[must_use]
    pub fn full_word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// The whole vocabulary in index order
    #[inline]
    #[must_use]
    pub fn full_words(&self) -> &[String] {
        &self.words
    }

    /// Drop every candidate that could not have produced `pattern` for `guess`
    ///
    /// Relative order is kept and dense indices are reassigned from zero.
    /// Returns the number of candidates removed.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the guess or pattern length differs from
    /// the vocabulary's, and `InvalidFeedback` if the pattern was not
    /// produced for `guess`.
    pub fn narrow(&mut self, guess: &str, pattern: &Pattern) -> Result<usize> {
        for actual in [guess.len(), pattern.len()] {
            if actual != self.word_len {
                return Err(Error::LengthMismatch {
                    expected: self.word_len,
                    actual,
                });
            }
        }
        if pattern.word() != guess {
            return Err(Error::InvalidFeedback(format!(
                "feedback '{pattern}' does not belong to guess '{guess}'"
            )));
        }

        let before = self.remaining.len();
        let words = &self.words;
        self.remaining
            .retain(|&full| filter::matches(words[full].as_bytes(), pattern));

        Ok(before - self.remaining.len())
    }

    /// Restore the full vocabulary as the candidate set
    pub fn reset(&mut self) {
        self.remaining = (0..self.words.len()).collect();
    }

    fn view_position(&self, word: &str) -> Option<usize> {
        let full = *self.lookup.get(word)?;
        self.remaining.binary_search(&full).ok()
    }
}
