//! The game's feedback rule
//!
//! Feedback is resolved in two passes so that repeated letters behave like
//! the game does:
//! 1. Exact position matches are Correct and consume one copy of the letter
//!    from the answer's pool
//! 2. Remaining positions, left to right, are Present while the pool still
//!    holds the letter, otherwise Absent
//!
//! When the guess repeats a letter more often than the answer has it, the
//! leftmost unmatched copies get Present.

use super::code::{MAX_WORD_LEN, PatternCode};
use super::error::{Error, Result};
use super::pattern::{Pattern, Status};

/// Per-letter counts of a lowercase word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LetterCounts([u8; 26]);

impl LetterCounts {
    pub(crate) fn of(word: &[u8]) -> Self {
        let mut counts = Self::default();
        for &letter in word {
            counts.0[slot(letter)] += 1;
        }
        counts
    }

    #[inline]
    pub(crate) const fn get(&self, letter: u8) -> u8 {
        self.0[slot(letter)]
    }

    /// Remove one copy of `letter`, returning false if none is left
    #[inline]
    pub(crate) fn take(&mut self, letter: u8) -> bool {
        let count = &mut self.0[slot(letter)];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }
}

#[inline]
const fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Check that `word` is usable: 1 to 10 lowercase ASCII letters
///
/// # Errors
/// Returns `InvalidWord` describing the first problem found.
pub fn check_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(Error::InvalidWord("word is empty".to_string()));
    }
    if word.len() > MAX_WORD_LEN {
        return Err(Error::InvalidWord(format!(
            "'{word}' is longer than {MAX_WORD_LEN} letters"
        )));
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(Error::InvalidWord(format!(
            "'{word}' must contain only lowercase ASCII letters"
        )));
    }
    Ok(())
}

fn check_pair(guess: &str, answer: &str) -> Result<()> {
    check_word(guess)?;
    check_word(answer)?;
    if guess.len() != answer.len() {
        return Err(Error::LengthMismatch {
            expected: guess.len(),
            actual: answer.len(),
        });
    }
    Ok(())
}

/// Resolve statuses for two validated, equal-length words
#[allow(clippy::needless_range_loop)]
fn resolve(guess: &[u8], answer: &[u8]) -> [Status; MAX_WORD_LEN] {
    let len = guess.len();
    let mut decided: [Option<Status>; MAX_WORD_LEN] = [None; MAX_WORD_LEN];
    let mut pool = LetterCounts::of(answer);

    for i in 0..len {
        if guess[i] == answer[i] {
            decided[i] = Some(Status::Correct);
            pool.take(guess[i]);
        }
    }

    let mut result = [Status::Absent; MAX_WORD_LEN];
    for i in 0..len {
        result[i] = match decided[i] {
            Some(status) => status,
            None if pool.take(guess[i]) => Status::Present,
            None => Status::Absent,
        };
    }

    result
}

/// Feedback shown when `guess` is played against `answer`
///
/// # Examples
/// ```
/// use wordle_entropy::core::generate;
///
/// let pattern = generate("aabbb", "aaabb").unwrap();
/// assert_eq!(pattern.to_string(), "AA~BB");
///
/// let pattern = generate("bbaaa", "aaabb").unwrap();
/// assert_eq!(pattern.to_string(), "bbAaa");
/// ```
///
/// # Errors
/// Returns `InvalidWord` for malformed words and `LengthMismatch` if the
/// words differ in length.
pub fn generate(guess: &str, answer: &str) -> Result<Pattern> {
    check_pair(guess, answer)?;
    let statuses = resolve(guess.as_bytes(), answer.as_bytes());
    Ok(Pattern::zip(guess.as_bytes(), &statuses[..guess.len()]))
}

/// Statuses only, without the guess letters
///
/// # Errors
/// Same as [`generate`].
pub fn statuses(guess: &str, answer: &str) -> Result<Vec<Status>> {
    check_pair(guess, answer)?;
    Ok(resolve(guess.as_bytes(), answer.as_bytes())[..guess.len()].to_vec())
}

/// Encoded feedback for two words already validated by the vocabulary
#[inline]
pub(crate) fn code_for(guess: &[u8], answer: &[u8]) -> PatternCode {
    PatternCode::encode(resolve(guess, answer)[..guess.len()].iter().copied())
}
