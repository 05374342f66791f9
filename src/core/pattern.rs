//! Feedback statuses and per-letter patterns
//!
//! A [`Pattern`] is the feedback shown for one guess: each letter of the guess
//! paired with its [`Status`]. Patterns render the way the game log shows them:
//! uppercase for Correct, lowercase for Present and `~` for Absent.

use super::code::PatternCode;
use super::error::{Error, Result};
use super::feedback::check_word;
use std::fmt;

/// Feedback for a single letter
///
/// The discriminant is the letter's base-3 digit in a [`PatternCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Status {
    /// Base-3 digit value
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Parse a single feedback character
    ///
    /// Accepts digits (`0`/`1`/`2`), colour letters (`-`/`Y`/`G`) and the
    /// square emoji the game shares results with.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | '-' | '_' | '~' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// One letter of a guess together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterStatus {
    pub letter: u8,
    pub status: Status,
}

impl LetterStatus {
    #[must_use]
    pub const fn new(letter: u8, status: Status) -> Self {
        Self { letter, status }
    }
}

/// Feedback for a whole guess, positionally aligned with the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    letters: Vec<LetterStatus>,
}

impl Pattern {
    /// Pair each letter of `guess` with the matching status
    ///
    /// # Errors
    /// Returns `InvalidWord` for a malformed guess and `LengthMismatch` if the
    /// number of statuses differs from the guess length.
    pub fn from_statuses(guess: &str, statuses: &[Status]) -> Result<Self> {
        check_word(guess)?;
        if guess.len() != statuses.len() {
            return Err(Error::LengthMismatch {
                expected: guess.len(),
                actual: statuses.len(),
            });
        }

        Ok(Self::zip(guess.as_bytes(), statuses))
    }

    /// Build from already validated parts
    pub(crate) fn zip(guess: &[u8], statuses: &[Status]) -> Self {
        let letters = guess
            .iter()
            .zip(statuses)
            .map(|(&letter, &status)| LetterStatus::new(letter, status))
            .collect();
        Self { letters }
    }

    /// The all-Correct pattern for `guess`
    ///
    /// # Errors
    /// Returns `InvalidWord` for a malformed guess.
    pub fn solved(guess: &str) -> Result<Self> {
        Self::from_statuses(guess, &vec![Status::Correct; guess.len()])
    }

    /// Parse typed feedback for `guess`
    ///
    /// Each character of `feedback` is one status, see [`Status::from_char`].
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Pattern;
    ///
    /// let digits = Pattern::parse("aabb", "2211").unwrap();
    /// let colours = Pattern::parse("aabb", "GGYY").unwrap();
    /// assert_eq!(digits, colours);
    /// assert_eq!(digits.to_string(), "AAbb");
    /// ```
    ///
    /// # Errors
    /// Returns `InvalidFeedback` for unknown characters and `LengthMismatch`
    /// when the feedback is not one character per letter.
    pub fn parse(guess: &str, feedback: &str) -> Result<Self> {
        let statuses = feedback
            .trim()
            .chars()
            .map(|ch| {
                Status::from_char(ch).ok_or_else(|| {
                    Error::InvalidFeedback(format!(
                        "invalid letter status '{ch}', must be '0', '1' or '2'"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_statuses(guess, &statuses)
    }

    /// Rebuild the pattern of `guess` from its code
    ///
    /// # Errors
    /// Returns `InvalidPatternCode` if `code` is out of range for the guess length.
    pub fn from_code(guess: &str, code: PatternCode) -> Result<Self> {
        check_word(guess)?;
        let statuses = code.decode(guess.len())?;
        Ok(Self::zip(guess.as_bytes(), &statuses))
    }

    /// Encoded form of this pattern
    #[must_use]
    pub fn code(&self) -> PatternCode {
        PatternCode::encode(self.statuses())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterStatus] {
        &self.letters
    }

    /// Statuses in letter order
    pub fn statuses(&self) -> impl Iterator<Item = Status> + '_ {
        self.letters.iter().map(|ls| ls.status)
    }

    /// The guess this pattern was produced for
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|ls| char::from(ls.letter)).collect()
    }

    /// Every letter is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(|ls| ls.status == Status::Correct)
    }

    /// Number of Correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.statuses().filter(|&s| s == Status::Correct).count()
    }

    /// Number of Present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.statuses().filter(|&s| s == Status::Present).count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ls in &self.letters {
            let ch = char::from(ls.letter);
            let shown = match ls.status {
                Status::Correct => ch.to_ascii_uppercase(),
                Status::Present => ch.to_ascii_lowercase(),
                Status::Absent => '~',
            };
            write!(f, "{shown}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_digits() {
        assert_eq!(Status::Absent.digit(), 0);
        assert_eq!(Status::Present.digit(), 1);
        assert_eq!(Status::Correct.digit(), 2);
    }

    #[test]
    fn parse_digit_feedback() {
        let pattern = Pattern::parse("bbba", "0110").unwrap();
        assert_eq!(
            pattern.letters(),
            &[
                LetterStatus::new(b'b', Status::Absent),
                LetterStatus::new(b'b', Status::Present),
                LetterStatus::new(b'b', Status::Present),
                LetterStatus::new(b'a', Status::Absent),
            ]
        );
        assert_eq!(pattern.to_string(), "~bb~");
    }

    #[test]
    fn parse_emoji_feedback() {
        let emoji = Pattern::parse("crane", "🟩🟨⬜🟩🟨").unwrap();
        let colours = Pattern::parse("crane", "GY-GY").unwrap();
        assert_eq!(emoji, colours);
    }

    #[test]
    fn parse_rejects_bad_feedback() {
        assert!(matches!(
            Pattern::parse("aabb", "2213"),
            Err(Error::InvalidFeedback(_))
        ));
        assert!(matches!(
            Pattern::parse("aabb", "221"),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            Pattern::parse("AABB", "2211"),
            Err(Error::InvalidWord(_))
        ));
    }

    #[test]
    fn solved_pattern() {
        let pattern = Pattern::solved("crane").unwrap();
        assert!(pattern.is_solved());
        assert_eq!(pattern.count_correct(), 5);
        assert_eq!(pattern.to_string(), "CRANE");
        assert_eq!(pattern.word(), "crane");
    }

    #[test]
    fn counts() {
        let pattern = Pattern::parse("crane", "21020").unwrap();
        assert_eq!(pattern.count_correct(), 2);
        assert_eq!(pattern.count_present(), 1);
        assert!(!pattern.is_solved());
    }

    #[test]
    fn code_round_trip_through_pattern() {
        let pattern = Pattern::parse("crane", "21020").unwrap();
        let rebuilt = Pattern::from_code("crane", pattern.code()).unwrap();
        assert_eq!(rebuilt, pattern);
    }
}
