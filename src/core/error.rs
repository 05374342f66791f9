//! Error type shared by the solving core

use std::fmt;
use std::io;

/// Errors produced by the feedback rule, vocabulary, cache and solver
#[derive(Debug)]
pub enum Error {
    /// Two sequences that must be positionally aligned have different lengths
    LengthMismatch { expected: usize, actual: usize },
    /// A word lookup outside the vocabulary (or the current candidate view)
    UnknownWord(String),
    /// A cache matrix whose shape does not match the vocabulary
    SizeMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },
    /// The cache disagrees with the live feedback rule for this pair
    CacheValidationFailure { guess: String, answer: String },
    /// A self-test asked to run zero repetitions
    NoSelfTest,
    /// No candidate words remain
    EmptyCandidates,
    /// A word that is empty, too long, or not lowercase ASCII
    InvalidWord(String),
    /// A pattern code outside `[0, 3^len)`
    InvalidPatternCode { code: u32, len: usize },
    /// Feedback that cannot be parsed or does not belong to the guess
    InvalidFeedback(String),
    /// A persisted cache blob with a bad header or truncated body
    MalformedCache(String),
    Io(io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Length mismatch: expected {expected} letters, got {actual}")
            }
            Self::UnknownWord(word) => write!(f, "Word '{word}' is not in the vocabulary"),
            Self::SizeMismatch {
                expected,
                rows,
                cols,
            } => write!(
                f,
                "Feedback matrix does not have the correct shape (expected: ({expected}, {expected}), got: ({rows}, {cols}))"
            ),
            Self::CacheValidationFailure { guess, answer } => write!(
                f,
                "Feedback matrix does not match the word list (guess '{guess}', answer '{answer}'), regenerate the matrix"
            ),
            Self::NoSelfTest => write!(
                f,
                "Self-test needs at least one repetition; an unchecked feedback matrix is never used"
            ),
            Self::EmptyCandidates => {
                write!(f, "No candidate words remain; the feedback is contradictory")
            }
            Self::InvalidWord(reason) => write!(f, "Invalid word: {reason}"),
            Self::InvalidPatternCode { code, len } => {
                write!(f, "Pattern code {code} is out of range for {len}-letter words")
            }
            Self::InvalidFeedback(reason) => write!(f, "Invalid feedback: {reason}"),
            Self::MalformedCache(reason) => write!(f, "Malformed feedback matrix: {reason}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
