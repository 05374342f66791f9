//! Core domain types for the guessing game
//!
//! This module contains the feedback rule, its base-3 encoding and the error
//! type shared by the rest of the crate. Nothing here depends on a vocabulary.

mod code;
mod error;
mod feedback;
mod pattern;

pub use code::{MAX_WORD_LEN, PatternCode, pattern_space};
pub use error::{Error, Result};
pub use feedback::{check_word, generate, statuses};
pub use pattern::{LetterStatus, Pattern, Status};

pub(crate) use feedback::{LetterCounts, code_for};
