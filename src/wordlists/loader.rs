//! Word list loading utilities
//!
//! Word lists are plain text, one word per line. Lines are trimmed and
//! lowercased; blank lines are skipped.

use super::Vocabulary;
use crate::core::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Read the words of a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Load a word list file straight into a [`Vocabulary`]
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or any error from
/// [`Vocabulary::new`] if the words are unusable.
///
/// # Examples
/// ```no_run
/// use wordle_entropy::wordlists::loader::load_vocabulary;
///
/// let vocab = load_vocabulary("words.txt").unwrap();
/// println!("Loaded {} words", vocab.full_len());
/// ```
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    let words = load_words(path)?;
    Vocabulary::new(words)
}

/// Split word-list text into normalised words
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}
