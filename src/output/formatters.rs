//! Formatting utilities for terminal output

use crate::core::{Pattern, Status};
use indicatif::ProgressStyle;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern
        .statuses()
        .map(|status| match status {
            Status::Absent => '⬜',
            Status::Present => '🟨',
            Status::Correct => '🟩',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a guess could reveal
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}

/// Upper bound on the entropy of one guess
///
/// A guess cannot split `candidates` words into more than `pattern_space`
/// buckets, nor into more buckets than there are words.
#[must_use]
pub fn max_entropy(candidates: usize, pattern_space: usize) -> f64 {
    (candidates.min(pattern_space).max(1) as f64).log2()
}

/// Style shared by the matrix build and benchmark progress bars
#[must_use]
pub fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░")
}
