//! Candidate filtering against observed feedback
//!
//! A candidate survives when it could have produced the observed pattern as
//! the answer. For any pattern the feedback rule can actually produce,
//! `is_consistent(w, &generate(g, a))` holds exactly when
//! `generate(g, w) == generate(g, a)`.

use crate::core::{LetterCounts, Pattern, Status};

/// Could `candidate` be the answer that produced `pattern`?
///
/// Candidates of the wrong length or with anything but lowercase ASCII
/// letters never match.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Pattern;
/// use wordle_entropy::wordlists::filter::is_consistent;
///
/// let pattern = Pattern::parse("aabb", "0000").unwrap();
/// assert!(is_consistent("zzzz", &pattern));
/// assert!(!is_consistent("abab", &pattern));
/// ```
#[must_use]
pub fn is_consistent(candidate: &str, pattern: &Pattern) -> bool {
    matches(candidate.as_bytes(), pattern)
}

pub(crate) fn matches(candidate: &[u8], pattern: &Pattern) -> bool {
    let letters = pattern.letters();
    if candidate.len() != letters.len() || !candidate.iter().all(u8::is_ascii_lowercase) {
        return false;
    }

    // Letters of the candidate not yet claimed by a Correct or Present mark
    let mut unused = LetterCounts::of(candidate);

    for (&letter, feedback) in candidate.iter().zip(letters) {
        let same_letter = letter == feedback.letter;
        match feedback.status {
            Status::Correct => {
                if !same_letter {
                    return false;
                }
                unused.take(letter);
            }
            // A matching letter would have been Correct
            Status::Present | Status::Absent if same_letter => return false,
            Status::Present | Status::Absent => {}
        }
    }

    for feedback in letters.iter().filter(|f| f.status == Status::Present) {
        if !unused.take(feedback.letter) {
            return false;
        }
    }

    letters
        .iter()
        .filter(|f| f.status == Status::Absent)
        .all(|f| unused.get(f.letter) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate;

    fn pattern(guess: &str, digits: &str) -> Pattern {
        Pattern::parse(guess, digits).unwrap()
    }

    #[test]
    fn correct_requires_same_letter() {
        let p = pattern("crane", "22222");
        assert!(is_consistent("crane", &p));
        assert!(!is_consistent("crank", &p));
    }

    #[test]
    fn present_or_absent_forbid_same_letter() {
        let p = pattern("crane", "10000");
        assert!(!is_consistent("cxxxx", &p));
        assert!(is_consistent("xcxxx", &p));
    }

    #[test]
    fn present_needs_unclaimed_copy() {
        // One 'a' is Correct; the Present 'a' needs a second copy
        let p = pattern("aab", "210");
        assert!(is_consistent("axa", &p));
        assert!(!is_consistent("axx", &p));
    }

    #[test]
    fn absent_caps_letter_count() {
        // Present 'e' followed by Absent 'e's: exactly one 'e' in the answer
        let p = pattern("geese", "01000");
        assert!(is_consistent("eblxx", &p));
        assert!(!is_consistent("exxex", &p));
    }

    #[test]
    fn wrong_length_never_matches() {
        let p = pattern("aabb", "0000");
        assert!(!is_consistent("zzz", &p));
        assert!(!is_consistent("zzzzz", &p));
    }

    #[test]
    fn non_lowercase_candidate_never_matches() {
        let p = pattern("aabb", "0000");
        assert!(!is_consistent("ZZZZ", &p));
        assert!(!is_consistent("ab1d", &p));
        assert!(!is_consistent("zzé", &p));
    }

    #[test]
    fn true_answer_always_survives() {
        for (guess, answer) in [
            ("aabbb", "aaabb"),
            ("bbaaa", "aaabb"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("geese", "eerie"),
        ] {
            let p = generate(guess, answer).unwrap();
            assert!(is_consistent(answer, &p), "{guess} vs {answer}");
        }
    }
}
