//! Base-3 pattern encoding
//!
//! A pattern code packs one status per letter into a single integer:
//! - 0 = Absent
//! - 1 = Present
//! - 2 = Correct
//!
//! The first letter is the most significant digit, so for a 5-letter word
//! "Absent, Absent, Present, Correct, Absent" is `00120` in base 3 (15).

use super::error::{Error, Result};
use super::pattern::Status;

/// Longest supported word; `3^10` still fits in a `u16` cell
pub const MAX_WORD_LEN: usize = 10;

/// Number of distinct patterns for `len`-letter words (`3^len`)
///
/// Saturates at `usize::MAX` for lengths whose pattern count does not fit.
///
/// # Examples
/// ```
/// use wordle_entropy::core::pattern_space;
///
/// assert_eq!(pattern_space(5), 243);
/// ```
#[inline]
#[must_use]
pub const fn pattern_space(len: usize) -> usize {
    if len >= usize::BITS as usize {
        return usize::MAX;
    }
    3usize.saturating_pow(len as u32)
}

/// Dense integer form of a pattern, in `[0, 3^len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternCode(u16);

impl PatternCode {
    /// Wrap a raw cell value
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Raw value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Code of the all-Correct pattern for `len` letters
    #[must_use]
    pub const fn solved(len: usize) -> Self {
        Self((pattern_space(len) - 1) as u16)
    }

    /// Encode statuses, first status most significant
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{PatternCode, Status};
    ///
    /// let code = PatternCode::encode([Status::Absent, Status::Absent, Status::Present, Status::Correct]);
    /// assert_eq!(code.value(), 5);
    /// ```
    ///
    /// # Panics
    /// Panics if given more than [`MAX_WORD_LEN`] statuses, whose code would
    /// not fit a cell.
    pub fn encode<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        let mut value = 0u16;
        for (i, status) in statuses.into_iter().enumerate() {
            assert!(
                i < MAX_WORD_LEN,
                "patterns longer than {MAX_WORD_LEN} letters cannot be encoded"
            );
            value = value * 3 + u16::from(status.digit());
        }
        Self(value)
    }

    /// Decode into `len` statuses
    ///
    /// Digits are taken least significant first (the last letter) and the
    /// result is padded with Absent at the front.
    ///
    /// # Errors
    /// Returns `InvalidPatternCode` if the code is not below `3^len`.
    pub fn decode(self, len: usize) -> Result<Vec<Status>> {
        if len > MAX_WORD_LEN || usize::from(self.0) >= pattern_space(len) {
            return Err(Error::InvalidPatternCode {
                code: u32::from(self.0),
                len,
            });
        }

        let mut statuses = vec![Status::Absent; len];
        let mut value = self.0;
        for slot in statuses.iter_mut().rev() {
            if value == 0 {
                break;
            }
            *slot = match value % 3 {
                0 => Status::Absent,
                1 => Status::Present,
                _ => Status::Correct,
            };
            value /= 3;
        }

        Ok(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_values() {
        assert_eq!(PatternCode::encode([Status::Absent; 5]).value(), 0);
        assert_eq!(PatternCode::encode([Status::Correct; 5]).value(), 242);
        assert_eq!(
            PatternCode::encode([
                Status::Absent,
                Status::Absent,
                Status::Absent,
                Status::Absent,
                Status::Present
            ])
            .value(),
            1
        );
    }

    #[test]
    fn decode_known_values() {
        assert_eq!(PatternCode::new(0).decode(5).unwrap(), vec![Status::Absent; 5]);
        assert_eq!(
            PatternCode::new(242).decode(5).unwrap(),
            vec![Status::Correct; 5]
        );
        assert_eq!(
            PatternCode::new(1).decode(5).unwrap(),
            vec![
                Status::Absent,
                Status::Absent,
                Status::Absent,
                Status::Absent,
                Status::Present
            ]
        );
    }

    #[test]
    fn round_trip_every_code() {
        for len in 0..=6 {
            for value in 0..pattern_space(len) {
                let code = PatternCode::new(value as u16);
                let statuses = code.decode(len).unwrap();
                assert_eq!(statuses.len(), len);
                assert_eq!(PatternCode::encode(statuses), code);
            }
        }
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert!(matches!(
            PatternCode::new(243).decode(5),
            Err(Error::InvalidPatternCode { code: 243, len: 5 })
        ));
        assert!(PatternCode::new(0).decode(MAX_WORD_LEN + 1).is_err());
    }

    #[test]
    #[should_panic(expected = "cannot be encoded")]
    fn encode_rejects_overlong_pattern() {
        let _ = PatternCode::encode([Status::Correct; MAX_WORD_LEN + 1]);
    }

    #[test]
    fn longest_pattern_encodes() {
        let code = PatternCode::encode([Status::Correct; MAX_WORD_LEN]);
        assert_eq!(code, PatternCode::solved(MAX_WORD_LEN));
    }

    #[test]
    fn pattern_space_saturates() {
        assert_eq!(pattern_space(0), 1);
        assert_eq!(pattern_space(MAX_WORD_LEN), 59_049);
        assert_eq!(pattern_space(64), usize::MAX);
        assert_eq!(pattern_space(usize::MAX), usize::MAX);
    }

    #[test]
    fn largest_code_fits_cell() {
        assert_eq!(
            usize::from(PatternCode::solved(MAX_WORD_LEN).value()),
            pattern_space(MAX_WORD_LEN) - 1
        );
        assert_eq!(PatternCode::solved(5).value(), 242);
    }
}
