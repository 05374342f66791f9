//! Pure entropy-based word selection
//!
//! Picks the highest-entropy guess. Ties go to guesses that could themselves
//! be the answer, then to a random draw.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Entropies closer than this are treated as equal
pub const ENTROPY_TOLERANCE: f64 = 1e-9;

/// Entropy of one guess, addressed by full-vocabulary index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    pub index: usize,
    pub entropy: f64,
}

/// Select the best-scoring guess
///
/// Among guesses within [`ENTROPY_TOLERANCE`] of the best entropy, those for
/// which `is_candidate` holds are preferred; the final pick is uniform over
/// the preferred group. Returns `None` if `scores` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_entropy::solver::entropy::{GuessScore, select_best_guess};
///
/// let scores = [
///     GuessScore { index: 0, entropy: 1.0 },
///     GuessScore { index: 1, entropy: 1.0 },
///     GuessScore { index: 2, entropy: 0.5 },
/// ];
/// let mut rng = StdRng::seed_from_u64(0);
///
/// // Index 1 is a possible answer, index 0 is not
/// let best = select_best_guess(&scores, |i| i == 1, &mut rng).unwrap();
/// assert_eq!(best.index, 1);
/// ```
pub fn select_best_guess<F, R>(
    scores: &[GuessScore],
    is_candidate: F,
    rng: &mut R,
) -> Option<GuessScore>
where
    F: Fn(usize) -> bool,
    R: Rng + ?Sized,
{
    let best = scores
        .iter()
        .map(|score| score.entropy)
        .max_by(f64::total_cmp)?;

    let tied: Vec<GuessScore> = scores
        .iter()
        .filter(|score| best - score.entropy <= ENTROPY_TOLERANCE)
        .copied()
        .collect();

    let preferred: Vec<GuessScore> = tied
        .iter()
        .filter(|score| is_candidate(score.index))
        .copied()
        .collect();

    if preferred.is_empty() {
        tied.choose(rng).copied()
    } else {
        preferred.choose(rng).copied()
    }
}
