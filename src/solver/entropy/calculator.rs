//! Shannon entropy of pattern histograms
//!
//! Given how many remaining candidates land in each pattern bucket for one
//! guess, computes the expected information gain of that guess.

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy from a pattern histogram
///
/// H = -Σ p * log₂(p), with p = count / total over non-empty buckets only.
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one bucket holds everything)
/// - Returns 0.0 for an empty histogram
/// - Maximized for a uniform distribution, bounded by log₂(buckets)
///
/// # Examples
/// ```
/// use wordle_entropy::solver::entropy::shannon_entropy;
///
/// let uniform = [25, 25, 0, 25, 25];
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining and worst partition from a histogram
#[must_use]
pub fn calculate_metrics(counts: &[usize]) -> GuessMetrics {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    // Each bucket is hit with probability size/total and leaves size candidates
    let expected_remaining = counts
        .iter()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(counts),
        expected_remaining,
        max_partition: counts.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let entropy = shannon_entropy(&[1, 1, 1, 1]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        // Only one pattern = 0 bits (no uncertainty)
        let entropy = shannon_entropy(&[0, 10, 0]);
        assert!(entropy.abs() < 0.001);
        assert!(!entropy.is_nan());
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let uniform = [25, 25, 25, 25];
        let skewed = [97, 1, 1, 1];
        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_bounds() {
        let counts = [10, 20, 30];
        let entropy = shannon_entropy(&counts);
        assert!(entropy >= 0.0);
        assert!(entropy <= 3f64.log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!((shannon_entropy(&[]) - 0.0).abs() < f64::EPSILON);
        assert!((shannon_entropy(&[0, 0, 0]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn perfect_split_is_one_bit() {
        let entropy = shannon_entropy(&[1, 0, 0, 1]);
        assert!((entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn metrics_for_split() {
        let metrics = calculate_metrics(&[2, 0, 1, 1]);
        assert!((metrics.entropy - 1.5).abs() < 1e-12);
        // (2*2 + 1*1 + 1*1) / 4
        assert!((metrics.expected_remaining - 1.5).abs() < 1e-12);
        assert_eq!(metrics.max_partition, 2);
    }

    #[test]
    fn metrics_empty() {
        let metrics = calculate_metrics(&[0; 9]);
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }
}
