//! core/ensemble.rs — Condorcet's jury theorem (majority-vote accuracy).
//!
//! An ensemble of n independent voters, each correct with probability p,
//! decides by strict majority. The chance the majority is correct is the
//! upper tail of Binomial(n, p) from ⌊n/2⌋+1 votes upward.

/// Exact binomial coefficient C(n, k).
///
/// Multiplicative form: every prefix product is itself a binomial
/// coefficient, so each division is exact. No floating point involved.
pub fn binomial(n: u64, k: u64) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
    }
    acc
}

/// P(strict majority of n voters is correct), each voter i.i.d. Bernoulli(p).
///
/// Sums C(n,i)·p^i·(1-p)^(n-i) for i = ⌊n/2⌋+1 ..= n. Intended for odd n
/// (no ties); even n is accepted and uses the same strict-majority cutoff.
pub fn majority_accuracy(p: f64, n: u32) -> f64 {
    let k = n / 2 + 1;
    (k..=n)
        .map(|i| {
            let c = binomial(n as u64, i as u64) as f64;
            c * p.powi(i as i32) * (1.0 - p).powi((n - i) as i32)
        })
        .sum()
}

/// Series plotted against voter count: (n, accuracy) for odd n in 1..=max_n.
pub fn accuracy_curve(p: f64, max_n: u32) -> Vec<(u32, f64)> {
    (1..=max_n)
        .step_by(2)
        .map(|n| (n, majority_accuracy(p, n)))
        .collect()
}

/// Snap an even voter count up to the next odd value (majority needs no ties).
#[inline]
pub fn snap_odd(n: u32) -> u32 {
    if n % 2 == 0 { n + 1 } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_small_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(25, 12), 5_200_300);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn binomial_symmetry() {
        for n in 0..=30u64 {
            for k in 0..=n {
                assert_eq!(binomial(n, k), binomial(n, n - k), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn single_voter_is_identity() {
        for p in [0.0, 0.37, 0.5, 0.6, 0.99, 1.0] {
            assert!((majority_accuracy(p, 1) - p).abs() < 1e-12);
        }
    }

    #[test]
    fn degenerate_probabilities() {
        for n in (1..=25u32).step_by(2) {
            assert_eq!(majority_accuracy(0.0, n), 0.0, "p=0 n={n}");
            assert!((majority_accuracy(1.0, n) - 1.0).abs() < 1e-12, "p=1 n={n}");
        }
    }

    #[test]
    fn known_values() {
        // 3 voters at 60%: 3·0.6²·0.4 + 0.6³ = 0.648
        assert!((majority_accuracy(0.6, 3) - 0.648).abs() < 1e-12);
        // 25 voters at 60%: P(X ≥ 13), X ~ Bin(25, 0.6) = 0.846232...
        assert!((majority_accuracy(0.6, 25) - 0.846232).abs() < 1e-6);
    }

    #[test]
    fn curve_covers_odd_counts() {
        let curve = accuracy_curve(0.6, 25);
        assert_eq!(curve.len(), 13);
        assert_eq!(curve.first().unwrap().0, 1);
        assert_eq!(curve.last().unwrap().0, 25);
        assert!(curve.iter().all(|(n, _)| n % 2 == 1));
    }

    #[test]
    fn snap_odd_behaviour() {
        assert_eq!(snap_odd(1), 1);
        assert_eq!(snap_odd(2), 3);
        assert_eq!(snap_odd(24), 25);
        assert_eq!(snap_odd(25), 25);
    }
}
