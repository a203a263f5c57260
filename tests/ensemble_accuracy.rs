use jurybag::core::ensemble::{accuracy_curve, binomial, majority_accuracy, snap_odd};

const ODD_COUNTS: [u32; 13] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];

#[test]
fn edge_values_over_the_slider_range() {
    for &n in &ODD_COUNTS {
        assert_eq!(majority_accuracy(0.0, n), 0.0, "p=0 n={n}");
        assert!(
            (majority_accuracy(1.0, n) - 1.0).abs() < 1e-12,
            "p=1 n={n}"
        );
    }
    for p in [0.5, 0.6, 0.75, 0.9, 1.0] {
        assert!((majority_accuracy(p, 1) - p).abs() < 1e-12, "n=1 p={p}");
    }
}

#[test]
fn monotone_in_per_voter_accuracy() {
    for &n in &ODD_COUNTS {
        let mut prev = 0.0;
        for step in 0..=100 {
            let p = step as f64 / 100.0;
            let acc = majority_accuracy(p, n);
            assert!(
                acc + 1e-12 >= prev,
                "accuracy decreased at p={p} n={n}: {acc} < {prev}"
            );
            prev = acc;
        }
    }
}

#[test]
fn majority_amplification() {
    // Above a coin flip, more voters help; below, they hurt.
    for p in [0.55, 0.6, 0.75, 0.9] {
        for w in ODD_COUNTS.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            assert!(
                majority_accuracy(p, hi) + 1e-12 >= majority_accuracy(p, lo),
                "p={p}: n={hi} should beat n={lo}"
            );
        }
    }
    for p in [0.1, 0.25, 0.4, 0.45] {
        for w in ODD_COUNTS.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            assert!(
                majority_accuracy(p, hi) <= majority_accuracy(p, lo) + 1e-12,
                "p={p}: n={hi} should not beat n={lo}"
            );
        }
    }
}

#[test]
fn fair_coin_stays_a_fair_coin() {
    for &n in &ODD_COUNTS {
        assert!(
            (majority_accuracy(0.5, n) - 0.5).abs() < 1e-9,
            "p=0.5 n={n}"
        );
    }
}

#[test]
fn concrete_classroom_numbers() {
    // Hand-checked tail sums of Bin(n, 0.6): 0.648 for n=3, 0.846232 for n=25.
    assert!((majority_accuracy(0.6, 3) - 0.648).abs() < 1e-3);
    assert!((majority_accuracy(0.6, 25) - 0.846232).abs() < 1e-3);
}

#[test]
fn curve_matches_pointwise_evaluation() {
    let p = 0.7;
    for (n, acc) in accuracy_curve(p, 25) {
        assert!(n % 2 == 1);
        assert!((acc - majority_accuracy(p, n)).abs() < 1e-15);
    }
}

#[test]
fn binomial_row_sums_to_power_of_two() {
    for n in [1u64, 3, 7, 15, 25, 31] {
        let sum: u128 = (0..=n).map(|k| binomial(n, k)).sum();
        assert_eq!(sum, 1u128 << n, "row {n}");
    }
}

#[test]
fn snapping_keeps_slider_values_odd() {
    for n in 1..=25 {
        let snapped = snap_odd(n);
        assert_eq!(snapped % 2, 1);
        assert!(snapped >= n && snapped <= n + 1);
    }
}
