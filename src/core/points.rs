//! core/points.rs — synthetic data points and bootstrap sampling.
//!
//! The bagging animation never touches real data: it scatters a handful of
//! fake "observations" (shape + color + size) and draws index samples from
//! them with replacement. All randomness comes through a caller-seeded rng
//! so a given seed replays the identical animation.

use rand::Rng;

/// Position in the logical scene space (see [`crate::core::layout`]).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dist(self, other: Pos) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Marker shape of a synthetic observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];
}

/// One fake observation: purely cosmetic attributes plus its home position
/// in the dataset cloud. Owned by the animation; rebuilt on regeneration.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticPoint {
    pub shape: Shape,
    pub color: [u8; 3],
    pub size: f32,
    pub home: Pos,
}

/// Marker palette (colorblind-safe-ish primaries on the light background).
pub const PALETTE: [[u8; 3]; 4] = [
    [214, 96, 77],  // brick red
    [67, 112, 181], // blue
    [46, 139, 87],  // sea green
    [218, 165, 32], // goldenrod
];

/// Scatter `count` synthetic points uniformly inside the given bounds.
pub fn generate_points<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    x_range: (f32, f32),
    y_range: (f32, f32),
) -> Vec<SyntheticPoint> {
    (0..count)
        .map(|_| SyntheticPoint {
            shape: Shape::ALL[rng.random_range(0..Shape::ALL.len())],
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            size: rng.random_range(4.0..7.0),
            home: Pos::new(
                rng.random_range(x_range.0..x_range.1),
                rng.random_range(y_range.0..y_range.1),
            ),
        })
        .collect()
}

/// Draw `draw_count` indices from `0..n_points` with replacement.
///
/// Order is kept; duplicates are the whole point of a bootstrap sample.
pub fn bootstrap_sample<R: Rng + ?Sized>(
    rng: &mut R,
    n_points: usize,
    draw_count: usize,
) -> Vec<usize> {
    (0..draw_count)
        .map(|_| rng.random_range(0..n_points))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generation_is_reproducible_per_seed() {
        let a = generate_points(
            &mut StdRng::seed_from_u64(7),
            20,
            (0.0, 100.0),
            (0.0, 50.0),
        );
        let b = generate_points(
            &mut StdRng::seed_from_u64(7),
            20,
            (0.0, 100.0),
            (0.0, 50.0),
        );
        assert_eq!(a.len(), 20);
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.shape, pb.shape);
            assert_eq!(pa.color, pb.color);
            assert_eq!(pa.home, pb.home);
        }
    }

    #[test]
    fn points_stay_inside_bounds() {
        let pts = generate_points(
            &mut StdRng::seed_from_u64(3),
            200,
            (10.0, 20.0),
            (-5.0, 5.0),
        );
        for p in &pts {
            assert!(p.home.x >= 10.0 && p.home.x < 20.0);
            assert!(p.home.y >= -5.0 && p.home.y < 5.0);
            assert!(p.size >= 4.0 && p.size < 7.0);
        }
    }

    #[test]
    fn bootstrap_indices_in_range_and_ordered_length() {
        let mut rng = StdRng::seed_from_u64(11);
        let sample = bootstrap_sample(&mut rng, 30, 12);
        assert_eq!(sample.len(), 12);
        assert!(sample.iter().all(|&i| i < 30));
    }

    #[test]
    fn bootstrap_eventually_repeats() {
        // With replacement, 50 draws from 10 items must collide.
        let mut rng = StdRng::seed_from_u64(1);
        let sample = bootstrap_sample(&mut rng, 10, 50);
        let mut seen = [false; 10];
        let mut dup = false;
        for &i in &sample {
            if seen[i] {
                dup = true;
            }
            seen[i] = true;
        }
        assert!(dup);
    }

    #[test]
    fn dist_is_euclidean() {
        let a = Pos::new(0.0, 0.0);
        let b = Pos::new(3.0, 4.0);
        assert!((a.dist(b) - 5.0).abs() < 1e-6);
    }
}
