//! core/animation.rs — the two-phase bagging animation state machine.
//!
//! Phase 1: every bootstrap draw eases from its home in the dataset cloud
//! toward a slot in its sample panel. Phase 2: once all draws have settled,
//! a stage counter walks the narrative overlays and freezes at the end.
//! All state lives here and is mutated only by `tick` on the UI thread.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::core::easing::{MovingPoint, step_all};
use crate::core::layout::{dataset_region, sample_slot};
use crate::core::points::{SyntheticPoint, bootstrap_sample, generate_points};
use crate::core::stage::StageReveal;

/// Number of bootstrap samples illustrated.
pub const SAMPLE_COUNT: usize = 3;

/// Easing runs at a fixed logical rate so the motion is identical across
/// refresh rates (frame dt is accumulated into whole ticks).
const TICK_RATE_HZ: f32 = 60.0;

/// Tunables for one animation run.
#[derive(Clone, Debug)]
pub struct AnimationParams {
    pub point_count: usize,
    /// Draws per bootstrap sample (with replacement).
    pub sample_size: usize,
    /// Fraction of the remaining distance covered per tick.
    pub ease_fraction: f32,
    /// Remaining distance (logical units) below which a point is done.
    pub done_threshold: f32,
    /// Terminal value of the stage counter.
    pub stage_count: u32,
    /// Seconds between stage advances.
    pub stage_interval_sec: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            point_count: 24,
            sample_size: 8,
            ease_fraction: 0.05,
            done_threshold: 1.0,
            stage_count: 4,
            stage_interval_sec: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Converging,
    Revealing,
}

pub struct BaggingAnimation {
    params: AnimationParams,
    pub seed: u64,
    pub points: Vec<SyntheticPoint>,
    pub samples: [Vec<usize>; SAMPLE_COUNT],
    pub movers: Vec<MovingPoint>,
    pub reveal: StageReveal,
    phase: Phase,
    tick_carry: f32,
}

impl BaggingAnimation {
    pub fn new(params: AnimationParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let region = dataset_region();
        let point_count = params.point_count.max(1);
        let sample_size = params.sample_size.max(1);

        let points = generate_points(&mut rng, point_count, region.x_range(), region.y_range());
        let samples: [Vec<usize>; SAMPLE_COUNT] =
            std::array::from_fn(|_| bootstrap_sample(&mut rng, point_count, sample_size));

        let mut movers = Vec::with_capacity(SAMPLE_COUNT * sample_size);
        for (s, sample) in samples.iter().enumerate() {
            for (slot, &idx) in sample.iter().enumerate() {
                let target = sample_slot(s, slot, sample_size);
                movers.push(MovingPoint::new(idx, s, points[idx].home, target));
            }
        }

        let reveal = StageReveal::new(params.stage_count, params.stage_interval_sec);
        debug!(seed, point_count, sample_size, "bagging animation generated");

        Self {
            params,
            seed,
            points,
            samples,
            movers,
            reveal,
            phase: Phase::Converging,
            tick_carry: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Throw everything away and redraw points and samples from a new seed.
    pub fn regenerate(&mut self, seed: u64) {
        *self = Self::new(self.params.clone(), seed);
    }

    /// Shape drawn most often across all bootstrap samples; ties resolve in
    /// `Shape::ALL` order. This is the "prediction" the final overlay shows.
    pub fn majority_shape(&self) -> crate::core::points::Shape {
        use crate::core::points::Shape;
        let mut counts = [0usize; 3];
        for m in &self.movers {
            let idx = match self.points[m.point].shape {
                Shape::Circle => 0,
                Shape::Square => 1,
                Shape::Triangle => 2,
            };
            counts[idx] += 1;
        }
        let mut best = 0;
        for i in 1..counts.len() {
            if counts[i] > counts[best] {
                best = i;
            }
        }
        Shape::ALL[best]
    }

    /// Advance the animation by `dt` seconds of frame time.
    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            Phase::Converging => {
                self.tick_carry += dt.max(0.0) * TICK_RATE_HZ;
                while self.tick_carry >= 1.0 {
                    self.tick_carry -= 1.0;
                    let done = step_all(
                        &mut self.movers,
                        self.params.ease_fraction,
                        self.params.done_threshold,
                    );
                    if done {
                        debug!(seed = self.seed, "all points converged, starting reveal");
                        self.phase = Phase::Revealing;
                        self.tick_carry = 0.0;
                        break;
                    }
                }
            }
            Phase::Revealing => self.reveal.tick(dt),
        }
    }
}
