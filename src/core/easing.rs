//! core/easing.rs — convergence phase of the bagging animation.
//!
//! Every drawn point eases toward its sample slot by a constant fraction of
//! the remaining distance per tick, which decays the distance geometrically:
//! d(t+1) = (1 - fraction)·d(t). Once inside the done threshold the point
//! snaps to its target and latches done.

use crate::core::points::Pos;

/// Transient animation record for one bootstrap draw.
#[derive(Clone, Copy, Debug)]
pub struct MovingPoint {
    /// Index into the synthetic point set.
    pub point: usize,
    /// Which of the bootstrap samples this draw belongs to.
    pub sample: usize,
    pub pos: Pos,
    pub target: Pos,
    pub done: bool,
}

impl MovingPoint {
    pub fn new(point: usize, sample: usize, start: Pos, target: Pos) -> Self {
        Self {
            point,
            sample,
            pos: start,
            target,
            done: false,
        }
    }

    /// Remaining distance to the target.
    pub fn remaining(&self) -> f32 {
        self.pos.dist(self.target)
    }

    /// One easing tick. No-op once done.
    pub fn step(&mut self, fraction: f32, threshold: f32) {
        if self.done {
            return;
        }
        if self.remaining() < threshold {
            self.pos = self.target;
            self.done = true;
            return;
        }
        self.pos.x += (self.target.x - self.pos.x) * fraction;
        self.pos.y += (self.target.y - self.pos.y) * fraction;
    }
}

/// Step every mover once; true when all have latched done.
pub fn step_all(movers: &mut [MovingPoint], fraction: f32, threshold: f32) -> bool {
    let mut all_done = true;
    for m in movers.iter_mut() {
        m.step(fraction, threshold);
        all_done &= m.done;
    }
    all_done
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(from: Pos, to: Pos) -> MovingPoint {
        MovingPoint::new(0, 0, from, to)
    }

    #[test]
    fn distance_decreases_monotonically() {
        let mut m = mover(Pos::new(0.0, 0.0), Pos::new(400.0, 300.0));
        let mut prev = m.remaining();
        while !m.done {
            m.step(0.05, 1.0);
            let d = m.remaining();
            assert!(d <= prev, "distance grew: {d} > {prev}");
            prev = d;
        }
        assert_eq!(m.pos, m.target);
    }

    #[test]
    fn terminates_in_finite_steps() {
        // d0=500, per-tick factor 0.95 → below 1.0 after ~122 ticks.
        let mut m = mover(Pos::new(0.0, 0.0), Pos::new(300.0, 400.0));
        let mut ticks = 0;
        while !m.done {
            m.step(0.05, 1.0);
            ticks += 1;
            assert!(ticks < 10_000, "easing did not terminate");
        }
        assert!(ticks > 1);
    }

    #[test]
    fn done_latches_and_freezes_position() {
        let mut m = mover(Pos::new(0.0, 0.0), Pos::new(0.5, 0.0));
        m.step(0.05, 1.0);
        assert!(m.done);
        let frozen = m.pos;
        for _ in 0..10 {
            m.step(0.05, 1.0);
        }
        assert!(m.done);
        assert_eq!(m.pos, frozen);
    }

    #[test]
    fn step_all_reports_convergence_only_when_every_point_is_done() {
        let mut movers = vec![
            mover(Pos::new(0.0, 0.0), Pos::new(0.2, 0.0)),
            mover(Pos::new(0.0, 0.0), Pos::new(200.0, 0.0)),
        ];
        assert!(!step_all(&mut movers, 0.05, 1.0));
        let mut ticks = 0;
        while !step_all(&mut movers, 0.05, 1.0) {
            ticks += 1;
            assert!(ticks < 10_000);
        }
        assert!(movers.iter().all(|m| m.done));
    }
}
