//! core/stage.rs — staged reveal after the points have converged.
//!
//! A single counter walks through the narrative overlays (feature legend,
//! split features, tree diagram, prediction) on a fixed interval, then
//! freezes at the terminal stage. It never moves backward.

/// Overlay selector for the reveal phase. Stage 0 draws nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    None,
    FeatureLegend,
    SplitFeatures,
    TreeDiagram,
    Prediction,
}

impl Stage {
    /// Overlays shown up to and including stage `index`.
    pub fn from_index(index: u32) -> Stage {
        match index {
            0 => Stage::None,
            1 => Stage::FeatureLegend,
            2 => Stage::SplitFeatures,
            3 => Stage::TreeDiagram,
            _ => Stage::Prediction,
        }
    }
}

/// Monotone stage counter driven by elapsed frame time.
#[derive(Clone, Debug)]
pub struct StageReveal {
    stage: u32,
    terminal: u32,
    interval_sec: f32,
    elapsed: f32,
}

impl StageReveal {
    pub fn new(terminal: u32, interval_sec: f32) -> Self {
        Self {
            stage: 0,
            terminal,
            interval_sec: interval_sec.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn current(&self) -> Stage {
        Stage::from_index(self.stage)
    }

    pub fn is_terminal(&self) -> bool {
        self.stage >= self.terminal
    }

    /// Advance by `dt` seconds of wall-clock time. Past the terminal stage
    /// this is a no-op regardless of further ticks.
    pub fn tick(&mut self, dt: f32) {
        if self.is_terminal() {
            return;
        }
        self.elapsed += dt.max(0.0);
        while self.elapsed >= self.interval_sec && !self.is_terminal() {
            self.elapsed -= self.interval_sec;
            self.stage += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let r = StageReveal::new(4, 1.5);
        assert_eq!(r.stage(), 0);
        assert_eq!(r.current(), Stage::None);
        assert!(!r.is_terminal());
    }

    #[test]
    fn advances_once_per_interval() {
        let mut r = StageReveal::new(4, 1.0);
        r.tick(0.9);
        assert_eq!(r.stage(), 0);
        r.tick(0.2);
        assert_eq!(r.stage(), 1);
        r.tick(1.0);
        assert_eq!(r.stage(), 2);
    }

    #[test]
    fn never_decreases_and_freezes_at_terminal() {
        let mut r = StageReveal::new(4, 0.5);
        let mut prev = r.stage();
        for _ in 0..100 {
            r.tick(0.2);
            assert!(r.stage() >= prev);
            prev = r.stage();
        }
        assert_eq!(r.stage(), 4);
        assert!(r.is_terminal());
        r.tick(1000.0);
        assert_eq!(r.stage(), 4);
    }

    #[test]
    fn large_dt_catches_up_but_stops_at_terminal() {
        let mut r = StageReveal::new(3, 1.0);
        r.tick(10.0);
        assert_eq!(r.stage(), 3);
    }

    #[test]
    fn stage_overlay_order() {
        assert_eq!(Stage::from_index(1), Stage::FeatureLegend);
        assert_eq!(Stage::from_index(2), Stage::SplitFeatures);
        assert_eq!(Stage::from_index(3), Stage::TreeDiagram);
        assert_eq!(Stage::from_index(4), Stage::Prediction);
        assert_eq!(Stage::from_index(9), Stage::Prediction);
    }
}
