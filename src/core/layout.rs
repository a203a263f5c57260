//! core/layout.rs — logical scene layout for the bagging animation.
//!
//! The animation runs in a fixed 1000×620 logical space so the step logic
//! never sees screen pixels; the UI scales logical coordinates onto the
//! allocated canvas each frame. The ~1-unit convergence threshold is in
//! these units.

use crate::core::points::Pos;

/// Logical scene width.
pub const SCENE_W: f32 = 1000.0;
/// Logical scene height.
pub const SCENE_H: f32 = 620.0;

/// Axis-aligned rectangle in logical coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub min: Pos,
    pub max: Pos,
}

impl Region {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min: Pos::new(x0, y0),
            max: Pos::new(x1, y1),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn x_range(&self) -> (f32, f32) {
        (self.min.x, self.max.x)
    }

    pub fn y_range(&self) -> (f32, f32) {
        (self.min.y, self.max.y)
    }
}

/// Dataset cloud across the top of the scene.
pub fn dataset_region() -> Region {
    Region::new(60.0, 40.0, SCENE_W - 60.0, 220.0)
}

/// Panel for one bootstrap sample (three across the bottom).
pub fn sample_panel(sample: usize) -> Region {
    debug_assert!(sample < 3);
    let gap = 40.0;
    let w = (SCENE_W - 4.0 * gap) / 3.0;
    let x0 = gap + sample as f32 * (w + gap);
    Region::new(x0, 300.0, x0 + w, 560.0)
}

/// Target slot for the `slot`-th drawn point inside a sample panel.
///
/// Row-major mini-grid with a margin, so duplicated draws land on distinct
/// slots and the sample reads as an ordered collection.
pub fn sample_slot(sample: usize, slot: usize, sample_size: usize) -> Pos {
    let panel = sample_panel(sample);
    let cols = (sample_size as f32).sqrt().ceil().max(1.0) as usize;
    let rows = sample_size.div_ceil(cols);
    let margin = 24.0;
    let cell_w = (panel.width() - 2.0 * margin) / cols as f32;
    let cell_h = (panel.height() - 2.0 * margin) / rows as f32;
    let col = slot % cols;
    let row = slot / cols;
    Pos::new(
        panel.min.x + margin + (col as f32 + 0.5) * cell_w,
        panel.min.y + margin + (row as f32 + 0.5) * cell_h,
    )
}
