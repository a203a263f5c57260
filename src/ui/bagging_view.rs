//! ui/bagging_view.rs — the bootstrap-sampling animation canvas.
//!
//! Painter-only rendering of the state owned by core::animation: the dataset
//! cloud on top, three sample panels below, points easing between them, and
//! the staged narrative overlay once everything has settled. No logic here
//! beyond logical→screen mapping.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, pos2, vec2};

use crate::config::AnimationConfig;
use crate::core::animation::{AnimationParams, BaggingAnimation, Phase, SAMPLE_COUNT};
use crate::core::layout::{Region, SCENE_H, SCENE_W, dataset_region, sample_panel};
use crate::core::points::{Pos, Shape};
use crate::core::stage::Stage;

const FRAME_STROKE: Color32 = Color32::from_rgb(90, 110, 90);
const FAINT_ALPHA: u8 = 70;
const LABEL_CLR: Color32 = Color32::from_rgb(40, 50, 40);
const OVERLAY_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 245, 235);

pub struct BaggingView {
    anim: BaggingAnimation,
    next_seed: u64,
}

fn params_from(cfg: &AnimationConfig) -> AnimationParams {
    AnimationParams {
        point_count: cfg.point_count,
        sample_size: cfg.sample_size,
        ease_fraction: cfg.ease_fraction,
        done_threshold: cfg.done_threshold,
        stage_count: cfg.stage_count,
        stage_interval_sec: cfg.stage_interval_sec,
    }
}

impl BaggingView {
    pub fn new(cfg: &AnimationConfig, seed: u64) -> Self {
        Self {
            anim: BaggingAnimation::new(params_from(cfg), seed),
            next_seed: seed,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Bagging — bootstrap samples for a random forest");
            ui.add_space(12.0);
            if ui.button("Replay").clicked() {
                self.next_seed = self.next_seed.wrapping_add(1);
                self.anim.regenerate(self.next_seed);
            }
            let status = match self.anim.phase() {
                Phase::Converging => "drawing samples with replacement…".to_string(),
                Phase::Revealing => match self.anim.reveal.current() {
                    Stage::None => "samples ready".to_string(),
                    Stage::FeatureLegend => "features of each observation".to_string(),
                    Stage::SplitFeatures => "random feature subset per split".to_string(),
                    Stage::TreeDiagram => "one tree per sample".to_string(),
                    Stage::Prediction => "majority vote".to_string(),
                },
            };
            ui.label(egui::RichText::new(status).italics());
        });

        // Frame-time driven; egui clamps stable_dt, the extra min guards
        // against a long pause jumping the reveal several stages at once.
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        self.anim.tick(dt);

        let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let canvas = Canvas::fit(ui.painter_at(rect), rect);
        self.paint(&canvas);
    }

    fn paint(&self, c: &Canvas) {
        c.frame(dataset_region(), "Dataset");
        for s in 0..SAMPLE_COUNT {
            c.frame(sample_panel(s), &format!("Sample {}", s + 1));
        }

        // Full point set stays faint in the cloud; the drawn copies move.
        for p in &self.anim.points {
            c.marker(p.shape, faint(p.color), p.size, p.home);
        }
        for m in &self.anim.movers {
            let p = &self.anim.points[m.point];
            c.marker(p.shape, rgb(p.color), p.size, m.pos);
        }

        if self.anim.phase() == Phase::Revealing {
            match self.anim.reveal.current() {
                Stage::None => {}
                Stage::FeatureLegend => self.legend_overlay(c),
                Stage::SplitFeatures => self.split_overlay(c),
                Stage::TreeDiagram => self.tree_overlay(c),
                Stage::Prediction => self.prediction_overlay(c),
            }
        }
    }

    fn legend_overlay(&self, c: &Canvas) {
        let band = Region::new(250.0, 232.0, 750.0, 292.0);
        c.overlay_box(band);
        c.text(
            Pos::new(500.0, 248.0),
            "Each observation has three features:",
            13.0,
        );
        c.marker(Shape::Circle, rgb([214, 96, 77]), 5.0, Pos::new(370.0, 274.0));
        c.text(Pos::new(410.0, 274.0), "shape", 12.0);
        c.marker(Shape::Square, rgb([67, 112, 181]), 5.0, Pos::new(480.0, 274.0));
        c.text(Pos::new(518.0, 274.0), "color", 12.0);
        c.marker(Shape::Triangle, rgb([46, 139, 87]), 6.5, Pos::new(586.0, 274.0));
        c.text(Pos::new(622.0, 274.0), "size", 12.0);
    }

    fn split_overlay(&self, c: &Canvas) {
        let band = Region::new(250.0, 232.0, 750.0, 292.0);
        c.overlay_box(band);
        c.text(
            Pos::new(500.0, 250.0),
            "Every split looks at a random subset of features",
            13.0,
        );
        c.text(Pos::new(500.0, 274.0), "here: { shape, size }", 12.0);
    }

    /// A static little decision tree under each sample panel.
    fn tree_overlay(&self, c: &Canvas) {
        for s in 0..SAMPLE_COUNT {
            let panel = sample_panel(s);
            let cx = panel.min.x + panel.width() / 2.0;
            let root = Pos::new(cx, 572.0);
            let left = Pos::new(cx - 30.0, 606.0);
            let right = Pos::new(cx + 30.0, 606.0);
            c.line(root, left);
            c.line(root, right);
            c.node(root, Color32::WHITE);
            c.node(left, rgb([214, 96, 77]));
            c.node(right, rgb([67, 112, 181]));
        }
    }

    fn prediction_overlay(&self, c: &Canvas) {
        self.tree_overlay(c);
        let band = Region::new(250.0, 232.0, 750.0, 292.0);
        c.overlay_box(band);
        let winner = self.anim.majority_shape();
        let name = match winner {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
        };
        c.text(
            Pos::new(480.0, 262.0),
            &format!("Majority vote across the trees: {name}"),
            13.0,
        );
        c.marker(winner, rgb([218, 165, 32]), 7.0, Pos::new(700.0, 262.0));
    }
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

fn faint(c: [u8; 3]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], FAINT_ALPHA)
}

/// Logical 1000×620 scene mapped onto the allocated canvas rect.
struct Canvas {
    painter: egui::Painter,
    origin: Pos2,
    scale: f32,
}

impl Canvas {
    fn fit(painter: egui::Painter, rect: Rect) -> Self {
        let scale = (rect.width() / SCENE_W).min(rect.height() / SCENE_H).max(0.01);
        let origin = pos2(
            rect.min.x + (rect.width() - SCENE_W * scale) / 2.0,
            rect.min.y,
        );
        Self {
            painter,
            origin,
            scale,
        }
    }

    fn to_screen(&self, p: Pos) -> Pos2 {
        pos2(self.origin.x + p.x * self.scale, self.origin.y + p.y * self.scale)
    }

    fn region_rect(&self, r: Region) -> Rect {
        Rect::from_min_max(self.to_screen(r.min), self.to_screen(r.max))
    }

    fn frame(&self, region: Region, label: &str) {
        let rect = self.region_rect(region);
        self.painter.rect_stroke(
            rect,
            4.0,
            Stroke::new(1.0, FRAME_STROKE),
            StrokeKind::Inside,
        );
        self.painter.text(
            pos2(rect.min.x + 6.0, rect.min.y - 4.0),
            Align2::LEFT_BOTTOM,
            label,
            FontId::proportional(12.0 * self.scale.max(0.6)),
            LABEL_CLR,
        );
    }

    fn overlay_box(&self, region: Region) {
        let rect = self.region_rect(region);
        self.painter.rect_filled(rect, 6.0, OVERLAY_BG);
        self.painter.rect_stroke(
            rect,
            6.0,
            Stroke::new(1.0, FRAME_STROKE),
            StrokeKind::Inside,
        );
    }

    fn text(&self, at: Pos, s: &str, size: f32) {
        self.painter.text(
            self.to_screen(at),
            Align2::CENTER_CENTER,
            s,
            FontId::proportional(size * self.scale.max(0.6)),
            LABEL_CLR,
        );
    }

    fn line(&self, a: Pos, b: Pos) {
        self.painter.line_segment(
            [self.to_screen(a), self.to_screen(b)],
            Stroke::new(1.5, FRAME_STROKE),
        );
    }

    fn node(&self, at: Pos, fill: Color32) {
        let c = self.to_screen(at);
        self.painter.circle_filled(c, 6.0 * self.scale, fill);
        self.painter
            .circle_stroke(c, 6.0 * self.scale, Stroke::new(1.0, FRAME_STROKE));
    }

    fn marker(&self, shape: Shape, color: Color32, size: f32, at: Pos) {
        let c = self.to_screen(at);
        let r = size * self.scale;
        match shape {
            Shape::Circle => {
                self.painter.circle_filled(c, r, color);
            }
            Shape::Square => {
                self.painter.rect_filled(
                    Rect::from_center_size(c, vec2(2.0 * r, 2.0 * r)),
                    1.0,
                    color,
                );
            }
            Shape::Triangle => {
                let pts = vec![
                    pos2(c.x, c.y - r),
                    pos2(c.x - r, c.y + r),
                    pos2(c.x + r, c.y + r),
                ];
                self.painter
                    .add(egui::Shape::convex_polygon(pts, color, Stroke::NONE));
            }
        }
    }
}
