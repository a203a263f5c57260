//! ui/ensemble_view.rs — Condorcet's jury theorem, interactively.
//!
//! Two sliders (voter count, per-voter accuracy) drive a grid of tree icons
//! and a plotted majority-accuracy curve. All math lives in core::ensemble;
//! this file only wires sliders to the plot.

use egui::{Color32, StrokeKind};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::config::EnsembleConfig;
use crate::core::ensemble::{accuracy_curve, snap_odd};
use crate::ui::assets::TreeIcons;

const GRID_COLS: usize = 5;
const ICON_SIZE: f32 = 30.0;
const CURVE_GOLD: Color32 = Color32::from_rgb(218, 165, 32);
const PLACEHOLDER_FILL: Color32 = Color32::from_rgb(46, 139, 87);
const PLACEHOLDER_BORDER: Color32 = Color32::from_rgb(20, 83, 45);

pub struct EnsembleView {
    pub tree_count: u32,
    pub accuracy_pct: u32,
    max_trees: u32,
    icons: TreeIcons,
}

impl EnsembleView {
    pub fn new(cfg: &EnsembleConfig, assets_dir: &str) -> Self {
        Self {
            tree_count: snap_odd(cfg.default_trees.clamp(1, cfg.max_trees)),
            accuracy_pct: cfg.default_accuracy_pct.clamp(50, 100),
            max_trees: snap_odd(cfg.max_trees.max(1)),
            icons: TreeIcons::new(assets_dir),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Condorcet's Jury Theorem — Ensemble Trees");
        ui.add_space(6.0);

        self.tree_grid(ui);
        ui.add_space(8.0);

        ui.add(
            egui::Slider::new(&mut self.tree_count, 1..=self.max_trees)
                .step_by(2.0)
                .text("# of Trees"),
        );
        // Majority voting needs an odd jury, snap even drags upward.
        self.tree_count = snap_odd(self.tree_count).min(self.max_trees);

        ui.add(
            egui::Slider::new(&mut self.accuracy_pct, 50..=100)
                .suffix("%")
                .text("Tree Accuracy"),
        );

        ui.add_space(8.0);
        self.accuracy_plot(ui);
    }

    /// One icon per tree, five across, like the original classroom demo.
    fn tree_grid(&mut self, ui: &mut egui::Ui) {
        let count = self.tree_count as usize;
        egui::Grid::new("tree_grid").spacing([4.0, 4.0]).show(ui, |ui| {
            for i in 0..count {
                match self.icons.texture(ui.ctx(), i + 1) {
                    Some(tex) => {
                        let sized =
                            egui::load::SizedTexture::new(tex.id(), egui::vec2(ICON_SIZE, ICON_SIZE));
                        ui.add(egui::Image::new(sized));
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(ICON_SIZE, ICON_SIZE),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(rect, 2.0, PLACEHOLDER_FILL);
                        ui.painter().rect_stroke(
                            rect,
                            2.0,
                            egui::Stroke::new(1.0, PLACEHOLDER_BORDER),
                            StrokeKind::Inside,
                        );
                    }
                }
                if (i + 1) % GRID_COLS == 0 {
                    ui.end_row();
                }
            }
        });
    }

    fn accuracy_plot(&self, ui: &mut egui::Ui) {
        let p = self.accuracy_pct as f64 / 100.0;
        let curve = accuracy_curve(p, self.tree_count);

        let series: PlotPoints = curve.iter().map(|&(n, a)| [n as f64, a]).collect();
        let markers: PlotPoints = curve.iter().map(|&(n, a)| [n as f64, a]).collect();
        let line = Line::new("Ensemble Accuracy", series).color(CURVE_GOLD).width(2.0);

        Plot::new("ensemble_accuracy")
            .height(280.0)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .include_x(0.0)
            .include_x(self.tree_count as f64 + 1.0)
            .include_y(0.0)
            .include_y(1.05)
            .x_axis_label("Tree count (odd)")
            .y_axis_label("Majority accuracy")
            .y_axis_formatter(|mark, _| format!("{:.1}", mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(line);
                plot_ui.points(Points::new("", markers).radius(3.0).color(CURVE_GOLD));
                for &(n, a) in &curve {
                    plot_ui.text(
                        Text::new("", PlotPoint::new(n as f64, a + 0.035), format!("{a:.2}"))
                            .color(Color32::BLACK),
                    );
                }
            });
    }
}
