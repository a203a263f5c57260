use std::time::Duration;

use egui::{CentralPanel, Color32, TopBottomPanel};

use crate::cli::{Args, StartView};
use crate::config::AppConfig;
use crate::ui::bagging_view::BaggingView;
use crate::ui::ensemble_view::EnsembleView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Ensemble,
    Bagging,
}

pub struct App {
    view: View,
    ensemble: EnsembleView,
    bagging: BaggingView,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Args, cfg: AppConfig) -> Self {
        // Light classroom palette, black text on pale green.
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = Color32::from_rgb(204, 227, 196);
        visuals.override_text_color = Some(Color32::BLACK);
        cc.egui_ctx.set_visuals(visuals);
        cc.egui_ctx.set_pixels_per_point(1.25);

        let assets_dir = args.assets.as_deref().unwrap_or(&cfg.assets.dir);
        let seed = args.seed.unwrap_or(cfg.animation.seed);
        let view = match args.view {
            StartView::Ensemble => View::Ensemble,
            StartView::Bagging => View::Bagging,
        };

        Self {
            view,
            ensemble: EnsembleView::new(&cfg.ensemble, assets_dir),
            bagging: BaggingView::new(&cfg.animation, seed),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("view_menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.view, View::Ensemble, "Jury Theorem");
                ui.selectable_value(&mut self.view, View::Bagging, "Bagging");
            });
        });

        CentralPanel::default().show(ctx, |ui| match self.view {
            View::Ensemble => self.ensemble.ui(ui),
            View::Bagging => self.bagging.ui(ui),
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
