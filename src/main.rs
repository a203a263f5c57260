// Entry point: launches the egui/eframe app.
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jurybag::app::App;
use jurybag::cli::Args;
use jurybag::config::AppConfig;

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let cfg = AppConfig::load_or_default(&args.config);
    info!(config = %args.config, view = ?args.view, "starting jurybag");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Jury Theorem & Bagging",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc, args, cfg)))),
    )
}
