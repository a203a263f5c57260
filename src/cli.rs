use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartView {
    Ensemble,
    Bagging,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Seed for the bagging animation (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory with tree icons 1.png..N.png (overrides config)
    #[arg(long)]
    pub assets: Option<String>,

    /// Visualization shown at startup
    #[arg(long, value_enum, default_value_t = StartView::Ensemble)]
    pub view: StartView,

    /// Verbose logging (debug level)
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
