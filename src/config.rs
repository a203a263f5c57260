use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleConfig {
    /// Upper end of the tree-count slider (kept odd by snapping).
    #[serde(default = "EnsembleConfig::default_max_trees")]
    pub max_trees: u32,
    #[serde(default = "EnsembleConfig::default_trees")]
    pub default_trees: u32,
    /// Per-tree accuracy slider start value, in percent.
    #[serde(default = "EnsembleConfig::default_accuracy_pct")]
    pub default_accuracy_pct: u32,
}

impl EnsembleConfig {
    fn default_max_trees() -> u32 {
        25
    }
    fn default_trees() -> u32 {
        25
    }
    fn default_accuracy_pct() -> u32 {
        60
    }
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            max_trees: Self::default_max_trees(),
            default_trees: Self::default_trees(),
            default_accuracy_pct: Self::default_accuracy_pct(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "AnimationConfig::default_point_count")]
    pub point_count: usize,
    #[serde(default = "AnimationConfig::default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "AnimationConfig::default_ease_fraction")]
    pub ease_fraction: f32,
    #[serde(default = "AnimationConfig::default_done_threshold")]
    pub done_threshold: f32,
    /// Terminal stage of the reveal (the original classroom decks disagreed
    /// on 3 vs 4 overlays, so it is a setting rather than a constant).
    #[serde(default = "AnimationConfig::default_stage_count")]
    pub stage_count: u32,
    #[serde(default = "AnimationConfig::default_stage_interval_sec")]
    pub stage_interval_sec: f32,
    #[serde(default)]
    pub seed: u64,
}

impl AnimationConfig {
    fn default_point_count() -> usize {
        24
    }
    fn default_sample_size() -> usize {
        8
    }
    fn default_ease_fraction() -> f32 {
        0.05
    }
    fn default_done_threshold() -> f32 {
        1.0
    }
    fn default_stage_count() -> u32 {
        4
    }
    fn default_stage_interval_sec() -> f32 {
        1.5
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            point_count: Self::default_point_count(),
            sample_size: Self::default_sample_size(),
            ease_fraction: Self::default_ease_fraction(),
            done_threshold: Self::default_done_threshold(),
            stage_count: Self::default_stage_count(),
            stage_interval_sec: Self::default_stage_interval_sec(),
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the optional tree icons (1.png, 2.png, ...).
    #[serde(default = "AssetsConfig::default_dir")]
    pub dir: String,
}

impl AssetsConfig {
    fn default_dir() -> String {
        "assets".to_string()
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ensemble: EnsembleConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl AppConfig {
    fn round_f32(x: f32) -> f32 {
        (x * 1_000_000.0).round() / 1_000_000.0
    }

    fn format_f32_compact(x: f32) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    fn rounded(mut self) -> Self {
        self.animation.ease_fraction = Self::round_f32(self.animation.ease_fraction);
        self.animation.done_threshold = Self::round_f32(self.animation.done_threshold);
        self.animation.stage_interval_sec = Self::round_f32(self.animation.stage_interval_sec);
        self
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults (commented out) and return them.
        let default_cfg = Self::default().rounded();
        if let Ok(text) = toml::to_string_pretty(&default_cfg) {
            let mut commented = String::new();
            for line in text.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    commented.push('\n');
                } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                    commented.push_str(line);
                    commented.push('\n');
                } else {
                    let mut out_line = line.to_string();
                    if let Some((lhs, rhs)) = line.split_once('=') {
                        let rhs_trim = rhs.trim();
                        let has_decimal = rhs_trim.contains('.');
                        if (has_decimal || rhs_trim.contains('e') || rhs_trim.contains('E'))
                            && !rhs_trim.contains('"')
                            && rhs_trim != "true"
                            && rhs_trim != "false"
                        {
                            if let Ok(val) = rhs_trim.parse::<f32>() {
                                let mut formatted = Self::format_f32_compact(val);
                                if has_decimal && !formatted.contains('.') {
                                    formatted.push_str(".0");
                                }
                                out_line = format!("{} = {}", lhs.trim(), formatted);
                            }
                        }
                    }
                    commented.push_str("# ");
                    commented.push_str(&out_line);
                    commented.push('\n');
                }
            }
            if let Err(err) = fs::write(path_obj, commented) {
                eprintln!("Failed to write default config to {path}: {err}");
            }
        } else {
            eprintln!("Failed to serialize default config; continuing with defaults");
        }
        default_cfg
    }
}
