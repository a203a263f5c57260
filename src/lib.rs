//! Interactive classroom visualizations of two ensemble-learning ideas:
//! Condorcet's jury theorem (majority-vote accuracy vs. voter count) and
//! bootstrap aggregation (how a random forest draws its training samples).
//!
//! All numeric and animation logic lives in [`core`] and is independent of
//! the GUI; [`ui`] and [`app`] are a thin egui/eframe shell around it.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
