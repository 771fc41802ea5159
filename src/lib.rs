//! worldcup-chart: headless line-chart engine for FIFA World Cup statistics.
//!
//! This crate loads the historical World Cup dataset, filters it by year
//! range, derives time and value scales from the filtered subset, and builds
//! deterministic render scenes with click-to-inspect markers. Rendering
//! backends plug in behind the `Renderer` trait; an SVG backend ships in-tree.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, DetailPanel, FilterControls, WorldCupChart};
pub use data::{Attribute, Dataset, WorldCupRecord};
pub use error::{ChartError, ChartResult};
