mod axes;
mod controls;
mod detail_panel;
mod engine;
mod engine_config;

pub use controls::FilterControls;
pub use detail_panel::{DetailPanel, EDITION_REGION, GOALS_REGION, WINNER_REGION};
pub use engine::WorldCupChart;
pub use engine_config::ChartConfig;
