//! Chart features layered on top of the core projection pipeline.

pub mod markers;

pub use markers::{ChartMarker, marker_at_point, place_markers};
