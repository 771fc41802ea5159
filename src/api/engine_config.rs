use serde::{Deserialize, Serialize};

use crate::core::{PlotMargins, Viewport};
use crate::data::Attribute;
use crate::error::{ChartError, ChartResult};
use crate::interaction::TransitionTiming;

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default)]
    pub default_attribute: Attribute,
    #[serde(default)]
    pub transition: TransitionTiming,
    #[serde(default = "default_x_tick_target")]
    pub x_tick_target: usize,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: PlotMargins::default(),
            marker_radius: default_marker_radius(),
            default_attribute: Attribute::default(),
            transition: TransitionTiming::default(),
            x_tick_target: default_x_tick_target(),
            y_tick_count: default_y_tick_count(),
        }
    }
}

impl ChartConfig {
    /// Sets the outer drawing surface size.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets the margins reserved for axes around the plot area.
    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the fixed marker radius in pixels.
    #[must_use]
    pub fn with_marker_radius(mut self, marker_radius: f64) -> Self {
        self.marker_radius = marker_radius;
        self
    }

    /// Sets the attribute plotted before any selection is made.
    #[must_use]
    pub fn with_default_attribute(mut self, attribute: Attribute) -> Self {
        self.default_attribute = attribute;
        self
    }

    /// Sets the redraw transition timing.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionTiming) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the preferred number of x-axis year ticks.
    #[must_use]
    pub fn with_x_tick_target(mut self, x_tick_target: usize) -> Self {
        self.x_tick_target = x_tick_target;
        self
    }

    /// Sets the number of y-axis ticks.
    #[must_use]
    pub fn with_y_tick_count(mut self, y_tick_count: usize) -> Self {
        self.y_tick_count = y_tick_count;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        self.transition.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(600, 500)
}

fn default_marker_radius() -> f64 {
    5.0
}

fn default_x_tick_target() -> usize {
    10
}

fn default_y_tick_count() -> usize {
    10
}
