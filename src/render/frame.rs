use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolylinePrimitive, TextPrimitive};

/// One rendered axis: domain and tick lines plus tick labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisGroup {
    pub lines: Vec<LinePrimitive>,
    pub labels: Vec<TextPrimitive>,
}

impl AxisGroup {
    pub fn validate(&self) -> ChartResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.labels.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// All coordinates are relative to the plot area origin; backends apply the
/// margin translation themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub x_axis: AxisGroup,
    pub y_axis: AxisGroup,
    pub series_line: Option<PolylinePrimitive>,
    pub markers: Vec<CirclePrimitive>,
    /// Scene opacity in `[0, 1]`, driven by the redraw transition.
    pub opacity: f64,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, plot: PlotArea) -> Self {
        Self {
            viewport,
            plot,
            x_axis: AxisGroup::default(),
            y_axis: AxisGroup::default(),
            series_line: None,
            markers: Vec::new(),
            opacity: 1.0,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "frame opacity must be finite and in [0, 1]".to_owned(),
            ));
        }

        self.x_axis.validate()?;
        self.y_axis.validate()?;
        if let Some(line) = &self.series_line {
            line.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_axis.is_empty()
            && self.y_axis.is_empty()
            && self.series_line.is_none()
            && self.markers.is_empty()
    }
}
