use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Outer drawing surface size in pixels, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel margins separating the plot area from the viewport edges.
///
/// The bottom and left margins leave room for the x and y axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 40.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

impl PlotMargins {
    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Margin-inset plot region in viewport pixel coordinates.
///
/// Scales map into `[0, width]` x `[height, 0]` relative to `(left, top)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: PlotMargins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        margins.validate()?;

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area: {width}x{height}"
            )));
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }
}
