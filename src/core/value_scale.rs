use crate::core::LinearScale;
use crate::error::ChartResult;

/// Linear y-axis scale over `[0, max]`, drawn inverted so larger values sit
/// closer to the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    /// Builds the scale from the largest attribute value in the filtered set.
    ///
    /// An empty or all-NaN filtered set arrives here as a non-finite or zero
    /// maximum; both collapse to the degenerate zero-height domain `[0, 0]`.
    pub fn from_max(max_value: f64) -> ChartResult<Self> {
        let max = if max_value.is_finite() { max_value } else { 0.0 };
        Ok(Self {
            linear: LinearScale::new(0.0, max)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    /// Maps a value to its y position in `[plot_height, 0]`.
    #[must_use]
    pub fn value_to_pixel(self, value: f64, plot_height: f64) -> f64 {
        self.linear.to_pixel(value, plot_height, 0.0)
    }

    /// Evenly subdivided tick values from 0 to the domain maximum.
    ///
    /// A degenerate domain still yields its single endpoint so the axis
    /// keeps a `0` tick when the filtered set is empty.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        let (start, end) = self.linear.domain();
        if tick_count == 0 {
            return Vec::new();
        }
        if tick_count == 1 || start == end {
            return vec![start];
        }

        let span = end - start;
        let denominator = (tick_count - 1) as f64;
        (0..tick_count)
            .map(|index| start + span * (index as f64) / denominator)
            .collect()
    }
}
