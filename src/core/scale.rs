use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a data domain onto a pixel range.
///
/// Degenerate domains (equal endpoints) are allowed and map every value to
/// the midpoint of the range, so single-sample and empty filters still
/// produce drawable geometry instead of an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Position of `value` inside the domain as a 0..=1 ratio.
    ///
    /// Non-finite values propagate as NaN; callers carrying permissively
    /// coerced data decide what to do with unplottable output.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return 0.5;
        }
        (value - self.domain_start) / span
    }

    /// Maps `value` into an explicit pixel range.
    ///
    /// The range may be inverted (`range_start > range_end`), which is how
    /// the vertical axis puts larger values closer to the top.
    #[must_use]
    pub fn to_pixel(self, value: f64, range_start: f64, range_end: f64) -> f64 {
        range_start + self.normalize(value) * (range_end - range_start)
    }

    /// Maps a pixel position in the given range back into the domain.
    #[must_use]
    pub fn from_pixel(self, pixel: f64, range_start: f64, range_end: f64) -> f64 {
        let range_span = range_end - range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
