use crate::core::LinearScale;
use crate::core::year::year_to_unix_seconds;
use crate::error::{ChartError, ChartResult};

/// Continuous time scale spanning an inclusive year range.
///
/// Domain endpoints are the Jan 1 00:00:00 UTC instants of the bound years,
/// so pixel spacing between editions follows the calendar rather than a
/// uniform index. The range is `[0, plot_width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearScale {
    min_year: i32,
    max_year: i32,
    linear: LinearScale,
}

impl YearScale {
    /// Builds the scale for the requested bounds.
    ///
    /// An inverted range (`min_year > max_year`) is not an error; it keeps
    /// its orientation and simply never receives any filtered data.
    pub fn new(min_year: i32, max_year: i32) -> ChartResult<Self> {
        let domain_start = year_to_unix_seconds(min_year);
        let domain_end = year_to_unix_seconds(max_year);
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "year bounds {min_year}..{max_year} are outside the supported calendar range"
            )));
        }

        Ok(Self {
            min_year,
            max_year,
            linear: LinearScale::new(domain_start, domain_end)?,
        })
    }

    #[must_use]
    pub fn year_bounds(self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }

    /// Maps a year to its x position in `[0, plot_width]`.
    #[must_use]
    pub fn year_to_pixel(self, year: i32, plot_width: f64) -> f64 {
        self.linear
            .to_pixel(year_to_unix_seconds(year), 0.0, plot_width)
    }

    /// Maps an x position back to a fractional timestamp inside the domain.
    #[must_use]
    pub fn pixel_to_seconds(self, pixel: f64, plot_width: f64) -> f64 {
        self.linear.from_pixel(pixel, 0.0, plot_width)
    }

    /// Whole-year tick positions for the x axis.
    ///
    /// Steps come from a 1/2/5 ladder sized against `target_count`; ticks sit
    /// on years divisible by the step, the way a calendar axis labels round
    /// years. A single-year domain yields that one year; an inverted domain
    /// yields no ticks.
    #[must_use]
    pub fn ticks(self, target_count: usize) -> Vec<i32> {
        if self.min_year > self.max_year {
            return Vec::new();
        }
        if self.min_year == self.max_year || target_count <= 1 {
            return vec![self.min_year];
        }

        let span = (self.max_year - self.min_year) as f64;
        let raw_step = span / (target_count.saturating_sub(1)) as f64;
        let step = nice_year_step(raw_step);

        let mut ticks = Vec::new();
        let mut year = self.min_year - self.min_year.rem_euclid(step);
        if year < self.min_year {
            year += step;
        }
        while year <= self.max_year {
            ticks.push(year);
            year += step;
        }

        if ticks.is_empty() {
            ticks.push(self.min_year);
        }
        ticks
    }
}

/// Rounds a raw year step up to the nearest 1/2/5 ladder value.
fn nice_year_step(raw_step: f64) -> i32 {
    if !raw_step.is_finite() || raw_step <= 1.0 {
        return 1;
    }

    let magnitude = 10_f64.powf(raw_step.log10().floor());
    for multiplier in [1.0, 2.0, 5.0, 10.0] {
        let candidate = magnitude * multiplier;
        if candidate >= raw_step {
            return candidate as i32;
        }
    }
    (magnitude * 10.0) as i32
}

#[cfg(test)]
mod tests {
    use super::{YearScale, nice_year_step};
    use crate::core::year::year_from_unix_seconds;

    #[test]
    fn endpoints_map_to_plot_edges() {
        let scale = YearScale::new(1930, 2018).expect("valid scale");
        assert_eq!(scale.year_to_pixel(1930, 500.0), 0.0);
        assert_eq!(scale.year_to_pixel(2018, 500.0), 500.0);
        let mid = scale.year_to_pixel(1974, 500.0);
        assert!(mid > 0.0 && mid < 500.0);
    }

    #[test]
    fn single_year_domain_maps_to_midpoint() {
        let scale = YearScale::new(1990, 1990).expect("valid scale");
        assert_eq!(scale.year_to_pixel(1990, 500.0), 250.0);
        assert_eq!(scale.ticks(10), vec![1990]);
    }

    #[test]
    fn ticks_land_on_round_years() {
        let scale = YearScale::new(1930, 2018).expect("valid scale");
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&1930));
        assert!(ticks.iter().all(|year| year % 10 == 0));
        assert!(ticks.windows(2).all(|pair| pair[1] - pair[0] == 10));
        assert_eq!(ticks.last(), Some(&2010));
    }

    #[test]
    fn pixels_invert_into_the_year_domain() {
        let scale = YearScale::new(1930, 2018).expect("valid scale");
        let seconds = scale.pixel_to_seconds(250.0, 500.0);
        let year = year_from_unix_seconds(seconds).expect("within calendar range");
        assert!(year > 1930 && year < 2018);
    }

    #[test]
    fn inverted_domain_yields_no_ticks() {
        let scale = YearScale::new(2018, 1930).expect("valid scale");
        assert!(scale.ticks(10).is_empty());
    }

    #[test]
    fn nice_step_follows_ladder() {
        assert_eq!(nice_year_step(0.3), 1);
        assert_eq!(nice_year_step(1.4), 2);
        assert_eq!(nice_year_step(3.0), 5);
        assert_eq!(nice_year_step(7.2), 10);
        assert_eq!(nice_year_step(14.0), 20);
    }
}
