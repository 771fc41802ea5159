use crate::core::{PlotArea, ValueScale, YearScale};

/// Projects `(year, value)` samples into pixel-space polyline points.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output. Samples whose value
/// failed numeric coercion carry NaN through to the projected point; the
/// polyline keeps one point per sample either way.
#[must_use]
pub fn project_polyline(
    samples: &[(i32, f64)],
    year_scale: YearScale,
    value_scale: ValueScale,
    plot: PlotArea,
) -> Vec<(f64, f64)> {
    samples
        .iter()
        .map(|&(year, value)| {
            let x = year_scale.year_to_pixel(year, plot.width());
            let y = value_scale.value_to_pixel(value, plot.height());
            (x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::project_polyline;
    use crate::core::{PlotArea, PlotMargins, ValueScale, Viewport, YearScale};

    fn plot() -> PlotArea {
        let viewport = Viewport {
            width: 600,
            height: 500,
        };
        PlotArea::from_viewport(viewport, PlotMargins::default()).expect("valid plot area")
    }

    #[test]
    fn endpoints_span_the_plot() {
        let year_scale = YearScale::new(1930, 2018).expect("valid year scale");
        let value_scale = ValueScale::from_max(100.0).expect("valid value scale");
        let points = project_polyline(
            &[(1930, 0.0), (2018, 100.0)],
            year_scale,
            value_scale,
            plot(),
        );

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], (0.0, 400.0));
        assert_eq!(points[1], (500.0, 0.0));
    }

    #[test]
    fn nan_value_projects_to_nan_y() {
        let year_scale = YearScale::new(1930, 2018).expect("valid year scale");
        let value_scale = ValueScale::from_max(100.0).expect("valid value scale");
        let points = project_polyline(&[(1930, f64::NAN)], year_scale, value_scale, plot());

        assert_eq!(points.len(), 1);
        assert!(points[0].0.is_finite());
        assert!(points[0].1.is_nan());
    }

    #[test]
    fn single_sample_still_yields_one_point() {
        let year_scale = YearScale::new(1990, 1990).expect("valid year scale");
        let value_scale = ValueScale::from_max(115.0).expect("valid value scale");
        let points = project_polyline(&[(1990, 115.0)], year_scale, value_scale, plot());

        assert_eq!(points.len(), 1);
        assert_eq!(points[0], (250.0, 0.0));
    }
}
