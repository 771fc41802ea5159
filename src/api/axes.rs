use crate::core::{PlotArea, ValueScale, YearScale, format_year};
use crate::render::{AxisGroup, Color, LinePrimitive, TextHAlign, TextPrimitive};

pub(super) const AXIS_TICK_LENGTH_PX: f64 = 6.0;
pub(super) const AXIS_LABEL_GAP_PX: f64 = 9.0;
pub(super) const AXIS_LABEL_FONT_PX: f64 = 10.0;
pub(super) const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
/// Year labels pivot around their tick so long labels stay legible.
pub(super) const X_LABEL_ROTATION_DEGREES: f64 = -65.0;
/// Vertical nudge that centers a y label on its tick line.
pub(super) const Y_LABEL_BASELINE_NUDGE_PX: f64 = 3.0;

/// Year axis below the plot area: domain line, one tick and one rotated
/// 4-digit label per tick year.
pub(super) fn build_x_axis(year_scale: YearScale, plot: PlotArea, tick_target: usize) -> AxisGroup {
    let width = plot.width();
    let height = plot.height();

    let mut axis = AxisGroup::default();
    axis.lines.push(LinePrimitive::new(
        0.0,
        height,
        width,
        height,
        AXIS_STROKE_WIDTH_PX,
        Color::BLACK,
    ));

    for year in year_scale.ticks(tick_target) {
        let x = year_scale.year_to_pixel(year, width);
        axis.lines.push(LinePrimitive::new(
            x,
            height,
            x,
            height + AXIS_TICK_LENGTH_PX,
            AXIS_STROKE_WIDTH_PX,
            Color::BLACK,
        ));
        axis.labels.push(
            TextPrimitive::new(
                format_year(year),
                x,
                height + AXIS_LABEL_GAP_PX,
                AXIS_LABEL_FONT_PX,
                Color::BLACK,
                TextHAlign::Right,
            )
            .with_rotation(X_LABEL_ROTATION_DEGREES),
        );
    }

    axis
}

/// Value axis left of the plot area: domain line, ticks pointing outward and
/// right-aligned labels.
pub(super) fn build_y_axis(
    value_scale: ValueScale,
    plot: PlotArea,
    tick_count: usize,
) -> AxisGroup {
    let height = plot.height();

    let mut axis = AxisGroup::default();
    axis.lines.push(LinePrimitive::new(
        0.0,
        0.0,
        0.0,
        height,
        AXIS_STROKE_WIDTH_PX,
        Color::BLACK,
    ));

    for value in value_scale.ticks(tick_count) {
        let y = value_scale.value_to_pixel(value, height);
        axis.lines.push(LinePrimitive::new(
            -AXIS_TICK_LENGTH_PX,
            y,
            0.0,
            y,
            AXIS_STROKE_WIDTH_PX,
            Color::BLACK,
        ));
        axis.labels.push(TextPrimitive::new(
            format_tick(value),
            -AXIS_LABEL_GAP_PX,
            y + Y_LABEL_BASELINE_NUDGE_PX,
            AXIS_LABEL_FONT_PX,
            Color::BLACK,
            TextHAlign::Right,
        ));
    }

    axis
}

/// Tick label with at most two decimals and no trailing zeros.
pub(super) fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
