use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};
use std::fmt::Write as _;

/// Renderer that materializes each frame as a standalone SVG document.
///
/// Class names (`axis x-axis`, `axis y-axis`, `line`) and 0-based circle ids
/// are stable hooks for external stylesheets and scripted consumers.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.last_document = Some(svg_document(frame)?);
        Ok(())
    }
}

/// Builds the SVG document for one frame.
///
/// Markers and path points whose coordinates are NaN are left out of the
/// emitted geometry; their 0-based ids keep counting so the remaining ids
/// still match filtered-set order.
pub fn svg_document(frame: &RenderFrame) -> ChartResult<String> {
    frame.validate()?;

    let mut svg = String::with_capacity(8192);
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"##,
        frame.viewport.width, frame.viewport.height
    );
    svg.push('\n');

    let _ = write!(
        svg,
        r##"<g transform="translate({},{})"{}>"##,
        fmt_px(frame.plot.left()),
        fmt_px(frame.plot.top()),
        opacity_attribute(frame.opacity)
    );
    svg.push('\n');

    write_axis_group(&mut svg, "axis x-axis", &frame.x_axis.lines, &frame.x_axis.labels);
    write_axis_group(&mut svg, "axis y-axis", &frame.y_axis.lines, &frame.y_axis.labels);

    if let Some(line) = &frame.series_line {
        if let Some(path_data) = path_data(&line.points) {
            let _ = write!(
                svg,
                r##"<path class="line" d="{path_data}" fill="none" stroke="{}" stroke-width="{}"/>"##,
                css_color(line.color),
                fmt_px(line.stroke_width)
            );
            svg.push('\n');
        }
    }

    for (index, marker) in frame.markers.iter().enumerate() {
        if !marker.center_x.is_finite() || !marker.center_y.is_finite() {
            continue;
        }
        let _ = write!(
            svg,
            r##"<circle id="{index}" cx="{}" cy="{}" r="{}" fill="{}"/>"##,
            fmt_px(marker.center_x),
            fmt_px(marker.center_y),
            fmt_px(marker.radius),
            css_color(marker.fill)
        );
        svg.push('\n');
    }

    svg.push_str("</g>\n</svg>\n");
    Ok(svg)
}

fn write_axis_group(
    svg: &mut String,
    class: &str,
    lines: &[LinePrimitive],
    labels: &[TextPrimitive],
) {
    let _ = write!(svg, r##"<g class="{class}">"##);
    svg.push('\n');
    for line in lines {
        let _ = write!(
            svg,
            r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"##,
            fmt_px(line.x1),
            fmt_px(line.y1),
            fmt_px(line.x2),
            fmt_px(line.y2),
            css_color(line.color),
            fmt_px(line.stroke_width)
        );
        svg.push('\n');
    }
    for label in labels {
        write_text(svg, label);
    }
    svg.push_str("</g>\n");
}

fn write_text(svg: &mut String, label: &TextPrimitive) {
    let anchor = match label.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let body = xml_escape(&label.text);
    if label.rotation_degrees == 0.0 {
        let _ = write!(
            svg,
            r##"<text x="{}" y="{}" text-anchor="{anchor}" font-size="{}" fill="{}">{body}</text>"##,
            fmt_px(label.x),
            fmt_px(label.y),
            fmt_px(label.font_size_px),
            css_color(label.color)
        );
    } else {
        let _ = write!(
            svg,
            r##"<text transform="translate({},{}) rotate({})" text-anchor="{anchor}" font-size="{}" fill="{}">{body}</text>"##,
            fmt_px(label.x),
            fmt_px(label.y),
            fmt_px(label.rotation_degrees),
            fmt_px(label.font_size_px),
            css_color(label.color)
        );
    }
    svg.push('\n');
}

/// Path data through the finite points, `None` when no point survives.
fn path_data(points: &[(f64, f64)]) -> Option<String> {
    let mut data = String::new();
    for &(x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        let command = if data.is_empty() { 'M' } else { 'L' };
        let _ = write!(data, "{command}{},{}", fmt_px(x), fmt_px(y));
    }
    if data.is_empty() { None } else { Some(data) }
}

fn opacity_attribute(opacity: f64) -> String {
    if opacity < 1.0 {
        format!(r##" opacity="{opacity:.3}""##)
    } else {
        String::new()
    }
}

fn css_color(color: Color) -> String {
    let red = (color.red * 255.0).round() as u8;
    let green = (color.green * 255.0).round() as u8;
    let blue = (color.blue * 255.0).round() as u8;
    if color.alpha >= 1.0 {
        format!("rgb({red},{green},{blue})")
    } else {
        format!("rgba({red},{green},{blue},{:.3})", color.alpha)
    }
}

/// Pixel value formatter that keeps whole pixels free of a fractional tail.
fn fmt_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
