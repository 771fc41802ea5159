use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_marker_count: usize,
    pub last_label_count: usize,
    pub last_had_series_line: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_marker_count = frame.markers.len();
        self.last_label_count = frame.x_axis.labels.len() + frame.y_axis.labels.len();
        self.last_had_series_line = frame.series_line.is_some();
        Ok(())
    }
}
