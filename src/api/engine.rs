use tracing::debug;

use crate::core::{PlotArea, ValueScale, YearScale, project_polyline};
use crate::data::{Attribute, Dataset, WorldCupRecord, max_attribute_value};
use crate::error::ChartResult;
use crate::extensions::{ChartMarker, marker_at_point, place_markers};
use crate::interaction::{RedrawPhase, RedrawTransition};
use crate::render::{CirclePrimitive, Color, PolylinePrimitive, RenderFrame, Renderer};

use super::axes::{build_x_axis, build_y_axis};
use super::{ChartConfig, DetailPanel, FilterControls};

const SERIES_STROKE_WIDTH_PX: f64 = 2.0;

/// Main orchestration facade consumed by host applications.
///
/// `WorldCupChart` coordinates filter controls, scale derivation, marker
/// placement, the redraw transition and renderer calls. The dataset handle is
/// passed into each operation rather than stored, so every render works from
/// exactly the records its caller chose.
pub struct WorldCupChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    plot: PlotArea,
    controls: FilterControls,
    detail_panel: DetailPanel,
    transition: RedrawTransition,
    markers: Vec<ChartMarker>,
    current_frame: Option<RenderFrame>,
    previous_frame: Option<RenderFrame>,
}

impl<R: Renderer> WorldCupChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let plot = PlotArea::from_viewport(config.viewport, config.margins)?;

        Ok(Self {
            renderer,
            config,
            plot,
            controls: FilterControls::new(config.default_attribute),
            detail_panel: DetailPanel::new(),
            transition: RedrawTransition::new(config.transition),
            markers: Vec::new(),
            current_frame: None,
            previous_frame: None,
        })
    }

    /// Fills the year inputs from the dataset's bounds and renders the full
    /// range with the configured default attribute.
    pub fn bootstrap(&mut self, dataset: &Dataset) -> ChartResult<()> {
        let (min_year, max_year) = dataset.year_bounds();
        self.controls.set_year_range(min_year, max_year);
        debug!(min_year, max_year, "chart bootstrapped");
        self.render_range(dataset, self.config.default_attribute, min_year, max_year)
    }

    /// Rebuilds the whole scene for one attribute over one inclusive year
    /// range, then starts the gradual redraw.
    ///
    /// An empty filtered set is terminal, not an error: axes render over a
    /// degenerate value domain and the scene has no line and no markers.
    pub fn render_range(
        &mut self,
        dataset: &Dataset,
        attribute: Attribute,
        begin_year: i32,
        end_year: i32,
    ) -> ChartResult<()> {
        let filtered = dataset.filter_range(begin_year, end_year);
        debug!(
            attribute = %attribute,
            begin_year,
            end_year,
            filtered = filtered.len(),
            "redraw"
        );

        let year_scale = YearScale::new(begin_year, end_year)?;
        let value_scale = ValueScale::from_max(max_attribute_value(&filtered, attribute))?;

        let mut frame = RenderFrame::new(self.config.viewport, self.plot);
        frame.x_axis = build_x_axis(year_scale, self.plot, self.config.x_tick_target);
        frame.y_axis = build_y_axis(value_scale, self.plot, self.config.y_tick_count);

        if !filtered.is_empty() {
            let samples: Vec<(i32, f64)> = filtered
                .iter()
                .map(|record| (record.year, record.value_of(attribute)))
                .collect();
            frame.series_line = Some(PolylinePrimitive::new(
                project_polyline(&samples, year_scale, value_scale, self.plot),
                SERIES_STROKE_WIDTH_PX,
                Color::STEEL_BLUE,
            ));
        }

        self.markers = place_markers(
            &filtered,
            attribute,
            year_scale,
            value_scale,
            self.plot,
            self.config.marker_radius,
        );
        frame.markers = self
            .markers
            .iter()
            .map(|marker| CirclePrimitive::new(marker.x, marker.y, marker.radius, Color::BLACK))
            .collect();

        self.previous_frame = self.current_frame.take();
        self.current_frame = Some(frame);
        self.transition.begin();
        self.present()
    }

    /// Applies the year inputs as typed: parse both strictly, then redraw
    /// with the currently selected attribute.
    pub fn apply_filter(&mut self, dataset: &Dataset) -> ChartResult<()> {
        let (begin_year, end_year) = self.controls.parsed_range()?;
        self.render_range(dataset, self.controls.attribute(), begin_year, end_year)
    }

    /// Handles an attribute selector change: resolve the name against the
    /// closed attribute set, then redraw over the current year inputs.
    pub fn on_attribute_selected(&mut self, dataset: &Dataset, name: &str) -> ChartResult<()> {
        self.controls.select_attribute_name(name)?;
        self.apply_filter(dataset)
    }

    /// Resolves a click at plot-area coordinates to the marker under it and
    /// shows that marker's own record in the detail panel.
    pub fn handle_click(&mut self, x: f64, y: f64) -> Option<&WorldCupRecord> {
        let marker = marker_at_point(&self.markers, x, y)?;
        debug!(year = marker.record.year, index = marker.index, "marker clicked");
        self.detail_panel.show(&marker.record);
        Some(&marker.record)
    }

    /// Steps the redraw transition and presents the frame for the new phase.
    pub fn advance(&mut self, delta_seconds: f64) -> ChartResult<()> {
        self.transition.advance(delta_seconds);
        if !self.transition.is_animating() {
            self.previous_frame = None;
        }
        self.present()
    }

    /// The scene visible at the current transition phase: the old scene
    /// fading out while `Clearing`, the new scene otherwise.
    #[must_use]
    pub fn presented_frame(&self) -> RenderFrame {
        let empty = || RenderFrame::new(self.config.viewport, self.plot);
        let mut frame = match self.transition.phase() {
            RedrawPhase::Clearing => self.previous_frame.clone().unwrap_or_else(empty),
            RedrawPhase::Drawing | RedrawPhase::Idle => {
                self.current_frame.clone().unwrap_or_else(empty)
            }
        };
        frame.opacity = self.transition.opacity();
        frame
    }

    fn present(&mut self) -> ChartResult<()> {
        let frame = self.presented_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn phase(&self) -> RedrawPhase {
        self.transition.phase()
    }

    #[must_use]
    pub fn current_frame(&self) -> Option<&RenderFrame> {
        self.current_frame.as_ref()
    }

    #[must_use]
    pub fn markers(&self) -> &[ChartMarker] {
        &self.markers
    }

    #[must_use]
    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut FilterControls {
        &mut self.controls
    }

    #[must_use]
    pub fn detail_panel(&self) -> &DetailPanel {
        &self.detail_panel
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
