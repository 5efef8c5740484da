use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{Point, Viewport};
use crate::error::PlotResult;
use crate::render::{Color, JoinPlan, RectPrimitive, RenderFrame, Renderer};

use super::ScatterPlotController;
use super::controller::build_scales;

const BRUSH_FILL: Color = Color::rgba(0.47, 0.47, 0.47, 0.3);
const BRUSH_BORDER: Color = Color::rgb(1.0, 1.0, 1.0);

impl<R: Renderer> ScatterPlotController<R> {
    /// Replaces the dataset and schedules enter/update/exit transitions.
    ///
    /// The current selection is left untouched: selection follows the brush,
    /// not the data.
    ///
    /// Fails with `InvalidData`, leaving the current dataset in place, when a
    /// point carries an out-of-range color.
    pub fn set_data(&mut self, points: Vec<Point>) -> PlotResult<JoinPlan> {
        for point in &points {
            point.color.validate()?;
        }
        let non_finite = points.iter().filter(|point| !point.is_plottable()).count();
        debug!(count = points.len(), non_finite, "set scatter data");
        self.dataset = points;
        self.rejoin()
    }

    /// Rebuilds scales and brush extent for a new container size.
    ///
    /// Live views animate to their re-projected positions.
    pub fn resize(&mut self, container: Viewport) -> PlotResult<JoinPlan> {
        let mut config = self.config;
        config.container = container;
        let extent = config.layout.plot_extent(container)?;
        let (x_scale, y_scale) = build_scales(config, extent)?;

        debug!(
            width = extent.width,
            height = extent.height,
            "resized plot extent"
        );
        self.config = config;
        self.extent = extent;
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.brush.set_extent(extent);
        self.rejoin()
    }

    /// Advances animations to the clock's current time and renders one frame.
    ///
    /// Returns `true` while transitions are still running.
    pub fn tick(&mut self) -> PlotResult<bool> {
        let now = self.clock.now();
        let frame = self.build_frame(now);
        trace!(circles = frame.circles.len(), "render frame");
        self.renderer.render(&frame)?;
        Ok(self.points.is_animating(now))
    }

    fn build_frame(&mut self, now: Duration) -> RenderFrame {
        let mut frame = RenderFrame::new(self.extent);
        frame.circles = self.points.advance(now);
        if let Some(rect) = self.brush.current_rectangle() {
            frame = frame.with_brush(
                RectPrimitive::new(rect.x0, rect.y0, rect.width(), rect.height(), BRUSH_FILL)
                    .with_border(1.0, BRUSH_BORDER),
            );
        }
        frame
    }

    fn rejoin(&mut self) -> PlotResult<JoinPlan> {
        let now = self.clock.now();
        let plan = self
            .points
            .set_data(&self.dataset, self.x_scale, self.y_scale, now);

        for transition in &plan.entered {
            self.renderer.apply_enter(transition)?;
        }
        for transition in &plan.updated {
            self.renderer.apply_update(transition)?;
        }
        for transition in &plan.exited {
            self.renderer.apply_exit(transition)?;
        }
        Ok(plan)
    }
}
