use std::time::Duration;

use crate::animation::{SystemClock, TimeSource};
use crate::core::{LinearScale, PlotExtent, Point, Selection};
use crate::error::PlotResult;
use crate::interaction::{BrushMode, BrushSelector};
use crate::render::{PointRenderer, RenderedPointView, Renderer};
use crate::sync::{DetailPanelClient, SelectionSync, ViewerSync};

use super::{BrushCommitted, PlotConfig, SubscriptionId};

pub(super) type CommitHandler = Box<dyn FnMut(&BrushCommitted)>;

/// Main orchestration facade consumed by host applications.
///
/// `ScatterPlotController` owns the dataset, both scales, the animated point
/// views and the brush, and pushes committed selections to the injected
/// viewer and detail-panel collaborators. Everything runs on the caller's
/// thread; animation advances only when [`tick`](Self::tick) is called.
pub struct ScatterPlotController<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotConfig,
    pub(super) extent: PlotExtent,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) dataset: Vec<Point>,
    pub(super) points: PointRenderer,
    pub(super) brush: BrushSelector,
    pub(super) selection: Selection,
    pub(super) sync: SelectionSync,
    pub(super) clock: Box<dyn TimeSource>,
    pub(super) subscribers: Vec<(SubscriptionId, CommitHandler)>,
    pub(super) next_subscription: SubscriptionId,
}

impl<R: Renderer> ScatterPlotController<R> {
    /// Creates a plot with no data.
    ///
    /// Fails when the layout leaves no drawing area or either axis domain is
    /// degenerate.
    pub fn new(
        renderer: R,
        viewer: impl ViewerSync + 'static,
        detail_panel: impl DetailPanelClient + 'static,
        config: PlotConfig,
    ) -> PlotResult<Self> {
        config.transition.validate()?;
        config.neutral_color.validate()?;
        let extent = config.layout.plot_extent(config.container)?;
        let (x_scale, y_scale) = build_scales(config, extent)?;

        Ok(Self {
            renderer,
            config,
            extent,
            x_scale,
            y_scale,
            dataset: Vec::new(),
            points: PointRenderer::new(config.transition),
            brush: BrushSelector::new(extent),
            selection: Selection::empty(),
            sync: SelectionSync::new(viewer, detail_panel, config.neutral_color),
            clock: Box::new(SystemClock::new()),
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Replaces the time source that drives transitions.
    #[must_use]
    pub fn with_time_source(mut self, clock: impl TimeSource + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn config(&self) -> PlotConfig {
        self.config
    }

    #[must_use]
    pub fn extent(&self) -> PlotExtent {
        self.extent
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn map_x_to_pixel(&self, x: f64) -> f64 {
        self.x_scale.map(x)
    }

    #[must_use]
    pub fn map_pixel_to_x(&self, pixel: f64) -> f64 {
        self.x_scale.unmap(pixel)
    }

    #[must_use]
    pub fn map_y_to_pixel(&self, y: f64) -> f64 {
        self.y_scale.map(y)
    }

    #[must_use]
    pub fn map_pixel_to_y(&self, pixel: f64) -> f64 {
        self.y_scale.unmap(pixel)
    }

    #[must_use]
    pub fn dataset(&self) -> &[Point] {
        &self.dataset
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn brush_mode(&self) -> BrushMode {
        self.brush.mode()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Current visual state of a point, sampled at the clock's time.
    #[must_use]
    pub fn view(&self, id: &str) -> Option<RenderedPointView> {
        self.points.view(id, self.clock.now())
    }

    #[must_use]
    pub fn point_renderer(&self) -> &PointRenderer {
        &self.points
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.points.is_animating(self.clock.now())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Asks the structure viewer to clear and load another structure.
    pub fn load_structure(&mut self, structure_id: &str) -> PlotResult<()> {
        self.sync.load_structure(structure_id)
    }
}

/// x maps onto `[0, width]`; y onto `[height, 0]` so larger values sit higher.
pub(super) fn build_scales(
    config: PlotConfig,
    extent: PlotExtent,
) -> PlotResult<(LinearScale, LinearScale)> {
    let x_scale = LinearScale::new(config.x_min, config.x_max, 0.0, extent.width)?;
    let y_scale = LinearScale::new(config.y_min, config.y_max, extent.height, 0.0)?;
    Ok((x_scale, y_scale))
}
