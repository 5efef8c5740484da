mod frame;
mod null_renderer;
mod point_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use point_renderer::{JoinPlan, PointRenderer, PointTransition, RenderedPointView, TransitionKind};
pub use primitives::{CirclePrimitive, Color, RectPrimitive, Rgb8};

use crate::error::PlotResult;

/// Contract implemented by any drawing backend.
///
/// Join instructions arrive once per `set_data`, all three kinds scheduled at
/// the same instant. `render` then receives one fully sampled frame per
/// animation tick, so backends that only repaint can ignore the instructions.
pub trait Renderer {
    fn apply_enter(&mut self, _transition: &PointTransition) -> PlotResult<()> {
        Ok(())
    }

    fn apply_update(&mut self, _transition: &PointTransition) -> PlotResult<()> {
        Ok(())
    }

    fn apply_exit(&mut self, _transition: &PointTransition) -> PlotResult<()> {
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
