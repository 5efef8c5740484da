use crate::error::PlotResult;
use crate::render::{PointTransition, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content and counts join instructions so tests can
/// observe what a real backend would have been asked to do.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub enter_count: usize,
    pub update_count: usize,
    pub exit_count: usize,
    pub frames_rendered: usize,
    pub last_circle_count: usize,
}

impl Renderer for NullRenderer {
    fn apply_enter(&mut self, _transition: &PointTransition) -> PlotResult<()> {
        self.enter_count += 1;
        Ok(())
    }

    fn apply_update(&mut self, _transition: &PointTransition) -> PlotResult<()> {
        self.update_count += 1;
        Ok(())
    }

    fn apply_exit(&mut self, _transition: &PointTransition) -> PlotResult<()> {
        self.exit_count += 1;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_circle_count = frame.circles.len();
        Ok(())
    }
}
