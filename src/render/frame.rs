use crate::core::PlotExtent;
use crate::error::{PlotError, PlotResult};
use crate::render::{CirclePrimitive, RectPrimitive};

/// Backend-agnostic scene for one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub extent: PlotExtent,
    pub circles: Vec<CirclePrimitive>,
    /// In-progress brush rectangle, if a drag is active.
    pub brush: Option<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(extent: PlotExtent) -> Self {
        Self {
            extent,
            circles: Vec::new(),
            brush: None,
        }
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_brush(mut self, brush: RectPrimitive) -> Self {
        self.brush = Some(brush);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.extent.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.extent.width,
                height: self.extent.height,
            });
        }

        for circle in &self.circles {
            circle.validate()?;
        }
        if let Some(brush) = self.brush {
            brush.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.brush.is_none()
    }
}
