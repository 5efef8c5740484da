use serde::{Deserialize, Serialize};

use crate::core::{PlotExtent, Viewport};
use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// How the drawing area is derived from the hosting container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotLayout {
    /// Drawing area fills the container minus the margins.
    Responsive { margins: Margins },
    /// Drawing area has a fixed size regardless of the container.
    Fixed {
        margins: Margins,
        width: f64,
        height: f64,
    },
}

impl PlotLayout {
    /// Container-sized preset with margins 20/30/40/60.
    #[must_use]
    pub const fn responsive() -> Self {
        Self::Responsive {
            margins: Margins::new(20.0, 30.0, 40.0, 60.0),
        }
    }

    /// Fixed 460x400 preset with margins 10/30/30/60.
    #[must_use]
    pub const fn fixed() -> Self {
        Self::Fixed {
            margins: Margins::new(10.0, 30.0, 30.0, 60.0),
            width: 460.0,
            height: 400.0,
        }
    }

    #[must_use]
    pub fn margins(self) -> Margins {
        match self {
            Self::Responsive { margins } | Self::Fixed { margins, .. } => margins,
        }
    }

    /// Resolves the drawing area for the given container size.
    pub fn plot_extent(self, container: Viewport) -> PlotResult<PlotExtent> {
        let extent = match self {
            Self::Responsive { margins } => PlotExtent::new(
                f64::from(container.width) - margins.left - margins.right,
                f64::from(container.height) - margins.top - margins.bottom,
            ),
            Self::Fixed { width, height, .. } => PlotExtent::new(width, height),
        };

        if !extent.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: extent.width,
                height: extent.height,
            });
        }
        Ok(extent)
    }

    /// Full SVG/canvas size including margins.
    pub fn outer_size(self, container: Viewport) -> PlotResult<(f64, f64)> {
        let extent = self.plot_extent(container)?;
        let margins = self.margins();
        Ok((
            extent.width + margins.left + margins.right,
            extent.height + margins.top + margins.bottom,
        ))
    }
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self::responsive()
    }
}
