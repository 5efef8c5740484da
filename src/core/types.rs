use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Pixel size of the hosting container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Drawing area inside the plot margins, in pixels.
///
/// Brush coordinates and scale ranges live in this space, with the origin at
/// the top-left corner of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotExtent {
    pub width: f64,
    pub height: f64,
}

impl PlotExtent {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    #[must_use]
    pub fn clamp(self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }
}

/// One plotted variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: String,
    /// Structure position highlighted by the viewer for this variant.
    pub residue_number: i32,
    pub x_value: f64,
    pub y_value: f64,
    pub color: Color,
}

impl Point {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        residue_number: i32,
        x_value: f64,
        y_value: f64,
        color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            residue_number,
            x_value,
            y_value,
            color,
        }
    }

    /// Points with a non-finite coordinate are neither drawn nor selectable.
    #[must_use]
    pub fn is_plottable(&self) -> bool {
        self.x_value.is_finite() && self.y_value.is_finite()
    }
}
