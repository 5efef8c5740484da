use serde::{Deserialize, Serialize};

use crate::animation::TransitionConfig;
use crate::core::{PlotLayout, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Public plot bootstrap configuration.
///
/// Serializable so host pages can ship the plot setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub container: Viewport,
    #[serde(default)]
    pub layout: PlotLayout,
    pub x_min: f64,
    pub x_max: f64,
    #[serde(default = "default_y_min")]
    pub y_min: f64,
    #[serde(default = "default_y_max")]
    pub y_max: f64,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default = "default_neutral_color")]
    pub neutral_color: Color,
}

impl PlotConfig {
    /// Creates a config with the default significance axis `[0, 21]`.
    #[must_use]
    pub fn new(container: Viewport, x_min: f64, x_max: f64) -> Self {
        Self {
            container,
            layout: PlotLayout::default(),
            x_min,
            x_max,
            y_min: default_y_min(),
            y_max: default_y_max(),
            transition: TransitionConfig::default(),
            neutral_color: default_neutral_color(),
        }
    }

    #[must_use]
    pub fn with_y_domain(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PlotLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    #[must_use]
    pub fn with_neutral_color(mut self, color: Color) -> Self {
        self.neutral_color = color;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_y_min() -> f64 {
    0.0
}

fn default_y_max() -> f64 {
    21.0
}

fn default_neutral_color() -> Color {
    Color::WHITE
}
