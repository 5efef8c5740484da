use crate::render::Color;

/// Diverging white-centred color map for signed effect sizes.
///
/// Negative values shade from white towards red, positive values from white
/// towards blue, saturating at `max_abs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingColorMap {
    max_abs: f64,
}

impl DivergingColorMap {
    #[must_use]
    pub fn new(max_abs: f64) -> Self {
        Self {
            max_abs: max_abs.abs(),
        }
    }

    /// Builds a map scaled to the largest absolute finite value in `values`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let max_abs = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(0.0_f64, |acc, value| acc.max(value.abs()));
        Self::new(max_abs)
    }

    #[must_use]
    pub fn max_abs(self) -> f64 {
        self.max_abs
    }

    #[must_use]
    pub fn color_for(self, value: f64) -> Color {
        if self.max_abs == 0.0 || !self.max_abs.is_finite() || !value.is_finite() {
            return Color::WHITE;
        }

        let normalized = (value / self.max_abs).clamp(-1.0, 1.0);
        if normalized < 0.0 {
            let intensity = quantize(1.0 + normalized);
            Color::rgb(1.0, intensity, intensity)
        } else {
            let intensity = quantize(1.0 - normalized);
            Color::rgb(intensity, intensity, 1.0)
        }
    }
}

// Snap to the 8-bit grid so map output matches what the viewer receives.
fn quantize(channel: f64) -> f64 {
    (channel * 255.0).round() / 255.0
}
