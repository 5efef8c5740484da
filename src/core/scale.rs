use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Invertible linear map between a data domain and a pixel range.
///
/// Scales are immutable once built. A plot recreates its scales on
/// initialization and on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Builds a scale mapping `[domain_min, domain_max]` onto
    /// `[range_min, range_max]`.
    ///
    /// The range may be inverted (`range_min > range_max`), which is how the
    /// y axis puts larger values at the top of the plot.
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> PlotResult<Self> {
        let finite = domain_min.is_finite()
            && domain_max.is_finite()
            && range_min.is_finite()
            && range_max.is_finite();
        if !finite || domain_min >= domain_max || range_min == range_max {
            return Err(PlotError::InvalidScale {
                domain_min,
                domain_max,
                range_min,
                range_max,
            });
        }

        Ok(Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    /// Maps a data value to its pixel coordinate.
    ///
    /// Values outside the domain extrapolate linearly.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + normalized * (self.range_max - self.range_min)
    }

    /// Maps a pixel coordinate back to a data value.
    #[must_use]
    pub fn unmap(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + normalized * (self.domain_max - self.domain_min)
    }

    /// Returns a scale over the same domain with a new pixel range.
    pub fn with_range(self, range_min: f64, range_max: f64) -> PlotResult<Self> {
        Self::new(self.domain_min, self.domain_max, range_min, range_max)
    }
}
