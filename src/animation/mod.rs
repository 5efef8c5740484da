//! Frame-independent transition timing.

mod clock;
mod easing;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use easing::Easing;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

pub const DEFAULT_TRANSITION_MS: u64 = 750;
pub const DEFAULT_POINT_RADIUS_PX: f64 = 4.0;

/// Timing and sizing shared by every enter/update/exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub duration_ms: u64,
    pub point_radius_px: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_MS,
            point_radius_px: DEFAULT_POINT_RADIUS_PX,
            easing: Easing::default(),
        }
    }
}

impl TransitionConfig {
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.point_radius_px.is_finite() || self.point_radius_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Eased progress of a transition started at `started_at`, in `[0, 1]`.
    ///
    /// A zero duration completes immediately.
    #[must_use]
    pub fn progress(self, started_at: Duration, now: Duration) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(started_at).as_secs_f64();
        self.easing.evaluate(elapsed / self.duration().as_secs_f64())
    }
}
