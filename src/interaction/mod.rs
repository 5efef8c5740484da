use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::PlotExtent;

/// Brush rectangle in plot pixel space, normalized so `x0 <= x1`, `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRectangle {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushRectangle {
    /// Builds a normalized rectangle from two opposite corners.
    #[must_use]
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }

    /// Zero-width or zero-height rectangles select nothing.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushMode {
    Idle,
    Dragging,
}

/// Outcome of a finished drag.
///
/// `rectangle` is `None` when the brush was cleared, either by a zero-area
/// drag or programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushCommit {
    pub rectangle: Option<BrushRectangle>,
}

impl BrushCommit {
    #[must_use]
    pub fn cleared() -> Self {
        Self { rectangle: None }
    }

    #[must_use]
    pub fn is_cleared(self) -> bool {
        self.rectangle.is_none()
    }
}

/// Pointer-drag brush over the plot's drawing area.
///
/// Pointer-down inside the extent starts a drag, moves stretch the rectangle
/// from the anchor (clamped to the extent), pointer-up commits exactly once
/// and re-arms the brush. A second pointer-down mid-drag restarts the drag
/// from the new anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSelector {
    extent: PlotExtent,
    mode: BrushMode,
    anchor: (f64, f64),
    current: (f64, f64),
    last_commit: Option<BrushCommit>,
}

impl BrushSelector {
    #[must_use]
    pub fn new(extent: PlotExtent) -> Self {
        Self {
            extent,
            mode: BrushMode::Idle,
            anchor: (0.0, 0.0),
            current: (0.0, 0.0),
            last_commit: None,
        }
    }

    #[must_use]
    pub fn extent(self) -> PlotExtent {
        self.extent
    }

    /// Re-issues the brushable extent after a resize.
    ///
    /// An in-progress drag is re-clamped to the new extent.
    pub fn set_extent(&mut self, extent: PlotExtent) {
        self.extent = extent;
        if self.mode == BrushMode::Dragging {
            self.anchor = extent.clamp(self.anchor.0, self.anchor.1);
            self.current = extent.clamp(self.current.0, self.current.1);
        }
    }

    #[must_use]
    pub fn mode(self) -> BrushMode {
        self.mode
    }

    #[must_use]
    pub fn last_commit(self) -> Option<BrushCommit> {
        self.last_commit
    }

    /// Rectangle of the drag in progress, if any.
    #[must_use]
    pub fn current_rectangle(self) -> Option<BrushRectangle> {
        match self.mode {
            BrushMode::Dragging => Some(BrushRectangle::from_corners(self.anchor, self.current)),
            BrushMode::Idle => None,
        }
    }

    /// Starts a drag. Returns `false` when the pointer is outside the extent.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() || !self.extent.contains(x, y) {
            trace!(x, y, "brush pointer-down outside extent ignored");
            return false;
        }
        if self.mode == BrushMode::Dragging {
            trace!("brush restarted before pointer-up");
        }
        self.mode = BrushMode::Dragging;
        self.anchor = (x, y);
        self.current = (x, y);
        true
    }

    /// Updates the drag; ignored while idle.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<BrushRectangle> {
        if self.mode != BrushMode::Dragging || !x.is_finite() || !y.is_finite() {
            return None;
        }
        self.current = self.extent.clamp(x, y);
        self.current_rectangle()
    }

    /// Ends the drag at the given position and commits it.
    ///
    /// Returns `None` while idle, so a stray pointer-up never dispatches.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<BrushCommit> {
        if self.mode != BrushMode::Dragging {
            return None;
        }
        if x.is_finite() && y.is_finite() {
            self.current = self.extent.clamp(x, y);
        }

        let rectangle = BrushRectangle::from_corners(self.anchor, self.current);
        let commit = BrushCommit {
            rectangle: (!rectangle.is_degenerate()).then_some(rectangle),
        };
        self.mode = BrushMode::Idle;
        self.last_commit = Some(commit);
        trace!(cleared = commit.is_cleared(), "brush committed");
        Some(commit)
    }

    /// Abandons an in-progress drag without committing.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.mode == BrushMode::Dragging;
        self.mode = BrushMode::Idle;
        was_dragging
    }

    /// Clears the brush programmatically, producing a cleared commit.
    pub fn clear(&mut self) -> BrushCommit {
        self.mode = BrushMode::Idle;
        let commit = BrushCommit::cleared();
        self.last_commit = Some(commit);
        commit
    }
}
