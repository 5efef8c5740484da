use std::collections::HashSet;

use tracing::debug;

use crate::core::{LinearScale, Point, Selection, project_points};
use crate::interaction::{BrushCommit, BrushRectangle};
use crate::render::Renderer;
use crate::sync::SyncReport;

use super::ScatterPlotController;

/// Event dispatched to `on_brush_committed` subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushCommitted {
    pub commit: BrushCommit,
    pub selection: Selection,
    pub report: SyncReport,
}

impl<R: Renderer> ScatterPlotController<R> {
    /// Starts a brush drag. Returns `false` outside the drawing area.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.brush.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<BrushRectangle> {
        self.brush.pointer_move(x, y)
    }

    /// Ends the drag and propagates the resulting selection.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<BrushCommitted> {
        let commit = self.brush.pointer_up(x, y)?;
        Some(self.commit_brush(commit))
    }

    /// Abandons the drag in progress without touching the selection.
    pub fn cancel_brush(&mut self) -> bool {
        self.brush.cancel()
    }

    /// Clears the brush and notifies collaborators with an empty selection.
    pub fn clear_selection(&mut self) -> BrushCommitted {
        let commit = self.brush.clear();
        self.commit_brush(commit)
    }

    /// Points whose pixel position lies inside `rectangle`, bounds included.
    #[must_use]
    pub fn points_in_rectangle(&self, rectangle: BrushRectangle) -> Vec<&Point> {
        points_in_rectangle(&self.dataset, self.x_scale, self.y_scale, rectangle)
    }

    /// Points of the current selection, in dataset order.
    ///
    /// Only the first row of a repeated id is returned, matching what is drawn.
    #[must_use]
    pub fn selected_points(&self) -> Vec<&Point> {
        let mut seen = HashSet::new();
        self.dataset
            .iter()
            .filter(|point| self.selection.contains(&point.id) && seen.insert(point.id.as_str()))
            .collect()
    }

    fn commit_brush(&mut self, commit: BrushCommit) -> BrushCommitted {
        let selected = match commit.rectangle {
            Some(rectangle) => {
                points_in_rectangle(&self.dataset, self.x_scale, self.y_scale, rectangle)
            }
            None => Vec::new(),
        };
        let selection =
            Selection::from_ids(selected.iter().map(|point| point.id.clone()).collect());
        let report = self.sync.propagate(&selection, &selected);
        debug!(
            cleared = commit.is_cleared(),
            selected = selection.len(),
            complete = report.is_complete(),
            "brush selection committed"
        );

        self.selection = selection;
        let event = BrushCommitted {
            commit,
            selection: self.selection.clone(),
            report,
        };
        self.dispatch_brush_committed(&event);
        event
    }
}

// Pixel-space test: comparing projected positions avoids caring about the
// direction of either scale's range. A repeated id is judged by its first
// plottable row only, the one the point renderer draws.
fn points_in_rectangle(
    dataset: &[Point],
    x_scale: LinearScale,
    y_scale: LinearScale,
    rectangle: BrushRectangle,
) -> Vec<&Point> {
    let mut seen: HashSet<&str> = HashSet::new();
    project_points(dataset, x_scale, y_scale)
        .into_iter()
        .filter(|projected| seen.insert(dataset[projected.index].id.as_str()))
        .filter(|projected| rectangle.contains(projected.cx, projected.cy))
        .map(|projected| &dataset[projected.index])
        .collect()
}
