//! Propagation of a committed selection to the collaborating views.

mod detail_panel;
#[cfg(feature = "http-client")]
mod http_client;
mod viewer;

pub use detail_panel::{DetailPanel, DetailPanelClient, DetailRequest};
#[cfg(feature = "http-client")]
pub use http_client::HttpDetailPanelClient;
pub use viewer::{HighlightRequest, ResidueHighlight, ViewerSync};

use tracing::{debug, warn};

use crate::core::{Point, Selection};
use crate::error::PlotResult;
use crate::render::Color;

/// Which side effects of a propagation went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub highlight_delivered: bool,
    pub detail_requested: bool,
}

impl SyncReport {
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.highlight_delivered && self.detail_requested
    }
}

/// Fans a selection out to the structure viewer and the detail panel.
///
/// Both effects are best-effort: a failing collaborator is logged and
/// reported, never retried, and never stops the other effect.
pub struct SelectionSync {
    viewer: Box<dyn ViewerSync>,
    detail_panel: Box<dyn DetailPanelClient>,
    neutral_color: Color,
}

impl SelectionSync {
    pub fn new(
        viewer: impl ViewerSync + 'static,
        detail_panel: impl DetailPanelClient + 'static,
        neutral_color: Color,
    ) -> Self {
        Self {
            viewer: Box::new(viewer),
            detail_panel: Box::new(detail_panel),
            neutral_color,
        }
    }

    #[must_use]
    pub fn neutral_color(&self) -> Color {
        self.neutral_color
    }

    /// Highlights `selected_points` and requests details for `selection`.
    pub fn propagate(&mut self, selection: &Selection, selected_points: &[&Point]) -> SyncReport {
        let highlight =
            HighlightRequest::from_points(selected_points.iter().copied(), self.neutral_color);
        let detail = DetailRequest::new(selection.ids().to_vec());
        debug!(
            selected = selection.len(),
            query = %detail.path_and_query(),
            "propagating selection"
        );

        SyncReport {
            highlight_delivered: log_failure(self.viewer.highlight(&highlight), "viewer highlight"),
            detail_requested: log_failure(self.detail_panel.request(&detail), "detail request"),
        }
    }

    /// Asks the viewer to clear and load another structure.
    pub fn load_structure(&mut self, structure_id: &str) -> PlotResult<()> {
        debug!(structure_id, "loading structure");
        self.viewer.load_structure(structure_id)
    }
}

fn log_failure(result: PlotResult<()>, effect: &'static str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!(effect, error = %err, "selection side effect failed");
            false
        }
    }
}
