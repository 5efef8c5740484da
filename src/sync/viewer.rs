use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::PlotResult;
use crate::render::{Color, Rgb8};

/// Capability surface of the external structure viewer.
pub trait ViewerSync {
    /// Colors the listed residues and paints every other residue with the
    /// request's neutral color. An empty `data` list clears highlighting.
    fn highlight(&mut self, request: &HighlightRequest) -> PlotResult<()>;

    /// Clears the viewer and loads the given structure.
    fn load_structure(&mut self, structure_id: &str) -> PlotResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueHighlight {
    pub residue_number: i32,
    pub color: Rgb8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRequest {
    pub data: Vec<ResidueHighlight>,
    pub non_selected_color: Rgb8,
}

impl HighlightRequest {
    #[must_use]
    pub fn from_points<'a>(
        points: impl IntoIterator<Item = &'a Point>,
        non_selected_color: Color,
    ) -> Self {
        Self {
            data: points
                .into_iter()
                .map(|point| ResidueHighlight {
                    residue_number: point.residue_number,
                    color: point.color.to_rgb8(),
                })
                .collect(),
            non_selected_color: non_selected_color.to_rgb8(),
        }
    }

    #[must_use]
    pub fn clear(non_selected_color: Color) -> Self {
        Self {
            data: Vec::new(),
            non_selected_color: non_selected_color.to_rgb8(),
        }
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.data.is_empty()
    }
}
