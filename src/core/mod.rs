pub mod color_map;
pub mod layout;
pub mod projection;
pub mod scale;
pub mod selection;
pub mod types;

pub use color_map::DivergingColorMap;
pub use layout::{Margins, PlotLayout};
pub use projection::{ProjectedPoint, project_points};
pub use scale::LinearScale;
pub use selection::Selection;
pub use types::{PlotExtent, Point, Viewport};
