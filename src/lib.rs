//! variant-scatter: brushable, animated scatter plot engine for variant data.
//!
//! The crate owns the interactive core of an effect-size vs. significance
//! plot: linear scales, the keyed enter/update/exit join of plotted points,
//! the rectangular brush, and propagation of a brushed selection to a
//! structure viewer and a detail panel. Drawing, the viewer and the network
//! are reached only through the traits in [`render`] and [`sync`].

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod sync;
pub mod telemetry;

pub use api::{PlotConfig, ScatterPlotController};
pub use error::{PlotError, PlotResult};
