mod brush_controller;
mod config;
mod controller;
mod data_controller;
mod subscriptions;

pub use brush_controller::BrushCommitted;
pub use config::PlotConfig;
pub use controller::ScatterPlotController;
pub use subscriptions::SubscriptionId;
