use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(
        "invalid scale: domain=[{domain_min}, {domain_max}], range=[{range_min}, {range_max}]"
    )]
    InvalidScale {
        domain_min: f64,
        domain_max: f64,
        range_min: f64,
        range_max: f64,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("collaborator failure: {0}")]
    Sync(String),
}
