use boxopt_core::{DimensionMismatch, RegionError};

/// Errors that can occur during an optimization run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),

    #[error("region error: {0}")]
    Region(#[from] RegionError),
}
