use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Extremes or scaling inputs cannot be derived from what the caller supplied.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A scale factor denominator (resolved max or row count) is zero.
    #[error("degenerate scale: {0}")]
    DegenerateScale(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to export `{}`: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
