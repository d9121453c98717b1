use thiserror::Error;

pub type BarGraphResult<T> = Result<T, BarGraphError>;

#[derive(Debug, Error)]
pub enum BarGraphError {
    #[error("column index {index} out of range: surface holds {count} columns")]
    ColumnIndex { index: usize, count: usize },

    #[error("surface error: {0}")]
    Surface(String),

    #[error("op log serialization failed: {0}")]
    Snapshot(String),
}
