use std::io;
use thiserror::Error;

/// Everything that can abort a fixture run.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// value synthesis only knows unsigned, signed and float kinds
    #[error("Unsupported dtype kind: {0}")]
    UnsupportedDtypeKind(String),
    #[error("Unsupported order: {0}")]
    UnsupportedOrder(String),
    #[error("Unsupported dtype: {0}")]
    UnsupportedDtype(String),
    #[error("Invalid npy header: {0}")]
    InvalidHeader(String),
    #[error("ShapeError: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("IoError: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
