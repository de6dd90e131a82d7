use thiserror::Error;

/// Unified error type for squaretriup
#[derive(Error, Debug)]
pub enum FigureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

pub type FigureResult<T> = Result<T, FigureError>;
