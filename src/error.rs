use thiserror::Error;

/// Top-level error type for arcbez.
#[derive(Debug, Error)]
pub enum ArcbezError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised while building or segmenting geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}

/// Errors related to queries over computed geometry.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to curve sampling.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`ArcbezError`].
pub type Result<T> = std::result::Result<T, ArcbezError>;
