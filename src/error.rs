use thiserror::Error;

/// Top-level error type for the cut-away engine.
#[derive(Debug, Error)]
pub enum CutawayError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to surface and curve evaluation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate surface normal at (u, v) = ({u}, {v})")]
    DegenerateNormal { u: f64, v: f64 },

    #[error("non-finite value from {what} at (u, v) = ({u}, {v})")]
    NonFinite { what: &'static str, u: f64, v: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to boundary construction and boolean operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`CutawayError`].
pub type Result<T> = std::result::Result<T, CutawayError>;
