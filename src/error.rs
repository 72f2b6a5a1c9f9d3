use thiserror::Error;

/// Top-level error type for the Planis geometry kernel.
#[derive(Debug, Error)]
pub enum PlanisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing primitives through checked constructors.
///
/// Degenerate but finite geometry is never an error; the kernel resolves it
/// to an empty result or an `Outside` classification.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{what} must be non-negative, got {value}")]
    NegativeExtent { what: &'static str, value: f64 },

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors related to kernel operations invoked with malformed input.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{role} polygon needs at least 3 points, got {actual}")]
    InsufficientPoints { role: &'static str, actual: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PlanisError`].
pub type Result<T> = std::result::Result<T, PlanisError>;
