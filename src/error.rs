//! Error types for the helper utilities

use thiserror::Error;

/// Errors raised by [`Optional`](crate::optional::Optional)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionalError {
    #[error("a present value was required but none was given")]
    InvalidArgument,

    #[error("there is no value to get from this Optional")]
    NoValuePresent,
}

/// Errors raised when describing a display
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DimensionError {
    #[error("display density must be finite and positive, got {density}")]
    InvalidDensity { density: f32 },
}
