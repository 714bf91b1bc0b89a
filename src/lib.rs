//! Small, independent helpers: a null-safe [`Optional`] container, a packed
//! color formatter, an immutable list copy, and px/dp conversions.

pub mod color;
pub mod dimensions;
pub mod error;
pub mod immutable;
pub mod optional;
pub mod prelude;

pub use error::{DimensionError, OptionalError};
pub use immutable::ImmutableList;
pub use optional::Optional;
