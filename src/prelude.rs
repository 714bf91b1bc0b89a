pub use crate::color::{rgb8_to_hex_string, rgb_color_to_hex_string};
pub use crate::dimensions::DisplayMetrics;
pub use crate::error::{DimensionError, OptionalError};
pub use crate::immutable::{copy_of, ImmutableList};
pub use crate::optional::Optional;

pub fn empty<T>() -> Optional<T> {
    Default::default()
}
