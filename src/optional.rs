//! A container that may or may not hold a value.
//!
//! [`Optional`] keeps absence in the type: the slot is either `Present(T)` or
//! `Absent`, fixed when the container is built. Access goes through
//! [`Optional::get`], [`Optional::or_else`] and [`Optional::or_else_throw`],
//! none of which panic.

use std::fmt;

use crate::error::OptionalError;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<T> {
    Present(T),
    Absent,
}

/// Zero or one value of type `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(Slot<T>);

impl<T> Optional<T> {
    pub const fn empty() -> Self {
        Self(Slot::Absent)
    }

    pub const fn of(value: T) -> Self {
        Self(Slot::Present(value))
    }

    /// Builds a present `Optional` from a value the caller asserts is there.
    ///
    /// Fails with [`OptionalError::InvalidArgument`] on `None` instead of
    /// quietly returning an empty container. Use [`Optional::of_nullable`]
    /// for input that may legitimately be missing.
    pub fn try_of(value: Option<T>) -> Result<Self, OptionalError> {
        match value {
            Some(value) => Ok(Self::of(value)),
            None => Err(OptionalError::InvalidArgument),
        }
    }

    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::empty(),
        }
    }

    pub const fn is_present(&self) -> bool {
        matches!(self.0, Slot::Present(_))
    }

    /// Returns the held value, or [`OptionalError::NoValuePresent`] if there is none.
    pub fn get(&self) -> Result<&T, OptionalError> {
        match &self.0 {
            Slot::Present(value) => Ok(value),
            Slot::Absent => Err(OptionalError::NoValuePresent),
        }
    }

    pub fn or_else(self, fallback: T) -> T {
        match self.0 {
            Slot::Present(value) => value,
            Slot::Absent => fallback,
        }
    }

    /// Like [`Optional::or_else`], but the fallback may itself be missing.
    pub fn or_else_nullable(self, fallback: Option<T>) -> Option<T> {
        match self.0 {
            Slot::Present(value) => Some(value),
            Slot::Absent => fallback,
        }
    }

    /// Returns the held value, or hands `error` back to the caller untouched.
    pub fn or_else_throw<E>(self, error: E) -> Result<T, E> {
        match self.0 {
            Slot::Present(value) => Ok(value),
            Slot::Absent => Err(error),
        }
    }

    /// Borrows the held value without consuming the container.
    pub fn as_ref(&self) -> Optional<&T> {
        match &self.0 {
            Slot::Present(value) => Optional::of(value),
            Slot::Absent => Optional::empty(),
        }
    }

    /// Hands the slot back as a plain `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> std::default::Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::convert::From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> std::convert::From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional.0 {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Slot::Present(value) => write!(f, "Optional[{}]", value),
            Slot::Absent => f.write_str("Optional.empty"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Slot::Present(value) => f.debug_tuple("Optional").field(value).finish(),
            Slot::Absent => f.write_str("Optional.empty"),
        }
    }
}
