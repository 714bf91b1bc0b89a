use std::sync::Arc;

/// A read-only copy of a sequence. Clones share the same storage.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ImmutableList<T>(Arc<[T]>);

/// Copies `items` into a new [`ImmutableList`], keeping their order.
pub fn copy_of<T>(items: impl IntoIterator<Item = T>) -> ImmutableList<T> {
    ImmutableList(items.into_iter().collect())
}

impl<T> ImmutableList<T> {
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        ImmutableList(self.0.clone())
    }
}

impl<T> std::ops::Deref for ImmutableList<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::convert::From<Vec<T>> for ImmutableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items.into())
    }
}

impl<T> std::iter::FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        copy_of(iter)
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: PartialEq> PartialEq<[T]> for ImmutableList<T> {
    fn eq(&self, other: &[T]) -> bool {
        *self.0 == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ImmutableList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self.0 == other[..]
    }
}
