use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use log::trace;

use crate::error::SliceVecError;

/// A `Vec` with Python-style negative indexing and end-exclusive slicing
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SliceVec<T> {
    items: Vec<T>,
}

impl<T> SliceVec<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Creates a vector of `len` default values.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.items.resize(new_len, value);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Tries to get the element at `index`, counting from the end when negative.
    ///
    /// # Errors
    ///
    /// Returns `SliceVecError::IndexOutOfBounds` if `index` is outside
    /// `-len..len`.
    pub fn try_get(&self, index: isize) -> Result<&T, SliceVecError> {
        let position = self.resolve(index)?;
        Ok(&self.items[position])
    }

    /// Mutable counterpart of [`SliceVec::try_get`].
    ///
    /// # Errors
    ///
    /// Returns `SliceVecError::IndexOutOfBounds` if `index` is outside
    /// `-len..len`.
    pub fn try_get_mut(&mut self, index: isize) -> Result<&mut T, SliceVecError> {
        let position = self.resolve(index)?;
        Ok(&mut self.items[position])
    }

    /// Copies the elements in `start..end` into a new `SliceVec`.
    ///
    /// Unlike indexing, both bounds are plain storage positions; negative
    /// bounds are not accepted.
    ///
    /// # Errors
    ///
    /// Returns `SliceVecError::InvalidRange` if `start > end` or `end > len`.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, SliceVecError>
    where
        T: Clone,
    {
        let range = self
            .items
            .get(start..end)
            .ok_or(SliceVecError::InvalidRange {
                start,
                end,
                length: self.items.len(),
            })?;
        trace!("slicevec: copied {start}..{end} of {}", self.items.len());
        Ok(Self {
            items: range.to_vec(),
        })
    }

    /// Maps a possibly negative index to a storage position.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn resolve(&self, index: isize) -> Result<usize, SliceVecError> {
        let length = self.items.len();
        // Vec never holds more than isize::MAX elements
        let position = if index < 0 {
            index + length as isize
        } else {
            index
        };
        if position < 0 || position as usize >= length {
            return Err(SliceVecError::IndexOutOfBounds { index, length });
        }
        Ok(position as usize)
    }
}

impl<T> From<Vec<T>> for SliceVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<SliceVec<T>> for Vec<T> {
    fn from(vec: SliceVec<T>) -> Self {
        vec.items
    }
}

impl<T> AsRef<[T]> for SliceVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<isize> for SliceVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is outside `-len..len`.
    fn index(&self, index: isize) -> &T {
        match self.resolve(index) {
            Ok(position) => &self.items[position],
            Err(_) => panic!(
                "Index {} out of bounds for vector of length {}",
                index,
                self.items.len()
            ),
        }
    }
}

impl<T> IndexMut<isize> for SliceVec<T> {
    /// # Panics
    ///
    /// Panics if `index` is outside `-len..len`.
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.resolve(index) {
            Ok(position) => &mut self.items[position],
            Err(_) => panic!(
                "Index {} out of bounds for vector of length {}",
                index,
                self.items.len()
            ),
        }
    }
}
