use alloc::vec::Vec;
use core::fmt;
use core::ops::{AddAssign, Index, IndexMut, SubAssign};

use log::trace;

use crate::error::CircBufError;
use crate::iter::CircBufIter;

/// A vector whose logical start can be rotated without moving its elements
///
/// Logical position `i` addresses storage index `(zero + i) mod len`, where
/// the modulo is floored, so any `isize` offset is valid on a non-empty buffer.
#[derive(Clone)]
pub struct CircBuf<T> {
    storage: Vec<T>,
    zero: usize,
}

impl<T> CircBuf<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            zero: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            zero: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Storage index currently addressed by logical position 0.
    #[must_use]
    pub fn zero_index(&self) -> usize {
        self.zero
    }

    pub fn clear(&mut self) {
        self.storage.clear();
        self.zero = 0;
    }

    /// Inserts `element` before the current logical 0.
    ///
    /// The new element becomes logical 0 and the previous logical 0 moves to
    /// logical 1. This shifts the tail of the storage, so it is `O(n)`.
    pub fn insert(&mut self, element: T) {
        self.storage.insert(self.zero, element);
    }

    /// Removes and returns the element at logical 0.
    ///
    /// The element previously at logical 1 becomes logical 0.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn remove(&mut self) -> Result<T, CircBufError> {
        self.ensure_not_empty("remove from")?;

        let element = self.storage.remove(self.zero);
        if self.zero >= self.storage.len() {
            self.zero = 0;
        }
        Ok(element)
    }

    /// Moves logical 0 forward by `delta` positions, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn advance(&mut self, delta: isize) -> Result<(), CircBufError> {
        self.ensure_not_empty("advance")?;
        self.zero = self.physical_index(delta);
        trace!("circbuf: advanced by {delta}, zero index now {}", self.zero);
        Ok(())
    }

    /// Moves logical 0 backward by `delta` positions, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn retreat(&mut self, delta: isize) -> Result<(), CircBufError> {
        self.ensure_not_empty("retreat")?;
        // Negating isize::MIN overflows; reduce first so the value is in range.
        let reduced = delta.rem_euclid(self.len_isize());
        self.zero = self.physical_index(-reduced);
        trace!("circbuf: retreated by {delta}, zero index now {}", self.zero);
        Ok(())
    }

    /// Prefix increment: moves logical 0 forward by one.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn increment(&mut self) -> Result<(), CircBufError> {
        self.advance(1)
    }

    /// Prefix decrement: moves logical 0 backward by one.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn decrement(&mut self) -> Result<(), CircBufError> {
        self.retreat(1)
    }

    /// Postfix increment: returns the current logical 0, then moves forward by one.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn fetch_increment(&mut self) -> Result<T, CircBufError>
    where
        T: Clone,
    {
        let previous = self.try_get(0)?.clone();
        self.advance(1)?;
        Ok(previous)
    }

    /// Postfix decrement: returns the current logical 0, then moves backward by one.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn fetch_decrement(&mut self) -> Result<T, CircBufError>
    where
        T: Clone,
    {
        let previous = self.try_get(0)?.clone();
        self.retreat(1)?;
        Ok(previous)
    }

    /// Gets the element at logical position `offset`.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn try_get(&self, offset: isize) -> Result<&T, CircBufError> {
        self.ensure_not_empty("index into")?;
        Ok(&self.storage[self.physical_index(offset)])
    }

    /// Gets a mutable reference to the element at logical position `offset`.
    ///
    /// # Errors
    ///
    /// Returns `CircBufError::Empty` if the buffer is empty.
    pub fn try_get_mut(&mut self, offset: isize) -> Result<&mut T, CircBufError> {
        self.ensure_not_empty("index into")?;
        let index = self.physical_index(offset);
        Ok(&mut self.storage[index])
    }

    /// Returns an iterator over one period of the buffer, starting at logical 0.
    ///
    /// Chain `.cycle()` to observe the repeating content.
    #[must_use]
    pub fn iter(&self) -> CircBufIter<'_, T> {
        self.into_iter()
    }

    /// Copies the logical view into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the buffer, returning the storage rotated into logical order.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<T> {
        self.storage.rotate_left(self.zero);
        self.storage
    }

    pub(crate) fn storage(&self) -> &[T] {
        &self.storage
    }

    fn ensure_not_empty(&self, operation: &'static str) -> Result<(), CircBufError> {
        if self.storage.is_empty() {
            return Err(CircBufError::Empty { operation });
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_wrap)]
    fn len_isize(&self) -> isize {
        // Vec never holds more than isize::MAX elements
        self.storage.len() as isize
    }

    /// Maps a logical offset to a storage index. Callers check for emptiness.
    #[allow(clippy::cast_sign_loss)]
    fn physical_index(&self, offset: isize) -> usize {
        let len = self.storage.len();
        let shift = offset.rem_euclid(self.len_isize()) as usize;
        // zero < len and shift < len, so the sum cannot overflow
        (self.zero + shift) % len
    }
}

impl<T> Default for CircBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for CircBuf<T> {
    /// Wraps `storage` with logical 0 at its first element.
    fn from(storage: Vec<T>) -> Self {
        Self { storage, zero: 0 }
    }
}

impl<T> Index<isize> for CircBuf<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the buffer is empty.
    fn index(&self, offset: isize) -> &T {
        assert!(!self.is_empty(), "Cannot index into an empty circular buffer");
        &self.storage[self.physical_index(offset)]
    }
}

impl<T> IndexMut<isize> for CircBuf<T> {
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    fn index_mut(&mut self, offset: isize) -> &mut T {
        assert!(!self.is_empty(), "Cannot index into an empty circular buffer");
        let index = self.physical_index(offset);
        &mut self.storage[index]
    }
}

impl<T> AddAssign<isize> for CircBuf<T> {
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    fn add_assign(&mut self, delta: isize) {
        if self.advance(delta).is_err() {
            panic!("Cannot advance an empty circular buffer");
        }
    }
}

impl<T> SubAssign<isize> for CircBuf<T> {
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    fn sub_assign(&mut self, delta: isize) {
        if self.retreat(delta).is_err() {
            panic!("Cannot retreat an empty circular buffer");
        }
    }
}

impl<T: PartialEq> PartialEq for CircBuf<T> {
    /// Two buffers are equal when their logical views are equal.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircBuf<T> {}

impl<T: fmt::Debug> fmt::Debug for CircBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn abc() -> CircBuf<char> {
        CircBuf::from(vec!['A', 'B', 'C'])
    }

    #[test]
    fn test_new_is_empty() {
        let circ: CircBuf<u32> = CircBuf::new();
        assert_eq!(circ.len(), 0);
        assert!(circ.is_empty());
        assert_eq!(circ.zero_index(), 0);
    }

    #[test]
    fn test_insert_keeps_zero_index() {
        let mut circ = CircBuf::new();
        circ.insert(1);
        circ.insert(2);
        assert_eq!(circ.zero_index(), 0);
        assert_eq!(circ.storage(), &[2, 1]);

        circ.advance(1).unwrap();
        circ.insert(3);
        assert_eq!(circ.zero_index(), 1);
        assert_eq!(circ.storage(), &[2, 3, 1]);
        assert_eq!(circ.to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_last_storage_slot_wraps_zero() {
        let mut circ = abc();
        circ.advance(2).unwrap();
        assert_eq!(circ.remove().unwrap(), 'C');
        assert_eq!(circ.zero_index(), 0);
        assert_eq!(circ.to_vec(), vec!['A', 'B']);
    }

    #[test]
    fn test_remove_empty() {
        let mut circ: CircBuf<u8> = CircBuf::new();
        assert_eq!(
            circ.remove().unwrap_err(),
            CircBufError::Empty {
                operation: "remove from"
            }
        );
    }

    #[test]
    fn test_physical_index_extremes() {
        let circ = abc();
        assert_eq!(circ.physical_index(isize::MAX), (isize::MAX % 3) as usize);
        assert_eq!(circ.physical_index(isize::MIN), isize::MIN.rem_euclid(3) as usize);
    }

    #[test]
    fn test_retreat_by_isize_min() {
        let mut circ = abc();
        circ.retreat(isize::MIN).unwrap();
        let expected = (3 - isize::MIN.rem_euclid(3)) % 3;
        assert_eq!(circ.zero_index(), expected as usize);
    }

    #[test]
    fn test_clear_resets_zero() {
        let mut circ = abc();
        circ += 2;
        circ.clear();
        assert!(circ.is_empty());
        assert_eq!(circ.zero_index(), 0);
    }

    #[test]
    #[should_panic(expected = "Cannot advance an empty circular buffer")]
    fn test_add_assign_empty() {
        let mut circ: CircBuf<u8> = CircBuf::new();
        circ += 1;
    }
}
