use crate::core::CircBuf;

/// Iterator over one period of a `CircBuf`, in logical order
///
/// This iterator implements `Clone`, so it can be `.cycle()`d.
pub struct CircBufIter<'a, T> {
    storage: &'a [T],
    zero: usize,
    current: usize,
}

impl<T> Clone for CircBufIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            zero: self.zero,
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for CircBufIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.storage.len() {
            return None;
        }
        let index = (self.zero + self.current) % self.storage.len();
        self.current += 1;
        self.storage.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.storage.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for CircBufIter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircBuf<T> {
    type Item = &'a T;
    type IntoIter = CircBufIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CircBufIter {
            storage: self.storage(),
            zero: self.zero_index(),
            current: 0,
        }
    }
}
