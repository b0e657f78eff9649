use thiserror::Error;

/// Error types for `SliceVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SliceVecError {
    /// Index is outside the vector, even after negative remapping
    #[error("Index out of bounds: index {index} is outside vector of length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed, as given by the caller
        index: isize,
        /// Current length of the vector
        length: usize,
    },
    /// Slice range does not fit inside the vector
    #[error("Invalid range: {start}..{end} does not fit vector of length {length}")]
    InvalidRange {
        /// Inclusive start of the requested range
        start: usize,
        /// Exclusive end of the requested range
        end: usize,
        /// Current length of the vector
        length: usize,
    },
}
