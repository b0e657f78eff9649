use thiserror::Error;

/// Error types for `CircBuf` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CircBufError {
    /// Operation needs at least one element, but the buffer is empty
    #[error("Out of range: cannot {operation} an empty circular buffer")]
    Empty {
        /// Name of the rejected operation
        operation: &'static str,
    },
}
