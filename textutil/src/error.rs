use thiserror::Error;

/// Error types for decoding and digit operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TextUtilError {
    /// Input is not valid standard-alphabet base64
    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Digit operations need a base of at least 2
    #[error("Invalid base: {base} (must be at least 2)")]
    InvalidBase {
        /// Base that was requested
        base: u32,
    },
}
