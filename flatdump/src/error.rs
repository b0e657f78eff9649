use thiserror::Error;

/// Error types for dump and bitmap operations
#[derive(Error, Debug)]
pub enum FlatDumpError {
    /// The underlying reader or writer failed, including on truncated input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A length prefix cannot be addressed on this platform
    #[error("Length prefix {length} does not fit in memory")]
    LengthOverflow {
        /// Length read from the stream
        length: u64,
    },
    /// Pixel coordinates are outside the canvas
    #[error("Pixel ({x}, {y}) is outside canvas of {width}x{height}")]
    PixelOutOfBounds {
        /// Column that was accessed
        x: usize,
        /// Row that was accessed
        y: usize,
        /// Canvas width
        width: usize,
        /// Canvas height
        height: usize,
    },
    /// A bitmap needs at least one pixel
    #[error("Cannot encode an empty canvas of {width}x{height}")]
    EmptyCanvas {
        /// Canvas width
        width: usize,
        /// Canvas height
        height: usize,
    },
    /// Canvas dimensions overflow memory addressing or the 32-bit bitmap
    /// header fields
    #[error("Canvas of {width}x{height} is too large")]
    CanvasTooLarge {
        /// Canvas width
        width: usize,
        /// Canvas height
        height: usize,
    },
}
