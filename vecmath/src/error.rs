use thiserror::Error;

/// Error types for vector and matrix operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum VecMathError {
    /// Direction-based operations are undefined for the zero vector
    #[error("Cannot {operation} a zero-length vector")]
    ZeroLength {
        /// Name of the rejected operation
        operation: &'static str,
    },
    /// Nested rows do not form a 3x3 matrix
    #[error("Expected a 3x3 matrix, got {rows} rows with {columns} columns in row {row}")]
    NotThreeByThree {
        /// Number of rows provided
        rows: usize,
        /// Index of the first offending row, or 0 if the row count is wrong
        row: usize,
        /// Number of columns in that row
        columns: usize,
    },
}
