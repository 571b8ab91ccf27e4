//! Error types for matgrid

use thiserror::Error;

use crate::math::Dimensions;

/// Result type alias using matgrid's [`MatrixError`]
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised by matrix construction, distribution and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Elementwise operation on operands of different shapes
    #[error("dimension mismatch: {lhs} vs {rhs}")]
    DimensionMismatch {
        /// Shape of the left-hand operand
        lhs: Dimensions,
        /// Shape of the right-hand operand
        rhs: Dimensions,
    },

    /// More row candidates than the matrix has rows
    #[error("{candidates} row candidates do not fit into a matrix with {rows} rows")]
    ShapeOverflow {
        /// Number of row candidates supplied
        candidates: usize,
        /// Rows available in the matrix
        rows: usize,
    },

    /// A supplied row does not have the declared column count
    #[error("row {row} has {found} columns, expected {expected}")]
    InconsistentStore {
        /// Index of the offending row
        row: usize,
        /// Declared column count
        expected: usize,
        /// Actual length of the row
        found: usize,
    },

    /// Flat buffer length does not equal rows * cols
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    ShapeError {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// Length of the supplied buffer
        len: usize,
    },

    /// Checked row access past the last row
    #[error("row index {row} out of bounds for matrix with {rows} rows")]
    RowOutOfBounds {
        /// Requested row
        row: usize,
        /// Rows in the matrix
        rows: usize,
    },
}

/// Errors raised when configuring a sampler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// Lower bound above upper bound
    #[error("empty sampling range: min {min} is greater than max {max}")]
    EmptyRange {
        /// Requested lower bound
        min: String,
        /// Requested upper bound
        max: String,
    },
}

impl MatrixError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(lhs: Dimensions, rhs: Dimensions) -> Self {
        Self::DimensionMismatch { lhs, rhs }
    }
}
