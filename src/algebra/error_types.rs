use thiserror::Error;

/// Error type returned by sparse matrix construction, access and
/// arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseMatrixError {
    /// Matrix dimensions cannot be represented
    #[error("Invalid matrix shape ({rows} x {cols})")]
    InvalidShape { rows: usize, cols: usize },
    /// Read or write outside of the declared matrix shape
    #[error("Index ({row}, {col}) out of bounds for matrix of shape ({rows} x {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Operands of a binary operation have different shapes
    #[error("Shape mismatch: ({} x {}) vs ({} x {})", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Operands of a binary operation have different storage orientations
    #[error("Orientation mismatch: {left:?} vs {right:?}")]
    OrientationMismatch {
        left: crate::algebra::Orientation,
        right: crate::algebra::Orientation,
    },
    /// Unrecognized target representation
    #[error("Unsupported conversion target \"{0}\"")]
    UnsupportedConversion(String),
    /// Malformed serialized matrix data
    #[error("Invalid serialized data: {0}")]
    Serialization(String),
    /// A compressed matrix failed its structural check
    #[error(transparent)]
    Format(#[from] SparseFormatError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse matrix assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not strictly increasing by minor index within each major group
    #[error("Data is not sorted by minor index within each major group")]
    BadMinorOrdering,
    #[error("Minor index exceeds the matrix minor dimension")]
    /// Minor index exceeds the matrix minor dimension
    BadMinorval,
    #[error("Bad major pointer values")]
    /// Major pointer values are defective
    BadMajorptr,
}
