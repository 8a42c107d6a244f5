use crate::algebra::*;
use enum_dispatch::*;

/// Capabilities shared by every sparse matrix representation.
///
/// The contract is identical for all formats: positions are
/// `(row, col)` pairs within [`size`](SparseMatrix::size), positions
/// that were never written read as zero, and explicitly written
/// zeros are stored and counted by [`nnz`](SparseMatrix::nnz).
#[enum_dispatch]
pub trait SparseMatrix<T>
where
    T: FloatT,
{
    /// matrix dimensions as `(rows, cols)`
    fn size(&self) -> (usize, usize);

    fn nrows(&self) -> usize {
        self.size().0
    }
    fn ncols(&self) -> usize {
        self.size().1
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Value at `(row, col)`, or zero if no entry is stored there.
    fn get(&self, row: usize, col: usize) -> Result<T, SparseMatrixError>;

    /// Insert a new entry or overwrite an existing one.  The matrix
    /// is unchanged if an error is returned.
    fn set(&mut self, row: usize, col: usize, val: T) -> Result<(), SparseMatrixError>;

    /// number of stored entries
    fn nnz(&self) -> usize;

    /// storage format tag of this matrix
    fn format(&self) -> SparseFormat;

    /// all stored entries in row-major order
    fn triplets(&self) -> Vec<Triplet<T>>;
}

// common bounds check for all formats.  Runs before any mutation.
pub(crate) fn check_index(
    size: (usize, usize),
    row: usize,
    col: usize,
) -> Result<(), SparseMatrixError> {
    let (rows, cols) = size;
    if row >= rows || col >= cols {
        return Err(SparseMatrixError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

// binary operations require identically sized operands
pub(crate) fn check_same_size(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SparseMatrixError> {
    if left != right {
        return Err(SparseMatrixError::ShapeMismatch { left, right });
    }
    Ok(())
}
