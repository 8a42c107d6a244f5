// All sparse representations share the same shape convention
// (m rows, n columns) and the same element type bound.  Only the
// compressed format carries a structural invariant, so it is
// the only one with publicly checkable internals.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Storage orientation of a [`CompressedMatrix`](crate::algebra::CompressedMatrix)
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Compressed Sparse Row (CSR).  Rows are the major axis.
    #[default]
    RowMajor,
    /// Compressed Sparse Column (CSC).  Columns are the major axis.
    ColumnMajor,
}

/// Sparse matrix in compressed (CSR or CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  0.]
///     [0.  0.  6.]
///     [2.  4.  0.]
/// ```
///
/// ```
/// use sparsemat::algebra::*;
///
/// let mut A = CompressedMatrix::<f64>::csr(3, 3).unwrap();
/// A.set(2, 1, 4.).unwrap();
/// A.set(0, 0, 1.).unwrap();
/// A.set(1, 2, 6.).unwrap();
/// A.set(0, 1, 3.).unwrap();
/// A.set(2, 0, 2.).unwrap();
///
/// assert_eq!(A.majorptr, vec![0, 2, 3, 5]);
/// assert_eq!(A.minorval, vec![0, 1, 2, 0, 1]);
/// assert!(A.check_format().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompressedMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// major axis selector.  (major, minor) is (row, col) for
    /// [`Orientation::RowMajor`] and (col, row) otherwise.
    pub orientation: Orientation,
    /// major axis pointer.
    ///
    /// This field should have length `major_dim+1`. The last entry corresponds
    /// to the number of stored entries and should agree with the lengths
    /// of the `minorval` and `nzval` fields.
    pub majorptr: Vec<usize>,
    /// vector of minor indices
    pub minorval: Vec<usize>,
    /// vector of stored matrix elements
    pub nzval: Vec<T>,
}

/// A single (row, column, value) matrix element
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triplet<T = f64> {
    /// row index
    pub row: usize,
    /// column index
    pub col: usize,
    /// element value
    pub val: T,
}

/// Sparse matrix in coordinate list (COO) format.
///
/// Elements are kept sorted in row-major order with at most
/// one element per (row, col) position.  Deserialization rejects
/// element lists that are unsorted, repeat a position or fall outside
/// the `m x n` shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "crate::algebra::serde_data::JsonCooData<T>")
)]
pub struct CooMatrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// sorted matrix elements
    pub(crate) elements: Vec<Triplet<T>>,
}

/// Sparse matrix in dictionary of keys (DOK) format, i.e. a
/// map of row -> column -> value.  Deserialization rejects keys
/// outside the `m x n` shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "crate::algebra::serde_data::JsonDokData<T>")
)]
pub struct DokMatrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    pub(crate) data: HashMap<usize, HashMap<usize, T>>,
}
