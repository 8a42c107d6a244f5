use crate::algebra::*;
use std::iter::FusedIterator;

/// Cursor over the stored entries of a [`CompressedMatrix`] in storage
/// order, i.e. by major index and then by increasing minor index.
///
/// Entries are reported in public `(row, col)` coordinates, so this is
/// row-major order for CSR storage and column-major order for CSC.
///
/// The cursor borrows the matrix, so the matrix cannot be modified
/// while iteration is in progress.
#[derive(Debug, Clone)]
pub struct StoredTriplets<'a, T> {
    matrix: &'a CompressedMatrix<T>,
    // flat offset of the next entry to emit
    ptr: usize,
    // major group containing ptr, and the end of that group
    major: usize,
    end: usize,
}

impl<'a, T> StoredTriplets<'a, T>
where
    T: FloatT,
{
    fn new(matrix: &'a CompressedMatrix<T>) -> Self {
        let end = if matrix.major_dim() > 0 {
            matrix.majorptr[1]
        } else {
            0
        };
        let mut iter = StoredTriplets {
            matrix,
            ptr: 0,
            major: 0,
            end,
        };
        iter.skip_empty_groups();
        iter
    }

    // move forward through groups whose pointer delta is zero
    // until reaching one that contains ptr.  Never moves past the
    // final group since majorptr[major_dim] == nnz > ptr.
    fn skip_empty_groups(&mut self) {
        let nnz = self.matrix.nnz();
        while self.ptr == self.end && self.ptr < nnz {
            self.major += 1;
            self.end = self.matrix.majorptr[self.major + 1];
        }
    }
}

impl<T> Iterator for StoredTriplets<'_, T>
where
    T: FloatT,
{
    type Item = Triplet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr >= self.matrix.nnz() {
            return None;
        }

        let minor = self.matrix.minorval[self.ptr];
        let (row, col) = self.matrix.orientation.to_position(self.major, minor);
        let val = self.matrix.nzval[self.ptr];

        self.ptr += 1;
        self.skip_empty_groups();

        Some(Triplet { row, col, val })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.nnz() - self.ptr;
        (remaining, Some(remaining))
    }
}

impl<T: FloatT> ExactSizeIterator for StoredTriplets<'_, T> {}
impl<T: FloatT> FusedIterator for StoredTriplets<'_, T> {}

/// Iterator over the stored entries of a [`CompressedMatrix`] in
/// row-major order, regardless of its storage orientation.
///
/// Created by [`CompressedMatrix::iter_triplets`].
#[derive(Debug, Clone)]
pub struct Triplets<'a, T> {
    inner: TripletsInner<'a, T>,
}

#[derive(Debug, Clone)]
enum TripletsInner<'a, T> {
    // CSR: storage order is already row-major
    Stored(StoredTriplets<'a, T>),
    // CSC: (col, flat offset) pairs sorted into row-major order
    Transposed {
        matrix: &'a CompressedMatrix<T>,
        order: std::vec::IntoIter<(usize, usize)>,
    },
}

impl<T> Iterator for Triplets<'_, T>
where
    T: FloatT,
{
    type Item = Triplet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            TripletsInner::Stored(iter) => iter.next(),
            TripletsInner::Transposed { matrix, order } => {
                let (col, ptr) = order.next()?;
                Some(Triplet {
                    row: matrix.minorval[ptr],
                    col,
                    val: matrix.nzval[ptr],
                })
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            TripletsInner::Stored(iter) => iter.size_hint(),
            TripletsInner::Transposed { order, .. } => order.size_hint(),
        }
    }
}

impl<T: FloatT> ExactSizeIterator for Triplets<'_, T> {}
impl<T: FloatT> FusedIterator for Triplets<'_, T> {}

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// Iterate over stored entries in storage order.  See [`StoredTriplets`].
    pub fn iter_stored(&self) -> StoredTriplets<'_, T> {
        StoredTriplets::new(self)
    }

    /// Iterate over stored entries in row-major order.
    ///
    /// The sequence is strictly increasing in `(row, col)` and has
    /// exactly [`nnz`](SparseMatrix::nnz) elements.
    ///
    /// For CSR storage this walks the arrays directly and allocates
    /// nothing.  For CSC storage this call is __not__ lazy: it first
    /// computes the complete row-major visiting order with a counting
    /// sort over row indices, allocating O(nnz + m) and taking
    /// O(nnz + m) time before the first element is available.  Only the
    /// yielding of elements from that order is lazy.  Use
    /// [`iter_stored`](Self::iter_stored) for a cursor with no setup
    /// cost when storage order is acceptable.
    pub fn iter_triplets(&self) -> Triplets<'_, T> {
        let inner = match self.orientation {
            Orientation::RowMajor => TripletsInner::Stored(self.iter_stored()),
            Orientation::ColumnMajor => TripletsInner::Transposed {
                matrix: self,
                order: self.row_major_order().into_iter(),
            },
        };
        Triplets { inner }
    }
}

#[test]
fn test_iter_skips_empty_groups() {
    // A =
    //[ ⋅    ⋅    ⋅ ]
    //[ ⋅   1.0  2.0]
    //[ ⋅    ⋅    ⋅ ]
    //[3.0   ⋅    ⋅ ]
    //[ ⋅    ⋅    ⋅ ]
    let A = CompressedMatrix::new(
        5,
        3,
        Orientation::RowMajor,
        vec![0, 0, 2, 2, 3, 3],
        vec![1, 2, 0],
        vec![1., 2., 3.],
    );

    let positions: Vec<_> = A.iter_stored().map(|t| (t.row, t.col, t.val)).collect();
    assert_eq!(positions, vec![(1, 1, 1.), (1, 2, 2.), (3, 0, 3.)]);

    let mut iter = A.iter_stored();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.by_ref().count(), 2);
    assert!(iter.next().is_none());
}

#[test]
fn test_iter_empty_matrices() {
    let A = CompressedMatrix::<f64>::csr(0, 0).unwrap();
    assert!(A.iter_stored().next().is_none());
    assert!(A.iter_triplets().next().is_none());

    let B = CompressedMatrix::<f64>::csc(4, 7).unwrap();
    assert!(B.iter_stored().next().is_none());
    assert!(B.iter_triplets().next().is_none());
}
