#![allow(non_snake_case)]

use crate::algebra::*;
use std::cmp::Ordering;
use tracing::debug;

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// Element-wise sum `A + B` of two compressed matrices.
    ///
    /// Both operands must have the same shape and the same storage
    /// orientation.  The result has the same orientation as the inputs.
    ///
    /// Both operands are already sorted in storage order, so the sum
    /// is formed by a single merge pass over their entries in
    /// O(nnz(A) + nnz(B) + major_dim) time.  Positions stored in both
    /// operands are stored once in the result, even if the sum is zero.
    ///
    /// ```
    /// use sparsemat::algebra::*;
    ///
    /// let mut A = CompressedMatrix::<f64>::csr(2, 2).unwrap();
    /// let mut B = CompressedMatrix::<f64>::csr(2, 2).unwrap();
    /// A.set(0, 1, 2.).unwrap();
    /// B.set(0, 1, 4.).unwrap();
    /// B.set(1, 0, 3.).unwrap();
    ///
    /// let C = A.add(&B).unwrap();
    /// assert_eq!(C.get(0, 1).unwrap(), 6.);
    /// assert_eq!(C.get(1, 0).unwrap(), 3.);
    /// assert_eq!(C.nnz(), 2);
    /// ```
    pub fn add(&self, B: &Self) -> Result<Self, SparseMatrixError> {
        let A = self;
        check_same_size(A.size(), B.size())?;
        if A.orientation != B.orientation {
            return Err(SparseMatrixError::OrientationMismatch {
                left: A.orientation,
                right: B.orientation,
            });
        }

        let orientation = A.orientation;
        let capacity = A.nnz() + B.nnz();

        // majorptr holds per-group counts until the final prefix sum
        let mut C = CompressedMatrix::zeros(A.m, A.n, orientation)?;
        C.minorval.reserve(capacity);
        C.nzval.reserve(capacity);

        let mut iterA = A.iter_stored();
        let mut iterB = B.iter_stored();
        let mut a = iterA.next();
        let mut b = iterB.next();

        loop {
            let (t, advanceA, advanceB) = match (a, b) {
                (None, None) => break,
                (Some(ta), None) => (ta, true, false),
                (None, Some(tb)) => (tb, false, true),
                (Some(ta), Some(tb)) => {
                    let keyA = ta.storage_key(orientation);
                    let keyB = tb.storage_key(orientation);
                    match keyA.cmp(&keyB) {
                        Ordering::Less => (ta, true, false),
                        Ordering::Greater => (tb, false, true),
                        Ordering::Equal => (Triplet { val: ta.val + tb.val, ..ta }, true, true),
                    }
                }
            };

            C.push_stored(t);

            if advanceA {
                a = iterA.next();
            }
            if advanceB {
                b = iterB.next();
            }
        }

        C.majorcount_to_majorptr();

        debug!(
            nnz_a = A.nnz(),
            nnz_b = B.nnz(),
            nnz = C.nnz(),
            ?orientation,
            "added compressed matrices"
        );
        Ok(C)
    }

    // Append an entry that follows every entry already pushed in
    // storage order, counting it against its major group.  The
    // pointers must be finalized with `majorcount_to_majorptr`.
    fn push_stored(&mut self, t: Triplet<T>) {
        let (major, minor) = t.storage_key(self.orientation);
        self.minorval.push(minor);
        self.nzval.push(t.val);
        self.majorptr[major] += 1;
    }
}

#[test]
fn test_add_disjoint_and_shared() {
    // A =
    //[1.0  2.0]
    //[ ⋅   2.0]
    let mut A = CompressedMatrix::csr(2, 2).unwrap();
    A.set(0, 0, 1.0).unwrap();
    A.set(1, 1, 2.0).unwrap();
    A.set(0, 1, 2.0).unwrap();

    // B =
    //[ ⋅   4.0]
    //[3.0  1.0]
    let mut B = CompressedMatrix::csr(2, 2).unwrap();
    B.set(1, 0, 3.0).unwrap();
    B.set(0, 1, 4.0).unwrap();
    B.set(1, 1, 1.0).unwrap();

    let C = A.add(&B).unwrap();
    assert!(C.check_format().is_ok());
    assert_eq!(C.majorptr, vec![0, 2, 4]);
    assert_eq!(C.minorval, vec![0, 1, 0, 1]);
    assert_eq!(C.nzval, vec![1.0, 6.0, 3.0, 3.0]);
}

#[test]
fn test_add_rejects_mismatches() {
    let A = CompressedMatrix::<f64>::csr(2, 3).unwrap();
    let B = CompressedMatrix::<f64>::csr(3, 2).unwrap();
    assert_eq!(
        A.add(&B),
        Err(SparseMatrixError::ShapeMismatch {
            left: (2, 3),
            right: (3, 2)
        })
    );

    let B = CompressedMatrix::<f64>::csc(2, 3).unwrap();
    assert_eq!(
        A.add(&B),
        Err(SparseMatrixError::OrientationMismatch {
            left: Orientation::RowMajor,
            right: Orientation::ColumnMajor
        })
    );
}
