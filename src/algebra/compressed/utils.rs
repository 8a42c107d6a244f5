//---------------------------------------------------------
// low-level internal utilities for counting / filling entries
// when assembling compressed matrices in bulk.
//---------------------------------------------------------

use crate::algebra::*;
use itertools::Itertools;
use std::iter::zip;
use tracing::trace;

// In-place exclusive prefix sum.  On return each entry holds the
// sum of all counts before it, so the final entry is the total.
pub(crate) fn counts_to_offsets(counts: &mut [usize]) {
    let mut currentptr = 0;
    for p in counts {
        let count = *p;
        *p = currentptr;
        currentptr += count;
    }
}

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// Builds a compressed matrix from unordered triplets in a single
    /// counting pass, without the per-insertion shifting of repeated
    /// [`set`](SparseMatrix::set) calls.
    ///
    /// The result is identical to calling `set` once per triplet in
    /// the given order: when a position appears more than once, the
    /// last value wins.  Fails without allocating the result if any
    /// triplet lies outside the `m x n` shape.
    pub fn from_triplets(
        m: usize,
        n: usize,
        orientation: Orientation,
        triplets: &[Triplet<T>],
    ) -> Result<Self, SparseMatrixError> {
        // validate shape and all positions before allocating anything
        Self::check_shape(m, n, orientation)?;
        for t in triplets {
            check_index((m, n), t.row, t.col)?;
        }

        let mut A = CompressedMatrix::spalloc(m, n, orientation, triplets.len());
        A.majorcount_triplets(triplets);
        A.majorcount_to_majorptr();
        A.fill_triplets(triplets);
        A.backshift_majorptrs();
        A.sort_and_compact_groups();

        trace!(
            input = triplets.len(),
            nnz = A.nnz(),
            "assembled compressed matrix by counting"
        );
        Ok(A)
    }

    // increment self.majorptr by the number of triplets in each major group
    pub(crate) fn majorcount_triplets(&mut self, triplets: &[Triplet<T>]) {
        let major_dim = self.major_dim();
        self.majorptr[major_dim] = 0;
        for t in triplets {
            let (major, _) = t.storage_key(self.orientation);
            self.majorptr[major] += 1;
        }
    }

    pub(crate) fn majorcount_to_majorptr(&mut self) {
        counts_to_offsets(&mut self.majorptr);
    }

    // populate values using self.majorptr as the indicator of the
    // next fill location in each major group.  Input order is
    // preserved within each group.
    pub(crate) fn fill_triplets(&mut self, triplets: &[Triplet<T>]) {
        for t in triplets {
            let (major, minor) = t.storage_key(self.orientation);
            let dest = self.majorptr[major];
            self.minorval[dest] = minor;
            self.nzval[dest] = t.val;
            self.majorptr[major] += 1;
        }
    }

    pub(crate) fn backshift_majorptrs(&mut self) {
        self.majorptr.rotate_right(1);
        self.majorptr[0] = 0;
    }

    // Sort each major group by minor index and collapse repeated
    // positions, keeping the entry that was filled last.  Groups are
    // compacted towards the front of the arrays as we go.
    pub(crate) fn sort_and_compact_groups(&mut self) {
        let major_dim = self.major_dim();
        let mut group: Vec<(usize, T)> = Vec::new();
        let mut dest = 0;

        for major in 0..major_dim {
            let rng = self.major_range(major);
            group.clear();
            let entries = zip(&self.minorval[rng.clone()], &self.nzval[rng]);
            group.extend(entries.map(|(&i, &v)| (i, v)));

            // stable, so equal minor indices stay in fill order
            group.sort_by_key(|&(i, _)| i);

            self.majorptr[major] = dest;
            let deduped = group
                .iter()
                .copied()
                .coalesce(|a, b| if a.0 == b.0 { Ok(b) } else { Err((a, b)) });
            for (minor, val) in deduped {
                self.minorval[dest] = minor;
                self.nzval[dest] = val;
                dest += 1;
            }
        }

        self.majorptr[major_dim] = dest;
        self.minorval.truncate(dest);
        self.nzval.truncate(dest);
    }

    // (major, offset) pairs for every stored entry, ordered by
    // minor index and then by major index.  For CSC storage this
    // is the row-major visiting order.
    pub(crate) fn row_major_order(&self) -> Vec<(usize, usize)> {
        let mut next = vec![0usize; self.minor_dim() + 1];
        for &minor in &self.minorval {
            next[minor] += 1;
        }
        counts_to_offsets(&mut next);

        let mut order = vec![(0, 0); self.nnz()];
        for major in 0..self.major_dim() {
            for ptr in self.major_range(major) {
                let minor = self.minorval[ptr];
                order[next[minor]] = (major, ptr);
                next[minor] += 1;
            }
        }
        order
    }
}

#[test]
fn test_counts_to_offsets() {
    let mut counts = vec![2, 0, 3, 1, 0];
    counts_to_offsets(&mut counts);
    assert_eq!(counts, vec![0, 2, 2, 5, 6]);
}

#[test]
fn test_from_triplets_last_write_wins() {
    let triplets = vec![
        Triplet::new(2, 1, 1.0),
        Triplet::new(0, 2, 2.0),
        Triplet::new(2, 0, 3.0),
        Triplet::new(0, 2, 4.0),
        Triplet::new(1, 1, 0.0),
    ];

    for orientation in [Orientation::RowMajor, Orientation::ColumnMajor] {
        let A = CompressedMatrix::from_triplets(3, 3, orientation, &triplets).unwrap();
        assert!(A.check_format().is_ok());
        assert_eq!(A.nnz(), 4);
        assert_eq!(A.get(0, 2).unwrap(), 4.0);
        assert_eq!(A.get_entry((1, 1)), Some(0.0));

        // same structure as incremental insertion
        let mut B = CompressedMatrix::zeros(3, 3, orientation).unwrap();
        for t in &triplets {
            B.set(t.row, t.col, t.val).unwrap();
        }
        assert_eq!(A, B);
    }
}

#[test]
fn test_from_triplets_rejects_out_of_bounds() {
    let triplets = vec![Triplet::new(0, 0, 1.0), Triplet::new(3, 0, 1.0)];
    let err = CompressedMatrix::from_triplets(3, 3, Orientation::RowMajor, &triplets);
    assert_eq!(
        err,
        Err(SparseMatrixError::IndexOutOfBounds {
            row: 3,
            col: 0,
            rows: 3,
            cols: 3
        })
    );
}
