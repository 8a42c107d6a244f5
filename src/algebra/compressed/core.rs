#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// `CompressedMatrix` constructor from raw arrays.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__ ensure that minor indices
    /// are all in bounds or that entries within each major group appear
    /// in order of increasing minor index.   Use [`try_new`](Self::try_new)
    /// or [`check_format`](Self::check_format) when that is not guaranteed
    /// by the caller.
    pub fn new(
        m: usize,
        n: usize,
        orientation: Orientation,
        majorptr: Vec<usize>,
        minorval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Self {
        let (major_dim, _) = orientation.to_storage(m, n);
        assert_eq!(minorval.len(), nzval.len());
        assert_eq!(majorptr.len(), major_dim + 1);
        assert_eq!(majorptr[major_dim], minorval.len());
        CompressedMatrix {
            m,
            n,
            orientation,
            majorptr,
            minorval,
            nzval,
        }
    }

    /// Fallible version of [`new`](Self::new) that also verifies
    /// the sorted structure of the supplied data.
    pub fn try_new(
        m: usize,
        n: usize,
        orientation: Orientation,
        majorptr: Vec<usize>,
        minorval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Result<Self, SparseFormatError> {
        let A = CompressedMatrix {
            m,
            n,
            orientation,
            majorptr,
            minorval,
            nzval,
        };
        A.check_format()?;
        Ok(A)
    }

    /// An empty `m x n` matrix with no stored entries
    ///
    /// Dimensions are unsigned, so the only unrepresentable shapes are
    /// those whose pointer array (of length `major_dim + 1`) cannot be
    /// allocated.
    pub fn zeros(m: usize, n: usize, orientation: Orientation) -> Result<Self, SparseMatrixError> {
        let ptrlen = Self::check_shape(m, n, orientation)?;

        Ok(CompressedMatrix {
            m,
            n,
            orientation,
            majorptr: vec![0; ptrlen],
            minorval: Vec::new(),
            nzval: Vec::new(),
        })
    }

    // length of the pointer array for the given shape, if representable
    pub(crate) fn check_shape(
        m: usize,
        n: usize,
        orientation: Orientation,
    ) -> Result<usize, SparseMatrixError> {
        let (major_dim, _) = orientation.to_storage(m, n);
        major_dim
            .checked_add(1)
            .ok_or(SparseMatrixError::InvalidShape { rows: m, cols: n })
    }

    /// empty `m x n` matrix in Compressed Sparse Row format
    pub fn csr(m: usize, n: usize) -> Result<Self, SparseMatrixError> {
        Self::zeros(m, n, Orientation::RowMajor)
    }

    /// empty `m x n` matrix in Compressed Sparse Column format
    pub fn csc(m: usize, n: usize) -> Result<Self, SparseMatrixError> {
        Self::zeros(m, n, Orientation::ColumnMajor)
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// The pointer array is zeroed except for its final entry, and the
    /// index and value arrays hold placeholders to be filled in by the
    /// caller.
    pub(crate) fn spalloc(m: usize, n: usize, orientation: Orientation, nnz: usize) -> Self {
        let (major_dim, _) = orientation.to_storage(m, n);
        let mut majorptr = vec![0; major_dim + 1];
        let minorval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        majorptr[major_dim] = nnz;

        CompressedMatrix::new(m, n, orientation, majorptr, minorval, nzval)
    }

    /// storage orientation of this matrix
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// true for CSC storage
    pub fn is_column_major(&self) -> bool {
        self.orientation == Orientation::ColumnMajor
    }

    /// number of major groups (rows for CSR, columns for CSC)
    pub fn major_dim(&self) -> usize {
        self.orientation.to_storage(self.m, self.n).0
    }

    /// extent of the minor axis (columns for CSR, rows for CSC)
    pub fn minor_dim(&self) -> usize {
        self.orientation.to_storage(self.m, self.n).1
    }

    /// Range of offsets into `minorval`/`nzval` holding major group `major`
    #[inline]
    pub fn major_range(&self, major: usize) -> std::ops::Range<usize> {
        self.majorptr[major]..self.majorptr[major + 1]
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        let (major_dim, minor_dim) = self.orientation.to_storage(self.m, self.n);

        if self.minorval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.majorptr.is_empty()
            || (self.majorptr.len() - 1) != major_dim
            || self.majorptr[major_dim] != self.minorval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for majorptr monotonicity
        if self.majorptr[0] != 0 || self.majorptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadMajorptr);
        }

        //check for strict minor index monotonicity within each group
        for major in 0..major_dim {
            let rng = self.major_range(major);
            if self.minorval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadMinorOrdering);
            }
        }

        //check for minor values out of bounds
        if !self.minorval.iter().all(|r| r < &minor_dim) {
            return Err(SparseFormatError::BadMinorval);
        }

        Ok(())
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a stored entry.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.m && col < self.n);

        self.find_offset(row, col).ok().map(|ptr| self.nzval[ptr])
    }

    // Offset of (row,col) in the flat arrays if stored, otherwise the
    // offset at which it would have to be inserted to keep its major
    // group strictly increasing.
    fn find_offset(&self, row: usize, col: usize) -> Result<usize, usize> {
        let (major, minor) = self.orientation.to_storage(row, col);
        let first = self.majorptr[major];
        let last = self.majorptr[major + 1];

        match self.minorval[first..last].binary_search(&minor) {
            Ok(idx) => Ok(first + idx),
            Err(idx) => Err(first + idx),
        }
    }
}

impl<T> SparseMatrix<T> for CompressedMatrix<T>
where
    T: FloatT,
{
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    fn get(&self, row: usize, col: usize) -> Result<T, SparseMatrixError> {
        check_index(self.size(), row, col)?;
        match self.find_offset(row, col) {
            Ok(ptr) => Ok(self.nzval[ptr]),
            Err(_) => Ok(T::zero()),
        }
    }

    fn set(&mut self, row: usize, col: usize, val: T) -> Result<(), SparseMatrixError> {
        check_index(self.size(), row, col)?;

        match self.find_offset(row, col) {
            Ok(ptr) => {
                // already stored.  Overwrite in place
                self.nzval[ptr] = val;
            }
            Err(dest) => {
                // shift everything from dest right by one and bump
                // the pointers of every later major group
                let (major, minor) = self.orientation.to_storage(row, col);
                self.minorval.insert(dest, minor);
                self.nzval.insert(dest, val);
                self.majorptr[(major + 1)..].iter_mut().for_each(|p| *p += 1);
            }
        }
        Ok(())
    }

    fn nnz(&self) -> usize {
        self.majorptr[self.major_dim()]
    }

    fn format(&self) -> SparseFormat {
        match self.orientation {
            Orientation::RowMajor => SparseFormat::Csr,
            Orientation::ColumnMajor => SparseFormat::Csc,
        }
    }

    fn triplets(&self) -> Vec<Triplet<T>> {
        self.iter_triplets().collect()
    }
}

#[test]
fn test_compressed_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CompressedMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        Orientation::ColumnMajor,                                          // CSC
        vec![0, 3, 9, 11, 11, 14],                                         // majorptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // minorval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    );
    assert!(A.check_format().is_ok());

    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((5, 0)).unwrap(), 3.);
    assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((3, 1)).unwrap(), 7.);
    assert_eq!(A.get_entry((5, 1)).unwrap(), 9.);
    assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);
    assert_eq!(A.get_entry((4, 2)).unwrap(), 11.);
    assert_eq!(A.get_entry((4, 4)).unwrap(), 14.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((4, 0)).is_none());
    assert!(A.get_entry((2, 2)).is_none());
    assert!(A.get_entry((1, 3)).is_none());
    assert!(A.get_entry((2, 3)).is_none());
    assert!(A.get_entry((4, 3)).is_none());
    assert!(A.get_entry((3, 4)).is_none());

    // missing entries read as zero through the trait
    assert_eq!(A.get(2, 2).unwrap(), 0.);
    assert_eq!(A.get(4, 4).unwrap(), 14.);
}
