#![allow(non_snake_case)]

use crate::algebra::*;
use tracing::error;

// Builds a compressed matrix from entries given in any order, using
// the assembly method selected in the settings.  Repeated positions
// resolve to the last value supplied.
pub(crate) fn assemble_compressed<T, I>(
    size: (usize, usize),
    orientation: Orientation,
    entries: I,
    settings: &ConversionSettings,
) -> Result<CompressedMatrix<T>, SparseMatrixError>
where
    T: FloatT,
    I: IntoIterator<Item = Triplet<T>>,
{
    let (m, n) = size;

    let A = match settings.strategy {
        BuildStrategy::Incremental => {
            let mut A = CompressedMatrix::zeros(m, n, orientation)?;
            for t in entries {
                A.set(t.row, t.col, t.val)?;
            }
            A
        }
        BuildStrategy::Counting => {
            let triplets: Vec<_> = entries.into_iter().collect();
            CompressedMatrix::from_triplets(m, n, orientation, &triplets)?
        }
    };

    verify_format(A, settings)
}

// Both strategies produce valid structure from in-bounds entries.
// With `settings.check_format` the result is re-verified anyway, and
// a failure is logged and returned.
pub(crate) fn verify_format<T>(
    A: CompressedMatrix<T>,
    settings: &ConversionSettings,
) -> Result<CompressedMatrix<T>, SparseMatrixError>
where
    T: FloatT,
{
    if settings.check_format {
        if let Err(e) = A.check_format() {
            error!(
                error = %e,
                orientation = ?A.orientation,
                "assembled matrix failed format check"
            );
            return Err(e.into());
        }
    }
    Ok(A)
}

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// Compressed matrix with the same entries as a COO matrix
    pub fn from_coo(
        A: &CooMatrix<T>,
        orientation: Orientation,
        settings: &ConversionSettings,
    ) -> Result<Self, SparseMatrixError> {
        assemble_compressed(A.size(), orientation, A.iter().copied(), settings)
    }

    /// Compressed matrix with the same entries as a DOK matrix
    pub fn from_dok(
        A: &DokMatrix<T>,
        orientation: Orientation,
        settings: &ConversionSettings,
    ) -> Result<Self, SparseMatrixError> {
        assemble_compressed(A.size(), orientation, A.iter(), settings)
    }

    /// Copy of this matrix in the given storage orientation (CSR <-> CSC).
    /// Returns a plain clone if the orientation is unchanged.
    pub fn to_orientation(
        &self,
        orientation: Orientation,
        settings: &ConversionSettings,
    ) -> Result<Self, SparseMatrixError> {
        if orientation == self.orientation {
            return Ok(self.clone());
        }
        assemble_compressed(self.size(), orientation, self.iter_triplets(), settings)
    }
}

impl<T> From<&CompressedMatrix<T>> for CooMatrix<T>
where
    T: FloatT,
{
    fn from(A: &CompressedMatrix<T>) -> Self {
        // iter_triplets is strictly row-major, so the element list is
        // already in sorted order without any insertion shifts
        let elements: Vec<_> = A.iter_triplets().collect();
        debug_assert!(elements.windows(2).all(|w| w[0].less_than(&w[1])));
        CooMatrix {
            m: A.m,
            n: A.n,
            elements,
        }
    }
}

impl<T> From<&CompressedMatrix<T>> for DokMatrix<T>
where
    T: FloatT,
{
    fn from(A: &CompressedMatrix<T>) -> Self {
        let mut D = DokMatrix::new(A.m, A.n);
        for t in A.iter_stored() {
            D.data.entry(t.row).or_default().insert(t.col, t.val);
        }
        D
    }
}

impl<T> From<&CooMatrix<T>> for DokMatrix<T>
where
    T: FloatT,
{
    fn from(A: &CooMatrix<T>) -> Self {
        let mut D = DokMatrix::new(A.m, A.n);
        for t in A.iter() {
            D.data.entry(t.row).or_default().insert(t.col, t.val);
        }
        D
    }
}

impl<T> From<&DokMatrix<T>> for CooMatrix<T>
where
    T: FloatT,
{
    fn from(A: &DokMatrix<T>) -> Self {
        CooMatrix {
            m: A.m,
            n: A.n,
            elements: A.sorted_triplets(),
        }
    }
}

#[test]
fn test_csr_csc_roundtrip() {
    // A =
    //[ ⋅   1.0   ⋅ ]
    //[2.0   ⋅    ⋅ ]
    //[ ⋅    ⋅   3.0]
    let mut A = CompressedMatrix::csr(3, 3).unwrap();
    A.set(0, 1, 1.0).unwrap();
    A.set(2, 2, 3.0).unwrap();
    A.set(1, 0, 2.0).unwrap();

    let settings = ConversionSettings::default();
    let B = A.to_orientation(Orientation::ColumnMajor, &settings).unwrap();
    assert!(B.is_column_major());
    assert_eq!(B.majorptr, vec![0, 1, 2, 3]);
    assert_eq!(B.minorval, vec![1, 0, 2]);
    assert_eq!(B.nzval, vec![2.0, 1.0, 3.0]);

    let C = B.to_orientation(Orientation::RowMajor, &settings).unwrap();
    assert_eq!(A, C);
}

#[test]
fn test_verify_format_reports_bad_structure() {
    // row 0 holds minor indices out of order
    let A = CompressedMatrix::new(
        2,
        3,
        Orientation::RowMajor,
        vec![0, 2, 2],
        vec![2, 0],
        vec![1., 2.],
    );

    let unchecked = ConversionSettings::default();
    assert!(verify_format(A.clone(), &unchecked).is_ok());

    let checked = ConversionSettingsBuilder::default()
        .check_format(true)
        .build()
        .unwrap();
    assert_eq!(
        verify_format(A, &checked),
        Err(SparseMatrixError::Format(SparseFormatError::BadMinorOrdering))
    );

    let mut good = CompressedMatrix::csr(2, 3).unwrap();
    good.set(0, 2, 1.).unwrap();
    assert!(verify_format(good, &checked).is_ok());
}
