#![allow(non_snake_case)]

use crate::algebra::*;
use enum_dispatch::*;
use tracing::debug;

/// A sparse matrix in any of the supported representations.
///
/// Implements [`SparseMatrix`] by dispatching to the wrapped matrix.
/// Concrete matrices convert into this type with `From`/`into()`.
///
/// ```
/// use sparsemat::algebra::*;
///
/// let mut A = DokMatrix::<f64>::new(2, 3);
/// A.set(1, 2, 5.).unwrap();
///
/// let A: AnySparseMatrix<f64> = A.into();
/// let B = A.convert_to("csc").unwrap();
/// assert_eq!(B.format(), SparseFormat::Csc);
/// assert_eq!(B.get(1, 2).unwrap(), 5.);
///
/// assert!(A.convert_to("ell").is_err());
/// ```
#[enum_dispatch(SparseMatrix<T>)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnySparseMatrix<T>
where
    T: FloatT,
{
    Compressed(CompressedMatrix<T>),
    Coo(CooMatrix<T>),
    Dok(DokMatrix<T>),
}

impl<T> AnySparseMatrix<T>
where
    T: FloatT,
{
    /// Copy of this matrix in the given format, using default settings
    pub fn convert(&self, format: SparseFormat) -> Result<Self, SparseMatrixError> {
        self.convert_with(format, &ConversionSettings::default())
    }

    /// Copy of this matrix in the format named by `tag` ("csr", "csc",
    /// "coo" or "dok").  Unrecognized tags are rejected with
    /// [`SparseMatrixError::UnsupportedConversion`].
    pub fn convert_to(&self, tag: &str) -> Result<Self, SparseMatrixError> {
        let format: SparseFormat = tag.parse()?;
        self.convert(format)
    }

    /// Copy of this matrix in the given format
    pub fn convert_with(
        &self,
        format: SparseFormat,
        settings: &ConversionSettings,
    ) -> Result<Self, SparseMatrixError> {
        let converted: Self = match format {
            SparseFormat::Csr => self.to_compressed(Orientation::RowMajor, settings)?.into(),
            SparseFormat::Csc => self.to_compressed(Orientation::ColumnMajor, settings)?.into(),
            SparseFormat::Coo => match self {
                Self::Compressed(A) => CooMatrix::from(A).into(),
                Self::Coo(A) => A.clone().into(),
                Self::Dok(A) => CooMatrix::from(A).into(),
            },
            SparseFormat::Dok => match self {
                Self::Compressed(A) => DokMatrix::from(A).into(),
                Self::Coo(A) => DokMatrix::from(A).into(),
                Self::Dok(A) => A.clone().into(),
            },
        };

        debug!(
            from = %self.format(),
            to = %format,
            strategy = ?settings.strategy,
            nnz = converted.nnz(),
            "converted sparse matrix"
        );
        Ok(converted)
    }

    fn to_compressed(
        &self,
        orientation: Orientation,
        settings: &ConversionSettings,
    ) -> Result<CompressedMatrix<T>, SparseMatrixError> {
        match self {
            Self::Compressed(A) => A.to_orientation(orientation, settings),
            Self::Coo(A) => CompressedMatrix::from_coo(A, orientation, settings),
            Self::Dok(A) => CompressedMatrix::from_dok(A, orientation, settings),
        }
    }

    /// The wrapped compressed matrix, if this is one
    pub fn as_compressed(&self) -> Option<&CompressedMatrix<T>> {
        match self {
            Self::Compressed(A) => Some(A),
            _ => None,
        }
    }
}
