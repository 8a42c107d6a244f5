use crate::algebra::{Orientation, SparseMatrixError};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag identifying a sparse matrix representation
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SparseFormat {
    /// Compressed Sparse Row
    Csr,
    /// Compressed Sparse Column
    Csc,
    /// Coordinate list
    Coo,
    /// Dictionary of keys
    Dok,
}

impl SparseFormat {
    /// storage orientation for the compressed formats, `None` otherwise
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            SparseFormat::Csr => Some(Orientation::RowMajor),
            SparseFormat::Csc => Some(Orientation::ColumnMajor),
            SparseFormat::Coo | SparseFormat::Dok => None,
        }
    }
}

impl From<Orientation> for SparseFormat {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::RowMajor => SparseFormat::Csr,
            Orientation::ColumnMajor => SparseFormat::Csc,
        }
    }
}

impl FromStr for SparseFormat {
    type Err = SparseMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csr" => Ok(SparseFormat::Csr),
            "csc" => Ok(SparseFormat::Csc),
            "coo" => Ok(SparseFormat::Coo),
            "dok" => Ok(SparseFormat::Dok),
            _ => Err(SparseMatrixError::UnsupportedConversion(s.to_string())),
        }
    }
}

impl fmt::Display for SparseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SparseFormat::Csr => "csr",
            SparseFormat::Csc => "csc",
            SparseFormat::Coo => "coo",
            SparseFormat::Dok => "dok",
        };
        f.write_str(tag)
    }
}

#[test]
fn test_format_parsing() {
    assert_eq!("csr".parse::<SparseFormat>(), Ok(SparseFormat::Csr));
    assert_eq!(" CSC ".parse::<SparseFormat>(), Ok(SparseFormat::Csc));
    assert_eq!("Dok".parse::<SparseFormat>(), Ok(SparseFormat::Dok));
    assert_eq!(
        "lil".parse::<SparseFormat>(),
        Err(SparseMatrixError::UnsupportedConversion("lil".to_string()))
    );

    for format in [SparseFormat::Csr, SparseFormat::Csc, SparseFormat::Coo, SparseFormat::Dok] {
        assert_eq!(format.to_string().parse::<SparseFormat>(), Ok(format));
    }
    assert_eq!(SparseFormat::from(Orientation::ColumnMajor), SparseFormat::Csc);
    assert_eq!(SparseFormat::Coo.orientation(), None);
}
