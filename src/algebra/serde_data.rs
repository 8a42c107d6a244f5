// Unchecked serialized forms of the COO and DOK stores.  Both stores
// deserialize through these and are only constructed once the decoded
// data satisfies the invariants that `set` would otherwise maintain.

use crate::algebra::*;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize)]
pub struct JsonCooData<T> {
    m: usize,
    n: usize,
    elements: Vec<Triplet<T>>,
}

#[derive(Deserialize)]
pub struct JsonDokData<T> {
    m: usize,
    n: usize,
    data: HashMap<usize, HashMap<usize, T>>,
}

impl<T> TryFrom<JsonCooData<T>> for CooMatrix<T> {
    type Error = SparseMatrixError;

    // elements must be in bounds, and strictly increasing in row-major
    // order so that binary search in get/set stays valid
    fn try_from(raw: JsonCooData<T>) -> Result<Self, Self::Error> {
        let JsonCooData { m, n, elements } = raw;

        for t in &elements {
            check_index((m, n), t.row, t.col)?;
        }
        let sorted = elements
            .windows(2)
            .all(|w| (w[0].row, w[0].col) < (w[1].row, w[1].col));
        if !sorted {
            return Err(SparseMatrixError::Serialization(
                "COO elements must be strictly increasing in row-major order".to_string(),
            ));
        }

        Ok(CooMatrix { m, n, elements })
    }
}

impl<T> TryFrom<JsonDokData<T>> for DokMatrix<T> {
    type Error = SparseMatrixError;

    fn try_from(raw: JsonDokData<T>) -> Result<Self, Self::Error> {
        let JsonDokData { m, n, data } = raw;

        for (&row, cols) in &data {
            for &col in cols.keys() {
                check_index((m, n), row, col)?;
            }
        }

        Ok(DokMatrix { m, n, data })
    }
}

#[test]
fn test_coo_data_checks() {
    let raw = JsonCooData {
        m: 2,
        n: 2,
        elements: vec![Triplet::new(0, 1, 1.0), Triplet::new(1, 0, 2.0)],
    };
    let A = CooMatrix::try_from(raw).unwrap();
    assert_eq!(A.get(1, 0).unwrap(), 2.0);

    // duplicate position
    let raw = JsonCooData {
        m: 2,
        n: 2,
        elements: vec![Triplet::new(0, 1, 1.0), Triplet::new(0, 1, 9.0)],
    };
    assert!(matches!(
        CooMatrix::try_from(raw),
        Err(SparseMatrixError::Serialization(_))
    ));

    let raw = JsonCooData {
        m: 2,
        n: 2,
        elements: vec![Triplet::new(5, 5, 1.0)],
    };
    assert!(matches!(
        CooMatrix::try_from(raw),
        Err(SparseMatrixError::IndexOutOfBounds { row: 5, col: 5, .. })
    ));
}

#[test]
fn test_dok_data_checks() {
    let mut data = HashMap::new();
    data.insert(1, HashMap::from([(2, 4.0)]));
    let raw = JsonDokData { m: 2, n: 2, data };
    assert_eq!(
        DokMatrix::try_from(raw),
        Err(SparseMatrixError::IndexOutOfBounds {
            row: 1,
            col: 2,
            rows: 2,
            cols: 2
        })
    );
}
