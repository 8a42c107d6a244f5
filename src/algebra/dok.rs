#![allow(non_snake_case)]

use crate::algebra::*;
use itertools::Itertools;
use std::collections::HashMap;

impl<T> DokMatrix<T>
where
    T: FloatT,
{
    /// An empty `m x n` matrix in dictionary of keys format
    pub fn new(m: usize, n: usize) -> Self {
        DokMatrix {
            m,
            n,
            data: HashMap::new(),
        }
    }

    /// Stored elements in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = Triplet<T>> + '_ {
        self.data.iter().flat_map(|(&row, cols)| {
            cols.iter().map(move |(&col, &val)| Triplet { row, col, val })
        })
    }

    /// Stored elements in row-major order
    pub fn sorted_triplets(&self) -> Vec<Triplet<T>> {
        self.iter().sorted_by_key(|t| t.position()).collect()
    }

    /// Element-wise sum `A + B` of two DOK matrices.
    ///
    /// The result holds every position stored in either operand.
    pub fn add(&self, B: &Self) -> Result<Self, SparseMatrixError> {
        check_same_size(self.size(), B.size())?;

        let mut sum = self.clone();
        for (&row, cols) in &B.data {
            let sumrow = sum.data.entry(row).or_default();
            for (&col, &val) in cols {
                *sumrow.entry(col).or_insert_with(T::zero) += val;
            }
        }
        Ok(sum)
    }
}

impl<T> SparseMatrix<T> for DokMatrix<T>
where
    T: FloatT,
{
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    fn get(&self, row: usize, col: usize) -> Result<T, SparseMatrixError> {
        check_index(self.size(), row, col)?;
        let val = self
            .data
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .copied()
            .unwrap_or_else(T::zero);
        Ok(val)
    }

    fn set(&mut self, row: usize, col: usize, val: T) -> Result<(), SparseMatrixError> {
        check_index(self.size(), row, col)?;
        self.data.entry(row).or_default().insert(col, val);
        Ok(())
    }

    fn nnz(&self) -> usize {
        self.data.values().map(|cols| cols.len()).sum()
    }

    fn format(&self) -> SparseFormat {
        SparseFormat::Dok
    }

    fn triplets(&self) -> Vec<Triplet<T>> {
        self.sorted_triplets()
    }
}

#[test]
fn test_dok_set_get() {
    let mut a = DokMatrix::new(3, 3);
    a.set(0, 1, 1.0).unwrap();
    a.set(2, 2, 3.0).unwrap();
    a.set(1, 0, 2.0).unwrap();

    assert_eq!(a.get(0, 1).unwrap(), 1.0);
    assert_eq!(a.get(1, 0).unwrap(), 2.0);
    assert_eq!(a.get(2, 2).unwrap(), 3.0);
    assert_eq!(a.get(0, 0).unwrap(), 0.0);
    assert_eq!(a.get(1, 2).unwrap(), 0.0);
    assert_eq!(a.nnz(), 3);

    // explicit zeros are stored
    a.set(0, 0, 0.0).unwrap();
    assert_eq!(a.nnz(), 4);

    let positions: Vec<_> = a.sorted_triplets().iter().map(|t| t.position()).collect();
    assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (2, 2)]);

    assert!(a.set(0, 3, 1.0).is_err());
    assert_eq!(a.nnz(), 4);
}

#[test]
fn test_dok_add() {
    let mut A = DokMatrix::new(2, 2);
    A.set(0, 0, 1.0).unwrap();
    A.set(0, 1, 2.0).unwrap();
    let mut B = DokMatrix::new(2, 2);
    B.set(0, 1, 4.0).unwrap();
    B.set(1, 0, 3.0).unwrap();

    let C = A.add(&B).unwrap();
    assert_eq!(C.get(0, 0).unwrap(), 1.0);
    assert_eq!(C.get(0, 1).unwrap(), 6.0);
    assert_eq!(C.get(1, 0).unwrap(), 3.0);
    assert_eq!(C.nnz(), 3);

    // operands are unchanged
    assert_eq!(A.get(0, 1).unwrap(), 2.0);
    assert_eq!(A.nnz(), 2);

    assert!(A.add(&DokMatrix::new(2, 3)).is_err());
}
