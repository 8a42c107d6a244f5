use crate::algebra::*;

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// An empty `m x n` matrix in coordinate list format
    pub fn new(m: usize, n: usize) -> Self {
        CooMatrix {
            m,
            n,
            elements: Vec::new(),
        }
    }

    /// Stored elements in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, Triplet<T>> {
        self.elements.iter()
    }

    /// Stored elements in row-major order, as a slice
    pub fn elements(&self) -> &[Triplet<T>] {
        &self.elements
    }

    // position of (row,col) in the sorted element list, or the
    // position at which it would be inserted
    fn find(&self, row: usize, col: usize) -> Result<usize, usize> {
        self.elements
            .binary_search_by(|t| t.position().cmp(&(row, col)))
    }
}

impl<T> SparseMatrix<T> for CooMatrix<T>
where
    T: FloatT,
{
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    fn get(&self, row: usize, col: usize) -> Result<T, SparseMatrixError> {
        check_index(self.size(), row, col)?;
        match self.find(row, col) {
            Ok(idx) => Ok(self.elements[idx].val),
            Err(_) => Ok(T::zero()),
        }
    }

    fn set(&mut self, row: usize, col: usize, val: T) -> Result<(), SparseMatrixError> {
        check_index(self.size(), row, col)?;
        match self.find(row, col) {
            Ok(idx) => self.elements[idx].val = val,
            Err(idx) => self.elements.insert(idx, Triplet { row, col, val }),
        }
        Ok(())
    }

    fn nnz(&self) -> usize {
        self.elements.len()
    }

    fn format(&self) -> SparseFormat {
        SparseFormat::Coo
    }

    fn triplets(&self) -> Vec<Triplet<T>> {
        self.elements.clone()
    }
}

impl<'a, T> IntoIterator for &'a CooMatrix<T>
where
    T: FloatT,
{
    type Item = &'a Triplet<T>;
    type IntoIter = std::slice::Iter<'a, Triplet<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[test]
fn test_coo_set_get() {
    let mut a = CooMatrix::new(3, 3);
    a.set(0, 1, 1.0).unwrap();
    assert_eq!(a.get(0, 1).unwrap(), 1.0);

    a.set(2, 2, 3.0).unwrap();
    assert_eq!(a.get(0, 1).unwrap(), 1.0);
    assert_eq!(a.get(2, 2).unwrap(), 3.0);

    a.set(1, 0, 2.0).unwrap();
    assert_eq!(a.get(0, 1).unwrap(), 1.0);
    assert_eq!(a.get(1, 0).unwrap(), 2.0);
    assert_eq!(a.get(2, 2).unwrap(), 3.0);
    assert_eq!(a.get(0, 0).unwrap(), 0.0);

    // kept sorted regardless of insertion order
    let positions: Vec<_> = a.iter().map(|t| t.position()).collect();
    assert_eq!(positions, vec![(0, 1), (1, 0), (2, 2)]);

    // overwrite keeps a single element
    a.set(1, 0, -2.0).unwrap();
    assert_eq!(a.nnz(), 3);
    assert_eq!(a.get(1, 0).unwrap(), -2.0);

    assert!(a.set(3, 0, 1.0).is_err());
    assert!(a.get(0, 3).is_err());
    assert_eq!(a.nnz(), 3);
}
