use crate::algebra::{FloatT, Orientation, Triplet};
use std::cmp::Ordering;

impl<T> Triplet<T>
where
    T: FloatT,
{
    pub fn new(row: usize, col: usize, val: T) -> Self {
        Self { row, col, val }
    }

    /// `(row, col)` position of this element
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Row-major comparison of element positions.  Values are ignored.
    pub fn cmp_position(&self, other: &Self) -> Ordering {
        self.position().cmp(&other.position())
    }

    /// True if this element precedes `other` in row-major order
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp_position(other) == Ordering::Less
    }

    /// `(major, minor)` position of this element for the given storage orientation
    pub(crate) fn storage_key(&self, orientation: Orientation) -> (usize, usize) {
        orientation.to_storage(self.row, self.col)
    }
}

impl Orientation {
    /// Maps a public `(row, col)` position to `(major, minor)`.
    #[inline]
    pub fn to_storage(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Orientation::RowMajor => (row, col),
            Orientation::ColumnMajor => (col, row),
        }
    }

    /// Maps a `(major, minor)` storage position back to `(row, col)`.
    /// The swap is its own inverse.
    #[inline]
    pub fn to_position(self, major: usize, minor: usize) -> (usize, usize) {
        self.to_storage(major, minor)
    }

    /// the opposite orientation (CSR <-> CSC)
    pub fn transposed(self) -> Self {
        match self {
            Orientation::RowMajor => Orientation::ColumnMajor,
            Orientation::ColumnMajor => Orientation::RowMajor,
        }
    }
}

#[test]
fn test_triplet_ordering() {
    let a = Triplet::new(0, 3, 1.0);
    let b = Triplet::new(1, 0, -1.0);
    let c = Triplet::new(1, 2, 5.0);

    assert!(a.less_than(&b));
    assert!(b.less_than(&c));
    assert!(!c.less_than(&a));

    // same position, different values: neither precedes the other
    let d = Triplet::new(1, 2, 0.0);
    assert_eq!(c.cmp_position(&d), Ordering::Equal);
    assert!(!c.less_than(&d) && !d.less_than(&c));
}

#[test]
fn test_orientation_swap() {
    assert_eq!(Orientation::RowMajor.to_storage(2, 5), (2, 5));
    assert_eq!(Orientation::ColumnMajor.to_storage(2, 5), (5, 2));
    assert_eq!(Orientation::ColumnMajor.to_position(5, 2), (2, 5));
    assert_eq!(Orientation::RowMajor.transposed(), Orientation::ColumnMajor);

    let t = Triplet::new(4, 1, 2.0);
    assert_eq!(t.storage_key(Orientation::ColumnMajor), (1, 4));
}
