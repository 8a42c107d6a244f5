#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_4x4(orientation: Orientation) -> CompressedMatrix<f64> {
    // A =
    //[ 4.0  -3.0   7.0    ⋅ ]
    //[  ⋅    8.0  -1.0    ⋅ ]
    //[ 1.0    ⋅    2.0  -3.0]
    //[  ⋅   -1.0    ⋅    1.0]
    let entries = [
        (3, 3, 1.),
        (0, 2, 7.),
        (2, 0, 1.),
        (1, 1, 8.),
        (0, 0, 4.),
        (2, 3, -3.),
        (3, 1, -1.),
        (1, 2, -1.),
        (0, 1, -3.),
        (2, 2, 2.),
    ];
    let mut A = CompressedMatrix::zeros(4, 4, orientation).unwrap();
    for (row, col, val) in entries {
        A.set(row, col, val).unwrap();
    }
    A
}

fn test_matrix_3x4(orientation: Orientation) -> CompressedMatrix<f64> {
    // A =
    //[-1.0    ⋅    ⋅   1.0]
    //[  ⋅     ⋅    ⋅    ⋅ ]
    //[ 2.0    ⋅   5.0   ⋅ ]
    let mut A = CompressedMatrix::zeros(3, 4, orientation).unwrap();
    A.set(2, 2, 5.).unwrap();
    A.set(0, 3, 1.).unwrap();
    A.set(2, 0, 2.).unwrap();
    A.set(0, 0, -1.).unwrap();
    A
}

#[test]
fn test_zeros() {
    let A = CompressedMatrix::<f64>::csr(3, 5).unwrap();
    assert_eq!(A.size(), (3, 5));
    assert_eq!(A.majorptr, vec![0; 4]);
    assert_eq!(A.nnz(), 0);
    assert!(A.check_format().is_ok());

    let B = CompressedMatrix::<f64>::csc(3, 5).unwrap();
    assert_eq!(B.majorptr, vec![0; 6]);
    assert_eq!(B.major_dim(), 5);
    assert_eq!(B.minor_dim(), 3);
    assert!(B.is_column_major());

    // degenerate but valid shapes
    let C = CompressedMatrix::<f64>::csr(0, 4).unwrap();
    assert_eq!(C.majorptr, vec![0]);
    assert!(C.check_format().is_ok());
}

#[test]
fn test_zeros_invalid_shape() {
    assert_eq!(
        CompressedMatrix::<f64>::csr(usize::MAX, 2),
        Err(SparseMatrixError::InvalidShape {
            rows: usize::MAX,
            cols: 2
        })
    );
    assert!(CompressedMatrix::<f64>::csc(2, usize::MAX).is_err());
}

#[test]
fn test_set_get_csr_structure() {
    let A = test_matrix_4x4(Orientation::RowMajor);
    assert!(A.check_format().is_ok());
    assert_eq!(A.majorptr, vec![0, 3, 5, 8, 10]);
    assert_eq!(A.minorval, vec![0, 1, 2, 1, 2, 0, 2, 3, 1, 3]);
    assert_eq!(A.nzval, vec![4., -3., 7., 8., -1., 1., 2., -3., -1., 1.]);
    assert_eq!(A.nnz(), 10);

    assert_eq!(A.get(0, 2).unwrap(), 7.);
    assert_eq!(A.get(3, 1).unwrap(), -1.);
    assert_eq!(A.get(1, 0).unwrap(), 0.);
    assert_eq!(A.get(3, 2).unwrap(), 0.);
}

#[test]
fn test_set_get_csc_structure() {
    let A = test_matrix_4x4(Orientation::ColumnMajor);
    assert!(A.check_format().is_ok());
    assert_eq!(A.majorptr, vec![0, 2, 5, 8, 10]);
    assert_eq!(A.minorval, vec![0, 2, 0, 1, 3, 0, 1, 2, 2, 3]);
    assert_eq!(A.nzval, vec![4., 1., -3., 8., -1., 7., -1., 2., -3., 1.]);

    // same public view as the CSR version
    let B = test_matrix_4x4(Orientation::RowMajor);
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(A.get(row, col).unwrap(), B.get(row, col).unwrap());
        }
    }
}

#[test]
fn test_scenario_small_matrix() {
    for orientation in [Orientation::RowMajor, Orientation::ColumnMajor] {
        let mut A = CompressedMatrix::zeros(3, 3, orientation).unwrap();
        A.set(0, 1, 1.0).unwrap();
        A.set(2, 2, 3.0).unwrap();
        A.set(1, 0, 2.0).unwrap();

        assert_eq!(A.get(0, 1).unwrap(), 1.0);
        assert_eq!(A.get(1, 0).unwrap(), 2.0);
        assert_eq!(A.get(2, 2).unwrap(), 3.0);
        assert_eq!(A.get(0, 0).unwrap(), 0.0);
        assert!(A.check_format().is_ok());
    }
}

#[test]
fn test_set_overwrite() {
    let mut A = test_matrix_3x4(Orientation::RowMajor);
    let nnz = A.nnz();

    A.set(2, 2, 10.).unwrap();
    assert_eq!(A.nnz(), nnz);
    assert_eq!(A.get(2, 2).unwrap(), 10.);

    A.set(2, 2, -4.).unwrap();
    assert_eq!(A.nnz(), nnz);
    assert_eq!(A.get(2, 2).unwrap(), -4.);
    assert_eq!(A.nzval.iter().filter(|&&v| v == -4.).count(), 1);
}

#[test]
fn test_set_explicit_zero_is_stored() {
    let mut A = test_matrix_3x4(Orientation::ColumnMajor);
    let nnz = A.nnz();

    // new explicit zero adds an entry
    A.set(1, 1, 0.).unwrap();
    assert_eq!(A.nnz(), nnz + 1);
    assert_eq!(A.get_entry((1, 1)), Some(0.));

    // overwriting with zero keeps the entry
    A.set(0, 0, 0.).unwrap();
    assert_eq!(A.nnz(), nnz + 1);
    assert_eq!(A.get_entry((0, 0)), Some(0.));
    assert!(A.check_format().is_ok());
}

#[test]
fn test_set_into_empty_leading_and_trailing_groups() {
    let mut A = CompressedMatrix::csr(4, 3).unwrap();
    A.set(3, 2, 1.).unwrap();
    A.set(0, 0, 2.).unwrap();
    A.set(3, 0, 3.).unwrap();
    A.set(0, 2, 4.).unwrap();

    assert_eq!(A.majorptr, vec![0, 2, 2, 2, 4]);
    assert_eq!(A.minorval, vec![0, 2, 0, 2]);
    assert_eq!(A.nzval, vec![2., 4., 3., 1.]);
    assert!(A.check_format().is_ok());
}

#[test]
fn test_out_of_bounds() {
    let mut A = test_matrix_3x4(Orientation::RowMajor);
    let before = A.clone();

    assert_eq!(
        A.get(3, 0),
        Err(SparseMatrixError::IndexOutOfBounds {
            row: 3,
            col: 0,
            rows: 3,
            cols: 4
        })
    );
    assert!(A.get(0, 4).is_err());
    assert!(A.set(0, 4, 1.).is_err());
    assert!(A.set(7, 7, 1.).is_err());

    // failed writes leave the matrix untouched
    assert_eq!(A, before);
}

#[test]
#[should_panic]
fn test_get_entry_out_of_bounds() {
    let A = test_matrix_3x4(Orientation::RowMajor);
    A.get_entry((3, 0));
}

#[test]
fn test_check_format_errors() {
    let good = test_matrix_3x4(Orientation::RowMajor);
    assert!(good.check_format().is_ok());

    let mut A = good.clone();
    A.nzval.pop();
    assert_eq!(A.check_format(), Err(SparseFormatError::IncompatibleDimension));

    let mut A = good.clone();
    A.majorptr[1] = 3;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadMajorptr));

    let mut A = good.clone();
    A.minorval.swap(0, 1);
    assert_eq!(A.check_format(), Err(SparseFormatError::BadMinorOrdering));

    let mut A = good.clone();
    let last = A.minorval.len() - 1;
    A.minorval[last] = 9;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadMinorval));

    // try_new runs the same checks
    let B = CompressedMatrix::try_new(
        2,
        2,
        Orientation::RowMajor,
        vec![0, 2, 2],
        vec![1, 1],
        vec![1., 2.],
    );
    assert_eq!(B, Err(SparseFormatError::BadMinorOrdering));
}

#[test]
#[should_panic]
fn test_new_bad_dimensions() {
    // pointer array too short for 3 rows
    CompressedMatrix::new(3, 2, Orientation::RowMajor, vec![0, 1], vec![0], vec![1.]);
}

#[test]
fn test_iter_triplets_row_major_for_both_orientations() {
    let expected = vec![
        (0, 0, -1.),
        (0, 3, 1.),
        (2, 0, 2.),
        (2, 2, 5.),
    ];
    for orientation in [Orientation::RowMajor, Orientation::ColumnMajor] {
        let A = test_matrix_3x4(orientation);
        let iter = A.iter_triplets();
        assert_eq!(iter.len(), A.nnz());
        let got: Vec<_> = iter.map(|t| (t.row, t.col, t.val)).collect();
        assert_eq!(got, expected);
    }

    // storage order differs for CSC
    let A = test_matrix_3x4(Orientation::ColumnMajor);
    let got: Vec<_> = A.iter_stored().map(|t| t.position()).collect();
    assert_eq!(got, vec![(0, 0), (2, 0), (2, 2), (0, 3)]);
}

#[test]
fn test_iter_scenario_ordering() {
    let mut A = CompressedMatrix::csr(3, 3).unwrap();
    A.set(2, 2, 3.0).unwrap();
    A.set(1, 0, 2.0).unwrap();
    A.set(0, 1, 1.0).unwrap();

    let mut iter = A.iter_triplets();
    assert_eq!(iter.next().map(|t| t.position()), Some((0, 1)));
    assert_eq!(iter.next().map(|t| t.position()), Some((1, 0)));
    assert_eq!(iter.next().map(|t| t.position()), Some((2, 2)));
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn test_add_zero_matrices() {
    for orientation in [Orientation::RowMajor, Orientation::ColumnMajor] {
        let A = CompressedMatrix::<f64>::zeros(2, 2, orientation).unwrap();
        let B = CompressedMatrix::<f64>::zeros(2, 2, orientation).unwrap();
        let C = A.add(&B).unwrap();
        assert_eq!(C.nnz(), 0);
        assert_eq!(C.size(), (2, 2));
        assert_eq!(C.majorptr, vec![0, 0, 0]);
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(C.get(row, col).unwrap(), 0.);
            }
        }
    }
}

#[test]
fn test_add_csc() {
    let A = test_matrix_4x4(Orientation::ColumnMajor);
    let B = test_matrix_3x4(Orientation::ColumnMajor);
    assert!(A.add(&B).is_err());

    // A + (-A) keeps every position, all with value zero
    let mut negA = A.clone();
    negA.nzval.iter_mut().for_each(|v| *v = -*v);
    let C = A.add(&negA).unwrap();
    assert_eq!(C.nnz(), A.nnz());
    assert!(C.nzval.iter().all(|&v| v == 0.));
    assert_eq!(C.majorptr, A.majorptr);
    assert_eq!(C.minorval, A.minorval);

    // doubling
    let D = A.add(&A).unwrap();
    assert!(D.check_format().is_ok());
    assert_eq!(D.get(2, 3).unwrap(), -6.);
    assert_eq!(D.get(1, 1).unwrap(), 16.);
    assert!(D.is_column_major());
}

#[test]
fn test_add_with_empty_groups() {
    // A has only row 0, B has only row 3
    let mut A = CompressedMatrix::csr(4, 2).unwrap();
    A.set(0, 1, 1.).unwrap();
    let mut B = CompressedMatrix::csr(4, 2).unwrap();
    B.set(3, 0, 2.).unwrap();

    let C = A.add(&B).unwrap();
    assert_eq!(C.majorptr, vec![0, 1, 1, 1, 2]);
    assert_eq!(C.minorval, vec![1, 0]);
    assert_eq!(C.nzval, vec![1., 2.]);
    assert_eq!(C.nnz(), A.nnz() + B.nnz());
}
