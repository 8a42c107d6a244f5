#![allow(non_snake_case)]
use sparsemat::algebra::*;

fn csr_from(m: usize, n: usize, entries: &[(usize, usize, f64)]) -> CompressedMatrix<f64> {
    let mut A = CompressedMatrix::csr(m, n).unwrap();
    for &(row, col, val) in entries {
        A.set(row, col, val).unwrap();
    }
    A
}

#[test]
fn scenario_set_and_get() {
    let A = csr_from(3, 3, &[(0, 1, 1.0), (2, 2, 3.0), (1, 0, 2.0)]);

    assert_eq!(A.get(0, 1).unwrap(), 1.0);
    assert_eq!(A.get(1, 0).unwrap(), 2.0);
    assert_eq!(A.get(2, 2).unwrap(), 3.0);
    assert_eq!(A.get(0, 0).unwrap(), 0.0);
}

#[test]
fn scenario_add_zero_matrices() {
    let A = CompressedMatrix::<f64>::csr(2, 2).unwrap();
    let B = CompressedMatrix::<f64>::csr(2, 2).unwrap();

    let C = A.add(&B).unwrap();
    assert_eq!(C.nnz(), 0);
    for row in 0..2 {
        for col in 0..2 {
            assert_eq!(C.get(row, col).unwrap(), 0.0);
        }
    }
}

#[test]
fn scenario_add_overlapping() {
    let A = csr_from(2, 2, &[(0, 0, 1.0), (1, 1, 2.0), (0, 1, 2.0)]);
    let B = csr_from(2, 2, &[(1, 0, 3.0), (0, 1, 4.0), (1, 1, 1.0)]);

    let C = A.add(&B).unwrap();
    assert_eq!(C.get(0, 0).unwrap(), 1.0);
    assert_eq!(C.get(0, 1).unwrap(), 6.0);
    assert_eq!(C.get(1, 0).unwrap(), 3.0);
    assert_eq!(C.get(1, 1).unwrap(), 3.0);
    assert_eq!(C.nnz(), 4);
}

#[test]
fn scenario_iteration_order() {
    let A = csr_from(3, 3, &[(2, 2, 3.0), (0, 1, 1.0), (1, 0, 2.0)]);

    let mut iter = A.iter_triplets();
    assert_eq!(iter.next(), Some(Triplet::new(0, 1, 1.0)));
    assert_eq!(iter.next(), Some(Triplet::new(1, 0, 2.0)));
    assert_eq!(iter.next(), Some(Triplet::new(2, 2, 3.0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn add_requires_matching_operands() {
    let A = CompressedMatrix::<f64>::csr(2, 2).unwrap();

    let B = CompressedMatrix::<f64>::csr(2, 3).unwrap();
    assert!(matches!(
        A.add(&B),
        Err(SparseMatrixError::ShapeMismatch { .. })
    ));

    let B = CompressedMatrix::<f64>::csc(2, 2).unwrap();
    assert!(matches!(
        A.add(&B),
        Err(SparseMatrixError::OrientationMismatch { .. })
    ));
}

#[test]
fn errors_have_readable_messages() {
    let mut A = CompressedMatrix::<f64>::csr(2, 2).unwrap();
    let err = A.set(2, 0, 1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index (2, 0) out of bounds for matrix of shape (2 x 2)"
    );

    let B = CompressedMatrix::<f64>::csr(3, 2).unwrap();
    let err = A.add(&B).unwrap_err();
    assert_eq!(err.to_string(), "Shape mismatch: (2 x 2) vs (3 x 2)");

    let err = "hyb".parse::<SparseFormat>().unwrap_err();
    assert_eq!(err.to_string(), "Unsupported conversion target \"hyb\"");
}

#[test]
fn f32_matrices() {
    let mut A = CompressedMatrix::<f32>::csc(2, 3).unwrap();
    A.set(1, 2, 0.5).unwrap();
    A.set(0, 2, 1.5).unwrap();

    let B = A.add(&A).unwrap();
    assert_eq!(B.get(1, 2).unwrap(), 1.0f32);
    assert_eq!(B.get(0, 2).unwrap(), 3.0f32);

    let D = DokMatrix::from(&B);
    assert_eq!(D.nnz(), 2);
}
