//! __sparsemat__ is a Rust library of sparse matrix storage formats for
//! matrices in which most entries are zero.  Memory use is proportional
//! to the number of stored entries rather than to the full `m x n` size.
//!
//! ## Formats
//!
//! * __Compressed__ ([`CompressedMatrix`](algebra::CompressedMatrix)): Compressed
//!   Sparse Row (CSR) or Compressed Sparse Column (CSC) storage in three parallel
//!   arrays.  Entries within each row (CSR) or column (CSC) are kept sorted, for
//!   any insertion order.  This sorting allows fast lookups and linear-time
//!   merge-based addition.
//!
//! * __Coordinate list__ ([`CooMatrix`](algebra::CooMatrix)): a sorted list of
//!   `(row, col, value)` triplets.
//!
//! * __Dictionary of keys__ ([`DokMatrix`](algebra::DokMatrix)): a nested
//!   `row -> col -> value` hash map with constant-time random access.
//!
//! All formats implement the [`SparseMatrix`](algebra::SparseMatrix) trait,
//! and [`AnySparseMatrix`](algebra::AnySparseMatrix) converts between them.
//!
//! ## Example
//!
//! ```
//! use sparsemat::algebra::*;
//!
//! // A =
//! //[ ⋅   1.0   ⋅ ]
//! //[2.0   ⋅    ⋅ ]
//! //[ ⋅    ⋅   3.0]
//! let mut A = CompressedMatrix::<f64>::csr(3, 3).unwrap();
//! A.set(0, 1, 1.0).unwrap();
//! A.set(2, 2, 3.0).unwrap();
//! A.set(1, 0, 2.0).unwrap();
//!
//! let positions: Vec<_> = A.iter_triplets().map(|t| (t.row, t.col)).collect();
//! assert_eq!(positions, vec![(0, 1), (1, 0), (2, 2)]);
//!
//! let B = A.add(&A).unwrap();
//! assert_eq!(B.get(2, 2).unwrap(), 6.0);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
