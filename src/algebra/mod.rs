//! Sparse matrix types and operations.
//!
//! All representations implement the [`SparseMatrix`] trait.  The
//! compressed format ([`CompressedMatrix`]) is the working format
//! for arithmetic, while [`CooMatrix`] and [`DokMatrix`] are
//! convenient for incremental assembly before conversion.

mod compressed;
mod convert;
mod coo;
mod dok;
mod error_types;
mod floats;
mod matrix_traits;
mod matrix_types;
#[cfg(feature = "serde")]
mod serde_data;
mod triplet;

pub use compressed::*;
pub use convert::*;
pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use matrix_types::*;

#[cfg(test)]
mod tests;
