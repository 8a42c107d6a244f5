#![allow(non_snake_case)]

use crate::algebra::*;
use serde::{de::DeserializeOwned, Serialize};

impl<T> CompressedMatrix<T>
where
    T: FloatT + Serialize + DeserializeOwned,
{
    /// Serialize the matrix to a JSON string
    pub fn to_json(&self) -> Result<String, SparseMatrixError> {
        serde_json::to_string(self).map_err(|e| SparseMatrixError::Serialization(e.to_string()))
    }

    /// Deserialize a matrix from a JSON string.  The decoded arrays
    /// are checked with [`check_format`](CompressedMatrix::check_format)
    /// before the matrix is returned.
    pub fn from_json(json: &str) -> Result<Self, SparseMatrixError> {
        let A: Self = serde_json::from_str(json)
            .map_err(|e| SparseMatrixError::Serialization(e.to_string()))?;
        A.check_format()?;
        Ok(A)
    }
}
