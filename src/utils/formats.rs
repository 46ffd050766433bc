//! Utilities for converting between our matrix format and external libraries

use crate::error::Result;
use crate::matrix::SparseMatrix;
use ndarray::Array2;
use num_traits::PrimInt;
use sprs::{CsMat, TriMat};
use std::ops::AddAssign;

/// Converts our matrix to sprs CsMat in CSR format
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: PrimInt + Default + AddAssign,
{
    let mut triplets = TriMat::with_capacity(matrix.dimensions(), matrix.nnz());
    for (row, col, value) in matrix.entries() {
        triplets.add_triplet(row, col, value);
    }
    triplets.to_csr()
}

/// Converts a sprs CsMat (CSR or CSC) to our format
///
/// Entries are inserted in the storage order of `matrix`. Explicitly stored
/// zeros are dropped.
pub fn from_sprs<T>(matrix: &CsMat<T>) -> Result<SparseMatrix<T>>
where
    T: PrimInt + Default,
{
    SparseMatrix::from_triplets(
        matrix.rows(),
        matrix.cols(),
        matrix.iter().map(|(&value, (row, col))| (row, col, value)),
    )
}

/// Expands a matrix into a dense ndarray
pub fn to_dense<T: PrimInt>(matrix: &SparseMatrix<T>) -> Array2<T> {
    let mut dense = Array2::zeros(matrix.dimensions());
    for (row, col, value) in matrix.entries() {
        dense[[row, col]] = value;
    }
    dense
}

/// Collects the non-zero elements of a dense ndarray in row-major order
pub fn from_dense<T: PrimInt>(dense: &Array2<T>) -> Result<SparseMatrix<T>> {
    let (n_rows, n_cols) = dense.dim();
    SparseMatrix::from_triplets(
        n_rows,
        n_cols,
        dense.indexed_iter().map(|((row, col), &value)| (row, col, value)),
    )
}
