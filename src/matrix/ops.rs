//! Elementwise and structural operations: addition, subtraction, transpose
//!
//! All operations borrow their operands and build a new matrix. Entries that
//! cancel to zero are swept out in a single pass once every update is applied.

use num_traits::PrimInt;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;

fn check_same_shape<T: PrimInt>(op: &'static str, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(MatrixError::mismatch(op, a.dimensions(), b.dimensions()));
    }
    Ok(())
}

/// Copies every entry of `a` into a fresh matrix of the same shape
fn copy_entries<T: PrimInt>(a: &SparseMatrix<T>) -> SparseMatrix<T> {
    let mut result = SparseMatrix::<T>::empty(a.n_rows(), a.n_cols());
    for (row, col, value) in a.entries() {
        result.insert_valid(row, col, value);
    }
    result
}

/// Computes `a + b`
///
/// Cost is proportional to `nnz(a) + nnz(b)`.
///
/// # Errors
///
/// - [`MatrixError::DimensionMismatch`] unless both matrices have the same shape
/// - [`MatrixError::Overflow`] if a sum does not fit in `T`
pub fn add<T: PrimInt>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    check_same_shape("add", a, b)?;

    let mut result = copy_entries(a);
    for (row, col, value) in b.entries() {
        result.accumulate(row, col, "add", |current| current.checked_add(&value))?;
    }
    result.drop_zeros();

    log::debug!(
        "add: {}x{}, nnz {} + {} -> {}",
        a.n_rows(),
        a.n_cols(),
        a.nnz(),
        b.nnz(),
        result.nnz()
    );
    Ok(result)
}

/// Computes `a - b`
///
/// Cost is proportional to `nnz(a) + nnz(b)`, however many entries cancel.
///
/// # Errors
///
/// - [`MatrixError::DimensionMismatch`] unless both matrices have the same shape
/// - [`MatrixError::Overflow`] if a difference does not fit in `T`
pub fn subtract<T: PrimInt>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    check_same_shape("subtract", a, b)?;

    let mut result = copy_entries(a);
    for (row, col, value) in b.entries() {
        result.accumulate(row, col, "subtract", |current| current.checked_sub(&value))?;
    }
    result.drop_zeros();

    log::debug!(
        "subtract: {}x{}, nnz {} - {} -> {}",
        a.n_rows(),
        a.n_cols(),
        a.nnz(),
        b.nnz(),
        result.nnz()
    );
    Ok(result)
}

/// Returns the transpose of `a`
///
/// Entries are visited in `a`'s enumeration order, so the result enumerates
/// the mirrored coordinates in the same sequence.
pub fn transpose<T: PrimInt>(a: &SparseMatrix<T>) -> SparseMatrix<T> {
    let mut result = SparseMatrix::<T>::empty(a.n_cols(), a.n_rows());
    for (row, col, value) in a.entries() {
        result.insert_valid(col, row, value);
    }
    result
}

impl<T: PrimInt> SparseMatrix<T> {
    /// Computes `self + other`. See [`add`].
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    /// Computes `self - other`. See [`subtract`].
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        subtract(self, other)
    }

    /// Returns the transpose. See [`transpose`].
    pub fn transpose(&self) -> Self {
        transpose(self)
    }
}
