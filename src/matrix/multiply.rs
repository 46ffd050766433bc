//! Sparse matrix multiplication using a row index over the right operand
//!
//! Only products of two stored entries are ever formed, so the cost is
//! proportional to `nnz(A)` times the average number of entries per row of `B`.

use num_traits::PrimInt;
use std::collections::HashMap;

use crate::error::{MatrixError, Result};
use crate::matrix::{Coord, SparseMatrix};

/// Groups the entries of `b` by row: `k -> [(col, value), ...]`
///
/// Each row list keeps `b`'s enumeration order.
fn index_rows<T: PrimInt>(b: &SparseMatrix<T>) -> HashMap<usize, Vec<(usize, T)>> {
    let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (row, col, value) in b.entries() {
        rows.entry(row).or_default().push((col, value));
    }
    rows
}

/// Running sums of the product, one slot per output coordinate
///
/// A sum that cancels to zero keeps its slot as a zero. If it later becomes
/// non-zero again it is moved to a fresh slot at the end, so the surviving
/// slots follow the order in which coordinates were last introduced.
struct Accumulator<T> {
    index: HashMap<Coord, usize>,
    slots: Vec<(Coord, T)>,
}

impl<T: PrimInt> Accumulator<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            slots: Vec::new(),
        }
    }

    /// Adds a non-zero `product` into `coord`
    fn add(&mut self, coord: Coord, product: T) -> Result<()> {
        let Some(slot) = self.index.get(&coord).copied() else {
            self.index.insert(coord, self.slots.len());
            self.slots.push((coord, product));
            return Ok(());
        };

        let current = self.slots[slot].1;
        let sum = current.checked_add(&product).ok_or(MatrixError::Overflow {
            op: "multiply",
            row: coord.0,
            col: coord.1,
        })?;

        if current.is_zero() && !sum.is_zero() {
            self.index.insert(coord, self.slots.len());
            self.slots.push((coord, sum));
        } else {
            self.slots[slot].1 = sum;
        }
        Ok(())
    }

    /// Collects the live non-zero slots into a matrix
    fn into_matrix(self, n_rows: usize, n_cols: usize) -> SparseMatrix<T> {
        let Self { index, slots } = self;
        let mut result = SparseMatrix::<T>::empty(n_rows, n_cols);
        for (slot, ((row, col), value)) in slots.into_iter().enumerate() {
            if !value.is_zero() && index.get(&(row, col)) == Some(&slot) {
                result.insert_valid(row, col, value);
            }
        }
        result
    }
}

/// Computes the matrix product `a × b`
///
/// For every entry `(i, k, v1)` of `a` (in `a`'s order) and every `(j, v2)` in
/// row `k` of `b`, `v1 * v2` is accumulated into `(i, j)` of the result. Sums
/// that end at zero are not stored, and the result enumerates its coordinates
/// in the order they were last introduced.
///
/// # Errors
///
/// - [`MatrixError::DimensionMismatch`] unless `a.n_cols() == b.n_rows()`
/// - [`MatrixError::Overflow`] if a product or partial sum does not fit in `T`
pub fn multiply<T: PrimInt>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.n_cols() != b.n_rows() {
        return Err(MatrixError::mismatch("multiply", a.dimensions(), b.dimensions()));
    }

    let b_rows = index_rows(b);
    let mut sums = Accumulator::<T>::new();

    for (i, k, a_val) in a.entries() {
        let Some(b_row) = b_rows.get(&k) else {
            continue;
        };

        for &(j, b_val) in b_row {
            let product = a_val
                .checked_mul(&b_val)
                .ok_or(MatrixError::Overflow { op: "multiply", row: i, col: j })?;
            sums.add((i, j), product)?;
        }
    }

    let result = sums.into_matrix(a.n_rows(), b.n_cols());
    log::debug!(
        "multiply: {}x{} × {}x{}, nnz {} × {} -> {}",
        a.n_rows(),
        a.n_cols(),
        b.n_rows(),
        b.n_cols(),
        a.nnz(),
        b.nnz(),
        result.nnz()
    );
    Ok(result)
}

impl<T: PrimInt> SparseMatrix<T> {
    /// Computes `self × other`. See [`multiply`].
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }
}
