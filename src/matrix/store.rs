//! Coordinate-keyed sparse matrix storage

use indexmap::IndexMap;
use num_traits::PrimInt;
use std::fmt;

use crate::error::{MatrixError, Result};

/// A `(row, col)` position, both zero-based
pub type Coord = (usize, usize);

/// A sparse integer matrix that stores only its non-zero entries
///
/// Entries live in an insertion-ordered map keyed by `(row, col)`:
/// - a coordinate that is absent reads as zero
/// - zero is never stored; writing zero removes the coordinate
/// - every stored coordinate lies inside `n_rows x n_cols`
///
/// Enumeration follows the order in which coordinates were first stored.
/// Overwriting an existing coordinate keeps its position; removing one
/// keeps the relative order of the others.
#[derive(Clone)]
pub struct SparseMatrix<T = i64> {
    n_rows: usize,
    n_cols: usize,
    entries: IndexMap<Coord, T>,
}

impl<T> SparseMatrix<T>
where
    T: PrimInt,
{
    /// Creates an empty matrix with the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if either dimension is zero.
    pub fn new(n_rows: usize, n_cols: usize) -> Result<Self> {
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::invalid_dimension(format!(
                "{}x{} (rows and cols must be positive)",
                n_rows, n_cols
            )));
        }
        Ok(Self::empty(n_rows, n_cols))
    }

    /// Creates an empty matrix whose dimensions come from an already valid matrix
    pub(crate) fn empty(n_rows: usize, n_cols: usize) -> Self {
        debug_assert!(n_rows > 0 && n_cols > 0);
        Self {
            n_rows,
            n_cols,
            entries: IndexMap::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        for i in 0..n {
            matrix.insert_valid(i, i, T::one());
        }
        Ok(matrix)
    }

    /// Builds a matrix from `(row, col, value)` triplets
    ///
    /// Triplets are applied in order through [`set`](Self::set), so zeros are
    /// dropped and a later triplet for the same coordinate wins.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols)?;
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `(n_rows, n_cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored, i.e. every element is zero
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.n_rows || col >= self.n_cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }
        Ok(())
    }

    /// Sets the element at `(row, col)`
    ///
    /// A zero value removes the entry, which is a no-op if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if the coordinate lies outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        if value.is_zero() {
            self.entries.shift_remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Stores an entry already known to be in bounds and non-zero
    pub(crate) fn insert_valid(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.n_rows && col < self.n_cols);
        debug_assert!(!value.is_zero());
        self.entries.insert((row, col), value);
    }

    /// Returns the element at `(row, col)`, zero when nothing is stored there
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if the coordinate lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero))
    }

    /// True if a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Iterates over the non-zero entries as `(row, col, value)` in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries.iter().map(|(&(row, col), &value)| (row, col, value))
    }

    /// Returns the non-zero entries sorted by row, then column
    pub fn sorted_entries(&self) -> Vec<(usize, usize, T)> {
        let mut triplets: Vec<_> = self.entries().collect();
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));
        triplets
    }

    /// Replaces the element at `(row, col)` with `combine(current)`
    ///
    /// A zero result stays stored in place until [`drop_zeros`](Self::drop_zeros)
    /// runs, so a batch of updates never pays for an ordered removal. Meant for
    /// batches that touch each coordinate at most once.
    ///
    /// `combine` returns `None` when the integer arithmetic overflows, which is
    /// reported as [`MatrixError::Overflow`] attributed to `op`.
    pub(crate) fn accumulate<F>(&mut self, row: usize, col: usize, op: &'static str, combine: F) -> Result<()>
    where
        F: FnOnce(T) -> Option<T>,
    {
        let current = self.get(row, col)?;
        let value = combine(current).ok_or(MatrixError::Overflow { op, row, col })?;
        self.entries.insert((row, col), value);
        Ok(())
    }

    /// Removes every stored zero in one pass, keeping the order of the rest
    pub(crate) fn drop_zeros(&mut self) {
        self.entries.retain(|_, value| !value.is_zero());
    }
}

/// Entrywise equality: same dimensions and same stored values.
/// Enumeration order is not compared.
impl<T: PrimInt> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.entries == other.entries
    }
}

impl<T: PrimInt> Eq for SparseMatrix<T> {}

impl<T: PrimInt + fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_entries = 8.min(self.nnz());
        if max_entries > 0 {
            write!(f, "  entries: ")?;
            for (row, col, value) in self.entries().take(max_entries) {
                write!(f, "({}, {}, {:?}) ", row, col, value)?;
            }
            if self.nnz() > max_entries {
                write!(f, "... ({} more)", self.nnz() - max_entries)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}
