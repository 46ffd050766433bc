//! Basic tests for matrix storage and element access

use intmat::{MatrixError, SparseMatrix};

#[test]
fn test_matrix_creation() {
    let matrix = SparseMatrix::<i64>::new(3, 5).unwrap();

    assert_eq!(matrix.n_rows(), 3);
    assert_eq!(matrix.n_cols(), 5);
    assert_eq!(matrix.dimensions(), (3, 5));
    assert_eq!(matrix.nnz(), 0);

    // Every element of a fresh matrix reads as zero
    for row in 0..3 {
        for col in 0..5 {
            assert_eq!(matrix.get(row, col).unwrap(), 0);
        }
    }
}

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(
        SparseMatrix::<i64>::new(0, 0),
        Err(MatrixError::InvalidDimension(_))
    ));
    assert!(matches!(
        SparseMatrix::<i64>::identity(0),
        Err(MatrixError::InvalidDimension(_))
    ));
}

#[test]
fn test_get_after_set() {
    let mut matrix = SparseMatrix::<i64>::new(4, 4).unwrap();

    matrix.set(3, 0, -12).unwrap();
    assert_eq!(matrix.get(3, 0).unwrap(), -12);

    matrix.set(3, 0, 0).unwrap();
    assert_eq!(matrix.get(3, 0).unwrap(), 0);
    assert!(matrix.entries().all(|(row, col, _)| (row, col) != (3, 0)));
}

#[test]
fn test_bounds_on_last_row_and_column() {
    let mut matrix = SparseMatrix::<i64>::new(2, 3).unwrap();

    // The last valid coordinate is accepted
    matrix.set(1, 2, 1).unwrap();

    let err = matrix.get(2, 0).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::OutOfBounds { row: 2, col: 0, n_rows: 2, n_cols: 3 }
    ));

    let err = matrix.set(0, 3, 1).unwrap_err();
    assert!(matches!(err, MatrixError::OutOfBounds { row: 0, col: 3, .. }));

    let err = matrix.get(usize::MAX, usize::MAX).unwrap_err();
    assert!(matches!(err, MatrixError::OutOfBounds { .. }));

    assert_eq!(matrix.nnz(), 1);
}

#[test]
fn test_entries_enumeration() {
    let mut matrix = SparseMatrix::<i64>::new(3, 3).unwrap();
    matrix.set(1, 2, 4).unwrap();
    matrix.set(0, 0, 1).unwrap();
    matrix.set(2, 1, 9).unwrap();

    let entries: Vec<_> = matrix.entries().collect();
    assert_eq!(entries, vec![(1, 2, 4), (0, 0, 1), (2, 1, 9)]);

    // Enumeration is stable across calls
    let again: Vec<_> = matrix.entries().collect();
    assert_eq!(entries, again);
}

#[test]
fn test_identity_matrix() {
    let identity = SparseMatrix::<i64>::identity(4).unwrap();

    assert_eq!(identity.dimensions(), (4, 4));
    assert_eq!(identity.nnz(), 4);

    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1 } else { 0 };
            assert_eq!(identity.get(i, j).unwrap(), expected);
        }
    }
}

#[test]
fn test_debug_output() {
    let matrix = SparseMatrix::<i64>::from_triplets(2, 2, vec![(0, 1, 3)]).unwrap();
    let text = format!("{:?}", matrix);

    assert!(text.contains("dimensions: 2 × 2"));
    assert!(text.contains("nnz: 1"));
    assert!(text.contains("(0, 1, 3)"));
}
