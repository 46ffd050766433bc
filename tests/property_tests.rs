//! Property-based tests for the algebraic laws of the matrix operations
//!
//! Values are kept small so that no intermediate result overflows `i64`.

use intmat::{add, codec, multiply, subtract, transpose, CodecConfig, SparseMatrix};
use proptest::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

type Triplets = Vec<(usize, usize, i64)>;

/// Random triplets inside `n_rows x n_cols`, zeros and duplicates included
fn triplets_strategy(n_rows: usize, n_cols: usize, max_nnz: usize) -> impl Strategy<Value = Triplets> {
    prop::collection::vec((0..n_rows, 0..n_cols, -50i64..50), 0..=max_nnz)
}

fn build(n_rows: usize, n_cols: usize, triplets: Triplets) -> SparseMatrix<i64> {
    SparseMatrix::from_triplets(n_rows, n_cols, triplets).unwrap()
}

/// Two matrices of the same random shape
fn same_shape_pair() -> impl Strategy<Value = (SparseMatrix<i64>, SparseMatrix<i64>)> {
    (1usize..8, 1usize..8).prop_flat_map(|(r, c)| {
        (triplets_strategy(r, c, 20), triplets_strategy(r, c, 20))
            .prop_map(move |(ta, tb)| (build(r, c, ta), build(r, c, tb)))
    })
}

/// Three matrices with shapes (m, k), (k, n), (n, p)
fn chain_triple() -> impl Strategy<Value = (SparseMatrix<i64>, SparseMatrix<i64>, SparseMatrix<i64>)> {
    (1usize..6, 1usize..6, 1usize..6, 1usize..6).prop_flat_map(|(m, k, n, p)| {
        (
            triplets_strategy(m, k, 12),
            triplets_strategy(k, n, 12),
            triplets_strategy(n, p, 12),
        )
            .prop_map(move |(ta, tb, tc)| (build(m, k, ta), build(k, n, tb), build(n, p, tc)))
    })
}

fn any_matrix() -> impl Strategy<Value = SparseMatrix<i64>> {
    (1usize..10, 1usize..10)
        .prop_flat_map(|(r, c)| triplets_strategy(r, c, 30).prop_map(move |t| build(r, c, t)))
}

// ============================================================================
// Algebraic Properties
// ============================================================================

proptest! {
    /// Property: A + B == B + A
    #[test]
    fn prop_add_commutes((a, b) in same_shape_pair()) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    /// Property: (A + B) - B == A
    #[test]
    fn prop_subtract_inverts_add((a, b) in same_shape_pair()) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(subtract(&sum, &b).unwrap(), a);
    }

    /// Property: (Aᵀ)ᵀ == A
    #[test]
    fn prop_double_transpose(a in any_matrix()) {
        let t = transpose(&a);
        prop_assert_eq!(t.dimensions(), (a.n_cols(), a.n_rows()));
        prop_assert_eq!(transpose(&t), a);
    }

    /// Property: (AB)C == A(BC)
    #[test]
    fn prop_multiply_associates((a, b, c) in chain_triple()) {
        let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Property: (AB)ᵀ == BᵀAᵀ
    #[test]
    fn prop_transpose_of_product((a, b, _c) in chain_triple()) {
        let left = transpose(&multiply(&a, &b).unwrap());
        let right = multiply(&transpose(&b), &transpose(&a)).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Property: results never store zero
    #[test]
    fn prop_no_stored_zeros((a, b) in same_shape_pair()) {
        let diff = subtract(&a, &b).unwrap();
        let product = multiply(&a, &transpose(&b)).unwrap();
        prop_assert!(diff.entries().all(|(_, _, v)| v != 0));
        prop_assert!(product.entries().all(|(_, _, v)| v != 0));
    }

    /// Property: get after set
    #[test]
    fn prop_get_after_set(
        a in any_matrix(),
        row_frac in 0.0f64..1.0,
        col_frac in 0.0f64..1.0,
        value in -100i64..100,
    ) {
        let mut m = a;
        let row = (row_frac * m.n_rows() as f64) as usize;
        let col = (col_frac * m.n_cols() as f64) as usize;

        m.set(row, col, value).unwrap();
        prop_assert_eq!(m.get(row, col).unwrap(), value);
        prop_assert_eq!(m.contains(row, col), value != 0);
    }

    /// Property: parse(serialize(M)) == M in both entry orders
    #[test]
    fn prop_text_roundtrip(a in any_matrix()) {
        let text = codec::serialize(&a);
        let back = codec::parse::<i64>(&text).unwrap();
        prop_assert!(back.warnings.is_empty());
        prop_assert_eq!(codec::serialize(&back.matrix), text);
        prop_assert_eq!(back.matrix, a.clone());

        let sorted = codec::serialize_with(&a, &CodecConfig::sorted());
        prop_assert_eq!(codec::parse::<i64>(&sorted).unwrap().matrix, a);
    }
}
