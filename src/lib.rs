//! # intmat: sparse integer matrices
//!
//! `intmat` stores integer matrices in which most entries are zero. Only the
//! non-zero entries are kept, in a map keyed by `(row, col)`.
//!
//! ## Overview
//!
//! - **Storage**: [`SparseMatrix`] with bounds-checked `get`/`set`; writing
//!   zero removes an entry, so zero is never stored.
//! - **Operations**: [`add`], [`subtract`], [`multiply`] and [`transpose`]
//!   borrow their operands and return a new matrix.
//! - **Text format**: [`codec::parse`] and [`codec::serialize`] read and write
//!   the `rows=`/`cols=`/`(row, col, value)` format.
//! - **Interop**: conversions to `sprs` and `ndarray` in [`utils`].
//!
//! ## Usage
//!
//! ```
//! use intmat::{codec, multiply};
//!
//! let a = codec::parse::<i64>("rows=1\ncols=2\n(0, 0, 2)\n(0, 1, 3)").unwrap().matrix;
//! let b = codec::parse::<i64>("rows=2\ncols=1\n(0, 0, 4)\n(1, 0, 5)").unwrap().matrix;
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(codec::serialize(&c), "rows=1\ncols=1\n(0, 0, 23)");
//! ```
//!
//! Entries are enumerated in the order they were stored. Use
//! [`CodecConfig::sorted`] to serialize in row-major order instead.

pub mod codec;
pub mod error;
pub mod io;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use codec::{parse, parse_with, serialize, serialize_with, ParseOutcome, ParseWarning};
pub use error::{MatrixError, Result};
pub use matrix::{add, multiply, subtract, transpose};
pub use matrix::{CodecConfig, Coord, EntryOrder, SparseMatrix};
pub use utils::{from_dense, from_sprs, to_dense, to_sprs_csr};

/// Version information for the intmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
