//! Line-oriented text format for sparse matrices
//!
//! # Format
//!
//! ```text
//! rows=<positive integer>
//! cols=<positive integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Indices are zero-based. When parsing:
//! - a missing, non-numeric or non-positive dimension is an error
//! - lines that do not contain an entry `(row, col, value)` are ignored
//! - entries with value zero are skipped
//! - entries outside the declared dimensions are skipped with a [`ParseWarning`]
//! - a later entry for the same coordinate replaces an earlier one
//!
//! # Examples
//!
//! ```
//! use intmat::codec;
//!
//! let text = "rows=2\ncols=2\n(0, 0, 5)\n(0, 1, -3)\n(1, 1, 0)\n(5, 5, 9)";
//! let outcome = codec::parse::<i64>(text).unwrap();
//!
//! assert_eq!(outcome.matrix.nnz(), 2);
//! assert_eq!(outcome.warnings.len(), 1);
//! assert_eq!(
//!     codec::serialize(&outcome.matrix),
//!     "rows=2\ncols=2\n(0, 0, 5)\n(0, 1, -3)"
//! );
//! ```

use num_traits::PrimInt;
use regex::Regex;
use std::fmt::{self, Display, Write};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{MatrixError, Result};
use crate::matrix::{CodecConfig, EntryOrder, SparseMatrix};

// ASCII digits only; `\d` would also accept other Unicode decimal digits
const ENTRY_PATTERN: &str = r"\(([0-9]+),\s*([0-9]+),\s*(-?[0-9]+)\)";

fn entry_regex() -> &'static Regex {
    static ENTRY: OnceLock<Regex> = OnceLock::new();
    ENTRY.get_or_init(|| Regex::new(ENTRY_PATTERN).expect("entry pattern is a valid regex"))
}

/// A non-fatal problem with a single entry line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// The coordinate lies outside the declared dimensions
    OutOfBounds {
        line: usize,
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },
    /// An index or value does not fit the target integer type
    Unrepresentable { line: usize, text: String },
}

impl ParseWarning {
    /// One-based line number of the offending entry
    pub fn line(&self) -> usize {
        match self {
            ParseWarning::OutOfBounds { line, .. } => *line,
            ParseWarning::Unrepresentable { line, .. } => *line,
        }
    }
}

impl Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::OutOfBounds { line, row, col, n_rows, n_cols } => write!(
                f,
                "line {}: skipping element at position ({},{}) as it is out of bounds for matrix of size {}x{}",
                line, row, col, n_rows, n_cols
            ),
            ParseWarning::Unrepresentable { line, text } => {
                write!(f, "line {}: skipping element {} as it does not fit the value type", line, text)
            }
        }
    }
}

/// A parsed matrix together with the diagnostics collected along the way
#[derive(Debug, Clone)]
pub struct ParseOutcome<T: PrimInt = i64> {
    pub matrix: SparseMatrix<T>,
    pub warnings: Vec<ParseWarning>,
}

impl<T: PrimInt> ParseOutcome<T> {
    /// Discards the warnings
    pub fn into_matrix(self) -> SparseMatrix<T> {
        self.matrix
    }
}

/// Parses a `key=<positive integer>` header line
fn parse_dimension(line: Option<&str>, key: &str) -> Result<usize> {
    let line = line.ok_or_else(|| MatrixError::invalid_dimension(format!("missing `{}=` line", key)))?;

    let value = line
        .split_once('=')
        .filter(|(name, _)| name.trim() == key)
        .map(|(_, value)| value.trim())
        .ok_or_else(|| MatrixError::invalid_dimension(format!("expected `{}=<n>`, found `{}`", key, line)))?;

    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(MatrixError::invalid_dimension(format!(
            "{} must be a positive integer, found `{}`",
            key, value
        ))),
    }
}

fn record(warnings: &mut Vec<ParseWarning>, config: &CodecConfig, warning: ParseWarning) {
    if config.log_warnings {
        log::warn!("{}", warning);
    }
    warnings.push(warning);
}

/// Parses matrix text with the default [`CodecConfig`]
pub fn parse<T>(text: &str) -> Result<ParseOutcome<T>>
where
    T: PrimInt + FromStr,
{
    parse_with(text, &CodecConfig::default())
}

/// Parses matrix text
///
/// # Errors
///
/// Returns [`MatrixError::InvalidDimension`] if the `rows=` or `cols=` header is
/// missing, non-numeric or not strictly positive. Problems with entry lines
/// never fail the parse.
pub fn parse_with<T>(text: &str, config: &CodecConfig) -> Result<ParseOutcome<T>>
where
    T: PrimInt + FromStr,
{
    let mut lines = text.trim().lines().map(str::trim);

    let n_rows = parse_dimension(lines.next(), "rows")?;
    let n_cols = parse_dimension(lines.next(), "cols")?;

    let mut matrix = SparseMatrix::new(n_rows, n_cols)?;
    let mut warnings = Vec::new();

    // Entry lines start at line 3
    for (line_no, line) in (3..).zip(lines) {
        let Some(caps) = entry_regex().captures(line) else {
            continue;
        };

        let unrepresentable = || ParseWarning::Unrepresentable { line: line_no, text: caps[0].to_string() };

        let Ok(value) = caps[3].parse::<T>() else {
            record(&mut warnings, config, unrepresentable());
            continue;
        };
        if value.is_zero() {
            continue;
        }

        let (Ok(row), Ok(col)) = (caps[1].parse::<usize>(), caps[2].parse::<usize>()) else {
            record(&mut warnings, config, unrepresentable());
            continue;
        };

        if row >= n_rows || col >= n_cols {
            record(&mut warnings, config, ParseWarning::OutOfBounds { line: line_no, row, col, n_rows, n_cols });
            continue;
        }

        matrix.set(row, col, value)?;
    }

    log::debug!(
        "parsed {}x{} matrix, nnz {}, {} warnings",
        n_rows,
        n_cols,
        matrix.nnz(),
        warnings.len()
    );
    Ok(ParseOutcome { matrix, warnings })
}

/// Serializes a matrix in insertion order
pub fn serialize<T>(matrix: &SparseMatrix<T>) -> String
where
    T: PrimInt + Display,
{
    serialize_with(matrix, &CodecConfig::default())
}

/// Serializes a matrix, enumerating entries in `config.entry_order`
///
/// The output has no trailing newline.
pub fn serialize_with<T>(matrix: &SparseMatrix<T>, config: &CodecConfig) -> String
where
    T: PrimInt + Display,
{
    let mut out = String::with_capacity(24 + matrix.nnz() * 16);
    // Writing to a String cannot fail
    let _ = write!(out, "rows={}\ncols={}", matrix.n_rows(), matrix.n_cols());

    match config.entry_order {
        EntryOrder::Insertion => {
            for (row, col, value) in matrix.entries() {
                let _ = write!(out, "\n({}, {}, {})", row, col, value);
            }
        }
        EntryOrder::RowMajor => {
            for (row, col, value) in matrix.sorted_entries() {
                let _ = write!(out, "\n({}, {}, {})", row, col, value);
            }
        }
    }

    out
}

impl<T: PrimInt + Display> Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

/// Parses matrix text; entry warnings are logged and dropped
impl<T: PrimInt + FromStr> FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(ParseOutcome::into_matrix)
    }
}
