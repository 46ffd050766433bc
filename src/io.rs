//! Reading matrix files and writing operation results to disk

use num_traits::PrimInt;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::codec::{self, ParseOutcome};
use crate::error::Result;
use crate::matrix::{CodecConfig, SparseMatrix};

/// Reads and parses a matrix file
pub fn load_matrix<T, P>(path: P, config: &CodecConfig) -> Result<ParseOutcome<T>>
where
    T: PrimInt + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let outcome = codec::parse_with(&content, config)?;

    log::info!(
        "loaded {}: {}x{}, nnz {}",
        path.display(),
        outcome.matrix.n_rows(),
        outcome.matrix.n_cols(),
        outcome.matrix.nnz()
    );
    Ok(outcome)
}

/// Writes a matrix file containing only the serialized matrix
pub fn save_matrix<T, P>(path: P, matrix: &SparseMatrix<T>, config: &CodecConfig) -> Result<()>
where
    T: PrimInt + Display,
    P: AsRef<Path>,
{
    fs::write(path, codec::serialize_with(matrix, config))?;
    Ok(())
}

/// Path of the result file for `operation` inside `dir`
pub fn result_path(dir: &Path, operation: &str) -> PathBuf {
    dir.join(format!("{}_result.txt", operation))
}

/// Writes `<dir>/<operation>_result.txt`, creating `dir` if needed
///
/// The file holds a `<OPERATION> Result:` title line followed by the
/// serialized matrix.
pub fn write_result<T>(dir: &Path, operation: &str, matrix: &SparseMatrix<T>, config: &CodecConfig) -> Result<PathBuf>
where
    T: PrimInt + Display,
{
    fs::create_dir_all(dir)?;

    let path = result_path(dir, operation);
    let content = format!(
        "{} Result:\n{}",
        operation.to_uppercase(),
        codec::serialize_with(matrix, config)
    );
    fs::write(&path, content)?;

    log::info!("{} result has been written to {}", operation, path.display());
    Ok(path)
}
