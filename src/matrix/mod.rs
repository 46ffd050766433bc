// Matrix storage and operations

pub mod config;
pub mod multiply;
pub mod ops;
pub mod store;

pub use config::{CodecConfig, EntryOrder};
pub use multiply::multiply;
pub use ops::{add, subtract, transpose};
pub use store::{Coord, SparseMatrix};
