//! Configuration for the text codec

/// Order in which non-zero entries are enumerated for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// The order in which coordinates were first stored.
    /// This reproduces existing files byte for byte.
    #[default]
    Insertion,
    /// Ascending by row, then by column
    RowMajor,
}

impl EntryOrder {
    /// Check if this order must sort the stored entries
    pub fn is_sorted(&self) -> bool {
        matches!(self, EntryOrder::RowMajor)
    }
}

/// Options for parsing and serializing matrix text
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Entry order used by the serializer
    pub entry_order: EntryOrder,

    /// Emit a `log::warn!` for every entry skipped because it lies outside
    /// the declared dimensions. Warnings are collected either way.
    pub log_warnings: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            entry_order: EntryOrder::Insertion,
            log_warnings: true,
        }
    }
}

impl CodecConfig {
    /// Configuration producing canonical row-major output
    pub fn sorted() -> Self {
        Self {
            entry_order: EntryOrder::RowMajor,
            ..Self::default()
        }
    }
}
