//! Error types for Tessera.

use crate::types::ColumnType;
use thiserror::Error;

/// Result type alias using TesseraError.
pub type Result<T> = std::result::Result<T, TesseraError>;

/// Broad classification of a [`TesseraError`].
///
/// Callers use the class to decide between retrying an operation and
/// fixing the code that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Invalid construction parameters. Raised immediately, never retried.
    Configuration,
    /// Memory could not be obtained for a new page.
    Resource,
    /// The caller misused the interface (bad index, wrong accessor, stale offset).
    Contract,
    /// Stored bytes are truncated or do not decode.
    Storage,
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorClass::Configuration => "configuration",
            ErrorClass::Resource => "resource",
            ErrorClass::Contract => "contract",
            ErrorClass::Storage => "storage",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur in Tessera operations.
#[derive(Debug, Error)]
pub enum TesseraError {
    // Configuration errors
    #[error("Invalid page size: {page_size}")]
    InvalidPageSize { page_size: usize },

    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter { name: String, value: String },

    // Resource errors
    #[error("Page allocation failed: page {page_index} ({page_size} bytes)")]
    PageAllocationFailed { page_index: usize, page_size: usize },

    #[error("Arena page limit exceeded: {requested} pages requested, limit {limit}")]
    ArenaLimitExceeded { requested: usize, limit: usize },

    // Contract errors
    #[error("Arena already released")]
    ArenaReleased,

    #[error("Stale record at offset {offset}: arena generation {expected}, now {actual}")]
    StaleRecord {
        offset: u64,
        expected: u64,
        actual: u64,
    },

    #[error("Unwritten range: offset {offset}, length {len}, written {written}")]
    UnwrittenRange { offset: u64, len: usize, written: u64 },

    #[error("Column index {index} out of range (column count {count})")]
    ColumnOutOfRange { index: usize, count: usize },

    #[error("Type mismatch on column {column}: expected {expected}, got {actual}")]
    TypeMismatch {
        column: usize,
        expected: ColumnType,
        actual: ColumnType,
    },

    #[error("Record not positioned, call init first")]
    NotPositioned,

    #[error("Payload too large on column {column}: {len} bytes")]
    PayloadTooLarge { column: usize, len: usize },

    // Storage errors
    #[error("Record truncated at offset {offset}: column {column} reads past written data")]
    RecordTruncated { offset: u64, column: usize },

    #[error("Corrupt length prefix at offset {offset}: {length}")]
    CorruptLengthPrefix { offset: u64, length: i32 },

    #[error("Invalid UTF-8 in column {column} at offset {offset}")]
    InvalidUtf8 { offset: u64, column: usize },
}

impl TesseraError {
    /// Returns the class this error belongs to.
    pub fn class(&self) -> ErrorClass {
        match self {
            TesseraError::InvalidPageSize { .. }
            | TesseraError::InvalidParameter { .. } => ErrorClass::Configuration,

            TesseraError::PageAllocationFailed { .. }
            | TesseraError::ArenaLimitExceeded { .. } => ErrorClass::Resource,

            TesseraError::ArenaReleased
            | TesseraError::StaleRecord { .. }
            | TesseraError::UnwrittenRange { .. }
            | TesseraError::ColumnOutOfRange { .. }
            | TesseraError::TypeMismatch { .. }
            | TesseraError::NotPositioned
            | TesseraError::PayloadTooLarge { .. } => ErrorClass::Contract,

            TesseraError::RecordTruncated { .. }
            | TesseraError::CorruptLengthPrefix { .. }
            | TesseraError::InvalidUtf8 { .. } => ErrorClass::Storage,
        }
    }

    /// Returns true if the error was caused by misuse of the API.
    pub fn is_contract_violation(&self) -> bool {
        self.class() == ErrorClass::Contract
    }

    /// Returns true if retrying the operation could succeed.
    ///
    /// Only resource exhaustion qualifies. Corrupt data stays corrupt.
    pub fn is_retryable(&self) -> bool {
        self.class() == ErrorClass::Resource
    }
}
