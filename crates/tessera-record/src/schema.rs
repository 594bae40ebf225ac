//! Ordered column schema for records.

use std::sync::Arc;
use tessera_common::{ColumnType, Result, TesseraError};

/// Name and type of a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name. Not used by the codec itself.
    pub name: String,
    /// Column type.
    pub column_type: ColumnType,
}

impl ColumnMeta {
    /// Creates a new column descriptor.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

struct SchemaInner {
    columns: Vec<ColumnMeta>,
    /// Index of the first variable-length column, or the column count.
    first_variable: usize,
    /// Record-relative start of every column up to and including `first_variable`.
    static_starts: Vec<u64>,
}

/// Immutable, ordered list of columns.
///
/// Column order defines both the encoding order inside a record and the
/// index used by every accessor. Cloning is cheap and shares the columns.
///
/// The schema also precomputes the start offset of every column that sits
/// before the first variable-length column. Those columns are addressed by
/// constant offset and never require walking a record.
#[derive(Clone)]
pub struct RecordSchema {
    inner: Arc<SchemaInner>,
}

impl RecordSchema {
    /// Creates a schema from an ordered list of columns.
    pub fn new(columns: Vec<ColumnMeta>) -> Self {
        let first_variable = columns
            .iter()
            .position(|c| c.column_type.is_variable_length())
            .unwrap_or(columns.len());

        let mut static_starts = Vec::with_capacity(first_variable + 1);
        let mut offset = 0u64;
        static_starts.push(offset);
        for column in &columns[..first_variable] {
            // Prefix columns are fixed-width by construction.
            offset += column.column_type.fixed_size().unwrap_or(0) as u64;
            static_starts.push(offset);
        }

        Self {
            inner: Arc::new(SchemaInner {
                columns,
                first_variable,
                static_starts,
            }),
        }
    }

    /// Returns a builder for fluent construction.
    pub fn builder() -> RecordSchemaBuilder {
        RecordSchemaBuilder::default()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.inner.columns.len()
    }

    /// Returns the column at `index`.
    pub fn column(&self, index: usize) -> Result<&ColumnMeta> {
        self.inner
            .columns
            .get(index)
            .ok_or(TesseraError::ColumnOutOfRange {
                index,
                count: self.column_count(),
            })
    }

    /// Returns the type of the column at `index`.
    #[inline]
    pub fn column_type(&self, index: usize) -> Result<ColumnType> {
        self.column(index).map(|c| c.column_type)
    }

    /// Returns the index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.inner.columns.iter().position(|c| c.name == name)
    }

    /// Iterates over the columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.inner.columns.iter()
    }

    /// Returns true if any column is variable-length.
    pub fn has_variable_length(&self) -> bool {
        self.inner.first_variable < self.column_count()
    }

    /// Returns the number of leading columns whose start offsets are static.
    ///
    /// Columns `0..=static_prefix()` have a start offset known without
    /// looking at record data.
    #[inline]
    pub fn static_prefix(&self) -> usize {
        self.inner.first_variable
    }

    /// Returns the record-relative start of a column in the static prefix.
    #[inline]
    pub(crate) fn static_start(&self, index: usize) -> u64 {
        self.inner.static_starts[index]
    }

    /// Returns the encoded size of a record, if every column is fixed-width.
    pub fn fixed_record_size(&self) -> Option<u64> {
        if self.has_variable_length() {
            None
        } else {
            Some(self.inner.static_starts[self.inner.first_variable])
        }
    }
}

impl std::fmt::Debug for RecordSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.inner.columns.iter()).finish()
    }
}

impl FromIterator<ColumnMeta> for RecordSchema {
    fn from_iter<I: IntoIterator<Item = ColumnMeta>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Builder for [`RecordSchema`].
#[derive(Debug, Default)]
pub struct RecordSchemaBuilder {
    columns: Vec<ColumnMeta>,
}

impl RecordSchemaBuilder {
    /// Appends a column.
    pub fn column(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        self.columns.push(ColumnMeta::new(name, column_type));
        self
    }

    /// Finishes the schema.
    pub fn build(self) -> RecordSchema {
        RecordSchema::new(self.columns)
    }
}
