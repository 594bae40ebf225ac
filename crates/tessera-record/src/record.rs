//! Schema-driven record encoding and lazy decoding over a paged arena.
//!
//! Record layout, columns in schema order with no header or padding:
//!
//! ```text
//! +----------------------+
//! | fixed column         |  1, 2, 4 or 8 bytes, little-endian
//! +----------------------+
//! | length: i32          |  -1 = null, 0 = empty
//! | payload              |  `length` bytes (UTF-8 for strings)
//! +----------------------+
//! | ...                  |
//! +----------------------+
//! ```

use crate::schema::RecordSchema;
use crate::source::{ColumnValue, RecordSource, Row};
use crate::stream::BinaryStream;
use std::sync::Arc;
use tessera_buffer::{PagedArena, Scalar, SharedArena};
use tessera_common::{ColumnType, Result, TesseraError};

/// Size of the length prefix in front of every variable-length value.
pub const LENGTH_PREFIX_SIZE: u64 = 4;

/// Length prefix marking an absent value.
pub const NULL_LENGTH: i32 = -1;

/// Returns an error if `generation` no longer matches the arena.
pub(crate) fn check_generation(arena: &PagedArena, offset: u64, generation: u64) -> Result<()> {
    if arena.is_released() {
        return Err(TesseraError::ArenaReleased);
    }
    if arena.generation() != generation {
        return Err(TesseraError::StaleRecord {
            offset,
            expected: generation,
            actual: arena.generation(),
        });
    }
    Ok(())
}

/// Reports an arena read past written data as a truncated record when the
/// record itself starts inside written data.
///
/// A record offset at or beyond the write cursor was never issued by
/// `write`, so the read stays an [`TesseraError::UnwrittenRange`].
pub(crate) fn storage_fault(err: TesseraError, record_offset: u64, column: usize) -> TesseraError {
    match err {
        TesseraError::UnwrittenRange { written, .. } if record_offset < written => {
            TesseraError::RecordTruncated {
                offset: record_offset,
                column,
            }
        }
        other => other,
    }
}

/// Adds `by` to the offset `base`. Overflow is reported as a read past
/// written data.
fn advance(arena: &PagedArena, base: u64, by: u64) -> Result<u64> {
    base.checked_add(by).ok_or(TesseraError::UnwrittenRange {
        offset: base,
        len: usize::try_from(by).unwrap_or(usize::MAX),
        written: arena.position(),
    })
}

/// Decode state while bound to a record.
#[derive(Debug, Clone, Copy)]
struct Positioned {
    /// Logical offset of the record.
    offset: u64,
    /// Arena generation at the time of `init`.
    generation: u64,
    /// Highest column whose start offset is known.
    resolved: usize,
}

/// Encoder and repositionable decoder for records of one schema.
///
/// `write` appends a record to the arena and returns its offset. `init`
/// binds the instance to a previously written record, after which the
/// typed getters read individual columns without decoding the rest.
///
/// Column start offsets are found lazily. Columns before the first
/// variable-length column sit at constant offsets taken from the schema.
/// Beyond that, the decoder walks the record column by column, reading each
/// length prefix it passes, and caches every start offset it discovers.
/// The cache is a high-water mark: reading columns in increasing order
/// walks each column at most once per `init`. `init` clears the cache.
///
/// An instance is single-threaded. Several instances may share one arena
/// and decode concurrently as long as nothing writes at the same time.
pub struct DirectRecord {
    schema: RecordSchema,
    arena: SharedArena,
    /// Encoding buffer reused across writes.
    scratch: Vec<u8>,
    position: Option<Positioned>,
    /// Record-relative start of each column, valid beyond the static prefix
    /// up to `Positioned::resolved`. Slot `column_count` holds the record end.
    starts: Vec<u64>,
}

impl DirectRecord {
    /// Creates a codec for `schema` storing records in `arena`.
    pub fn new(schema: RecordSchema, arena: SharedArena) -> Self {
        let starts = vec![0u64; schema.column_count() + 1];
        Self {
            schema,
            arena,
            scratch: Vec::new(),
            position: None,
            starts,
        }
    }

    /// Returns the schema.
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Returns the arena handle.
    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    /// Returns the offset of the record currently bound, if any.
    pub fn offset(&self) -> Option<u64> {
        self.position.map(|p| p.offset)
    }

    /// Returns the highest column index whose start offset is known for the
    /// bound record, or None when not positioned.
    pub fn resolved_columns(&self) -> Option<usize> {
        self.position.map(|p| p.resolved)
    }

    /// Encodes `source` and appends it to the arena.
    ///
    /// Returns the offset of the record. The record is assembled in memory
    /// and appended with a single arena write, so a failed write leaves no
    /// partial record behind. Does not affect the bound record.
    pub fn write<S: RecordSource + ?Sized>(&mut self, source: &S) -> Result<u64> {
        self.scratch.clear();
        for (column, meta) in self.schema.columns().enumerate() {
            match meta.column_type {
                ColumnType::Bool => put(&mut self.scratch, source.get_bool(column)?),
                ColumnType::Byte => put(&mut self.scratch, source.get_byte(column)?),
                ColumnType::Short => put(&mut self.scratch, source.get_short(column)?),
                ColumnType::Int => put(&mut self.scratch, source.get_int(column)?),
                ColumnType::Long => put(&mut self.scratch, source.get_long(column)?),
                ColumnType::Float => put(&mut self.scratch, source.get_float(column)?),
                ColumnType::Double => put(&mut self.scratch, source.get_double(column)?),
                ColumnType::Date => put(&mut self.scratch, source.get_date(column)?),
                ColumnType::String => {
                    let value = source.get_str(column)?.map(str::as_bytes);
                    put_variable(&mut self.scratch, column, value)?
                }
                ColumnType::Binary => {
                    put_variable(&mut self.scratch, column, source.get_bin(column)?)?
                }
            }
        }

        let offset = self.arena.write().write_bytes(&self.scratch)?;
        tracing::trace!(offset, len = self.scratch.len(), "Record written");
        Ok(offset)
    }

    /// Binds the instance to the record at `offset`.
    ///
    /// Nothing is read or validated here. Problems with the offset surface
    /// from the getters.
    pub fn init(&mut self, offset: u64) {
        let generation = self.arena.read().generation();
        self.position = Some(Positioned {
            offset,
            generation,
            resolved: self.schema.static_prefix(),
        });
    }

    #[inline]
    fn check_type(&self, column: usize, expected: ColumnType) -> Result<()> {
        let actual = self.schema.column_type(column)?;
        if actual != expected {
            return Err(TesseraError::TypeMismatch {
                column,
                expected,
                actual,
            });
        }
        Ok(())
    }

    #[inline]
    fn start_of(&self, column: usize) -> u64 {
        if column <= self.schema.static_prefix() {
            self.schema.static_start(column)
        } else {
            self.starts[column]
        }
    }

    /// Returns the bound record and the logical offset where `column` starts,
    /// walking and caching start offsets as needed.
    ///
    /// `column` may equal the column count, which locates the record end.
    fn locate(&mut self, arena: &PagedArena, column: usize) -> Result<(Positioned, u64)> {
        let mut pos = self.position.ok_or(TesseraError::NotPositioned)?;
        check_generation(arena, pos.offset, pos.generation)?;

        while pos.resolved < column {
            let current = pos.resolved;
            let start = self.start_of(current);
            let width = match self.schema.column_type(current)?.fixed_size() {
                Some(size) => size as u64,
                None => {
                    let at = advance(arena, pos.offset, start)
                        .map_err(|e| storage_fault(e, pos.offset, current))?;
                    let len = read_length(arena, at, pos.offset, current)?;
                    LENGTH_PREFIX_SIZE + len.unwrap_or(0) as u64
                }
            };
            self.starts[current + 1] = advance(arena, start, width)
                .map_err(|e| storage_fault(e, pos.offset, current))?;
            pos.resolved = current + 1;
            self.position = Some(pos);
        }

        let at = advance(arena, pos.offset, self.start_of(column))
            .map_err(|e| storage_fault(e, pos.offset, column))?;
        Ok((pos, at))
    }

    fn get_fixed<T: Scalar>(&mut self, column: usize, expected: ColumnType) -> Result<T> {
        self.check_type(column, expected)?;
        let shared = Arc::clone(&self.arena);
        let arena = shared.read();
        let (pos, at) = self.locate(&arena, column)?;
        arena
            .read_scalar(at)
            .map_err(|e| storage_fault(e, pos.offset, column))
    }

    /// Locates a variable-length column and reads its length prefix.
    ///
    /// Returns the payload offset and length, None for a null value.
    fn locate_variable(
        &mut self,
        arena: &PagedArena,
        column: usize,
    ) -> Result<(Positioned, Option<(u64, usize)>)> {
        let (pos, at) = self.locate(arena, column)?;
        let payload = read_length(arena, at, pos.offset, column)?
            .map(|len| (at + LENGTH_PREFIX_SIZE, len as usize));
        Ok((pos, payload))
    }

    pub fn get_bool(&mut self, column: usize) -> Result<bool> {
        self.get_fixed(column, ColumnType::Bool)
    }

    pub fn get_byte(&mut self, column: usize) -> Result<u8> {
        self.get_fixed(column, ColumnType::Byte)
    }

    pub fn get_short(&mut self, column: usize) -> Result<i16> {
        self.get_fixed(column, ColumnType::Short)
    }

    pub fn get_int(&mut self, column: usize) -> Result<i32> {
        self.get_fixed(column, ColumnType::Int)
    }

    pub fn get_long(&mut self, column: usize) -> Result<i64> {
        self.get_fixed(column, ColumnType::Long)
    }

    pub fn get_float(&mut self, column: usize) -> Result<f32> {
        self.get_fixed(column, ColumnType::Float)
    }

    pub fn get_double(&mut self, column: usize) -> Result<f64> {
        self.get_fixed(column, ColumnType::Double)
    }

    /// Reads a date column as milliseconds since the Unix epoch.
    pub fn get_date(&mut self, column: usize) -> Result<i64> {
        self.get_fixed(column, ColumnType::Date)
    }

    /// Reads a string column. Returns None for a null value and
    /// `Some("")` for an empty one.
    pub fn get_str(&mut self, column: usize) -> Result<Option<String>> {
        self.check_type(column, ColumnType::String)?;
        let shared = Arc::clone(&self.arena);
        let arena = shared.read();
        let (pos, payload) = self.locate_variable(&arena, column)?;
        let Some((start, len)) = payload else {
            return Ok(None);
        };

        let bytes = arena
            .read_bytes(start, len)
            .map_err(|e| storage_fault(e, pos.offset, column))?;
        let value = std::str::from_utf8(&bytes).map_err(|_| TesseraError::InvalidUtf8 {
            offset: pos.offset,
            column,
        })?;
        Ok(Some(value.to_owned()))
    }

    /// Returns a lazy stream over a binary column, or None for a null value.
    ///
    /// The payload bounds are checked here; the bytes are copied only as
    /// the stream is read.
    pub fn get_bin(&mut self, column: usize) -> Result<Option<BinaryStream>> {
        self.check_type(column, ColumnType::Binary)?;
        let shared = Arc::clone(&self.arena);
        let arena = shared.read();
        let (pos, payload) = self.locate_variable(&arena, column)?;
        let Some((start, len)) = payload else {
            return Ok(None);
        };

        let end = advance(&arena, start, len as u64)
            .map_err(|e| storage_fault(e, pos.offset, column))?;
        if end > arena.position() {
            return Err(TesseraError::RecordTruncated {
                offset: pos.offset,
                column,
            });
        }
        Ok(Some(BinaryStream::new(
            Arc::clone(&self.arena),
            start,
            len,
            pos.generation,
            pos.offset,
            column,
        )))
    }

    /// Reads any column as a tagged value.
    pub fn get_value(&mut self, column: usize) -> Result<ColumnValue> {
        let value = match self.schema.column_type(column)? {
            ColumnType::Bool => ColumnValue::Bool(self.get_bool(column)?),
            ColumnType::Byte => ColumnValue::Byte(self.get_byte(column)?),
            ColumnType::Short => ColumnValue::Short(self.get_short(column)?),
            ColumnType::Int => ColumnValue::Int(self.get_int(column)?),
            ColumnType::Long => ColumnValue::Long(self.get_long(column)?),
            ColumnType::Float => ColumnValue::Float(self.get_float(column)?),
            ColumnType::Double => ColumnValue::Double(self.get_double(column)?),
            ColumnType::Date => ColumnValue::Date(self.get_date(column)?),
            ColumnType::String => ColumnValue::String(self.get_str(column)?),
            ColumnType::Binary => ColumnValue::Binary(
                self.get_bin(column)?
                    .map(|stream| stream.to_bytes())
                    .transpose()?,
            ),
        };
        Ok(value)
    }

    /// Decodes every column of the bound record.
    pub fn read_row(&mut self) -> Result<Row> {
        (0..self.schema.column_count())
            .map(|column| self.get_value(column))
            .collect::<Result<Vec<_>>>()
            .map(Row::new)
    }

    /// Returns the encoded size of the bound record in bytes.
    pub fn record_len(&mut self) -> Result<u64> {
        let shared = Arc::clone(&self.arena);
        let arena = shared.read();
        let count = self.schema.column_count();
        let (pos, end) = self.locate(&arena, count)?;
        Ok(end - pos.offset)
    }
}

impl std::fmt::Debug for DirectRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectRecord")
            .field("columns", &self.schema.column_count())
            .field("position", &self.position)
            .finish()
    }
}

#[inline]
fn put<T: Scalar>(buf: &mut Vec<u8>, value: T) {
    let start = buf.len();
    buf.resize(start + T::SIZE, 0);
    value.encode(&mut buf[start..]);
}

fn put_variable(buf: &mut Vec<u8>, column: usize, value: Option<&[u8]>) -> Result<()> {
    match value {
        None => put(buf, NULL_LENGTH),
        Some(bytes) => {
            let len = i32::try_from(bytes.len()).map_err(|_| TesseraError::PayloadTooLarge {
                column,
                len: bytes.len(),
            })?;
            put(buf, len);
            buf.extend_from_slice(bytes);
        }
    }
    Ok(())
}

/// Reads a length prefix at `at`. Returns None for the null sentinel.
fn read_length(
    arena: &PagedArena,
    at: u64,
    record_offset: u64,
    column: usize,
) -> Result<Option<u32>> {
    let length = arena
        .read_i32(at)
        .map_err(|e| storage_fault(e, record_offset, column))?;
    match length {
        NULL_LENGTH => Ok(None),
        len if len >= 0 => Ok(Some(len as u32)),
        len => Err(TesseraError::CorruptLengthPrefix {
            offset: at,
            length: len,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn mixed_schema() -> RecordSchema {
        RecordSchema::builder()
            .column("id", ColumnType::Long)
            .column("name", ColumnType::String)
            .column("score", ColumnType::Int)
            .column("blob", ColumnType::Binary)
            .column("flag", ColumnType::Bool)
            .build()
    }

    fn mixed_row(name: Option<&str>, blob: Option<&'static [u8]>) -> Row {
        Row::new(vec![
            ColumnValue::Long(42),
            ColumnValue::String(name.map(str::to_string)),
            ColumnValue::Int(-9),
            ColumnValue::Binary(blob.map(Bytes::from_static)),
            ColumnValue::Bool(true),
        ])
    }

    fn codec(page_size: usize) -> DirectRecord {
        let arena = PagedArena::allocate(page_size).unwrap().into_shared();
        DirectRecord::new(mixed_schema(), arena)
    }

    #[test]
    fn test_encoded_layout() {
        let mut record = codec(64);
        let offset = record.write(&mixed_row(Some("ab"), None)).unwrap();
        assert_eq!(offset, 0);

        let bytes = record.arena().read().read_bytes(0, 23).unwrap();
        let mut expected = Vec::new();
        expected.extend_from_slice(&42i64.to_le_bytes());
        expected.extend_from_slice(&2i32.to_le_bytes());
        expected.extend_from_slice(b"ab");
        expected.extend_from_slice(&(-9i32).to_le_bytes());
        expected.extend_from_slice(&(-1i32).to_le_bytes());
        expected.push(1);
        assert_eq!(bytes.as_ref(), &expected[..]);
        assert_eq!(record.arena().read().position(), 23);
    }

    #[test]
    fn test_roundtrip_mixed() {
        let mut record = codec(16);
        let row = mixed_row(Some("hello"), Some(b"\x00\x01\x02"));
        let offset = record.write(&row).unwrap();

        record.init(offset);
        assert_eq!(record.read_row().unwrap(), row);
        assert_eq!(record.record_len().unwrap(), 8 + 9 + 4 + 7 + 1);
    }

    #[test]
    fn test_not_positioned() {
        let mut record = codec(16);
        record.write(&mixed_row(None, None)).unwrap();
        assert!(matches!(record.get_long(0), Err(TesseraError::NotPositioned)));
        assert!(record.offset().is_none());
    }

    #[test]
    fn test_type_mismatch_and_range() {
        let mut record = codec(16);
        let offset = record.write(&mixed_row(None, None)).unwrap();
        record.init(offset);

        let err = record.get_int(1).unwrap_err();
        assert!(matches!(
            err,
            TesseraError::TypeMismatch {
                column: 1,
                expected: ColumnType::Int,
                actual: ColumnType::String,
            }
        ));
        assert!(err.is_contract_violation());

        assert!(matches!(
            record.get_bool(5),
            Err(TesseraError::ColumnOutOfRange { index: 5, count: 5 })
        ));
        assert!(record.get_str(0).is_err());
        assert!(record.get_bin(2).is_err());
    }

    #[test]
    fn test_cache_high_water_mark() {
        let mut record = codec(32);
        let offset = record.write(&mixed_row(Some("xyz"), Some(b"12"))).unwrap();
        record.init(offset);

        // Columns 0 and 1 are in the static prefix.
        assert_eq!(record.resolved_columns(), Some(1));
        assert_eq!(record.get_long(0).unwrap(), 42);
        assert_eq!(record.resolved_columns(), Some(1));

        assert!(record.get_bool(4).unwrap());
        assert_eq!(record.resolved_columns(), Some(4));

        // Earlier columns come straight from the cache.
        assert_eq!(record.get_int(2).unwrap(), -9);
        assert_eq!(record.resolved_columns(), Some(4));

        record.init(offset);
        assert_eq!(record.resolved_columns(), Some(1));
    }

    #[test]
    fn test_null_and_empty_distinct() {
        let mut record = codec(8);
        let null = record.write(&mixed_row(None, None)).unwrap();
        let empty = record.write(&mixed_row(Some(""), Some(b""))).unwrap();

        record.init(null);
        assert_eq!(record.get_str(1).unwrap(), None);
        assert!(record.get_bin(3).unwrap().is_none());

        record.init(empty);
        assert_eq!(record.get_str(1).unwrap(), Some(String::new()));
        let stream = record.get_bin(3).unwrap().unwrap();
        assert!(stream.is_empty());
    }

    #[test]
    fn test_corrupt_length_prefix() {
        let schema = RecordSchema::builder()
            .column("s", ColumnType::String)
            .column("n", ColumnType::Int)
            .build();
        let arena = PagedArena::allocate(16).unwrap().into_shared();
        let offset = {
            let mut a = arena.write();
            let offset = a.write_i32(-5).unwrap();
            a.write_i32(7).unwrap();
            offset
        };

        let mut record = DirectRecord::new(schema, arena);
        record.init(offset);
        let err = record.get_int(1).unwrap_err();
        assert!(matches!(
            err,
            TesseraError::CorruptLengthPrefix {
                offset: 0,
                length: -5
            }
        ));
        assert_eq!(err.class(), tessera_common::ErrorClass::Storage);
        assert!(record.get_str(0).is_err());
    }

    #[test]
    fn test_truncated_record() {
        let schema = RecordSchema::builder()
            .column("s", ColumnType::String)
            .column("b", ColumnType::Binary)
            .build();
        let arena = PagedArena::allocate(16).unwrap().into_shared();
        let offset = {
            let mut a = arena.write();
            let offset = a.write_i32(100).unwrap();
            a.write_bytes(b"short").unwrap();
            offset
        };

        let mut record = DirectRecord::new(schema, arena);
        record.init(offset);
        assert!(matches!(
            record.get_str(0),
            Err(TesseraError::RecordTruncated { offset: 0, column: 0 })
        ));
        assert!(matches!(
            record.get_bin(1),
            Err(TesseraError::RecordTruncated { offset: 0, column: 1 })
        ));
    }

    #[test]
    fn test_offset_past_written_data() {
        let schema = RecordSchema::builder()
            .column("id", ColumnType::Long)
            .column("n", ColumnType::Int)
            .column("s", ColumnType::String)
            .build();
        let arena = PagedArena::allocate(16).unwrap().into_shared();
        let mut record = DirectRecord::new(schema, arena);
        let row = Row::new(vec![
            ColumnValue::Long(1),
            ColumnValue::Int(2),
            ColumnValue::from("x"),
        ]);
        let written = record.write(&row).unwrap();
        assert_eq!(written, 0);

        record.init(1000);
        let err = record.get_int(1).unwrap_err();
        assert!(matches!(
            err,
            TesseraError::UnwrittenRange {
                offset: 1008,
                len: 4,
                written: 17
            }
        ));
        assert!(err.is_contract_violation());
        assert!(matches!(
            record.get_str(2),
            Err(TesseraError::UnwrittenRange { .. })
        ));

        record.init(17);
        assert!(record.get_long(0).unwrap_err().is_contract_violation());
    }

    #[test]
    fn test_offset_overflow() {
        let schema = RecordSchema::builder()
            .column("id", ColumnType::Long)
            .column("n", ColumnType::Int)
            .column("s", ColumnType::String)
            .column("b", ColumnType::Binary)
            .build();
        let arena = PagedArena::allocate(16).unwrap().into_shared();
        let mut record = DirectRecord::new(schema, arena);

        record.init(u64::MAX - 2);
        let err = record.get_int(1).unwrap_err();
        assert!(matches!(err, TesseraError::UnwrittenRange { .. }));
        assert!(err.is_contract_violation());
        assert!(record.get_long(0).unwrap_err().is_contract_violation());
        assert!(record.get_str(2).unwrap_err().is_contract_violation());
        assert!(record.get_bin(3).unwrap_err().is_contract_violation());
        assert!(record.record_len().unwrap_err().is_contract_violation());
    }

    #[test]
    fn test_invalid_utf8() {
        let schema = RecordSchema::builder()
            .column("s", ColumnType::String)
            .build();
        let arena = PagedArena::allocate(16).unwrap().into_shared();
        let offset = {
            let mut a = arena.write();
            let offset = a.write_i32(2).unwrap();
            a.write_bytes(&[0xC3, 0x28]).unwrap();
            offset
        };

        let mut record = DirectRecord::new(schema, arena);
        record.init(offset);
        assert!(matches!(
            record.get_str(0),
            Err(TesseraError::InvalidUtf8 { offset: 0, column: 0 })
        ));
    }

    #[test]
    fn test_stale_after_reset() {
        let mut record = codec(16);
        let offset = record.write(&mixed_row(Some("a"), None)).unwrap();
        record.init(offset);
        assert_eq!(record.get_long(0).unwrap(), 42);

        record.arena().write().reset().unwrap();
        assert!(matches!(
            record.get_long(0),
            Err(TesseraError::StaleRecord { offset: 0, .. })
        ));

        // A fresh init under the new generation works again.
        let offset = record.write(&mixed_row(Some("b"), None)).unwrap();
        record.init(offset);
        assert_eq!(record.get_str(1).unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_released_arena() {
        let mut record = codec(16);
        let offset = record.write(&mixed_row(Some("a"), Some(b"z"))).unwrap();
        record.init(offset);
        let mut stream = record.get_bin(3).unwrap().unwrap();

        record.arena().write().release().unwrap();
        assert!(matches!(record.get_long(0), Err(TesseraError::ArenaReleased)));
        assert!(matches!(stream.read_byte(), Err(TesseraError::ArenaReleased)));
        assert!(matches!(
            record.write(&mixed_row(None, None)),
            Err(TesseraError::ArenaReleased)
        ));
    }

    #[test]
    fn test_source_mismatch_leaves_arena_untouched() {
        let mut record = codec(16);
        let bad = Row::new(vec![ColumnValue::Int(1)]);
        assert!(matches!(
            record.write(&bad),
            Err(TesseraError::TypeMismatch { column: 0, .. })
        ));
        assert_eq!(record.arena().read().position(), 0);
    }

    #[test]
    fn test_write_while_positioned() {
        let mut record = codec(16);
        let first = record.write(&mixed_row(Some("first"), None)).unwrap();
        record.init(first);
        assert_eq!(record.get_str(1).unwrap().as_deref(), Some("first"));

        let second = record.write(&mixed_row(Some("second"), None)).unwrap();
        assert!(second > first);
        assert_eq!(record.offset(), Some(first));
        assert!(record.get_bool(4).unwrap());
    }

    #[test]
    fn test_all_fixed_schema() {
        let schema = RecordSchema::builder()
            .column("f", ColumnType::Float)
            .column("d", ColumnType::Date)
            .column("b", ColumnType::Byte)
            .column("s", ColumnType::Short)
            .build();
        let arena = PagedArena::allocate(3).unwrap().into_shared();
        let mut record = DirectRecord::new(schema.clone(), arena);

        let row = Row::new(vec![
            ColumnValue::Float(-0.25),
            ColumnValue::Date(1_420_070_400_000),
            ColumnValue::Byte(254),
            ColumnValue::Short(i16::MIN),
        ]);
        let a = record.write(&row).unwrap();
        let b = record.write(&row).unwrap();
        assert_eq!(b - a, schema.fixed_record_size().unwrap());

        record.init(b);
        assert_eq!(record.get_short(3).unwrap(), i16::MIN);
        assert_eq!(record.get_date(1).unwrap(), 1_420_070_400_000);
        assert_eq!(record.get_byte(2).unwrap(), 254);
        assert_eq!(record.get_float(0).unwrap(), -0.25);
        assert_eq!(record.resolved_columns(), Some(4));
    }
}
