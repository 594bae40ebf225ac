//! Lazy byte stream over a binary column payload.

use crate::record::{check_generation, storage_fault};
use bytes::{Bytes, BytesMut};
use tessera_buffer::SharedArena;
use tessera_common::Result;

/// Sequential reader over one binary payload stored in the arena.
///
/// The payload is not copied up front. Each read locks the arena, checks
/// that the record is still current and copies the next bytes out,
/// following page boundaries as needed. The total length is known before
/// any byte is consumed.
pub struct BinaryStream {
    arena: SharedArena,
    /// Logical offset of the first payload byte.
    start: u64,
    /// Payload length in bytes.
    len: usize,
    /// Bytes consumed so far.
    pos: usize,
    /// Arena generation the payload was located under.
    generation: u64,
    /// Owning record offset and column, for error reporting.
    record_offset: u64,
    column: usize,
}

impl BinaryStream {
    pub(crate) fn new(
        arena: SharedArena,
        start: u64,
        len: usize,
        generation: u64,
        record_offset: u64,
        column: usize,
    ) -> Self {
        Self {
            arena,
            start,
            len,
            pos: 0,
            generation,
            record_offset,
            column,
        }
    }

    /// Returns the total payload length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for a zero-length payload.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of bytes not yet read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.len - self.pos
    }

    /// Reads the next byte, or None once the payload is exhausted.
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.fill(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    /// Copies up to `dst.len()` of the next bytes into `dst`.
    ///
    /// Returns the number of bytes copied, 0 at end of stream.
    pub fn fill(&mut self, dst: &mut [u8]) -> Result<usize> {
        let n = dst.len().min(self.remaining());
        if n == 0 {
            return Ok(0);
        }

        let arena = self.arena.read();
        check_generation(&arena, self.record_offset, self.generation)?;
        arena
            .read_into(self.start + self.pos as u64, &mut dst[..n])
            .map_err(|e| storage_fault(e, self.record_offset, self.column))?;
        self.pos += n;
        Ok(n)
    }

    /// Copies the whole payload, regardless of how much has been read.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::zeroed(self.len);
        if self.len > 0 {
            let arena = self.arena.read();
            check_generation(&arena, self.record_offset, self.generation)?;
            arena
                .read_into(self.start, &mut buf)
                .map_err(|e| storage_fault(e, self.record_offset, self.column))?;
        }
        Ok(buf.freeze())
    }
}

impl std::io::Read for BinaryStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.fill(buf).map_err(std::io::Error::other)
    }
}

impl std::fmt::Debug for BinaryStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryStream")
            .field("start", &self.start)
            .field("len", &self.len)
            .field("pos", &self.pos)
            .field("column", &self.column)
            .finish()
    }
}
