//! Paged arena manager.

use crate::page::{Page, PageIndex};
use crate::run::{PageRuns, pages_for};
use crate::scalar::{MAX_SCALAR_SIZE, Scalar};
use bytes::{Bytes, BytesMut};
use parking_lot::RwLock;
use std::sync::Arc;
use tessera_common::{ArenaConfig, Result, TesseraError};

/// Arena handle shared between several record codecs.
///
/// Writers take the write lock; readers take the read lock for each access.
pub type SharedArena = Arc<RwLock<PagedArena>>;

/// Growable sequence of fixed-size pages addressed as one linear space.
///
/// Manages:
/// - Lazy page allocation as the write cursor advances
/// - Reads and writes that straddle page boundaries
/// - A generation counter that invalidates offsets on reset and release
///
/// Offsets handed out by [`PagedArena::write_bytes`] stay valid until the
/// arena is reset or released. Bytes are never moved or compacted.
pub struct PagedArena {
    /// Configuration.
    config: ArenaConfig,
    /// Allocated pages, in logical order.
    pages: Vec<Page>,
    /// Write cursor. Bytes below this offset have been written.
    position: u64,
    /// Bumped on every reset and release.
    generation: u64,
    /// True once `release` has run.
    released: bool,
}

impl PagedArena {
    /// Creates an empty arena with the given page size and no page limit.
    ///
    /// No pages are allocated until the first write.
    pub fn allocate(page_size: usize) -> Result<Self> {
        Self::with_config(ArenaConfig::with_page_size(page_size))
    }

    /// Creates an empty arena from a validated configuration.
    pub fn with_config(config: ArenaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pages: Vec::new(),
            position: 0,
            generation: 1,
            released: false,
        })
    }

    /// Wraps the arena for sharing between codecs.
    pub fn into_shared(self) -> SharedArena {
        Arc::new(RwLock::new(self))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Returns the page size in bytes.
    #[inline]
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Returns the number of allocated pages.
    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the write cursor, i.e. the number of bytes written so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the number of bytes backed by allocated pages.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.pages.len() as u64 * self.config.page_size as u64
    }

    /// Returns the current generation.
    ///
    /// Offsets obtained under one generation must not be used under another.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if the arena has been released.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.released
    }

    #[inline]
    fn check_live(&self) -> Result<()> {
        if self.released {
            return Err(TesseraError::ArenaReleased);
        }
        Ok(())
    }

    /// Grows the page set so that `end` bytes are addressable.
    ///
    /// On failure any pages allocated by this call are dropped again, so
    /// the arena is left exactly as it was.
    fn ensure_capacity(&mut self, end: u64) -> Result<()> {
        let page_size = self.config.page_size;
        let needed = pages_for(end, page_size);
        let current = self.pages.len();
        if needed <= current {
            return Ok(());
        }

        if let Some(limit) = self.config.max_pages {
            if needed > limit {
                return Err(TesseraError::ArenaLimitExceeded {
                    requested: needed,
                    limit,
                });
            }
        }

        self.pages
            .try_reserve(needed - current)
            .map_err(|_| TesseraError::PageAllocationFailed {
                page_index: current,
                page_size,
            })?;

        for index in current..needed {
            match Page::allocate(PageIndex(index), page_size) {
                Ok(page) => self.pages.push(page),
                Err(e) => {
                    self.pages.truncate(current);
                    return Err(e);
                }
            }
        }

        tracing::debug!(
            page_size,
            pages = needed,
            added = needed - current,
            "Arena grew"
        );
        Ok(())
    }

    /// Appends `data` at the write cursor and returns the offset it starts at.
    ///
    /// Allocates as many pages as needed, even when `data` is larger than a
    /// page. The cursor is left untouched on failure.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<u64> {
        self.check_live()?;
        let offset = self.position;
        let end = offset + data.len() as u64;
        self.ensure_capacity(end)?;

        for run in PageRuns::new(offset, data.len(), self.config.page_size) {
            self.pages[run.page.0].copy_from(
                run.page_offset,
                &data[run.buf_offset..run.buf_offset + run.len],
            );
        }

        self.position = end;
        Ok(offset)
    }

    /// Appends a fixed-width scalar and returns its offset.
    pub fn write_scalar<T: Scalar>(&mut self, value: T) -> Result<u64> {
        let mut buf = [0u8; MAX_SCALAR_SIZE];
        value.encode(&mut buf[..T::SIZE]);
        self.write_bytes(&buf[..T::SIZE])
    }

    /// Appends a boolean as one byte.
    pub fn write_bool(&mut self, value: bool) -> Result<u64> {
        self.write_scalar(value)
    }

    /// Appends a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<u64> {
        self.write_scalar(value)
    }

    /// Appends a little-endian `i16`.
    pub fn write_i16(&mut self, value: i16) -> Result<u64> {
        self.write_scalar(value)
    }

    /// Appends a little-endian `i32`.
    pub fn write_i32(&mut self, value: i32) -> Result<u64> {
        self.write_scalar(value)
    }

    /// Appends a little-endian `i64`.
    pub fn write_i64(&mut self, value: i64) -> Result<u64> {
        self.write_scalar(value)
    }

    /// Appends an `f32` as its little-endian bit pattern.
    pub fn write_f32(&mut self, value: f32) -> Result<u64> {
        self.write_scalar(value)
    }

    /// Appends an `f64` as its little-endian bit pattern.
    pub fn write_f64(&mut self, value: f64) -> Result<u64> {
        self.write_scalar(value)
    }

    /// Fills `dst` with the bytes starting at `offset`.
    ///
    /// The range may span any number of pages. Reading past the write
    /// cursor is reported as [`TesseraError::UnwrittenRange`].
    pub fn read_into(&self, offset: u64, dst: &mut [u8]) -> Result<()> {
        self.check_live()?;
        let end = offset.checked_add(dst.len() as u64);
        if end.is_none_or(|end| end > self.position) {
            return Err(TesseraError::UnwrittenRange {
                offset,
                len: dst.len(),
                written: self.position,
            });
        }

        for run in PageRuns::new(offset, dst.len(), self.config.page_size) {
            self.pages[run.page.0].copy_to(
                run.page_offset,
                &mut dst[run.buf_offset..run.buf_offset + run.len],
            );
        }
        Ok(())
    }

    /// Returns an owned copy of `len` bytes starting at `offset`.
    pub fn read_bytes(&self, offset: u64, len: usize) -> Result<Bytes> {
        let mut buf = BytesMut::zeroed(len);
        self.read_into(offset, &mut buf)?;
        Ok(buf.freeze())
    }

    /// Reads a fixed-width scalar at `offset`.
    pub fn read_scalar<T: Scalar>(&self, offset: u64) -> Result<T> {
        let mut buf = [0u8; MAX_SCALAR_SIZE];
        self.read_into(offset, &mut buf[..T::SIZE])?;
        Ok(T::decode(&buf[..T::SIZE]))
    }

    /// Reads a boolean byte. Any non-zero value is true.
    pub fn read_bool(&self, offset: u64) -> Result<bool> {
        self.read_scalar(offset)
    }

    /// Reads a single byte.
    pub fn read_u8(&self, offset: u64) -> Result<u8> {
        self.read_scalar(offset)
    }

    /// Reads a little-endian `i16`.
    pub fn read_i16(&self, offset: u64) -> Result<i16> {
        self.read_scalar(offset)
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&self, offset: u64) -> Result<i32> {
        self.read_scalar(offset)
    }

    /// Reads a little-endian `i64`.
    pub fn read_i64(&self, offset: u64) -> Result<i64> {
        self.read_scalar(offset)
    }

    /// Reads an `f32` from its little-endian bit pattern.
    pub fn read_f32(&self, offset: u64) -> Result<f32> {
        self.read_scalar(offset)
    }

    /// Reads an `f64` from its little-endian bit pattern.
    pub fn read_f64(&self, offset: u64) -> Result<f64> {
        self.read_scalar(offset)
    }

    /// Rewinds the write cursor to zero, keeping allocated pages for reuse.
    ///
    /// Every offset issued before the reset becomes stale.
    pub fn reset(&mut self) -> Result<()> {
        self.check_live()?;
        tracing::debug!(
            pages = self.pages.len(),
            written = self.position,
            generation = self.generation,
            "Arena reset"
        );
        self.position = 0;
        self.generation += 1;
        Ok(())
    }

    /// Frees every page.
    ///
    /// All offsets become invalid. Releasing twice, or using the arena
    /// afterwards, returns [`TesseraError::ArenaReleased`].
    pub fn release(&mut self) -> Result<()> {
        self.check_live()?;
        tracing::debug!(
            pages = self.pages.len(),
            written = self.position,
            generation = self.generation,
            "Arena released"
        );
        self.pages = Vec::new();
        self.position = 0;
        self.generation += 1;
        self.released = true;
        Ok(())
    }
}

impl std::fmt::Debug for PagedArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedArena")
            .field("page_size", &self.config.page_size)
            .field("page_count", &self.pages.len())
            .field("position", &self.position)
            .field("generation", &self.generation)
            .field("released", &self.released)
            .finish()
    }
}
