//! Fixed-size arena pages.

use tessera_common::{Result, TesseraError};

/// Position of a page within its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(pub usize);

impl std::fmt::Display for PageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page:{}", self.0)
    }
}

/// A single contiguous block of arena memory.
///
/// Pages are zero-filled on allocation and never resized.
pub struct Page {
    data: Box<[u8]>,
}

impl Page {
    /// Allocates a zeroed page.
    ///
    /// Uses fallible reservation so allocator exhaustion surfaces as an
    /// error instead of aborting the process.
    pub fn allocate(index: PageIndex, page_size: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(page_size)
            .map_err(|_| TesseraError::PageAllocationFailed {
                page_index: index.0,
                page_size,
            })?;
        data.resize(page_size, 0u8);
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Returns the page size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for a zero-length page. Never the case for arena pages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copies `src` into the page starting at `page_offset`.
    #[inline]
    pub fn copy_from(&mut self, page_offset: usize, src: &[u8]) {
        self.data[page_offset..page_offset + src.len()].copy_from_slice(src);
    }

    /// Copies bytes starting at `page_offset` into `dst`.
    #[inline]
    pub fn copy_to(&self, page_offset: usize, dst: &mut [u8]) {
        dst.copy_from_slice(&self.data[page_offset..page_offset + dst.len()]);
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("len", &self.len())
            .finish()
    }
}
