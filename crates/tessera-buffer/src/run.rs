//! Splitting logical byte ranges into per-page runs.

use crate::page::PageIndex;

/// A contiguous piece of a logical range that lies inside one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRun {
    /// Page holding this piece.
    pub page: PageIndex,
    /// Offset of the piece within the page.
    pub page_offset: usize,
    /// Offset of the piece within the caller's buffer.
    pub buf_offset: usize,
    /// Length of the piece in bytes.
    pub len: usize,
}

/// Iterator over the page runs covering `[offset, offset + len)`.
///
/// Every run except possibly the first starts at page offset 0, and every
/// run except possibly the last ends at the page boundary.
#[derive(Debug, Clone)]
pub struct PageRuns {
    page_size: usize,
    offset: u64,
    buf_offset: usize,
    remaining: usize,
}

impl PageRuns {
    /// Creates the run iterator. `page_size` must be non-zero.
    pub fn new(offset: u64, len: usize, page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            page_size,
            offset,
            buf_offset: 0,
            remaining: len,
        }
    }
}

impl Iterator for PageRuns {
    type Item = PageRun;

    #[inline]
    fn next(&mut self) -> Option<PageRun> {
        if self.remaining == 0 {
            return None;
        }

        let page_size = self.page_size as u64;
        let page = (self.offset / page_size) as usize;
        let page_offset = (self.offset % page_size) as usize;
        let len = (self.page_size - page_offset).min(self.remaining);

        let run = PageRun {
            page: PageIndex(page),
            page_offset,
            buf_offset: self.buf_offset,
            len,
        };

        self.offset += len as u64;
        self.buf_offset += len;
        self.remaining -= len;
        Some(run)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let first = (self.offset % self.page_size as u64) as usize;
        let n = (first + self.remaining).div_ceil(self.page_size);
        (n, Some(n))
    }
}

impl ExactSizeIterator for PageRuns {}

/// Returns the number of pages needed to hold `len` bytes from offset 0.
#[inline]
pub fn pages_for(len: u64, page_size: usize) -> usize {
    len.div_ceil(page_size as u64) as usize
}
