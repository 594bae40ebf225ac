//! Paged memory arena for Tessera.
//!
//! This crate provides in-memory record staging storage with:
//! - Fixed-size pages allocated lazily as writes advance
//! - A single linear logical address space over all pages
//! - Reads and writes that transparently span page boundaries
//! - Explicit reset and release with generation tracking

mod arena;
mod page;
mod run;
mod scalar;

pub use arena::{PagedArena, SharedArena};
pub use page::{Page, PageIndex};
pub use run::{PageRun, PageRuns, pages_for};
pub use scalar::{MAX_SCALAR_SIZE, Scalar};
