//! Tessera common types, errors, and configuration.
//!
//! This crate provides shared definitions used across all Tessera components.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ArenaConfig, DEFAULT_PAGE_SIZE};
pub use error::{ErrorClass, Result, TesseraError};
pub use types::ColumnType;
