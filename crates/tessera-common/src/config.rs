//! Configuration structures for Tessera.

use crate::error::{Result, TesseraError};
use serde::{Deserialize, Serialize};

/// Default arena page size in bytes (64 KB).
pub const DEFAULT_PAGE_SIZE: usize = 64 * 1024;

/// Configuration for a paged arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Size of every page in bytes.
    pub page_size: usize,
    /// Upper bound on the number of pages (None = unbounded).
    pub max_pages: Option<usize>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: None,
        }
    }
}

impl ArenaConfig {
    /// Creates a config with the given page size and no page limit.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Checks that the config describes a usable arena.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(TesseraError::InvalidPageSize {
                page_size: self.page_size,
            });
        }
        if self.max_pages == Some(0) {
            return Err(TesseraError::InvalidParameter {
                name: "max_pages".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_config_defaults() {
        let config = ArenaConfig::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.page_size, 65536);
        assert!(config.max_pages.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_page_size() {
        let config = ArenaConfig::with_page_size(450);
        assert_eq!(config.page_size, 450);
        assert!(config.max_pages.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config = ArenaConfig::with_page_size(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, TesseraError::InvalidPageSize { page_size: 0 }));
    }

    #[test]
    fn test_validate_rejects_zero_max_pages() {
        let config = ArenaConfig {
            page_size: 100,
            max_pages: Some(0),
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid parameter: max_pages = 0");
    }

    #[test]
    fn test_arena_config_serde_roundtrip() {
        let original = ArenaConfig {
            page_size: 4096,
            max_pages: Some(16),
        };
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: ArenaConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_arena_config_partial_json() {
        let config: ArenaConfig = serde_json::from_str(r#"{"page_size": 128}"#).unwrap();
        assert_eq!(config.page_size, 128);
        assert!(config.max_pages.is_none());
    }
}
