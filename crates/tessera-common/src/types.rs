//! Column type tags for Tessera records.

use serde::{Deserialize, Serialize};

/// Type of a single record column.
///
/// The tag decides both how a column is encoded inside a record and which
/// typed accessor may read it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColumnType {
    Bool = 1,
    Byte = 2,
    Short = 3,
    Int = 4,
    Long = 5,
    Float = 6,
    Double = 7,
    /// Milliseconds since the Unix epoch.
    Date = 8,

    // Variable-length types
    String = 20,
    Binary = 21,
}

impl ColumnType {
    /// Returns the fixed byte size for this type, or None for variable-length types.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            ColumnType::Bool | ColumnType::Byte => Some(1),
            ColumnType::Short => Some(2),
            ColumnType::Int | ColumnType::Float => Some(4),
            ColumnType::Long | ColumnType::Double | ColumnType::Date => Some(8),

            ColumnType::String | ColumnType::Binary => None,
        }
    }

    /// Returns true if this type has a fixed byte size.
    pub fn is_fixed_size(&self) -> bool {
        self.fixed_size().is_some()
    }

    /// Returns true if values of this type carry a length prefix.
    pub fn is_variable_length(&self) -> bool {
        !self.is_fixed_size()
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnType::Bool => "BOOL",
            ColumnType::Byte => "BYTE",
            ColumnType::Short => "SHORT",
            ColumnType::Int => "INT",
            ColumnType::Long => "LONG",
            ColumnType::Float => "FLOAT",
            ColumnType::Double => "DOUBLE",
            ColumnType::Date => "DATE",
            ColumnType::String => "STRING",
            ColumnType::Binary => "BINARY",
        };
        write!(f, "{}", name)
    }
}
