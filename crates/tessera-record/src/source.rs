//! Record source capability and an owned row implementation.

use bytes::Bytes;
use tessera_common::{ColumnType, Result, TesseraError};

/// Typed read access to the columns of a record being written.
///
/// The codec only reads a source through this trait and never assumes
/// anything about its layout. Each getter is called at most once per column,
/// in schema order, with the accessor matching the schema type.
pub trait RecordSource {
    fn get_bool(&self, column: usize) -> Result<bool>;
    fn get_byte(&self, column: usize) -> Result<u8>;
    fn get_short(&self, column: usize) -> Result<i16>;
    fn get_int(&self, column: usize) -> Result<i32>;
    fn get_long(&self, column: usize) -> Result<i64>;
    fn get_float(&self, column: usize) -> Result<f32>;
    fn get_double(&self, column: usize) -> Result<f64>;

    /// Milliseconds since the Unix epoch.
    fn get_date(&self, column: usize) -> Result<i64>;

    /// Returns None for an absent value.
    fn get_str(&self, column: usize) -> Result<Option<&str>>;

    /// Returns None for an absent value. The slice length is the payload length.
    fn get_bin(&self, column: usize) -> Result<Option<&[u8]>>;
}

/// A single decoded or to-be-encoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Bool(bool),
    Byte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Date(i64),
    String(Option<String>),
    Binary(Option<Bytes>),
}

impl ColumnValue {
    /// Returns the column type this value belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnValue::Bool(_) => ColumnType::Bool,
            ColumnValue::Byte(_) => ColumnType::Byte,
            ColumnValue::Short(_) => ColumnType::Short,
            ColumnValue::Int(_) => ColumnType::Int,
            ColumnValue::Long(_) => ColumnType::Long,
            ColumnValue::Float(_) => ColumnType::Float,
            ColumnValue::Double(_) => ColumnType::Double,
            ColumnValue::Date(_) => ColumnType::Date,
            ColumnValue::String(_) => ColumnType::String,
            ColumnValue::Binary(_) => ColumnType::Binary,
        }
    }

    /// Returns true for an absent string or binary value.
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::String(None) | ColumnValue::Binary(None))
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::String(Some(value.to_string()))
    }
}

impl From<Bytes> for ColumnValue {
    fn from(value: Bytes) -> Self {
        ColumnValue::Binary(Some(value))
    }
}

/// An owned record held as a list of column values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<ColumnValue>,
}

impl Row {
    /// Creates a row from values in schema order.
    pub fn new(values: Vec<ColumnValue>) -> Self {
        Self { values }
    }

    /// Returns the values in schema order.
    pub fn values(&self) -> &[ColumnValue] {
        &self.values
    }

    /// Returns the value at `column`.
    pub fn get(&self, column: usize) -> Option<&ColumnValue> {
        self.values.get(column)
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends a value.
    pub fn push(&mut self, value: ColumnValue) {
        self.values.push(value);
    }

    fn value_at(&self, column: usize) -> Result<&ColumnValue> {
        self.values
            .get(column)
            .ok_or(TesseraError::ColumnOutOfRange {
                index: column,
                count: self.values.len(),
            })
    }
}

fn mismatch(column: usize, expected: ColumnType, actual: &ColumnValue) -> TesseraError {
    TesseraError::TypeMismatch {
        column,
        expected,
        actual: actual.column_type(),
    }
}

impl From<Vec<ColumnValue>> for Row {
    fn from(values: Vec<ColumnValue>) -> Self {
        Self::new(values)
    }
}

impl IntoIterator for Row {
    type Item = ColumnValue;
    type IntoIter = std::vec::IntoIter<ColumnValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

macro_rules! row_getter {
    ($name:ident, $ty:ty, $variant:ident) => {
        fn $name(&self, column: usize) -> Result<$ty> {
            match self.value_at(column)? {
                ColumnValue::$variant(v) => Ok(*v),
                other => Err(mismatch(column, ColumnType::$variant, other)),
            }
        }
    };
}

impl RecordSource for Row {
    row_getter!(get_bool, bool, Bool);
    row_getter!(get_byte, u8, Byte);
    row_getter!(get_short, i16, Short);
    row_getter!(get_int, i32, Int);
    row_getter!(get_long, i64, Long);
    row_getter!(get_float, f32, Float);
    row_getter!(get_double, f64, Double);
    row_getter!(get_date, i64, Date);

    fn get_str(&self, column: usize) -> Result<Option<&str>> {
        match self.value_at(column)? {
            ColumnValue::String(v) => Ok(v.as_deref()),
            other => Err(mismatch(column, ColumnType::String, other)),
        }
    }

    fn get_bin(&self, column: usize) -> Result<Option<&[u8]>> {
        match self.value_at(column)? {
            ColumnValue::Binary(v) => Ok(v.as_deref()),
            other => Err(mismatch(column, ColumnType::Binary, other)),
        }
    }
}
