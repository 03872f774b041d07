//! Code/value pairs and the stream reader trait

use crate::error::Result;
use crate::io::dxf::{GroupCodeValueType, GroupValue};
use encoding_rs::Encoding;

/// A DXF code/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    /// The value line as read, trimmed
    pub value_string: String,

    /// The value classified by its group code
    pub value: GroupValue,
}

impl DxfCodePair {
    /// Create a new code/value pair
    pub fn new(code: i32, value_string: impl Into<String>) -> Self {
        let value_string = value_string.into();
        let value = GroupValue::parse(code, &value_string);
        Self {
            code,
            value_string,
            value,
        }
    }

    pub fn value_type(&self) -> GroupCodeValueType {
        GroupCodeValueType::from_code(self.code)
    }

    /// Get value as string
    pub fn as_str(&self) -> &str {
        &self.value_string
    }

    /// Get value as double.
    ///
    /// String-classed codes (e.g. 1071) are parsed on demand.
    pub fn as_double(&self) -> Option<f64> {
        match &self.value {
            GroupValue::Float(v) => Some(*v),
            GroupValue::Int(v) => Some(*v as f64),
            GroupValue::Str(s) => s.parse::<f64>().ok(),
        }
    }

    /// Get value as integer
    pub fn as_int(&self) -> Option<i64> {
        match &self.value {
            GroupValue::Int(v) => Some(*v),
            GroupValue::Float(_) => None,
            GroupValue::Str(s) => s.parse::<i64>().ok(),
        }
    }

    /// Nonzero integers are true
    pub fn as_bool(&self) -> Option<bool> {
        self.as_int().map(|v| v != 0)
    }

    /// Whether this is a `0` record with the given name
    pub fn is_marker(&self, name: &str) -> bool {
        self.code == 0 && self.value_string == name
    }
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Push a pair back to be read again on next read_pair call
    fn push_back(&mut self, pair: DxfCodePair);

    /// Reset the reader to the beginning
    fn reset(&mut self) -> Result<()>;

    /// Set the fallback encoding for lines that are not valid UTF-8
    fn set_encoding(&mut self, encoding: &'static Encoding);
}
