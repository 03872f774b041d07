//! Group code classification

use std::fmt;

/// How the value line following a group code is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodeValueType {
    /// Codes 10-59 and 210-239
    Double,
    /// Codes 60-99
    Integer,
    /// Everything else, kept as written
    String,
}

impl GroupCodeValueType {
    /// Get the value type for a group code
    pub fn from_code(code: i32) -> Self {
        match code {
            10..=59 | 210..=239 => GroupCodeValueType::Double,
            60..=99 => GroupCodeValueType::Integer,
            _ => GroupCodeValueType::String,
        }
    }
}

/// A typed value line.
///
/// A numeric line that fails to parse stays a [`GroupValue::Str`], so a
/// builder expecting a number simply ignores it.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupValue {
    Float(f64),
    Int(i64),
    Str(String),
}

impl GroupValue {
    /// Classify `raw` by the group code it follows
    pub fn parse(code: i32, raw: &str) -> Self {
        match GroupCodeValueType::from_code(code) {
            GroupCodeValueType::Double => match raw.parse::<f64>() {
                Ok(v) => GroupValue::Float(v),
                Err(_) => GroupValue::Str(raw.to_string()),
            },
            GroupCodeValueType::Integer => match parse_integer(raw) {
                Some(v) => GroupValue::Int(v),
                None => GroupValue::Str(raw.to_string()),
            },
            GroupCodeValueType::String => GroupValue::Str(raw.to_string()),
        }
    }
}

/// Integers written with a fractional part (`"1.0"`) are truncated
fn parse_integer(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    })
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Float(v) => write!(f, "{}", v),
            GroupValue::Int(v) => write!(f, "{}", v),
            GroupValue::Str(s) => f.write_str(s),
        }
    }
}
