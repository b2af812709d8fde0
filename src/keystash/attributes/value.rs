//! Attribute value types.
//!
//! Vault records are heterogeneous maps. [`AttrValue`] is the closed set of
//! value types a record can hold, and [`FromAttrValue`] is the typed cast
//! used by item getters.

use chrono::{DateTime, Utc};

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Text (e.g. `acct`, `srvr`, `labl`)
    String(String),

    /// Flag (e.g. `invi`, `nega`, the `r_Data` control flag)
    Bool(bool),

    /// Number (e.g. `port`, `ptcl`, four-character codes like `crtr`)
    Integer(i64),

    /// Raw bytes (e.g. `v_Data`, certificate `issr`)
    Bytes(Vec<u8>),

    /// Point in time (e.g. `cdat`, `mdat`). Set by the vault only.
    Timestamp(DateTime<Utc>),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            AttrValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            AttrValue::Timestamp(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Integer(value)
    }
}

impl From<u16> for AttrValue {
    fn from(value: u16) -> Self {
        AttrValue::Integer(i64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Integer(i64::from(value))
    }
}

impl From<Vec<u8>> for AttrValue {
    fn from(value: Vec<u8>) -> Self {
        AttrValue::Bytes(value)
    }
}

impl From<&[u8]> for AttrValue {
    fn from(value: &[u8]) -> Self {
        AttrValue::Bytes(value.to_vec())
    }
}

impl From<DateTime<Utc>> for AttrValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttrValue::Timestamp(value)
    }
}

/// Typed extraction from an [`AttrValue`].
///
/// Returns `None` on a type mismatch; integer targets narrower than `i64`
/// also return `None` when the stored number does not fit.
pub trait FromAttrValue: Sized {
    fn from_attr(value: &AttrValue) -> Option<Self>;
}

impl FromAttrValue for String {
    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromAttrValue for bool {
    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromAttrValue for i64 {
    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromAttrValue for u16 {
    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_integer().and_then(|v| u16::try_from(v).ok())
    }
}

impl FromAttrValue for u32 {
    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_integer().and_then(|v| u32::try_from(v).ok())
    }
}

impl FromAttrValue for Vec<u8> {
    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_bytes().map(<[u8]>::to_vec)
    }
}

impl FromAttrValue for DateTime<Utc> {
    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_timestamp()
    }
}

impl FromAttrValue for AttrValue {
    fn from_attr(value: &AttrValue) -> Option<Self> {
        Some(value.clone())
    }
}
