//! Item classes and their attribute registries.
//!
//! Each class declares which attributes it knows, what kind of value they
//! hold, and whether they are search keys, plain attributes, or read-only
//! values derived by the vault.

use super::keys;
use super::value::AttrValue;
use std::fmt;
use std::str::FromStr;

/// The class of a secure item. Written into every record under [`keys::CLASS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass {
    GenericPassword,
    InternetPassword,
    Certificate,
}

impl ItemClass {
    pub const ALL: [ItemClass; 3] = [
        ItemClass::GenericPassword,
        ItemClass::InternetPassword,
        ItemClass::Certificate,
    ];

    /// The discriminator value stored under [`keys::CLASS`].
    pub fn discriminator(self) -> &'static str {
        match self {
            ItemClass::GenericPassword => "genp",
            ItemClass::InternetPassword => "inet",
            ItemClass::Certificate => "cert",
        }
    }

    /// Read the class back out of a record or query.
    pub fn of(value: &AttrValue) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }

    /// Attribute registry for this class.
    pub fn attributes(self) -> &'static [AttributeSpec] {
        match self {
            ItemClass::GenericPassword => GENERIC_PASSWORD,
            ItemClass::InternetPassword => INTERNET_PASSWORD,
            ItemClass::Certificate => CERTIFICATE,
        }
    }

    /// Look up the spec for `key` in this class.
    pub fn spec(self, key: &str) -> Option<&'static AttributeSpec> {
        self.attributes().iter().find(|spec| spec.key == key)
    }

    /// Keys promoted to search attributes when set. Their values, together
    /// with the class, are what makes two records the same item.
    pub fn search_keys(self) -> impl Iterator<Item = &'static str> {
        self.attributes()
            .iter()
            .filter(|spec| spec.role == AttributeRole::Search)
            .map(|spec| spec.key)
    }
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

impl FromStr for ItemClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemClass::ALL
            .into_iter()
            .find(|class| class.discriminator() == s)
            .ok_or_else(|| format!("unknown item class: {}", s))
    }
}

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Bool,
    Integer,
    Bytes,
    Timestamp,
}

impl AttributeKind {
    pub fn accepts(self, value: &AttrValue) -> bool {
        matches!(
            (self, value),
            (AttributeKind::String, AttrValue::String(_))
                | (AttributeKind::Bool, AttrValue::Bool(_))
                | (AttributeKind::Integer, AttrValue::Integer(_))
                | (AttributeKind::Bytes, AttrValue::Bytes(_))
                | (AttributeKind::Timestamp, AttrValue::Timestamp(_))
        )
    }
}

/// How an item treats an attribute when it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeRole {
    /// Written to both `attributes` and `search_attributes`.
    Search,
    /// Written to `attributes` only.
    Plain,
    /// Derived by the vault; items expose no setter.
    ReadOnly,
}

/// Specification for a single attribute of a class.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    pub key: &'static str,
    pub kind: AttributeKind,
    pub role: AttributeRole,
}

impl AttributeSpec {
    const fn new(key: &'static str, kind: AttributeKind) -> Self {
        Self {
            key,
            kind,
            role: AttributeRole::Plain,
        }
    }

    const fn search(mut self) -> Self {
        self.role = AttributeRole::Search;
        self
    }

    const fn read_only(mut self) -> Self {
        self.role = AttributeRole::ReadOnly;
        self
    }
}

use AttributeKind::{Bool, Bytes, Integer, String as Text, Timestamp};

pub const GENERIC_PASSWORD: &[AttributeSpec] = &[
    AttributeSpec::new(keys::ACCESSIBLE, Text),
    AttributeSpec::new(keys::ACCESS_GROUP, Text),
    AttributeSpec::new(keys::COMMENT, Text),
    AttributeSpec::new(keys::DESCRIPTION, Text),
    AttributeSpec::new(keys::CREATOR, Integer),
    AttributeSpec::new(keys::ITEM_TYPE, Integer),
    AttributeSpec::new(keys::IS_INVISIBLE, Bool),
    AttributeSpec::new(keys::IS_NEGATIVE, Bool),
    AttributeSpec::new(keys::GENERIC, Bytes),
    AttributeSpec::new(keys::DATA, Bytes),
    AttributeSpec::new(keys::LABEL, Text).search(),
    AttributeSpec::new(keys::ACCOUNT, Text).search(),
    AttributeSpec::new(keys::SERVICE, Text).search(),
    AttributeSpec::new(keys::CREATION_DATE, Timestamp).read_only(),
    AttributeSpec::new(keys::MODIFICATION_DATE, Timestamp).read_only(),
];

pub const INTERNET_PASSWORD: &[AttributeSpec] = &[
    AttributeSpec::new(keys::ACCESSIBLE, Text),
    AttributeSpec::new(keys::ACCESS_GROUP, Text),
    AttributeSpec::new(keys::COMMENT, Text),
    AttributeSpec::new(keys::DESCRIPTION, Text),
    AttributeSpec::new(keys::CREATOR, Integer),
    AttributeSpec::new(keys::ITEM_TYPE, Integer),
    AttributeSpec::new(keys::IS_INVISIBLE, Bool),
    AttributeSpec::new(keys::IS_NEGATIVE, Bool),
    AttributeSpec::new(keys::SECURITY_DOMAIN, Text),
    AttributeSpec::new(keys::DATA, Bytes),
    AttributeSpec::new(keys::LABEL, Text).search(),
    AttributeSpec::new(keys::ACCOUNT, Text).search(),
    AttributeSpec::new(keys::SERVER, Text).search(),
    AttributeSpec::new(keys::PROTOCOL, Integer).search(),
    AttributeSpec::new(keys::AUTHENTICATION_TYPE, Integer).search(),
    AttributeSpec::new(keys::PORT, Integer).search(),
    AttributeSpec::new(keys::PATH, Text).search(),
    AttributeSpec::new(keys::CREATION_DATE, Timestamp).read_only(),
    AttributeSpec::new(keys::MODIFICATION_DATE, Timestamp).read_only(),
];

pub const CERTIFICATE: &[AttributeSpec] = &[
    AttributeSpec::new(keys::ACCESSIBLE, Text),
    AttributeSpec::new(keys::ACCESS_GROUP, Text),
    AttributeSpec::new(keys::CERTIFICATE_TYPE, Integer),
    AttributeSpec::new(keys::CERTIFICATE_ENCODING, Integer),
    AttributeSpec::new(keys::DATA, Bytes),
    AttributeSpec::new(keys::LABEL, Text).search(),
    AttributeSpec::new(keys::SUBJECT, Bytes).read_only(),
    AttributeSpec::new(keys::ISSUER, Bytes).read_only(),
    AttributeSpec::new(keys::SERIAL_NUMBER, Bytes).read_only(),
    AttributeSpec::new(keys::SUBJECT_KEY_ID, Bytes).read_only(),
    AttributeSpec::new(keys::PUBLIC_KEY_HASH, Bytes).read_only(),
];
