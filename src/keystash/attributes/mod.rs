//! # Attribute System
//!
//! A vault record is a bag of named attributes. This module provides:
//!
//! - **Values**: [`AttrValue`], the closed set of types an attribute can hold
//! - **Keys**: the [`keys`] constants records and queries are built from
//! - **Specifications**: per-class registries ([`ItemClass::attributes`]) that
//!   say which keys are search keys, plain attributes, or read-only
//!
//! ## Attribute Kinds
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `String` | `acct`, `srvr`, `labl` | Text |
//! | `Bool` | `invi`, `nega` | Flags |
//! | `Integer` | `port`, `ptcl`, `crtr` | Numbers and four-character codes |
//! | `Bytes` | `v_Data`, `issr` | Secret payload and binary identifiers |
//! | `Timestamp` | `cdat`, `mdat` | Set by the vault, read-only for items |
//!
//! ## Usage
//!
//! ```
//! use keystash::attributes::{keys, AttributeRole, ItemClass};
//!
//! let spec = ItemClass::InternetPassword.spec(keys::SERVER).unwrap();
//! assert_eq!(spec.role, AttributeRole::Search);
//! ```

pub mod keys;
mod spec;
mod value;

use std::collections::HashMap;

pub use spec::{
    AttributeKind, AttributeRole, AttributeSpec, ItemClass, CERTIFICATE, GENERIC_PASSWORD,
    INTERNET_PASSWORD,
};
pub use value::{AttrValue, FromAttrValue};

/// A mapping of attribute keys to values: a record, a query, or a set of
/// replacement values.
pub type Attributes = HashMap<String, AttrValue>;
