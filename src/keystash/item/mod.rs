//! # Secure Items
//!
//! A [`SecureItem`] is the in-memory projection of a vault record. It keeps two
//! attribute maps:
//!
//! - `attributes`: everything that would be stored (sent on `add`, used as the
//!   replacement set on `update`)
//! - `search_attributes`: the identity subset (sent as the query on `delete`,
//!   `update` and `search`)
//!
//! Both maps are seeded with the class discriminator at construction. The
//! discriminator cannot be changed afterwards.
//!
//! ## Setting Attributes
//!
//! | Call | `Some(v)` | `None` |
//! |------|-----------|--------|
//! | [`SecureItem::set`] | writes `attributes` | no-op |
//! | [`SecureItem::set_search_attribute`] | writes both maps | removes from `search_attributes` only |
//!
//! Clearing a search attribute leaves the last value in `attributes`, so an
//! item that was added with a server and then has the server cleared still
//! sends that server on its next `add`.
//!
//! The typed wrappers ([`GenericPassword`], [`InternetPassword`],
//! [`Certificate`]) route each property through the class registry, so callers
//! never decide by hand whether a key is a search key.

mod certificate;
mod generic_password;
mod internet_password;

pub use certificate::Certificate;
pub use generic_password::GenericPassword;
pub use internet_password::InternetPassword;

use crate::attributes::{keys, AttrValue, AttributeRole, Attributes, FromAttrValue, ItemClass};
use crate::error::{ErrorKind, Result};
use tracing::warn;

/// An attribute bag describing one vault record.
#[derive(Debug, Clone, PartialEq)]
pub struct SecureItem {
    class: ItemClass,
    attributes: Attributes,
    search_attributes: Attributes,
}

impl SecureItem {
    /// Create an empty item of the given class, seeded with its discriminator.
    pub fn new(class: ItemClass) -> Self {
        let discriminator = AttrValue::from(class.discriminator());
        let mut attributes = Attributes::new();
        let mut search_attributes = Attributes::new();
        attributes.insert(keys::CLASS.to_string(), discriminator.clone());
        search_attributes.insert(keys::CLASS.to_string(), discriminator);
        Self {
            class,
            attributes,
            search_attributes,
        }
    }

    /// Rebuild an item from a record returned by the vault.
    ///
    /// Every attribute is kept; those the class registry marks as search keys
    /// are also copied into the search attributes. Fails with
    /// `InvalidParameters` if the record has no recognizable class.
    pub fn from_record(record: Attributes) -> Result<Self> {
        let class = record
            .get(keys::CLASS)
            .and_then(ItemClass::of)
            .ok_or(ErrorKind::InvalidParameters)?;

        let mut item = Self::new(class);
        for key in class.search_keys() {
            if let Some(value) = record.get(key) {
                item.search_attributes.insert(key.to_string(), value.clone());
            }
        }
        item.attributes = record;
        Ok(item)
    }

    pub fn class(&self) -> ItemClass {
        self.class
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn search_attributes(&self) -> &Attributes {
        &self.search_attributes
    }

    /// Typed lookup in `attributes`. `None` if absent or of another type.
    pub fn get<T: FromAttrValue>(&self, key: &str) -> Option<T> {
        self.attributes.get(key).and_then(T::from_attr)
    }

    /// Insert or overwrite a plain attribute. Clearing (`None`) is a no-op.
    pub fn set(&mut self, key: &str, value: Option<AttrValue>) {
        if key == keys::CLASS {
            warn!(class = %self.class, "ignoring attempt to overwrite the class discriminator");
            return;
        }
        if let Some(value) = value {
            self.attributes.insert(key.to_string(), value);
        }
    }

    /// Insert or overwrite a search attribute in both maps. Clearing (`None`)
    /// removes the key from `search_attributes` only. Read-only keys are
    /// ignored.
    pub fn set_search_attribute(&mut self, key: &str, value: Option<AttrValue>) {
        if key == keys::CLASS {
            warn!(class = %self.class, "ignoring attempt to overwrite the class discriminator");
            return;
        }
        if self.class.spec(key).map(|spec| spec.role) == Some(AttributeRole::ReadOnly) {
            warn!(class = %self.class, key, "ignoring read-only key as search attribute");
            return;
        }
        match value {
            Some(value) => {
                self.attributes.insert(key.to_string(), value.clone());
                self.search_attributes.insert(key.to_string(), value);
            }
            None => {
                self.search_attributes.remove(key);
            }
        }
    }

    /// Set an attribute by key, letting the class registry decide how.
    ///
    /// Search keys go through [`set_search_attribute`](Self::set_search_attribute),
    /// everything else through [`set`](Self::set). Read-only keys, the class
    /// key, and values of the wrong kind fail with `InvalidParameters`.
    pub fn set_property(&mut self, key: &str, value: Option<AttrValue>) -> Result<()> {
        if key == keys::CLASS {
            return Err(ErrorKind::InvalidParameters);
        }
        let Some(spec) = self.class.spec(key) else {
            self.set(key, value);
            return Ok(());
        };
        if spec.role == AttributeRole::ReadOnly {
            return Err(ErrorKind::InvalidParameters);
        }
        if let Some(value) = &value {
            if !spec.kind.accepts(value) {
                return Err(ErrorKind::InvalidParameters);
            }
        }
        match spec.role {
            AttributeRole::Search => self.set_search_attribute(key, value),
            _ => self.set(key, value),
        }
        Ok(())
    }

    /// Registry-routed setter used by the typed wrappers.
    fn assign(&mut self, key: &'static str, value: Option<AttrValue>) {
        match self.class.spec(key).map(|spec| spec.role) {
            Some(AttributeRole::ReadOnly) => {
                warn!(class = %self.class, key, "ignoring write to read-only attribute");
            }
            Some(AttributeRole::Search) => self.set_search_attribute(key, value),
            _ => self.set(key, value),
        }
    }

    /// The secret payload.
    pub fn data(&self) -> Option<Vec<u8>> {
        self.get(keys::DATA)
    }

    pub fn set_data(&mut self, data: impl Into<Vec<u8>>) {
        self.set(keys::DATA, Some(AttrValue::Bytes(data.into())));
    }
}

impl AsRef<SecureItem> for SecureItem {
    fn as_ref(&self) -> &SecureItem {
        self
    }
}

/// Generates typed accessors on a wrapper holding `item: SecureItem`.
///
/// - `search`: getter, setter, and a clear that drops the search key
/// - `plain`: getter and setter
/// - `read_only`: getter
macro_rules! item_properties {
    () => {};
    (
        $(#[$meta:meta])*
        search $name:ident, $setter:ident, $clear:ident: $ty:ty => $key:expr;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<$ty> {
            self.item.get($key)
        }

        pub fn $setter(&mut self, value: impl Into<$ty>) {
            let value: $ty = value.into();
            self.item
                .assign($key, Some($crate::attributes::AttrValue::from(value)));
        }

        /// Removes the key from the search attributes. The last value stays in
        /// the attributes.
        pub fn $clear(&mut self) {
            self.item.assign($key, None);
        }

        $crate::item::item_properties!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        plain $name:ident, $setter:ident: $ty:ty => $key:expr;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<$ty> {
            self.item.get($key)
        }

        pub fn $setter(&mut self, value: impl Into<$ty>) {
            let value: $ty = value.into();
            self.item
                .assign($key, Some($crate::attributes::AttrValue::from(value)));
        }

        $crate::item::item_properties!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        read_only $name:ident: $ty:ty => $key:expr;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<$ty> {
            self.item.get($key)
        }

        $crate::item::item_properties!($($rest)*);
    };
}

/// Wrapper plumbing shared by the typed items.
macro_rules! item_wrapper {
    ($wrapper:ident, $class:expr) => {
        impl $wrapper {
            pub fn new() -> Self {
                Self {
                    item: $crate::item::SecureItem::new($class),
                }
            }

            pub fn item(&self) -> &$crate::item::SecureItem {
                &self.item
            }

            pub fn into_item(self) -> $crate::item::SecureItem {
                self.item
            }
        }

        impl Default for $wrapper {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<$crate::item::SecureItem> for $wrapper {
            fn as_ref(&self) -> &$crate::item::SecureItem {
                &self.item
            }
        }

        impl From<$wrapper> for $crate::item::SecureItem {
            fn from(wrapper: $wrapper) -> Self {
                wrapper.item
            }
        }

        impl TryFrom<$crate::item::SecureItem> for $wrapper {
            type Error = $crate::error::ErrorKind;

            fn try_from(item: $crate::item::SecureItem) -> $crate::error::Result<Self> {
                if item.class() == $class {
                    Ok(Self { item })
                } else {
                    Err($crate::error::ErrorKind::InvalidParameters)
                }
            }
        }
    };
}

pub(crate) use item_properties;
pub(crate) use item_wrapper;
