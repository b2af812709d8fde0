//! # Vault Layer
//!
//! The [`Vault`] trait is the boundary to the secure storage that actually
//! holds records. It mirrors the four primitives credential vaults expose:
//! every call takes attribute maps and answers with a native [`StatusCode`]
//! (`0` on success). Interpreting those codes is the store's job (see
//! [`crate::error::classify`]), not the vault's.
//!
//! ## Design Rationale
//!
//! The vault is injected into [`crate::api::ItemStore`] rather than reached
//! through a global session, so that:
//! - tests run against [`memory::MemoryVault`] with no platform keychain
//! - platform vaults can be plugged in without touching the store
//!
//! ## Implementations
//!
//! - [`memory::MemoryVault`]: in-process records with keychain matching rules
//!
//! ## Concurrency
//!
//! All methods take `&self`. Implementations serialize access internally; the
//! store performs no locking of its own.

use crate::attributes::Attributes;
use crate::error::StatusCode;
use std::sync::Arc;

pub mod memory;

/// Result payload of a [`Vault::find`] call. Which shape comes back depends on
/// the query's control flags.
#[derive(Debug, Clone, PartialEq)]
pub enum VaultData {
    /// A single record's attributes (`r_Attributes` with `m_LimitOne`).
    Attributes(Attributes),

    /// Several records (`m_LimitAll`).
    Records(Vec<Attributes>),

    /// Only the secret payload (`r_Data` without `r_Attributes`).
    Data(Vec<u8>),
}

/// Primitive operations of a credential vault.
pub trait Vault {
    /// Store a new record.
    fn add(&self, attributes: &Attributes) -> StatusCode;

    /// Remove every record matching `query`.
    fn delete(&self, query: &Attributes) -> StatusCode;

    /// Apply `attributes` to every record matching `query`.
    fn update(&self, query: &Attributes, attributes: &Attributes) -> StatusCode;

    /// Look up records matching `query`.
    fn find(&self, query: &Attributes) -> (StatusCode, Option<VaultData>);
}

impl<V: Vault + ?Sized> Vault for &V {
    fn add(&self, attributes: &Attributes) -> StatusCode {
        (**self).add(attributes)
    }

    fn delete(&self, query: &Attributes) -> StatusCode {
        (**self).delete(query)
    }

    fn update(&self, query: &Attributes, attributes: &Attributes) -> StatusCode {
        (**self).update(query, attributes)
    }

    fn find(&self, query: &Attributes) -> (StatusCode, Option<VaultData>) {
        (**self).find(query)
    }
}

impl<V: Vault + ?Sized> Vault for Box<V> {
    fn add(&self, attributes: &Attributes) -> StatusCode {
        (**self).add(attributes)
    }

    fn delete(&self, query: &Attributes) -> StatusCode {
        (**self).delete(query)
    }

    fn update(&self, query: &Attributes, attributes: &Attributes) -> StatusCode {
        (**self).update(query, attributes)
    }

    fn find(&self, query: &Attributes) -> (StatusCode, Option<VaultData>) {
        (**self).find(query)
    }
}

impl<V: Vault + ?Sized> Vault for Arc<V> {
    fn add(&self, attributes: &Attributes) -> StatusCode {
        (**self).add(attributes)
    }

    fn delete(&self, query: &Attributes) -> StatusCode {
        (**self).delete(query)
    }

    fn update(&self, query: &Attributes, attributes: &Attributes) -> StatusCode {
        (**self).update(query, attributes)
    }

    fn find(&self, query: &Attributes) -> (StatusCode, Option<VaultData>) {
        (**self).find(query)
    }
}
