//! # API Facade
//!
//! [`ItemStore`] is the single entry point for item operations. It is a thin
//! facade: each method dispatches to a `commands/*.rs` function and makes
//! exactly one vault call. There is no caching and no retrying.
//!
//! ## What the API Does NOT Do
//!
//! - **Matching logic**: record identity and matching belong to the vault
//! - **Locking**: the vault serializes access; the store holds no state that
//!   changes after construction
//!
//! ## Generic Over Vault
//!
//! `ItemStore<V: Vault>` is generic over the storage backend:
//! - Embedding and testing: `ItemStore<MemoryVault>`
//! - Shared across threads: `ItemStore<Arc<MemoryVault>>`
//! - Platform vaults: any type implementing [`Vault`]
//!
//! ## Items
//!
//! Every method accepts anything that is `AsRef<SecureItem>`, so the typed
//! wrappers ([`crate::item::InternetPassword`] and friends) can be passed
//! directly.

use crate::attributes::Attributes;
use crate::commands;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::item::SecureItem;
use crate::vault::Vault;

/// Add, delete, update, and look up items in a vault.
pub struct ItemStore<V: Vault> {
    vault: V,
    config: StoreConfig,
}

impl<V: Vault> ItemStore<V> {
    pub fn new(vault: V) -> Self {
        Self::with_config(vault, StoreConfig::default())
    }

    pub fn with_config(vault: V, config: StoreConfig) -> Self {
        Self { vault, config }
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Store `item` as a new record. Fails with `ItemAlreadyExists` if the
    /// vault already holds a record with the same identity.
    pub fn add(&self, item: impl AsRef<SecureItem>) -> Result<()> {
        commands::add::run(&self.vault, &self.config, item.as_ref())
    }

    /// Delete every record matching `item`'s search attributes.
    pub fn delete(&self, item: impl AsRef<SecureItem>) -> Result<()> {
        commands::delete::run(&self.vault, &self.config, item.as_ref())
    }

    /// Replace the records matching `item` with `new_values`' attributes.
    pub fn update(
        &self,
        item: impl AsRef<SecureItem>,
        new_values: impl AsRef<SecureItem>,
    ) -> Result<()> {
        commands::update::run(&self.vault, &self.config, item.as_ref(), new_values.as_ref())
    }

    /// Fetch the first record matching `item`, including its secret.
    pub fn search(&self, item: impl AsRef<SecureItem>) -> Result<Option<Attributes>> {
        commands::search::run(&self.vault, &self.config, item.as_ref())
    }
}
