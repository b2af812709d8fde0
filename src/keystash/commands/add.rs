use super::{check, scoped};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::item::SecureItem;
use crate::vault::Vault;
use tracing::debug;

/// Store `item` as a new record.
pub fn run<V: Vault>(vault: &V, config: &StoreConfig, item: &SecureItem) -> Result<()> {
    let attributes = scoped(item.attributes(), config);
    debug!(class = %item.class(), keys = attributes.len(), "adding item");
    check("add", vault.add(&attributes))
}
