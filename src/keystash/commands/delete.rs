use super::{check, scoped};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::item::SecureItem;
use crate::vault::Vault;
use tracing::debug;

/// Remove every record matching `item`'s search attributes.
pub fn run<V: Vault>(vault: &V, config: &StoreConfig, item: &SecureItem) -> Result<()> {
    let query = scoped(item.search_attributes(), config);
    debug!(class = %item.class(), "deleting item");
    check("delete", vault.delete(&query))
}
