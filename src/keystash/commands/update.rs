use super::{check, scoped};
use crate::attributes::keys;
use crate::config::{ClassChangePolicy, StoreConfig};
use crate::error::{ErrorKind, Result};
use crate::item::SecureItem;
use crate::vault::Vault;
use tracing::debug;

/// Apply `new_values`' attributes to every record matching `item`.
///
/// The class discriminator is never part of the replacement set. Under
/// [`ClassChangePolicy::Reject`] a `new_values` of another class fails before
/// the vault is called.
pub fn run<V: Vault>(
    vault: &V,
    config: &StoreConfig,
    item: &SecureItem,
    new_values: &SecureItem,
) -> Result<()> {
    if config.class_change_policy == ClassChangePolicy::Reject && item.class() != new_values.class()
    {
        debug!(
            from = %item.class(),
            to = %new_values.class(),
            "refusing to change item class"
        );
        return Err(ErrorKind::InvalidParameters);
    }

    let query = scoped(item.search_attributes(), config);
    let mut replacement = new_values.attributes().clone();
    replacement.remove(keys::CLASS);

    debug!(class = %item.class(), keys = replacement.len(), "updating item");
    check("update", vault.update(&query, &replacement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttrValue;
    use crate::item::{Certificate, GenericPassword};
    use crate::vault::memory::fixtures::VaultFixture;

    fn mail(account: &str) -> GenericPassword {
        let mut password = GenericPassword::new();
        password.set_service("mail");
        password.set_account(account);
        password
    }

    #[test]
    fn changes_only_supplied_attributes() {
        let fixture = VaultFixture::new().with_generic_password("mail", "alice", "old");

        let mut changes = GenericPassword::new();
        changes.set_data("new");
        run(
            &fixture.vault,
            &StoreConfig::default(),
            mail("alice").item(),
            changes.item(),
        )
        .unwrap();

        let stored = &fixture.vault.records()[0];
        assert_eq!(stored.get(keys::DATA), Some(&AttrValue::from("new".as_bytes())));
        assert_eq!(stored.get(keys::ACCOUNT), Some(&AttrValue::from("alice")));
        assert_eq!(stored.get(keys::CLASS), Some(&AttrValue::from("genp")));
    }

    #[test]
    fn strip_policy_drops_foreign_discriminator() {
        let fixture = VaultFixture::new().with_generic_password("mail", "alice", "old");

        let mut changes = Certificate::new();
        changes.set_label("relabeled");
        run(
            &fixture.vault,
            &StoreConfig::default(),
            mail("alice").item(),
            changes.item(),
        )
        .unwrap();

        let stored = &fixture.vault.records()[0];
        assert_eq!(stored.get(keys::CLASS), Some(&AttrValue::from("genp")));
        assert_eq!(stored.get(keys::LABEL), Some(&AttrValue::from("relabeled")));
    }

    #[test]
    fn reject_policy_refuses_class_change() {
        let fixture = VaultFixture::new().with_generic_password("mail", "alice", "old");
        let config = StoreConfig {
            class_change_policy: ClassChangePolicy::Reject,
            ..StoreConfig::default()
        };

        let mut changes = Certificate::new();
        changes.set_label("relabeled");
        let result = run(&fixture.vault, &config, mail("alice").item(), changes.item());

        assert_eq!(result, Err(ErrorKind::InvalidParameters));
        assert!(!fixture.vault.records()[0].contains_key(keys::LABEL));
    }

    #[test]
    fn missing_item_is_not_found() {
        let fixture = VaultFixture::new();
        let result = run(
            &fixture.vault,
            &StoreConfig::default(),
            mail("bob").item(),
            mail("bob").item(),
        );
        assert_eq!(result, Err(ErrorKind::ItemNotFound));
    }
}
