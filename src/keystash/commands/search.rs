use super::{check, scoped};
use crate::attributes::{keys, AttrValue, Attributes};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::item::SecureItem;
use crate::vault::{Vault, VaultData};
use tracing::debug;

/// Look up the first record matching `item`, with its attributes and secret.
///
/// Returns `Ok(None)` when the vault answers with anything other than a single
/// attribute mapping.
pub fn run<V: Vault>(
    vault: &V,
    config: &StoreConfig,
    item: &SecureItem,
) -> Result<Option<Attributes>> {
    let mut query = scoped(item.search_attributes(), config);
    query.insert(keys::RETURN_ATTRIBUTES.to_string(), AttrValue::Bool(true));
    query.insert(keys::RETURN_DATA.to_string(), AttrValue::Bool(true));
    query.insert(
        keys::MATCH_LIMIT.to_string(),
        AttrValue::from(keys::MATCH_LIMIT_ONE),
    );

    debug!(class = %item.class(), "searching item");
    let (code, data) = vault.find(&query);
    check("find", code)?;

    match data {
        Some(VaultData::Attributes(attributes)) => Ok(Some(attributes)),
        other => {
            let shape = other.as_ref().map(shape_of);
            debug!(?shape, "search returned no attribute mapping");
            Ok(None)
        }
    }
}

fn shape_of(data: &VaultData) -> &'static str {
    match data {
        VaultData::Attributes(_) => "attributes",
        VaultData::Records(_) => "records",
        VaultData::Data(_) => "data",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{status, ErrorKind, StatusCode};
    use crate::item::InternetPassword;
    use crate::vault::memory::fixtures::VaultFixture;

    /// Answers every lookup with bare secret bytes.
    struct DataOnlyVault;

    impl Vault for DataOnlyVault {
        fn add(&self, _: &Attributes) -> StatusCode {
            status::UNIMPLEMENTED
        }

        fn delete(&self, _: &Attributes) -> StatusCode {
            status::UNIMPLEMENTED
        }

        fn update(&self, _: &Attributes, _: &Attributes) -> StatusCode {
            status::UNIMPLEMENTED
        }

        fn find(&self, _: &Attributes) -> (StatusCode, Option<VaultData>) {
            (status::SUCCESS, Some(VaultData::Data(b"secret".to_vec())))
        }
    }

    fn query(server: &str) -> InternetPassword {
        let mut password = InternetPassword::new();
        password.set_server(server);
        password
    }

    #[test]
    fn returns_attributes_and_data() {
        let fixture = VaultFixture::new().with_internet_password("a.test", "x", "pw");
        let found = run(&fixture.vault, &StoreConfig::default(), query("a.test").item())
            .unwrap()
            .unwrap();

        assert_eq!(found.get(keys::ACCOUNT), Some(&AttrValue::from("x")));
        assert_eq!(found.get(keys::DATA), Some(&AttrValue::from("pw".as_bytes())));
        assert!(found.contains_key(keys::CREATION_DATE));
    }

    #[test]
    fn returns_the_oldest_of_several_matches() {
        let fixture = VaultFixture::new()
            .with_internet_password("a.test", "first", "1")
            .with_internet_password("a.test", "second", "2");
        let found = run(&fixture.vault, &StoreConfig::default(), query("a.test").item())
            .unwrap()
            .unwrap();
        assert_eq!(found.get(keys::ACCOUNT), Some(&AttrValue::from("first")));
    }

    #[test]
    fn no_match_is_not_found() {
        let fixture = VaultFixture::new();
        let result = run(&fixture.vault, &StoreConfig::default(), query("a.test").item());
        assert_eq!(result, Err(ErrorKind::ItemNotFound));
    }

    #[test]
    fn non_mapping_result_is_none() {
        let result = run(&DataOnlyVault, &StoreConfig::default(), query("a.test").item());
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn injected_status_propagates() {
        let fixture = VaultFixture::new().with_internet_password("a.test", "x", "pw");
        fixture.vault.simulate_status(status::INTERACTION_NOT_ALLOWED);
        let result = run(&fixture.vault, &StoreConfig::default(), query("a.test").item());
        assert_eq!(result, Err(ErrorKind::InteractionNotAllowed));
    }
}
