//! Store operations. Each submodule exposes a `run` function taking the vault,
//! the store configuration, and the items involved; [`crate::api::ItemStore`]
//! only dispatches to them.

use crate::attributes::{keys, AttrValue, Attributes};
use crate::config::StoreConfig;
use crate::error::{classify, Result, StatusCode};
use tracing::debug;

pub mod add;
pub mod delete;
pub mod search;
pub mod update;

/// Turn a vault status into a store result.
pub(crate) fn check(operation: &'static str, code: StatusCode) -> Result<()> {
    match classify(code) {
        None => {
            debug!(operation, "vault call succeeded");
            Ok(())
        }
        Some(kind) => {
            debug!(operation, code, error = %kind, "vault call failed");
            Err(kind)
        }
    }
}

/// Copy of `attributes` with the configured access group filled in, unless
/// the item already names one.
pub(crate) fn scoped(attributes: &Attributes, config: &StoreConfig) -> Attributes {
    let mut scoped = attributes.clone();
    if let Some(group) = &config.access_group {
        scoped
            .entry(keys::ACCESS_GROUP.to_string())
            .or_insert_with(|| AttrValue::from(group.as_str()));
    }
    scoped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{status, ErrorKind};

    #[test]
    fn check_maps_status_codes() {
        assert_eq!(check("add", status::SUCCESS), Ok(()));
        assert_eq!(
            check("add", status::DUPLICATE_ITEM),
            Err(ErrorKind::ItemAlreadyExists)
        );
        assert_eq!(check("find", 12345), Err(ErrorKind::UnknownError));
    }

    #[test]
    fn scoped_fills_missing_access_group() {
        let mut config = StoreConfig::default();
        config.set_access_group("team.shared");

        let scoped = scoped(&Attributes::new(), &config);
        assert_eq!(
            scoped.get(keys::ACCESS_GROUP),
            Some(&AttrValue::from("team.shared"))
        );
    }

    #[test]
    fn scoped_keeps_explicit_access_group() {
        let mut config = StoreConfig::default();
        config.set_access_group("team.shared");

        let mut attributes = Attributes::new();
        attributes.insert(keys::ACCESS_GROUP.into(), "mine".into());
        let scoped = scoped(&attributes, &config);
        assert_eq!(scoped.get(keys::ACCESS_GROUP), Some(&AttrValue::from("mine")));
    }

    #[test]
    fn scoped_without_config_is_a_copy() {
        let mut attributes = Attributes::new();
        attributes.insert(keys::LABEL.into(), "L".into());
        assert_eq!(scoped(&attributes, &StoreConfig::default()), attributes);
    }
}
