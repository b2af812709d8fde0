use super::{item_properties, item_wrapper, SecureItem};
use crate::attributes::{keys, ItemClass};
use chrono::{DateTime, Utc};

/// An application password, identified by account and service (plus the label).
#[derive(Debug, Clone, PartialEq)]
pub struct GenericPassword {
    item: SecureItem,
}

item_wrapper!(GenericPassword, ItemClass::GenericPassword);

impl GenericPassword {
    item_properties! {
        search label, set_label, clear_label: String => keys::LABEL;
        search account, set_account, clear_account: String => keys::ACCOUNT;
        /// The service this password belongs to.
        search service, set_service, clear_service: String => keys::SERVICE;

        plain accessible, set_accessible: String => keys::ACCESSIBLE;
        plain access_group, set_access_group: String => keys::ACCESS_GROUP;
        plain comment, set_comment: String => keys::COMMENT;
        plain description, set_description: String => keys::DESCRIPTION;
        plain creator, set_creator: u32 => keys::CREATOR;
        plain item_type, set_item_type: u32 => keys::ITEM_TYPE;
        plain is_invisible, set_invisible: bool => keys::IS_INVISIBLE;
        plain is_negative, set_negative: bool => keys::IS_NEGATIVE;
        /// Free-form application data stored next to the secret.
        plain generic, set_generic: Vec<u8> => keys::GENERIC;
        plain data, set_data: Vec<u8> => keys::DATA;

        read_only creation_date: DateTime<Utc> => keys::CREATION_DATE;
        read_only modification_date: DateTime<Utc> => keys::MODIFICATION_DATE;
    }
}
