use super::{item_properties, item_wrapper, SecureItem};
use crate::attributes::{keys, ItemClass};
use chrono::{DateTime, Utc};

/// A password for a network resource, identified by account, server,
/// protocol, authentication type, port, and path (plus the label).
#[derive(Debug, Clone, PartialEq)]
pub struct InternetPassword {
    item: SecureItem,
}

item_wrapper!(InternetPassword, ItemClass::InternetPassword);

impl InternetPassword {
    item_properties! {
        /// User-visible label.
        search label, set_label, clear_label: String => keys::LABEL;
        search account, set_account, clear_account: String => keys::ACCOUNT;
        /// Server domain name or IP address.
        search server, set_server, clear_server: String => keys::SERVER;
        /// Protocol as a four-character code.
        search protocol, set_protocol, clear_protocol: u32 => keys::PROTOCOL;
        /// Authentication scheme as a four-character code.
        search authentication_type, set_authentication_type, clear_authentication_type:
            u32 => keys::AUTHENTICATION_TYPE;
        search port, set_port, clear_port: u16 => keys::PORT;
        /// Path component of the URL.
        search path, set_path, clear_path: String => keys::PATH;

        /// When the item may be read (an accessibility class name).
        plain accessible, set_accessible: String => keys::ACCESSIBLE;
        plain access_group, set_access_group: String => keys::ACCESS_GROUP;
        plain comment, set_comment: String => keys::COMMENT;
        /// What kind of item this is, for display (e.g. "Web form password").
        plain description, set_description: String => keys::DESCRIPTION;
        plain creator, set_creator: u32 => keys::CREATOR;
        plain item_type, set_item_type: u32 => keys::ITEM_TYPE;
        plain is_invisible, set_invisible: bool => keys::IS_INVISIBLE;
        /// Marks an entry that deliberately has no password stored.
        plain is_negative, set_negative: bool => keys::IS_NEGATIVE;
        /// Internet security domain.
        plain security_domain, set_security_domain: String => keys::SECURITY_DOMAIN;
        plain data, set_data: Vec<u8> => keys::DATA;

        read_only creation_date: DateTime<Utc> => keys::CREATION_DATE;
        read_only modification_date: DateTime<Utc> => keys::MODIFICATION_DATE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttrValue;

    fn sample() -> InternetPassword {
        let mut password = InternetPassword::new();
        password.set_label("L");
        password.set_server("www.example.test");
        password.set_account("a@example.test");
        password.set_path("path/to/something/");
        password.set_description("A password for www.example.test");
        password.set_data("secret");
        password
    }

    #[test]
    fn search_properties_populate_search_attributes() {
        let password = sample();
        let search = password.item().search_attributes();

        assert_eq!(search.len(), 5); // class, label, server, account, path
        assert_eq!(search.get(keys::SERVER), Some(&AttrValue::from("www.example.test")));
        assert!(!search.contains_key(keys::DESCRIPTION));
        assert!(!search.contains_key(keys::DATA));
    }

    #[test]
    fn typed_getters_read_back() {
        let mut password = sample();
        password.set_port(8443u16);
        password.set_protocol(0x6874_7470u32);

        assert_eq!(password.server().as_deref(), Some("www.example.test"));
        assert_eq!(password.port(), Some(8443));
        assert_eq!(password.protocol(), Some(0x6874_7470));
        assert_eq!(password.data(), Some(b"secret".to_vec()));
        assert_eq!(password.creation_date(), None);
    }

    #[test]
    fn authentication_type_is_a_search_key() {
        let mut password = InternetPassword::new();
        password.set_authentication_type(0x6874_7470u32);
        assert!(password
            .item()
            .search_attributes()
            .contains_key(keys::AUTHENTICATION_TYPE));
    }

    #[test]
    fn clear_removes_search_key_only() {
        let mut password = sample();
        password.clear_server();

        assert!(!password.item().search_attributes().contains_key(keys::SERVER));
        assert_eq!(password.server().as_deref(), Some("www.example.test"));
    }

    #[test]
    fn converts_from_and_to_secure_item() {
        let item: SecureItem = sample().into();
        let password = InternetPassword::try_from(item).unwrap();
        assert_eq!(password.label().as_deref(), Some("L"));

        let other = SecureItem::new(ItemClass::Certificate);
        assert!(InternetPassword::try_from(other).is_err());
    }
}
