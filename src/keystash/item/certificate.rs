use super::{item_properties, item_wrapper, SecureItem};
use crate::attributes::{keys, ItemClass};

/// A certificate. Searchable by label only; the X.509 fields are derived by
/// the vault and exposed read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    item: SecureItem,
}

item_wrapper!(Certificate, ItemClass::Certificate);

impl Certificate {
    item_properties! {
        search label, set_label, clear_label: String => keys::LABEL;

        plain accessible, set_accessible: String => keys::ACCESSIBLE;
        plain access_group, set_access_group: String => keys::ACCESS_GROUP;
        /// Certificate type (a CSSM_CERT_TYPE value).
        plain certificate_type, set_certificate_type: u32 => keys::CERTIFICATE_TYPE;
        /// Certificate encoding (a CSSM_CERT_ENCODING value).
        plain certificate_encoding, set_certificate_encoding: u32 => keys::CERTIFICATE_ENCODING;
        /// DER-encoded certificate.
        plain data, set_data: Vec<u8> => keys::DATA;

        /// X.500 subject name.
        read_only subject: Vec<u8> => keys::SUBJECT;
        /// X.500 issuer name.
        read_only issuer: Vec<u8> => keys::ISSUER;
        read_only serial_number: Vec<u8> => keys::SERIAL_NUMBER;
        read_only subject_key_id: Vec<u8> => keys::SUBJECT_KEY_ID;
        /// Hash of the certificate's public key.
        read_only public_key_hash: Vec<u8> => keys::PUBLIC_KEY_HASH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttrValue, Attributes};

    #[test]
    fn label_is_the_only_search_key() {
        let mut cert = Certificate::new();
        cert.set_label("root-ca");
        cert.set_certificate_type(3u32);
        cert.set_data(vec![0x30u8, 0x82]);

        let search = cert.item().search_attributes();
        assert_eq!(search.len(), 2);
        assert!(search.contains_key(keys::LABEL));
    }

    #[test]
    fn derived_fields_are_read_from_vault_records() {
        let mut record = Attributes::new();
        record.insert(keys::CLASS.into(), "cert".into());
        record.insert(keys::ISSUER.into(), AttrValue::Bytes(b"CN=Root".to_vec()));
        record.insert(keys::SERIAL_NUMBER.into(), AttrValue::Bytes(vec![1, 2, 3]));

        let cert = Certificate::try_from(SecureItem::from_record(record).unwrap()).unwrap();
        assert_eq!(cert.issuer(), Some(b"CN=Root".to_vec()));
        assert_eq!(cert.serial_number(), Some(vec![1, 2, 3]));
        assert_eq!(cert.subject(), None);
        assert!(!cert.item().search_attributes().contains_key(keys::ISSUER));
    }
}
