//! Attribute key constants.
//!
//! Keys use the short four-letter codes credential vaults store on disk.
//! The `r_`/`m_` keys are query control flags, never stored on a record.

/// Class discriminator. Value is one of the [`crate::attributes::ItemClass`] codes.
pub const CLASS: &str = "class";

pub const ACCESSIBLE: &str = "pdmn";
pub const ACCESS_GROUP: &str = "agrp";
pub const COMMENT: &str = "icmt";
pub const CREATION_DATE: &str = "cdat";
pub const MODIFICATION_DATE: &str = "mdat";
pub const DESCRIPTION: &str = "desc";
pub const CREATOR: &str = "crtr";
pub const ITEM_TYPE: &str = "type";
pub const LABEL: &str = "labl";
pub const IS_INVISIBLE: &str = "invi";
pub const IS_NEGATIVE: &str = "nega";
pub const ACCOUNT: &str = "acct";
pub const SERVICE: &str = "svce";
pub const GENERIC: &str = "gena";
pub const SECURITY_DOMAIN: &str = "sdmn";
pub const SERVER: &str = "srvr";
pub const PROTOCOL: &str = "ptcl";
pub const AUTHENTICATION_TYPE: &str = "atyp";
pub const PORT: &str = "port";
pub const PATH: &str = "path";
pub const CERTIFICATE_TYPE: &str = "ctyp";
pub const CERTIFICATE_ENCODING: &str = "cenc";
pub const SUBJECT: &str = "subj";
pub const ISSUER: &str = "issr";
pub const SERIAL_NUMBER: &str = "slnr";
pub const SUBJECT_KEY_ID: &str = "skid";
pub const PUBLIC_KEY_HASH: &str = "pkhh";

/// The secret payload.
pub const DATA: &str = "v_Data";

// Query control flags
pub const RETURN_ATTRIBUTES: &str = "r_Attributes";
pub const RETURN_DATA: &str = "r_Data";
pub const MATCH_LIMIT: &str = "m_Limit";

// Values for MATCH_LIMIT
pub const MATCH_LIMIT_ONE: &str = "m_LimitOne";
pub const MATCH_LIMIT_ALL: &str = "m_LimitAll";

/// Whether `key` is a query control flag rather than a record attribute.
pub fn is_control_key(key: &str) -> bool {
    matches!(key, RETURN_ATTRIBUTES | RETURN_DATA | MATCH_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_keys_are_recognized() {
        assert!(is_control_key(RETURN_ATTRIBUTES));
        assert!(is_control_key(RETURN_DATA));
        assert!(is_control_key(MATCH_LIMIT));
        assert!(!is_control_key(DATA));
        assert!(!is_control_key(CLASS));
    }
}
