//! # Error Taxonomy
//!
//! Vaults report the outcome of every call as a native integer status code.
//! [`classify`] turns those codes into the closed set of [`ErrorKind`]s that
//! store operations return.
//!
//! | Code | Kind |
//! |------|------|
//! | `0` | success (no error) |
//! | `-4` | [`ErrorKind::FunctionNotImplemented`] |
//! | `-50` | [`ErrorKind::InvalidParameters`] |
//! | `-108` | [`ErrorKind::MemoryAllocationFailure`] |
//! | `-25291` | [`ErrorKind::NoTrustResultsAvailable`] |
//! | `-25293` | [`ErrorKind::AuthenticationFailed`] |
//! | `-25299` | [`ErrorKind::ItemAlreadyExists`] |
//! | `-25300` | [`ErrorKind::ItemNotFound`] |
//! | `-25308` | [`ErrorKind::InteractionNotAllowed`] |
//! | `-26275` | [`ErrorKind::DataDecodingFailure`] |
//! | anything else | [`ErrorKind::UnknownError`] |

use thiserror::Error;

/// Native status code returned by a vault primitive.
pub type StatusCode = i32;

/// Known vault status codes.
pub mod status {
    use super::StatusCode;

    pub const SUCCESS: StatusCode = 0;
    pub const UNIMPLEMENTED: StatusCode = -4;
    pub const PARAM: StatusCode = -50;
    pub const ALLOCATE: StatusCode = -108;
    pub const NOT_AVAILABLE: StatusCode = -25291;
    pub const AUTH_FAILED: StatusCode = -25293;
    pub const DUPLICATE_ITEM: StatusCode = -25299;
    pub const ITEM_NOT_FOUND: StatusCode = -25300;
    pub const INTERACTION_NOT_ALLOWED: StatusCode = -25308;
    pub const DECODE: StatusCode = -26275;

    /// Reported for [`super::ErrorKind::UnknownError`]. Not in the table, so it
    /// classifies back to `UnknownError`.
    pub const UNKNOWN: StatusCode = -1;
}

/// Semantic error kinds raised by store operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("No error")]
    NoError,

    #[error("Function or operation not implemented")]
    FunctionNotImplemented,

    #[error("One or more parameters passed to the vault were not valid")]
    InvalidParameters,

    #[error("Failed to allocate memory")]
    MemoryAllocationFailure,

    #[error("No trust results are available")]
    NoTrustResultsAvailable,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("The item already exists")]
    ItemAlreadyExists,

    #[error("The item could not be found")]
    ItemNotFound,

    #[error("Interaction with the vault is not allowed")]
    InteractionNotAllowed,

    #[error("Unable to decode the provided data")]
    DataDecodingFailure,

    #[error("Unknown vault error")]
    UnknownError,
}

impl ErrorKind {
    /// The status code a vault reports for this kind.
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::NoError => status::SUCCESS,
            ErrorKind::FunctionNotImplemented => status::UNIMPLEMENTED,
            ErrorKind::InvalidParameters => status::PARAM,
            ErrorKind::MemoryAllocationFailure => status::ALLOCATE,
            ErrorKind::NoTrustResultsAvailable => status::NOT_AVAILABLE,
            ErrorKind::AuthenticationFailed => status::AUTH_FAILED,
            ErrorKind::ItemAlreadyExists => status::DUPLICATE_ITEM,
            ErrorKind::ItemNotFound => status::ITEM_NOT_FOUND,
            ErrorKind::InteractionNotAllowed => status::INTERACTION_NOT_ALLOWED,
            ErrorKind::DataDecodingFailure => status::DECODE,
            ErrorKind::UnknownError => status::UNKNOWN,
        }
    }
}

/// Classify a vault status code.
///
/// Returns `None` for [`status::SUCCESS`]. Never fails: codes outside the
/// table map to [`ErrorKind::UnknownError`].
pub fn classify(code: StatusCode) -> Option<ErrorKind> {
    let kind = match code {
        status::SUCCESS => return None,
        status::UNIMPLEMENTED => ErrorKind::FunctionNotImplemented,
        status::PARAM => ErrorKind::InvalidParameters,
        status::ALLOCATE => ErrorKind::MemoryAllocationFailure,
        status::NOT_AVAILABLE => ErrorKind::NoTrustResultsAvailable,
        status::AUTH_FAILED => ErrorKind::AuthenticationFailed,
        status::DUPLICATE_ITEM => ErrorKind::ItemAlreadyExists,
        status::ITEM_NOT_FOUND => ErrorKind::ItemNotFound,
        status::INTERACTION_NOT_ALLOWED => ErrorKind::InteractionNotAllowed,
        status::DECODE => ErrorKind::DataDecodingFailure,
        _ => ErrorKind::UnknownError,
    };
    Some(kind)
}

pub type Result<T> = std::result::Result<T, ErrorKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_not_an_error() {
        assert_eq!(classify(0), None);
    }

    #[test]
    fn known_codes_map_to_their_kind() {
        let table = [
            (-4, ErrorKind::FunctionNotImplemented),
            (-50, ErrorKind::InvalidParameters),
            (-108, ErrorKind::MemoryAllocationFailure),
            (-25291, ErrorKind::NoTrustResultsAvailable),
            (-25293, ErrorKind::AuthenticationFailed),
            (-25299, ErrorKind::ItemAlreadyExists),
            (-25300, ErrorKind::ItemNotFound),
            (-25308, ErrorKind::InteractionNotAllowed),
            (-26275, ErrorKind::DataDecodingFailure),
        ];
        for (code, kind) in table {
            assert_eq!(classify(code), Some(kind), "code {}", code);
        }
    }

    #[test]
    fn unknown_codes_are_unknown_error() {
        for code in [1, -1, -25292, -26276, i32::MIN, i32::MAX] {
            assert_eq!(classify(code), Some(ErrorKind::UnknownError));
        }
    }

    #[test]
    fn status_code_reverses_classification() {
        let kinds = [
            ErrorKind::FunctionNotImplemented,
            ErrorKind::InvalidParameters,
            ErrorKind::MemoryAllocationFailure,
            ErrorKind::NoTrustResultsAvailable,
            ErrorKind::AuthenticationFailed,
            ErrorKind::ItemAlreadyExists,
            ErrorKind::ItemNotFound,
            ErrorKind::InteractionNotAllowed,
            ErrorKind::DataDecodingFailure,
            ErrorKind::UnknownError,
        ];
        for kind in kinds {
            assert_eq!(classify(kind.status_code()), Some(kind));
        }
        assert_eq!(classify(ErrorKind::NoError.status_code()), None);
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            ErrorKind::ItemNotFound.to_string(),
            "The item could not be found"
        );
    }
}
