//! Error types for address and network operations.

use thiserror::Error;

/// Error type for range summarization and network conversion.
///
/// Every operation is pure, so none of these are worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IpxError {
    /// Operands span both address families where one family is required.
    #[error("IP version mismatch")]
    VersionMismatch,

    /// An address buffer is neither 4 nor 16 bytes long.
    ///
    /// Carries the label of the offending argument, see [`arg`].
    #[error("invalid IP address: {0}")]
    InvalidAddress(&'static str),

    /// A network whose address and mask cannot be reconciled.
    #[error("bad IP network: {reason}")]
    InvalidNetwork {
        /// Reason for invalidity
        reason: String,
    },
}

/// Argument labels used by [`IpxError::InvalidAddress`].
pub mod arg {
    /// The first (lower) address of a range.
    pub const FIRST: &str = "first";
    /// The last (upper) address of a range.
    pub const LAST: &str = "last";
}

impl IpxError {
    /// Creates an `InvalidNetwork` error.
    #[must_use]
    pub fn network(reason: impl Into<String>) -> Self {
        Self::InvalidNetwork {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IpxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mismatch_message() {
        assert_eq!(IpxError::VersionMismatch.to_string(), "IP version mismatch");
    }

    #[test]
    fn test_invalid_address_names_argument() {
        let err = IpxError::InvalidAddress(arg::LAST);
        assert_eq!(err.to_string(), "invalid IP address: last");
    }

    #[test]
    fn test_invalid_network_reason() {
        let err = IpxError::network("mask is 16 bytes, address is 4 bytes");
        assert!(err.to_string().starts_with("bad IP network: "));
        assert!(err.to_string().contains("16 bytes"));
    }
}
