//! Address comparison.

use crate::error::{arg, IpxError, Result};
use crate::models::Address;
use std::cmp::Ordering;

/// Compares two raw addresses of the same family.
///
/// IPv4-mapped IPv6 buffers compare as IPv4.
///
/// # Panics
/// Panics when the two addresses belong to different families or a buffer
/// is not 4 or 16 bytes long. Both are caller bugs; use [`try_cmp_ip`] for
/// input that has not been validated.
pub fn cmp_ip(a: &[u8], b: &[u8]) -> Ordering {
    match try_cmp_ip(a, b) {
        Ok(ordering) => ordering,
        Err(e) => panic!("cmp_ip({a:?}, {b:?}): {e}, IP versions must be the same"),
    }
}

/// Compares two raw addresses, reporting bad input as an error.
///
/// # Errors
/// * [`IpxError::InvalidAddress`] - a buffer has a bad length, `a` is labelled `first`
/// * [`IpxError::VersionMismatch`] - the families differ
pub fn try_cmp_ip(a: &[u8], b: &[u8]) -> Result<Ordering> {
    let a = Address::from_bytes(a).ok_or(IpxError::InvalidAddress(arg::FIRST))?;
    let b = Address::from_bytes(b).ok_or(IpxError::InvalidAddress(arg::LAST))?;
    a.partial_cmp(&b).ok_or(IpxError::VersionMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ip_octets;

    fn ip(s: &str) -> Vec<u8> {
        ip_octets(s.parse().unwrap())
    }

    #[test]
    fn test_cmp_ip() {
        let cases = [
            ("192.168.0.10", "192.168.0.20", Ordering::Less),
            ("192.168.0.20", "192.168.0.10", Ordering::Greater),
            ("192.168.0.10", "192.168.0.10", Ordering::Equal),
            ("180.254.254.254", "190.254.254.254", Ordering::Less),
            ("::ffff:192.168.0.10", "192.168.0.9", Ordering::Greater),
            ("2001:db8::1", "2001:db8::2", Ordering::Less),
            ("2001:db9::", "2001:db8:ffff::", Ordering::Greater),
            ("::1:0:0:0:0", "::ffff:ffff:ffff:ffff", Ordering::Greater),
        ];
        for (a, b, expected) in cases {
            assert_eq!(cmp_ip(&ip(a), &ip(b)), expected, "{a} vs {b}");
        }
    }

    #[test]
    #[should_panic(expected = "IP versions must be the same")]
    fn test_cmp_ip_panics_on_mixed_versions() {
        cmp_ip(&ip("192.168.0.10"), &ip("2001:db8::1"));
    }

    #[test]
    fn test_try_cmp_ip_errors() {
        assert_eq!(
            try_cmp_ip(&ip("192.168.0.10"), &ip("2001:db8::1")),
            Err(IpxError::VersionMismatch)
        );
        assert_eq!(
            try_cmp_ip(&[1, 2], &ip("10.0.0.1")),
            Err(IpxError::InvalidAddress(arg::FIRST))
        );
        assert_eq!(
            try_cmp_ip(&ip("10.0.0.1"), &[]),
            Err(IpxError::InvalidAddress(arg::LAST))
        );
    }
}
