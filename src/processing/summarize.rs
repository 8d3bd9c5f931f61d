//! Range summarization.
//!
//! Covers an inclusive address range with the fewest CIDR blocks by
//! repeatedly taking the biggest aligned block that starts at the next
//! uncovered address and does not run past the end of the range.

use crate::error::{arg, IpxError, Result};
use crate::models::{Address, AddressBits, Network, Networks};

/// Returns the networks which cover `first..=last`, in order.
///
/// Both buffers must be 4 or 16 bytes. A 16-byte IPv4-mapped address counts
/// as IPv4. `first > last` gives an empty list, not an error.
///
/// # Errors
/// * [`IpxError::InvalidAddress`] - a buffer has a bad length; `first` is checked before `last`
/// * [`IpxError::VersionMismatch`] - one end is IPv4 and the other IPv6
///
/// # Examples
/// ```
/// use cidr_summary::{ip_octets, summarize_range};
/// let first = ip_octets("192.0.2.0".parse().unwrap());
/// let last = ip_octets("192.0.2.130".parse().unwrap());
/// let networks = summarize_range(&first, &last).unwrap();
/// assert_eq!(networks.to_string(), "[192.0.2.0/25 192.0.2.128/31 192.0.2.130/32]");
/// ```
pub fn summarize_range(first: &[u8], last: &[u8]) -> Result<Networks> {
    let first = Address::from_bytes(first).ok_or(IpxError::InvalidAddress(arg::FIRST))?;
    let last = Address::from_bytes(last).ok_or(IpxError::InvalidAddress(arg::LAST))?;
    summarize_addresses(first, last)
}

/// Same as [`summarize_range`] for addresses already in native form.
pub fn summarize_addresses(first: Address, last: Address) -> Result<Networks> {
    let networks = match (first, last) {
        (Address::V4(first), Address::V4(last)) => summarize(first, last),
        (Address::V6(first), Address::V6(last)) => summarize(first, last),
        _ => return Err(IpxError::VersionMismatch),
    };
    log::debug!(
        "summarized {first}-{last} into {} network(s)",
        networks.len()
    );
    Ok(networks)
}

/// Greedy covering loop, shared by both address widths.
fn summarize<T: AddressBits>(mut first: T, last: T) -> Networks {
    let mut networks = Vec::new();

    while first <= last {
        let n = block_bits(first, last);
        let network = Network::aligned(first.to_address(), T::BITS - n);
        log::trace!("summarize: {network}");
        networks.push(network);

        first = first.wrapping_add(T::pow2(n));
        if first == T::ZERO {
            // wrapped past the last address of the space
            break;
        }
    }

    Networks(networks)
}

/// Size, in host bits, of the biggest block starting at `first` that ends
/// at or before `last`.
///
/// The block is constrained by:
/// 1. The alignment of `first` (its trailing zeros)
/// 2. The distance to `last`, skipped for the whole address space where
///    `last - first + 1` would overflow
fn block_bits<T: AddressBits>(first: T, last: T) -> u32 {
    let alignment = first.trailing_zeros().min(T::BITS);
    if first == T::ZERO && last == T::MAX {
        return alignment;
    }
    let distance = last.wrapping_sub(first).wrapping_add(T::one());
    let fits = T::BITS - 1 - distance.leading_zeros();
    alignment.min(fits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Uint128;

    #[test]
    fn test_block_bits_alignment() {
        // 10.6.2.80 ends in 0101_0000, so at most a /28
        let first = 0x0a06_0250_u32;
        assert_eq!(block_bits(first, 0x0a06_08ff), 4);
        // 10.0.0.0 up to 10.11.16.255 fits a /13 at most
        assert_eq!(block_bits(0x0a00_0000_u32, 0x0a0b_10ff), 19);
    }

    #[test]
    fn test_block_bits_whole_space() {
        assert_eq!(block_bits(0u32, u32::MAX), 32);
        assert_eq!(block_bits(Uint128::ZERO, Uint128::MAX), 128);
        assert_eq!(block_bits(1u32, u32::MAX), 0);
        assert_eq!(block_bits(0u32, u32::MAX - 1), 31);
    }

    #[test]
    fn test_summarize_stops_at_top_of_space() {
        let networks = summarize(0xffff_fffe_u32, u32::MAX);
        assert_eq!(networks.strings(), vec!["255.255.255.254/31"]);

        let networks = summarize(Uint128::MAX, Uint128::MAX);
        assert_eq!(
            networks.strings(),
            vec!["ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff/128"]
        );
    }

    #[test]
    fn test_summarize_empty_when_reversed() {
        assert!(summarize(10u32, 9).is_empty());
        assert!(summarize(Uint128::new(0, 0x200), Uint128::new(0, 0x100)).is_empty());
    }

    #[test]
    fn test_worst_case_emits_one_block_per_bit() {
        assert_eq!(summarize(1u32, u32::MAX).len(), 32);
        assert_eq!(summarize(Uint128::ONE, Uint128::MAX).len(), 128);
    }

    #[test]
    fn test_summarize_addresses_version_mismatch() {
        let err = summarize_addresses(Address::V4(0), Address::V6(Uint128::ONE)).unwrap_err();
        assert_eq!(err, IpxError::VersionMismatch);
    }
}
