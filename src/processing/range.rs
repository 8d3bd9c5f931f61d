//! Network <-> range conversion and the operations built on it.
//!
//! Every operation here first reconciles the network's address and mask to
//! a single width, see [`net_to_range`].

use crate::error::{IpxError, Result};
use crate::models::{cidr_mask, to4, Address, AddressRange, Network, IPV4_LEN, IPV6_LEN};

/// Reconciles a network's address and mask buffers to one width.
///
/// * a 16-byte mask on a 4-byte address drops its leading 12 bytes when they are all-ones
/// * an IPv4-mapped 16-byte address under a 4-byte mask drops its mapped prefix
fn normalize(network: &Network) -> Result<(&[u8], &[u8])> {
    let mut ip = network.ip();
    let mut mask = network.mask();

    if mask.len() == IPV6_LEN && ip.len() == IPV4_LEN && mask[..12].iter().all(|&b| b == 0xff) {
        mask = &mask[12..];
    }
    if mask.len() == IPV4_LEN && is_v4_mapped(ip) {
        ip = &ip[12..];
    }

    if ip.len() != mask.len() {
        log::warn!(
            "network {network}: {} byte address does not match {} byte mask",
            ip.len(),
            mask.len()
        );
        return Err(IpxError::network(format!(
            "{} byte address does not match {} byte mask",
            ip.len(),
            mask.len()
        )));
    }
    if ip.len() != IPV4_LEN && ip.len() != IPV6_LEN {
        return Err(IpxError::network(format!(
            "{} byte address is neither IPv4 nor IPv6",
            ip.len()
        )));
    }
    Ok((ip, mask))
}

/// Returns the first and last address of `network`.
///
/// # Errors
/// [`IpxError::InvalidNetwork`] when address and mask cannot be reconciled
/// to the same width.
///
/// # Examples
/// ```
/// use cidr_summary::{net_to_range, Network};
/// let net: Network = "10.0.1.0/24".parse().unwrap();
/// let range = net_to_range(&net).unwrap();
/// assert_eq!(range.to_string(), "10.0.1.0-10.0.1.255");
/// ```
pub fn net_to_range(network: &Network) -> Result<AddressRange> {
    let (ip, mask) = normalize(network)?;

    let start: Vec<u8> = ip.iter().zip(mask).map(|(a, m)| a & m).collect();
    let end: Vec<u8> = ip.iter().zip(mask).map(|(a, m)| a | !m).collect();

    let range = AddressRange::from_byte_pair(&start, &end)
        .ok_or_else(|| IpxError::network(format!("cannot decode range of {network}")))?;
    log::debug!("net_to_range({network}) = {range}");
    Ok(range)
}

/// Re-masks `network`'s address to `new_prefix` bits.
///
/// A shorter prefix gives the supernet; the prefix is not required to be
/// shorter than the current one.
///
/// # Errors
/// [`IpxError::InvalidNetwork`] when the network is invalid or `new_prefix`
/// exceeds the address width.
pub fn supernet(network: &Network, new_prefix: u8) -> Result<Network> {
    let (ip, _) = normalize(network)?;
    let bits = ip.len() as u32 * 8;
    let mask = cidr_mask(u32::from(new_prefix), bits).ok_or_else(|| {
        IpxError::network(format!("prefix /{new_prefix} is too long for {bits} bits"))
    })?;
    let base: Vec<u8> = ip.iter().zip(&mask).map(|(a, m)| a & m).collect();
    Ok(Network::from_raw(base, mask))
}

/// Returns the last address of `network`.
///
/// # Errors
/// See [`net_to_range`].
pub fn broadcast(network: &Network) -> Result<Address> {
    Ok(net_to_range(network)?.end)
}

/// True if `candidate` lies entirely inside `network`.
///
/// Reflexive: every network is a subnet of itself. Networks of different
/// families are never related.
///
/// # Errors
/// See [`net_to_range`].
pub fn is_subnet(network: &Network, candidate: &Network) -> Result<bool> {
    let outer = net_to_range(network)?;
    let inner = net_to_range(candidate)?;
    Ok(outer.contains_range(&inner))
}

/// True if `network` lies entirely inside `candidate`.
///
/// Same as `is_subnet(candidate, network)`.
///
/// # Errors
/// See [`net_to_range`].
pub fn is_supernet(network: &Network, candidate: &Network) -> Result<bool> {
    is_subnet(candidate, network)
}

/// Returns true if the buffer holds an IPv4-mapped IPv6 address.
pub fn is_v4_mapped(ip: &[u8]) -> bool {
    ip.len() == IPV6_LEN && to4(ip).is_some()
}
