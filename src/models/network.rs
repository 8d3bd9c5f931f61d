//! CIDR networks, network lists and inclusive address ranges.
//!
//! A [`Network`] keeps the raw address and mask buffers so that mixed-width
//! encodings (4-byte address with a 16-byte mask and the reverse) survive
//! until they are reconciled by [`crate::net_to_range`].

use super::address::{
    decode128, decode32, encode128, encode32, to4, Address, Family, IPV4_BITS, IPV4_LEN,
    IPV6_BITS, IPV6_LEN,
};
use super::Uint128;
use crate::error::{IpxError, Result};
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::ops::Deref;
use std::str::FromStr;

/// Build a mask of `ones` leading one bits out of `bits` total.
///
/// Returns `None` unless `bits` is 32 or 128 and `ones <= bits`.
///
/// # Examples
/// ```
/// use cidr_summary::models::cidr_mask;
/// assert_eq!(cidr_mask(20, 32).unwrap(), vec![255, 255, 240, 0]);
/// ```
pub fn cidr_mask(ones: u32, bits: u32) -> Option<Vec<u8>> {
    if (bits != 32 && bits != 128) || ones > bits {
        return None;
    }
    let len = (bits / 8) as usize;
    let mask = (0..len)
        .map(|i| {
            let covered = ones.saturating_sub(i as u32 * 8).min(8);
            // 0xff << 8 would overflow
            if covered == 0 {
                0
            } else {
                0xffu8 << (8 - covered)
            }
        })
        .collect();
    Some(mask)
}

/// Number of leading ones of a canonical mask, `None` for a mask with gaps.
pub fn mask_size(mask: &[u8]) -> Option<u32> {
    let mut ones = 0u32;
    let mut seen_zero = false;
    for &byte in mask {
        if seen_zero {
            if byte != 0 {
                return None;
            }
            continue;
        }
        let lead = byte.leading_ones();
        // the remaining bits of a partial byte must all be zero
        if lead < 8 && byte << lead != 0 {
            return None;
        }
        ones += lead;
        seen_zero = lead < 8;
    }
    Some(ones)
}

/// IP network in CIDR form: a base address plus a bit mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    ip: Vec<u8>,
    mask: Vec<u8>,
}

impl Network {
    /// Network of `addr` masked to `prefix` bits.
    pub fn new(addr: Address, prefix: u8) -> Result<Network> {
        let bits = addr.family().bits();
        let mask = cidr_mask(u32::from(prefix), bits).ok_or_else(|| {
            IpxError::network(format!("prefix /{prefix} is too long for {bits} bits"))
        })?;
        let ip = addr
            .to_bytes()
            .iter()
            .zip(&mask)
            .map(|(a, m)| a & m)
            .collect();
        Ok(Network { ip, mask })
    }

    /// Network from raw buffers, which need not have matching widths.
    pub fn from_raw(ip: impl Into<Vec<u8>>, mask: impl Into<Vec<u8>>) -> Network {
        Network {
            ip: ip.into(),
            mask: mask.into(),
        }
    }

    /// Network whose base `addr` is already aligned to `prefix`.
    pub(crate) fn aligned(addr: Address, prefix: u32) -> Network {
        debug_assert!(prefix <= addr.family().bits(), "prefix /{prefix} for {addr}");
        let mask = match addr {
            Address::V4(_) => {
                encode32(u32::MAX.checked_shl(IPV4_BITS - prefix).unwrap_or(0)).to_vec()
            }
            Address::V6(_) => encode128(Uint128::MAX.lsh(IPV6_BITS - prefix)).to_vec(),
        };
        Network {
            ip: addr.to_bytes(),
            mask,
        }
    }

    pub fn ip(&self) -> &[u8] {
        &self.ip
    }

    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// The base address in native form.
    ///
    /// Family follows the width of the network, not the address bytes: a
    /// 16-byte address under a 16-byte mask stays IPv6 even with the
    /// IPv4-mapped prefix. Only a mapped address under a 4-byte mask is IPv4.
    pub fn addr(&self) -> Option<Address> {
        match (self.ip.len(), self.mask.len()) {
            (IPV4_LEN, _) => Address::from_bytes(&self.ip),
            (IPV6_LEN, IPV4_LEN) => to4(&self.ip).map(|v4| Address::V4(decode32(v4))),
            (IPV6_LEN, _) => Some(Address::V6(decode128(self.ip.as_slice().try_into().ok()?))),
            _ => None,
        }
    }

    /// Prefix length, if the mask is canonical.
    pub fn prefix_len(&self) -> Option<u8> {
        mask_size(&self.mask).and_then(|ones| u8::try_from(ones).ok())
    }

    /// Returns true if `addr` falls inside the network.
    ///
    /// Addresses of the other family, and networks that cannot be
    /// reconciled to one width, never contain anything.
    pub fn contains(&self, addr: Address) -> bool {
        crate::net_to_range(self)
            .map(|range| range.contains(addr))
            .unwrap_or(false)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.addr() {
            Some(addr) => write!(f, "{addr}")?,
            None => return write!(f, "<nil>"),
        }
        match mask_size(&self.mask) {
            Some(ones) => write!(f, "/{ones}"),
            None => write!(f, "/{:02x}", self.mask.iter().format("")),
        }
    }
}

impl FromStr for Network {
    type Err = IpxError;

    /// Parses `a.b.c.d/n` or `x::y/n`, masking the address to the prefix.
    fn from_str(cidr: &str) -> Result<Network> {
        let cidr = cidr.trim();
        let (addr, prefix) = cidr
            .split_once('/')
            .ok_or_else(|| IpxError::network(format!("invalid CIDR format: {cidr}")))?;
        let ip: IpAddr = addr
            .parse()
            .map_err(|_| IpxError::network(format!("invalid IP address: {addr}")))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| IpxError::network(format!("invalid prefix length: {prefix}")))?;
        // keep the textual family: "::ffff:a.b.c.d/n" is a /n out of 128 bits
        match ip {
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some() => {
                let mask = cidr_mask(u32::from(prefix), 128).ok_or_else(|| {
                    IpxError::network(format!("prefix /{prefix} is too long for 128 bits"))
                })?;
                let ip = v6.octets().iter().zip(&mask).map(|(a, m)| a & m).collect();
                Ok(Network { ip, mask })
            }
            _ => Network::new(Address::from(ip), prefix),
        }
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(de::Error::custom)
    }
}

/// Ordered list of networks, as produced by range summarization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Networks(pub Vec<Network>);

impl Networks {
    /// Display strings of every network, in order.
    pub fn strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl Deref for Networks {
    type Target = [Network];

    fn deref(&self) -> &[Network] {
        &self.0
    }
}

impl From<Vec<Network>> for Networks {
    fn from(networks: Vec<Network>) -> Self {
        Networks(networks)
    }
}

impl IntoIterator for Networks {
    type Item = Network;
    type IntoIter = std::vec::IntoIter<Network>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Networks {
    type Item = &'a Network;
    type IntoIter = std::slice::Iter<'a, Network>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Networks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(" "))
    }
}

/// Inclusive range of same-family addresses.
///
/// `start > end` is a legal, empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    pub start: Address,
    pub end: Address,
}

impl AddressRange {
    pub fn new(start: Address, end: Address) -> Result<AddressRange> {
        if start.family() != end.family() {
            return Err(IpxError::VersionMismatch);
        }
        Ok(AddressRange { start, end })
    }

    /// Decodes a start/end buffer pair of one width.
    ///
    /// The width alone decides the family: 4 bytes is IPv4 and 16 bytes is
    /// IPv6, mapped prefix or not.
    pub(crate) fn from_byte_pair(start: &[u8], end: &[u8]) -> Option<AddressRange> {
        match (start.len(), end.len()) {
            (IPV4_LEN, IPV4_LEN) => Some(AddressRange {
                start: Address::V4(decode32(start.try_into().ok()?)),
                end: Address::V4(decode32(end.try_into().ok()?)),
            }),
            (IPV6_LEN, IPV6_LEN) => Some(AddressRange {
                start: Address::V6(decode128(start.try_into().ok()?)),
                end: Address::V6(decode128(end.try_into().ok()?)),
            }),
            _ => None,
        }
    }

    pub fn family(&self) -> Family {
        self.start.family()
    }

    /// True when `start > end`.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.start <= addr && addr <= self.end
    }

    /// True if `other` lies entirely inside this range (inclusive).
    pub fn contains_range(&self, other: &AddressRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Minimal ordered list of CIDR blocks covering this range.
    pub fn summarize(&self) -> Result<Networks> {
        crate::processing::summarize_addresses(self.start, self.end)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
