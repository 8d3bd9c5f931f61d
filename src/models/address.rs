//! Address family detection and the byte <-> integer codec.
//!
//! Raw addresses arrive as big-endian buffers of 4 or 16 bytes. A 16-byte
//! buffer carrying the IPv4-mapped prefix (`::ffff:a.b.c.d`) is an IPv4
//! address, so family is decided by content and not by length alone.

use super::Uint128;
use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Byte length of an IPv4 address.
pub const IPV4_LEN: usize = 4;
/// Byte length of an IPv6 address.
pub const IPV6_LEN: usize = 16;
/// Bit width of an IPv4 address.
pub const IPV4_BITS: u32 = 32;
/// Bit width of an IPv6 address.
pub const IPV6_BITS: u32 = 128;

/// Leading 12 bytes of an IPv4-mapped IPv6 address.
pub const V4_IN_V6_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub const fn bits(self) -> u32 {
        match self {
            Family::V4 => IPV4_BITS,
            Family::V6 => IPV6_BITS,
        }
    }

    pub const fn len(self) -> usize {
        match self {
            Family::V4 => IPV4_LEN,
            Family::V6 => IPV6_LEN,
        }
    }
}

/// Returns the 4-byte IPv4 form of `bytes`, if it holds an IPv4 address.
pub fn to4(bytes: &[u8]) -> Option<[u8; 4]> {
    match bytes.len() {
        IPV4_LEN => bytes.try_into().ok(),
        IPV6_LEN if bytes[..12] == V4_IN_V6_PREFIX => bytes[12..].try_into().ok(),
        _ => None,
    }
}

/// Detects the family of a raw address buffer.
pub fn family_of(bytes: &[u8]) -> Option<Family> {
    match bytes.len() {
        IPV4_LEN => Some(Family::V4),
        IPV6_LEN if to4(bytes).is_some() => Some(Family::V4),
        IPV6_LEN => Some(Family::V6),
        _ => None,
    }
}

pub fn decode32(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

pub fn decode128(bytes: [u8; 16]) -> Uint128 {
    Uint128::from_be_bytes(bytes)
}

pub fn encode32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn encode128(value: Uint128) -> [u8; 16] {
    value.to_be_bytes()
}

/// Raw octets of a std address, 4 bytes for IPv4 and 16 for IPv6.
pub fn ip_octets(ip: IpAddr) -> Vec<u8> {
    match ip {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

/// An address in its native integer form.
///
/// Only addresses of the same family are ordered; comparing across
/// families yields `None` from [`PartialOrd::partial_cmp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4(u32),
    V6(Uint128),
}

impl Address {
    /// Decodes a 4 or 16 byte buffer, IPv4-mapped buffers become [`Address::V4`].
    pub fn from_bytes(bytes: &[u8]) -> Option<Address> {
        if let Some(v4) = to4(bytes) {
            return Some(Address::V4(decode32(v4)));
        }
        let v6: [u8; IPV6_LEN] = bytes.try_into().ok()?;
        Some(Address::V6(decode128(v6)))
    }

    /// Encodes to 4 bytes for IPv4 and 16 bytes for IPv6.
    pub fn to_bytes(&self) -> Vec<u8> {
        match *self {
            Address::V4(v) => encode32(v).to_vec(),
            Address::V6(v) => encode128(v).to_vec(),
        }
    }

    pub const fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match *self {
            Address::V4(v) => IpAddr::V4(Ipv4Addr::from(v)),
            Address::V6(v) => IpAddr::V6(Ipv6Addr::from(u128::from(v))),
        }
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        match (self, other) {
            (Address::V4(a), Address::V4(b)) => Some(a.cmp(b)),
            (Address::V6(a), Address::V6(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address::V4(u32::from(ip))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        match ip.to_ipv4_mapped() {
            Some(v4) => Address::from(v4),
            None => Address::V6(Uint128::from(u128::from(ip))),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::from(v4),
            IpAddr::V6(v6) => Address::from(v6),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        addr.to_ip_addr()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ip_addr())
    }
}
