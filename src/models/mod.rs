//! Value types for address arithmetic.
//!
//! This module contains the data structures shared by the processing layer:
//! - [`Uint128`] - 128-bit unsigned integer with wrapping arithmetic
//! - [`AddressBits`] - integer capabilities shared by IPv4 and IPv6 widths
//! - [`Address`] - native integer form of an address, plus the byte codec
//! - [`Network`], [`Networks`] and [`AddressRange`]

mod address;
mod bits;
mod network;
mod uint128;

// Re-export public types
pub use address::{
    decode128, decode32, encode128, encode32, family_of, ip_octets, to4, Address, Family,
    IPV4_BITS, IPV4_LEN, IPV6_BITS, IPV6_LEN, V4_IN_V6_PREFIX,
};
pub use bits::AddressBits;
pub use network::{cidr_mask, mask_size, AddressRange, Network, Networks};
pub use uint128::Uint128;
