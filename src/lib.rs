//! Exact arithmetic over IPv4 and IPv6 addresses and CIDR networks.
//!
//! IPv4 addresses are handled as `u32` and IPv6 addresses as [`Uint128`];
//! the algorithms are written once over [`AddressBits`].
//!
//! The main entry point is [`summarize_range`], which covers an inclusive
//! address range with the fewest CIDR blocks:
//!
//! ```
//! use cidr_summary::{ip_octets, summarize_range};
//! let first = ip_octets("::".parse().unwrap());
//! let last = ip_octets("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff".parse().unwrap());
//! assert_eq!(summarize_range(&first, &last).unwrap().strings(), vec!["::/0"]);
//! ```

pub mod error;
pub mod models;
pub mod processing;

pub use error::{IpxError, Result};
pub use models::{
    ip_octets, Address, AddressBits, AddressRange, Family, Network, Networks, Uint128,
};
pub use processing::{
    broadcast, cmp_ip, is_subnet, is_supernet, net_to_range, summarize_addresses, summarize_range,
    supernet, try_cmp_ip,
};
