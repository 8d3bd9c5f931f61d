//! Address and network algorithms.
//!
//! This module contains the operations built on the value types in
//! [`crate::models`]:
//! - [`compare`] - ordering of raw addresses
//! - [`summarize`] - covering an address range with CIDR blocks
//! - [`range`] - network to range conversion, supernet and containment

mod compare;
mod range;
mod summarize;

// Re-export public functions
pub use compare::{cmp_ip, try_cmp_ip};
pub use range::{broadcast, is_subnet, is_supernet, is_v4_mapped, net_to_range, supernet};
pub use summarize::{summarize_addresses, summarize_range};
