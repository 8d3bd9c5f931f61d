//! The integer capabilities the range summarizer needs from an address.
//!
//! Implemented for `u32` (IPv4) and [`Uint128`] (IPv6), so the greedy
//! covering loop is written once.

use super::{Address, Uint128};
use std::fmt::Debug;

/// Fixed-width unsigned integer backing an address family.
pub trait AddressBits: Copy + Ord + Debug {
    /// Width of the address in bits.
    const BITS: u32;
    const ZERO: Self;
    /// All-ones value, the last address of the family.
    const MAX: Self;

    fn trailing_zeros(self) -> u32;
    fn leading_zeros(self) -> u32;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `2^n`, or zero when `n >= BITS`.
    fn pow2(n: u32) -> Self;

    fn one() -> Self {
        Self::pow2(0)
    }

    /// Wraps the value into its native [`Address`].
    fn to_address(self) -> Address;
}

impl AddressBits for u32 {
    const BITS: u32 = u32::BITS;
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;

    fn trailing_zeros(self) -> u32 {
        u32::trailing_zeros(self)
    }

    fn leading_zeros(self) -> u32 {
        u32::leading_zeros(self)
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        u32::wrapping_sub(self, rhs)
    }

    fn pow2(n: u32) -> Self {
        1u32.checked_shl(n).unwrap_or(0)
    }

    fn to_address(self) -> Address {
        Address::V4(self)
    }
}

impl AddressBits for Uint128 {
    const BITS: u32 = 128;
    const ZERO: Self = Uint128::ZERO;
    const MAX: Self = Uint128::MAX;

    fn trailing_zeros(self) -> u32 {
        Uint128::trailing_zeros(self)
    }

    fn leading_zeros(self) -> u32 {
        Uint128::leading_zeros(self)
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        Uint128::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        Uint128::wrapping_sub(self, rhs)
    }

    fn pow2(n: u32) -> Self {
        Uint128::ONE.lsh(n)
    }

    fn to_address(self) -> Address {
        Address::V6(self)
    }
}
