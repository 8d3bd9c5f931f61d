//! 128-bit unsigned integer built from two 64-bit halves.
//!
//! All arithmetic wraps modulo 2^128. The range summarizer relies on the
//! wrap at the top of the address space to terminate.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, Not, Shl, Shr, Sub};

/// Unsigned 128-bit value stored as `(hi, lo)` halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uint128 {
    /// Most significant 64 bits.
    pub hi: u64,
    /// Least significant 64 bits.
    pub lo: u64,
}

impl Uint128 {
    pub const ZERO: Uint128 = Uint128::new(0, 0);
    pub const ONE: Uint128 = Uint128::new(0, 1);
    pub const MAX: Uint128 = Uint128::new(u64::MAX, u64::MAX);

    pub const fn new(hi: u64, lo: u64) -> Self {
        Uint128 { hi, lo }
    }

    /// Wrapping addition, carry detected from the low half wrapping.
    #[must_use]
    pub const fn wrapping_add(self, rhs: Uint128) -> Uint128 {
        let lo = self.lo.wrapping_add(rhs.lo);
        let mut hi = self.hi.wrapping_add(rhs.hi);
        if lo < self.lo {
            hi = hi.wrapping_add(1);
        }
        Uint128 { hi, lo }
    }

    /// Wrapping subtraction, borrow detected from the low half wrapping.
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Uint128) -> Uint128 {
        let lo = self.lo.wrapping_sub(rhs.lo);
        let mut hi = self.hi.wrapping_sub(rhs.hi);
        if lo > self.lo {
            hi = hi.wrapping_sub(1);
        }
        Uint128 { hi, lo }
    }

    /// Logical left shift. Shifting by 128 or more yields zero.
    #[must_use]
    pub const fn lsh(self, bits: u32) -> Uint128 {
        match bits {
            0 => self,
            1..=63 => Uint128 {
                hi: (self.hi << bits) | (self.lo >> (64 - bits)),
                lo: self.lo << bits,
            },
            64..=127 => Uint128 {
                hi: self.lo << (bits - 64),
                lo: 0,
            },
            _ => Uint128::ZERO,
        }
    }

    /// Logical right shift. Shifting by 128 or more yields zero.
    #[must_use]
    pub const fn rsh(self, bits: u32) -> Uint128 {
        match bits {
            0 => self,
            1..=63 => Uint128 {
                hi: self.hi >> bits,
                lo: (self.lo >> bits) | (self.hi << (64 - bits)),
            },
            64..=127 => Uint128 {
                hi: 0,
                lo: self.hi >> (bits - 64),
            },
            _ => Uint128::ZERO,
        }
    }

    #[must_use]
    pub const fn and(self, other: Uint128) -> Uint128 {
        Uint128::new(self.hi & other.hi, self.lo & other.lo)
    }

    #[must_use]
    pub const fn or(self, other: Uint128) -> Uint128 {
        Uint128::new(self.hi | other.hi, self.lo | other.lo)
    }

    #[must_use]
    pub const fn not(self) -> Uint128 {
        Uint128::new(!self.hi, !self.lo)
    }

    /// Both halves equal. Same answer as `cmp() == Equal`, without the branches.
    pub const fn equal(self, other: Uint128) -> bool {
        self.hi == other.hi && self.lo == other.lo
    }

    pub const fn is_zero(self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    /// Number of trailing zero bits, 128 for zero.
    pub const fn trailing_zeros(self) -> u32 {
        let z = self.lo.trailing_zeros();
        if z == 64 {
            z + self.hi.trailing_zeros()
        } else {
            z
        }
    }

    /// Number of leading zero bits, 128 for zero.
    pub const fn leading_zeros(self) -> u32 {
        let z = self.hi.leading_zeros();
        if z == 64 {
            z + self.lo.leading_zeros()
        } else {
            z
        }
    }

    /// Reads 16 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 16]) -> Uint128 {
        let (hi, lo) = bytes.split_at(8);
        let mut hi_bytes = [0u8; 8];
        let mut lo_bytes = [0u8; 8];
        hi_bytes.copy_from_slice(hi);
        lo_bytes.copy_from_slice(lo);
        Uint128::new(u64::from_be_bytes(hi_bytes), u64::from_be_bytes(lo_bytes))
    }

    /// Writes 16 big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.hi.to_be_bytes());
        bytes[8..].copy_from_slice(&self.lo.to_be_bytes());
        bytes
    }
}

impl Ord for Uint128 {
    fn cmp(&self, other: &Uint128) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl PartialOrd for Uint128 {
    fn partial_cmp(&self, other: &Uint128) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Uint128 {
    type Output = Uint128;

    fn add(self, rhs: Uint128) -> Uint128 {
        self.wrapping_add(rhs)
    }
}

impl Sub for Uint128 {
    type Output = Uint128;

    fn sub(self, rhs: Uint128) -> Uint128 {
        self.wrapping_sub(rhs)
    }
}

impl Shl<u32> for Uint128 {
    type Output = Uint128;

    fn shl(self, bits: u32) -> Uint128 {
        self.lsh(bits)
    }
}

impl Shr<u32> for Uint128 {
    type Output = Uint128;

    fn shr(self, bits: u32) -> Uint128 {
        self.rsh(bits)
    }
}

impl BitAnd for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: Uint128) -> Uint128 {
        self.and(rhs)
    }
}

impl BitOr for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: Uint128) -> Uint128 {
        self.or(rhs)
    }
}

impl Not for Uint128 {
    type Output = Uint128;

    fn not(self) -> Uint128 {
        Uint128::not(self)
    }
}

impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Uint128::new(0, value)
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Uint128::new((value >> 64) as u64, value as u64)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        (u128::from(value.hi) << 64) | u128::from(value.lo)
    }
}

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", u128::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [u128; 6] = [
        0,
        1,
        u64::MAX as u128,
        (u64::MAX as u128) + 1,
        0x2001_0db8_0000_0000_0000_8a2e_0370_7334,
        u128::MAX,
    ];

    #[test]
    fn test_add_carries_into_high_half() {
        let a = Uint128::new(0, u64::MAX);
        assert_eq!(a + Uint128::ONE, Uint128::new(1, 0));
        assert_eq!(Uint128::MAX + Uint128::ONE, Uint128::ZERO);
    }

    #[test]
    fn test_sub_borrows_from_high_half() {
        let a = Uint128::new(1, 0);
        assert_eq!(a - Uint128::ONE, Uint128::new(0, u64::MAX));
        assert_eq!(Uint128::ZERO - Uint128::ONE, Uint128::MAX);
    }

    #[test]
    fn test_arithmetic_matches_native() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let (ua, ub) = (Uint128::from(a), Uint128::from(b));
                assert_eq!(u128::from(ua + ub), a.wrapping_add(b), "{a} + {b}");
                assert_eq!(u128::from(ua - ub), a.wrapping_sub(b), "{a} - {b}");
                assert_eq!(ua.cmp(&ub), a.cmp(&b), "{a} cmp {b}");
                assert_eq!(ua.equal(ub), a == b);
            }
        }
    }

    #[test]
    fn test_shifts() {
        let v = Uint128::from(0x8000_0000_0000_0001_u128 | (1u128 << 100));
        for bits in [0u32, 1, 63, 64, 65, 127] {
            let native = u128::from(v);
            assert_eq!(u128::from(v << bits), native << bits, "lsh {bits}");
            assert_eq!(u128::from(v >> bits), native >> bits, "rsh {bits}");
        }
        assert_eq!(v << 128, Uint128::ZERO);
        assert_eq!(v >> 200, Uint128::ZERO);
        assert_eq!(Uint128::ONE << 64, Uint128::new(1, 0));
        assert_eq!(Uint128::new(1, 0) >> 64, Uint128::ONE);
    }

    #[test]
    fn test_bitwise() {
        let a = Uint128::new(0xff00, 0x00ff);
        let b = Uint128::new(0x0ff0, 0x0ff0);
        assert_eq!(a & b, Uint128::new(0x0f00, 0x00f0));
        assert_eq!(a | b, Uint128::new(0xfff0, 0x0fff));
        assert_eq!(!Uint128::ZERO, Uint128::MAX);
    }

    #[test]
    fn test_zero_counts() {
        assert_eq!(Uint128::ZERO.trailing_zeros(), 128);
        assert_eq!(Uint128::ZERO.leading_zeros(), 128);
        assert_eq!(Uint128::ONE.trailing_zeros(), 0);
        assert_eq!(Uint128::ONE.leading_zeros(), 127);
        assert_eq!(Uint128::new(1, 0).trailing_zeros(), 64);
        assert_eq!(Uint128::new(1, 0).leading_zeros(), 63);
        assert_eq!(Uint128::MAX.leading_zeros(), 0);
        for &v in &SAMPLES {
            let u = Uint128::from(v);
            assert_eq!(u.trailing_zeros(), v.trailing_zeros());
            assert_eq!(u.leading_zeros(), v.leading_zeros());
        }
    }

    #[test]
    fn test_big_endian_bytes() {
        let bytes = [
            0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0x8a, 0x2e, 0x03, 0x70, 0x73, 0x34,
        ];
        let u = Uint128::from_be_bytes(bytes);
        assert_eq!(u.hi, 0x2001_0db8_0000_0000);
        assert_eq!(u.lo, 0x0000_8a2e_0370_7334);
        assert_eq!(u.to_be_bytes(), bytes);
    }
}
