//! Address module
//!
//! The [Address] trait fuses the per-family descriptor (bit width, byte
//! width, maximum address) onto the address value type itself, the same way
//! both supported families share one implementation of every algorithm.

use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

use crate::error::ParseError;
use crate::mask::MaskTable;

///Fixed-width, big-endian, unsigned-integer-like address
///
///Implementations are immutable `Copy` values over a statically sized byte
///array; comparison is unsigned and lexicographic. Bit indices count from 0
///at the least significant bit up to `BITS - 1` at the most significant.
pub trait Address: Copy + Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr<Err = ParseError> + Send + Sync + Sized + 'static {
    ///Address width in bits
    const BITS: u8;
    ///Address width in bytes
    const BYTES: usize;
    ///All-zero address
    const MIN: Self;
    ///Numerically maximum address of the family
    const MAX: Self;

    ///Returns the precomputed mask table of this family
    fn masks() -> &'static MaskTable<Self>;

    ///Parses an address from its textual form
    fn parse(text: &str) -> Result<Self, ParseError>;

    ///Bitwise AND
    fn and(self, rhs: Self) -> Self;

    ///Bitwise OR
    fn or(self, rhs: Self) -> Self;

    ///Bitwise NOT
    fn invert(self) -> Self;

    ///Fixed-width modular addition, carry out of the most significant byte is
    ///discarded
    fn wrapping_add(self, rhs: Self) -> Self;

    ///Address with exactly one bit set at `index`
    fn single_bit(index: u8) -> Self;

    ///Address with the `prefix` leading bits set
    fn prefix_mask(prefix: u8) -> Self;

    ///Index of the lowest set bit, `None` for the zero address
    fn lowest_set_bit(&self) -> Option<u8>;

    ///Index of the highest set bit, `None` for the zero address
    fn highest_set_bit(&self) -> Option<u8>;

    ///Whether every bit is zero
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::MIN
    }
}

macro_rules! define_address {
    ($(#[$meta:meta])* $name:ident, bytes = $bytes:literal, std = $std:ty) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            octets: [u8; $bytes],
        }

        impl $name {
            ///Address width in bits
            pub const BITS: u8 = $bytes * 8;

            ///All-zero address
            pub const MIN: Self = Self {
                octets: [0x00; $bytes],
            };

            ///Numerically maximum address
            pub const MAX: Self = Self {
                octets: [0xff; $bytes],
            };

            #[inline(always)]
            ///Constructs an address from its bytes in network byte order
            pub const fn new(octets: [u8; $bytes]) -> Self {
                Self { octets }
            }

            #[inline(always)]
            ///Returns a copy of the address bytes in network byte order
            pub const fn octets(&self) -> [u8; $bytes] {
                self.octets
            }
        }

        static MASKS: ::std::sync::LazyLock<$crate::mask::MaskTable<$name>> =
            ::std::sync::LazyLock::new($crate::mask::MaskTable::build);

        impl $crate::addr::Address for $name {
            const BITS: u8 = $bytes * 8;
            const BYTES: usize = $bytes;
            const MIN: Self = Self {
                octets: [0x00; $bytes],
            };
            const MAX: Self = Self {
                octets: [0xff; $bytes],
            };

            #[inline]
            fn masks() -> &'static $crate::mask::MaskTable<Self> {
                ::std::sync::LazyLock::force(&MASKS)
            }

            #[inline]
            fn parse(text: &str) -> Result<Self, $crate::error::ParseError> {
                match text.parse::<$std>() {
                    Ok(addr) => Ok(Self::from(addr)),
                    Err(_) => Err($crate::error::ParseError::InvalidAddress(text.into())),
                }
            }

            #[inline]
            fn and(self, rhs: Self) -> Self {
                let mut octets = self.octets;
                $crate::bits::and_assign(&mut octets, &rhs.octets);
                Self { octets }
            }

            #[inline]
            fn or(self, rhs: Self) -> Self {
                let mut octets = self.octets;
                $crate::bits::or_assign(&mut octets, &rhs.octets);
                Self { octets }
            }

            #[inline]
            fn invert(self) -> Self {
                let mut octets = self.octets;
                $crate::bits::invert(&mut octets);
                Self { octets }
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                let mut octets = self.octets;
                $crate::bits::wrapping_add_assign(&mut octets, &rhs.octets);
                Self { octets }
            }

            #[inline]
            fn single_bit(index: u8) -> Self {
                debug_assert!(index < $bytes * 8);
                let mut octets = [0u8; $bytes];
                $crate::bits::set_bit(&mut octets, index);
                Self { octets }
            }

            #[inline]
            fn prefix_mask(prefix: u8) -> Self {
                debug_assert!(prefix <= $bytes * 8);
                let mut octets = [0u8; $bytes];
                $crate::bits::set_leading_bits(&mut octets, prefix);
                Self { octets }
            }

            #[inline]
            fn lowest_set_bit(&self) -> Option<u8> {
                $crate::bits::lowest_set_bit(&self.octets)
            }

            #[inline]
            fn highest_set_bit(&self) -> Option<u8> {
                $crate::bits::highest_set_bit(&self.octets)
            }
        }

        impl From<[u8; $bytes]> for $name {
            #[inline(always)]
            fn from(octets: [u8; $bytes]) -> Self {
                Self { octets }
            }
        }

        impl From<$std> for $name {
            #[inline(always)]
            fn from(addr: $std) -> Self {
                Self {
                    octets: addr.octets(),
                }
            }
        }

        impl From<$name> for $std {
            #[inline(always)]
            fn from(addr: $name) -> Self {
                <$std>::from(addr.octets)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::error::ParseError;

            #[inline(always)]
            fn from_str(text: &str) -> Result<Self, Self::Err> {
                <Self as $crate::addr::Address>::parse(text)
            }
        }

        impl ::core::fmt::Display for $name {
            #[inline(always)]
            fn fmt(&self, fmt: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&<$std>::from(*self), fmt)
            }
        }

        impl ::core::fmt::Debug for $name {
            #[inline(always)]
            fn fmt(&self, fmt: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, fmt)
            }
        }
    };
}

pub(crate) use define_address;
