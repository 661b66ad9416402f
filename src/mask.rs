//! Per-family precomputed subnet mask tables

use crate::addr::Address;
use crate::error::Error;

///Subnet mask and its complement for one prefix length
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MaskEntry<A> {
    ///Mask with the `prefix` leading bits set
    pub subnet: A,
    ///Bitwise complement of `subnet`
    pub inverse: A,
}

///Read-only table of every mask of one address family, indexed by prefix
///length
///
///Built once per family behind a `LazyLock` static and never mutated
///afterwards, so lookups are lock-free array indexing.
pub struct MaskTable<A> {
    entries: Vec<MaskEntry<A>>,
}

impl<A: Address> MaskTable<A> {
    ///Builds the table for every prefix length `0..=A::BITS`
    pub(crate) fn build() -> Self {
        let mut entries = Vec::with_capacity(A::BITS as usize + 1);
        for prefix in 0..=A::BITS {
            let subnet = A::prefix_mask(prefix);
            entries.push(MaskEntry {
                subnet,
                inverse: subnet.invert(),
            });
        }
        Self { entries }
    }

    #[inline]
    ///Returns the entry for `prefix`, `None` when it exceeds the family width
    pub fn entry(&self, prefix: u8) -> Option<&MaskEntry<A>> {
        self.entries.get(prefix as usize)
    }

    ///Reverse lookup: the prefix length whose subnet mask is exactly `mask`
    ///
    ///Linear scan over the table; fails with [Error::InvalidMask] when `mask`
    ///is not a contiguous-prefix mask.
    pub fn prefix_of(&self, mask: A) -> Result<u8, Error> {
        self.entries
            .iter()
            .position(|entry| entry.subnet == mask)
            .map(|prefix| prefix as u8)
            .ok_or(Error::InvalidMask)
    }
}

#[inline]
///Returns the subnet mask of `prefix` for the family `A`
pub fn subnet_mask<A: Address>(prefix: u8) -> Result<A, Error> {
    A::masks()
        .entry(prefix)
        .map(|entry| entry.subnet)
        .ok_or(Error::InvalidPrefixLength {
            prefix,
            bits: A::BITS,
        })
}

#[inline]
///Returns the inverse subnet mask of `prefix` for the family `A`
pub fn inverse_mask<A: Address>(prefix: u8) -> Result<A, Error> {
    A::masks()
        .entry(prefix)
        .map(|entry| entry.inverse)
        .ok_or(Error::InvalidPrefixLength {
            prefix,
            bits: A::BITS,
        })
}
