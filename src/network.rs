//! Immutable network blocks
//!
//! A [Network] pairs an aligned start address with a prefix length; the end
//! address is derived at construction. Values are never mutated after
//! construction.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::addr::Address;
use crate::error::{Error, ParseError};

///An immutable IP network block such as `192.168.2.0/24`
///
///Construction re-masks the supplied address, it never rejects an unaligned
///one: `1.2.3.4/24` becomes `1.2.3.0/24`. Equality considers the covered
///range only; ordering is by start address, larger blocks first among equal
///starts.
#[derive(Copy, Clone)]
pub struct Network<A> {
    start: A,
    end: A,
    prefix: u8,
}

impl<A: Address> Network<A> {
    ///Constructs a network from an address and a prefix length
    ///
    ///The address is masked down to the network start. Fails with
    ///[Error::InvalidPrefixLength] when `prefix` exceeds the family width.
    pub fn new(addr: A, prefix: u8) -> Result<Self, Error> {
        let entry = A::masks()
            .entry(prefix)
            .ok_or(Error::InvalidPrefixLength {
                prefix,
                bits: A::BITS,
            })?;

        let start = addr.and(entry.subnet);
        //a /0 end would wrap if derived by addition, it is the family maximum
        let end = match prefix {
            0 => A::MAX,
            _ => start.or(entry.inverse),
        };

        Ok(Self { start, end, prefix })
    }

    ///Constructs a network from an address and a subnet mask such as
    ///`255.255.255.0`
    ///
    ///Fails with [Error::InvalidMask] when `mask` has non-contiguous bits.
    pub fn with_mask(addr: A, mask: A) -> Result<Self, Error> {
        let prefix = A::masks().prefix_of(mask)?;
        Self::new(addr, prefix)
    }

    #[inline(always)]
    ///Returns the first address of the network
    pub fn start(&self) -> A {
        self.start
    }

    #[inline(always)]
    ///Returns the last address of the network
    pub fn end(&self) -> A {
        self.end
    }

    #[inline(always)]
    ///Returns the prefix length
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    #[inline]
    ///Returns the subnet mask of this network
    pub fn subnet_mask(&self) -> A {
        A::prefix_mask(self.prefix)
    }

    #[inline]
    ///Returns the inverse subnet mask of this network
    pub fn inverse_mask(&self) -> A {
        self.subnet_mask().invert()
    }

    #[inline]
    ///Checks whether `addr` lies within this network
    pub fn contains_addr(&self, addr: A) -> bool {
        addr >= self.start && addr <= self.end
    }

    #[inline]
    ///Checks whether `other` is completely contained in this network
    ///
    ///A network contains itself.
    pub fn contains(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    ///Splits the network into its children at the longer prefix `new_prefix`,
    ///ascending by address
    ///
    ///Splitting to the same prefix yields the network itself. Fails with
    ///[Error::InvalidSplit] when `new_prefix` is shorter than the current
    ///prefix or exceeds the family width.
    pub fn split(&self, new_prefix: u8) -> Result<Vec<Self>, Error> {
        if new_prefix < self.prefix || new_prefix > A::BITS {
            return Err(Error::InvalidSplit {
                have: self.prefix,
                want: new_prefix,
            });
        }
        if new_prefix == self.prefix {
            return Ok(vec![*self]);
        }

        //size of one child block
        let step = A::single_bit(A::BITS - new_prefix);
        let mut blocks = Vec::new();
        let mut cursor = self.start;
        loop {
            blocks.push(Self::new(cursor, new_prefix)?);
            let next = cursor.wrapping_add(step);
            //a wrapped cursor means the child ended at the top of the space
            if next <= cursor || next > self.end {
                break;
            }
            cursor = next;
        }

        Ok(blocks)
    }

    #[inline]
    ///Returns an iterator over every address of the network, ascending
    pub fn addresses(&self) -> Addresses<A> {
        Addresses {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl<A: Address> PartialEq for Network<A> {
    #[inline]
    //the prefix is redundant with the range and excluded from equality
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<A: Address> Eq for Network<A> {}

impl<A: Address> Hash for Network<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<A: Address> Ord for Network<A> {
    //start ascending, larger network first among equal starts
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.prefix.cmp(&other.prefix))
    }
}

impl<A: Address> PartialOrd for Network<A> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Address> fmt::Display for Network<A> {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { start, prefix, .. } = self;
        fmt.write_fmt(format_args!("{start}/{prefix}"))
    }
}

impl<A: Address> fmt::Debug for Network<A> {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

impl<A: Address> FromStr for Network<A> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = split_literal(text)?;
        let addr = A::parse(addr)?;
        Ok(Self::new(addr, prefix)?)
    }
}

///Splits a `addr/prefix` literal into its parts
pub(crate) fn split_literal(text: &str) -> Result<(&str, u8), ParseError> {
    let (addr, prefix) = text.split_once('/').ok_or(ParseError::MissingPrefix)?;
    let prefix = prefix
        .parse()
        .map_err(|_| ParseError::InvalidPrefix(prefix.into()))?;
    Ok((addr, prefix))
}

///Iterator over every address of a network, ascending
///
///Stops cleanly at the top of the address space.
#[derive(Clone, Debug)]
pub struct Addresses<A> {
    next: Option<A>,
    end: A,
}

impl<A: Address> Iterator for Addresses<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match current == self.end {
            true => None,
            false => Some(current.wrapping_add(A::single_bit(0))),
        };
        Some(current)
    }
}
