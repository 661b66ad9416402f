//! Immutable IP network blocks with range and merge algorithms
//!
//! The core model is a [Network]: an aligned start address plus a prefix
//! length, for both the 4-byte and the 16-byte family. On top of it sit a
//! greedy range-to-CIDR decomposition ([range_from]), containment and
//! buddy-style neighbor merging ([merge_containing], [merge_neighbors]) and
//! block splitting ([Network::split]).
//!
//! Everything is a pure computation over immutable `Copy` values; the only
//! process-wide state is the per-family mask table, built once behind a
//! static and read-only afterwards.

#![warn(missing_docs)]
#![allow(clippy::style)]

pub(crate) mod bits;

pub mod addr;
pub mod mask;
pub mod merge;
pub mod network;
pub mod range;
pub mod v4;
pub mod v6;

mod error;
#[cfg(feature = "serde")]
mod serde_impls;

pub use addr::Address;
pub use error::{Error, ParseError};
pub use mask::{inverse_mask, subnet_mask, MaskEntry, MaskTable};
pub use merge::{merge_containing, merge_neighbors};
pub use network::{Addresses, Network};
pub use range::range_from;
pub use v4::Ipv4;
pub use v6::Ipv6;

use core::str::FromStr;
use core::{fmt, net};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
///Network block of either address family
pub enum IpNetwork {
    ///IPv4 block
    V4(Network<Ipv4>),
    ///IPv6 block
    V6(Network<Ipv6>),
}

impl IpNetwork {
    ///Constructs a new network, masking `addr` down to the block start
    ///
    ///Fails with [Error::InvalidPrefixLength] when `prefix` exceeds the
    ///width of the address family.
    pub fn new(addr: net::IpAddr, prefix: u8) -> Result<Self, Error> {
        match addr {
            net::IpAddr::V4(addr) => Network::new(Ipv4::from(addr), prefix).map(Self::V4),
            net::IpAddr::V6(addr) => Network::new(Ipv6::from(addr), prefix).map(Self::V6),
        }
    }

    #[inline]
    ///Returns the first address of the network
    pub fn addr(&self) -> net::IpAddr {
        match self {
            Self::V4(network) => net::IpAddr::V4(network.start().into()),
            Self::V6(network) => net::IpAddr::V6(network.start().into()),
        }
    }

    #[inline]
    ///Returns the last address of the network
    pub fn last_addr(&self) -> net::IpAddr {
        match self {
            Self::V4(network) => net::IpAddr::V4(network.end().into()),
            Self::V6(network) => net::IpAddr::V6(network.end().into()),
        }
    }

    #[inline]
    ///Returns the prefix length
    pub fn prefix(&self) -> u8 {
        match self {
            Self::V4(network) => network.prefix(),
            Self::V6(network) => network.prefix(),
        }
    }

    #[inline]
    ///Returns the subnet mask of the network
    pub fn subnet_mask(&self) -> net::IpAddr {
        match self {
            Self::V4(network) => net::IpAddr::V4(network.subnet_mask().into()),
            Self::V6(network) => net::IpAddr::V6(network.subnet_mask().into()),
        }
    }

    #[inline]
    ///Checks if a given `addr` is contained within `self`
    ///
    ///An address of the other family is never contained.
    pub fn contains(&self, addr: net::IpAddr) -> bool {
        match (self, addr) {
            (Self::V4(network), net::IpAddr::V4(addr)) => network.contains_addr(addr.into()),
            (Self::V6(network), net::IpAddr::V6(addr)) => network.contains_addr(addr.into()),
            _ => false,
        }
    }

    ///Creates the minimal list of networks covering the inclusive range
    ///`[start, end]`, ascending by address
    ///
    ///Fails with [Error::FamilyMismatch] when the addresses belong to
    ///different families and with [Error::StartAfterEnd] when `start > end`.
    pub fn range(start: net::IpAddr, end: net::IpAddr) -> Result<Vec<Self>, Error> {
        match (start, end) {
            (net::IpAddr::V4(start), net::IpAddr::V4(end)) => {
                let blocks = range_from(Ipv4::from(start), Ipv4::from(end))?;
                Ok(blocks.into_iter().map(Self::V4).collect())
            }
            (net::IpAddr::V6(start), net::IpAddr::V6(end)) => {
                let blocks = range_from(Ipv6::from(start), Ipv6::from(end))?;
                Ok(blocks.into_iter().map(Self::V6).collect())
            }
            _ => Err(Error::FamilyMismatch),
        }
    }
}

impl From<Network<Ipv4>> for IpNetwork {
    #[inline(always)]
    fn from(network: Network<Ipv4>) -> Self {
        Self::V4(network)
    }
}

impl From<Network<Ipv6>> for IpNetwork {
    #[inline(always)]
    fn from(network: Network<Ipv6>) -> Self {
        Self::V6(network)
    }
}

impl fmt::Display for IpNetwork {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(network) => fmt::Display::fmt(network, fmt),
            Self::V6(network) => fmt::Display::fmt(network, fmt),
        }
    }
}

impl FromStr for IpNetwork {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = network::split_literal(text)?;
        let addr: net::IpAddr = addr
            .parse()
            .map_err(|_| ParseError::InvalidAddress(addr.into()))?;
        Ok(Self::new(addr, prefix)?)
    }
}

#[inline]
///Checks whether `addr` lies within one of the private IPv4 networks of
///RFC 1918; an IPv6 address is never private in this sense
pub fn is_rfc1918(addr: net::IpAddr) -> bool {
    match addr {
        net::IpAddr::V4(addr) => v4::is_rfc1918(addr.into()),
        net::IpAddr::V6(_) => false,
    }
}
