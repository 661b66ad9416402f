//! Error taxonomy
//!
//! Every error is a synchronous validation failure surfaced at the call that
//! violates a precondition; a failed call has no effect.

use thiserror::Error;

///Validation failure of a network operation
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    ///Prefix length exceeds the bit width of the address family
    #[error("prefix length {prefix} is out of range for a {bits}-bit address")]
    InvalidPrefixLength {
        ///The rejected prefix length
        prefix: u8,
        ///Bit width of the address family
        bits: u8,
    },
    ///Supplied mask is not a contiguous-prefix mask of its family
    #[error("address is not a contiguous network mask")]
    InvalidMask,
    ///Range start is greater than range end
    #[error("start address must not be greater than end address")]
    StartAfterEnd,
    ///Requested split prefix is shorter than the current prefix or exceeds
    ///the family width
    #[error("cannot split a /{have} network into /{want} blocks")]
    InvalidSplit {
        ///Prefix length of the network being split
        have: u8,
        ///Requested child prefix length
        want: u8,
    },
    ///Operands belong to different address families
    #[error("address families of the operands do not match")]
    FamilyMismatch,
}

///Failure to parse an address or network literal
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    ///Text is not a valid address of the expected family
    #[error("'{0}' is not a valid IP address")]
    InvalidAddress(String),
    ///Network literal lacks the `/` prefix separator
    #[error("missing '/' separator in network literal")]
    MissingPrefix,
    ///Prefix part of the literal is not a number
    #[error("'{0}' is not a valid prefix length")]
    InvalidPrefix(String),
    ///Literal parsed but the resulting network is invalid
    #[error(transparent)]
    Invalid(#[from] Error),
}
