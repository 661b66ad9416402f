//! Serde support, gated by the `serde` feature
//!
//! Addresses and networks serialize as their display strings and deserialize
//! through `FromStr`, so the wire form matches the textual form.

use core::fmt;
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::addr::Address;
use crate::network::Network;
use crate::IpNetwork;

fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn deserialize_parse<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: fmt::Display,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(D::Error::custom)
}

macro_rules! impl_serde_as_str {
    ($($typ:ty),+) => {
        $(
            impl Serialize for $typ {
                #[inline]
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serialize_display(self, serializer)
                }
            }

            impl<'de> Deserialize<'de> for $typ {
                #[inline]
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserialize_parse(deserializer)
                }
            }
        )+
    };
}

impl_serde_as_str!(crate::v4::Ipv4, crate::v6::Ipv6, IpNetwork);

impl<A: Address> Serialize for Network<A> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

impl<'de, A: Address> Deserialize<'de> for Network<A> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_parse(deserializer)
    }
}
