//!IPv4 module

use std::sync::LazyLock;

use crate::network::Network;

crate::addr::define_address! {
    ///IPv4 address, 4 bytes in network byte order
    Ipv4, bytes = 4, std = ::std::net::Ipv4Addr
}

///The private IPv4 networks according to RFC 1918
static RFC_1918_NETWORKS: LazyLock<[Network<Ipv4>; 3]> = LazyLock::new(|| {
    ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]
        .map(|block| block.parse().expect("valid RFC 1918 literal"))
});

///Checks whether `addr` lies within one of the private networks of RFC 1918
///(`10.0.0.0/8`, `172.16.0.0/12`, `192.168.0.0/16`)
pub fn is_rfc1918(addr: Ipv4) -> bool {
    RFC_1918_NETWORKS
        .iter()
        .any(|network| network.contains_addr(addr))
}
