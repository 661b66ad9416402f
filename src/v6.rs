//!IPv6 module

crate::addr::define_address! {
    ///IPv6 address, 16 bytes in network byte order
    Ipv6, bytes = 16, std = ::std::net::Ipv6Addr
}
