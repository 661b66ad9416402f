use std::collections::HashSet;
use std::net;

use ip_blocks::{
    inverse_mask, is_rfc1918, merge_containing, merge_neighbors, range_from, subnet_mask, Address,
    Error, IpNetwork, Ipv4, Network, ParseError,
};

fn ip(text: &str) -> Ipv4 {
    text.parse().expect("to parse address")
}

fn block(text: &str) -> Network<Ipv4> {
    text.parse().expect("to parse network")
}

//The blocks must be ascending, contiguous and cover [start, end] exactly
fn assert_covers(start: Ipv4, end: Ipv4, blocks: &[Network<Ipv4>]) {
    assert!(!blocks.is_empty(), "no blocks for {start}..{end}");
    assert_eq!(blocks[0].start(), start, "first block does not start the range");
    assert_eq!(blocks[blocks.len() - 1].end(), end, "last block does not end the range");

    let one = Ipv4::new([0, 0, 0, 1]);
    for pair in blocks.windows(2) {
        assert!(pair[0].end() < pair[1].start(), "blocks overlap or are not ascending");
        assert_eq!(
            pair[0].end().wrapping_add(one),
            pair[1].start(),
            "gap between {} and {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn should_build_v4_mask_table() {
    for prefix in 0..=32 {
        let subnet: Ipv4 = subnet_mask(prefix).expect("to look up subnet mask");
        let inverse: Ipv4 = inverse_mask(prefix).expect("to look up inverse mask");

        assert_eq!(subnet.and(inverse), Ipv4::MIN, "/{prefix} masks overlap");
        assert_eq!(subnet.or(inverse), Ipv4::MAX, "/{prefix} masks do not cover");
        assert_eq!(
            Ipv4::masks().prefix_of(subnet),
            Ok(prefix),
            "/{prefix} reverse lookup failed"
        );
    }

    assert_eq!(
        subnet_mask::<Ipv4>(33),
        Err(Error::InvalidPrefixLength { prefix: 33, bits: 32 })
    );
}

#[test]
fn should_mask_the_supplied_address() {
    let network = Network::new(ip("1.2.3.4"), 24).expect("to create");
    assert_eq!(network.start(), ip("1.2.3.0"));
    assert_eq!(network.end(), ip("1.2.3.255"));
    assert_eq!(network.prefix(), 24);
    assert_eq!(network.subnet_mask(), ip("255.255.255.0"));
    assert_eq!(network.inverse_mask(), ip("0.0.0.255"));
    assert_eq!(network.to_string(), "1.2.3.0/24");

    assert!(network.start() <= network.end());
    assert!(network.contains_addr(network.start()));
    assert!(network.contains_addr(network.end()));
    assert!(!network.contains_addr(ip("1.2.4.0")));

    let error = Network::new(ip("1.2.3.4"), 33).expect_err("to reject prefix");
    assert_eq!(error, Error::InvalidPrefixLength { prefix: 33, bits: 32 });
}

#[test]
fn should_cover_everything_with_zero_prefix() {
    let network = Network::new(ip("0.0.0.0"), 0).expect("to create");
    assert_eq!(network.start(), Ipv4::MIN);
    assert_eq!(network.end(), Ipv4::MAX, "/0 end must be the family maximum");

    for text in ["0.0.0.0", "10.1.2.3", "127.0.0.1", "224.0.0.1", "255.255.255.255"] {
        assert!(network.contains_addr(ip(text)), "{text} not contained in 0.0.0.0/0");
    }
}

#[test]
fn should_construct_from_subnet_mask() {
    let network = Network::with_mask(ip("192.168.2.5"), ip("255.255.255.0")).expect("to create");
    assert_eq!(network, block("192.168.2.0/24"));

    let error = Network::with_mask(ip("192.168.2.5"), ip("255.0.255.0")).expect_err("to reject");
    assert_eq!(error, Error::InvalidMask);
}

#[test]
fn should_split_into_children() {
    let network = block("10.0.0.0/24");
    let children = network.split(26).expect("to split");
    assert_eq!(
        children,
        vec![
            block("10.0.0.0/26"),
            block("10.0.0.64/26"),
            block("10.0.0.128/26"),
            block("10.0.0.192/26"),
        ]
    );
    for child in &children {
        assert!(network.contains(child));
    }

    assert_eq!(network.split(24).expect("to split to itself"), vec![network]);
    assert_eq!(
        network.split(23),
        Err(Error::InvalidSplit { have: 24, want: 23 })
    );
    assert_eq!(
        network.split(33),
        Err(Error::InvalidSplit { have: 24, want: 33 })
    );
}

#[test]
fn should_iterate_every_address() {
    let addresses: Vec<Ipv4> = block("10.0.0.0/30").addresses().collect();
    assert_eq!(
        addresses,
        vec![ip("10.0.0.0"), ip("10.0.0.1"), ip("10.0.0.2"), ip("10.0.0.3")]
    );
}

#[test]
fn should_decompose_aligned_range_into_one_block() {
    let blocks = range_from(ip("10.0.0.0"), ip("10.0.0.255")).expect("to decompose");
    assert_eq!(blocks, vec![block("10.0.0.0/24")]);
}

#[test]
fn should_decompose_single_address_into_host_block() {
    let blocks = range_from(ip("10.0.0.1"), ip("10.0.0.1")).expect("to decompose");
    assert_eq!(blocks, vec![block("10.0.0.1/32")]);
}

#[test]
fn should_decompose_unaligned_range() {
    let blocks = range_from(ip("10.0.0.1"), ip("10.0.0.6")).expect("to decompose");
    assert_eq!(
        blocks,
        vec![
            block("10.0.0.1/32"),
            block("10.0.0.2/31"),
            block("10.0.0.4/31"),
            block("10.0.0.6/32"),
        ]
    );
    assert_covers(ip("10.0.0.1"), ip("10.0.0.6"), &blocks);

    let blocks = range_from(ip("192.168.1.17"), ip("192.168.3.4")).expect("to decompose");
    assert_covers(ip("192.168.1.17"), ip("192.168.3.4"), &blocks);
}

#[test]
fn should_decompose_range_ending_at_family_maximum() {
    let blocks = range_from(ip("255.255.255.254"), Ipv4::MAX).expect("to decompose");
    assert_eq!(blocks, vec![block("255.255.255.254/31")]);

    let blocks = range_from(ip("128.0.0.0"), Ipv4::MAX).expect("to decompose");
    assert_eq!(blocks, vec![block("128.0.0.0/1")]);

    let blocks = range_from(ip("255.255.255.1"), Ipv4::MAX).expect("to decompose");
    assert_covers(ip("255.255.255.1"), Ipv4::MAX, &blocks);

    let blocks = range_from(Ipv4::MIN, Ipv4::MAX).expect("to decompose");
    assert_eq!(blocks, vec![block("0.0.0.0/0")]);
}

#[test]
fn should_reject_reversed_range() {
    let error = range_from(ip("10.0.0.2"), ip("10.0.0.1")).expect_err("to fail");
    assert_eq!(error, Error::StartAfterEnd);
}

#[test]
fn should_merge_contained_networks() {
    let merged = merge_containing([
        block("10.0.0.0/8"),
        block("10.1.0.0/16"),
        block("10.2.3.0/24"),
        block("192.168.1.0/24"),
    ]);
    assert_eq!(
        merged,
        HashSet::from([block("10.0.0.0/8"), block("192.168.1.0/24")])
    );

    //A contains B, A != B
    let merged = merge_containing([block("10.0.0.0/24"), block("10.0.0.0/25")]);
    assert_eq!(merged, HashSet::from([block("10.0.0.0/24")]));
}

#[test]
fn should_merge_sibling_networks() {
    let merged = merge_neighbors([block("192.168.0.0/25"), block("192.168.0.128/25")]);
    assert_eq!(merged, vec![block("192.168.0.0/24")]);

    //cascade: four /26 collapse into one /24
    let merged = merge_neighbors([
        block("192.168.0.64/26"),
        block("192.168.0.192/26"),
        block("192.168.0.0/26"),
        block("192.168.0.128/26"),
    ]);
    assert_eq!(merged, vec![block("192.168.0.0/24")]);

    //adjacent but not siblings of one parent
    let merged = merge_neighbors([block("10.0.0.128/25"), block("10.0.1.0/25")]);
    assert_eq!(merged, vec![block("10.0.0.128/25"), block("10.0.1.0/25")]);
}

#[test]
fn should_roundtrip_split_and_merge() {
    let network = block("10.20.0.0/16");
    for extra in 1..=4 {
        let children = network.split(16 + extra).expect("to split");
        assert_eq!(children.len(), 1 << extra);
        assert_eq!(
            merge_neighbors(children),
            vec![network],
            "split by {extra} bits did not merge back"
        );
    }
}

#[test]
fn should_check_rfc1918_membership() {
    assert!(is_rfc1918(net::IpAddr::V4(net::Ipv4Addr::new(10, 1, 2, 3))));
    assert!(is_rfc1918(net::IpAddr::V4(net::Ipv4Addr::new(172, 16, 0, 1))));
    assert!(is_rfc1918(net::IpAddr::V4(net::Ipv4Addr::new(192, 168, 255, 255))));

    assert!(!is_rfc1918(net::IpAddr::V4(net::Ipv4Addr::new(172, 32, 0, 1))));
    assert!(!is_rfc1918(net::IpAddr::V4(net::Ipv4Addr::new(8, 8, 8, 8))));
    assert!(!is_rfc1918("2001:db8::1".parse().expect("to parse")));
}

#[test]
fn should_parse_network_literals() {
    assert_eq!(block("1.2.3.4/24").to_string(), "1.2.3.0/24");

    let error = "1.2.3.4".parse::<Network<Ipv4>>().expect_err("to fail");
    assert_eq!(error, ParseError::MissingPrefix);

    let error = "hello/24".parse::<Network<Ipv4>>().expect_err("to fail");
    assert_eq!(error, ParseError::InvalidAddress("hello".to_owned()));

    let error = "1.2.3.4/ab".parse::<Network<Ipv4>>().expect_err("to fail");
    assert_eq!(error, ParseError::InvalidPrefix("ab".to_owned()));

    let error = "1.2.3.4/33".parse::<Network<Ipv4>>().expect_err("to fail");
    assert_eq!(
        error,
        ParseError::Invalid(Error::InvalidPrefixLength { prefix: 33, bits: 32 })
    );
}

#[test]
fn should_dispatch_through_erased_layer() {
    let network: IpNetwork = "10.0.0.0/8".parse().expect("to parse");
    assert_eq!(network.prefix(), 8);
    assert_eq!(network.addr(), net::IpAddr::V4(net::Ipv4Addr::new(10, 0, 0, 0)));
    assert_eq!(
        network.last_addr(),
        net::IpAddr::V4(net::Ipv4Addr::new(10, 255, 255, 255))
    );
    assert_eq!(
        network.subnet_mask(),
        net::IpAddr::V4(net::Ipv4Addr::new(255, 0, 0, 0))
    );
    assert_eq!(network.to_string(), "10.0.0.0/8");

    assert!(network.contains("10.1.2.3".parse().expect("to parse")));
    //an address of the other family is never contained
    assert!(!network.contains("::1".parse().expect("to parse")));

    let v4 = net::IpAddr::V4(net::Ipv4Addr::new(10, 0, 0, 0));
    let v6 = net::IpAddr::V6(net::Ipv6Addr::LOCALHOST);
    assert_eq!(IpNetwork::range(v4, v6), Err(Error::FamilyMismatch));

    let blocks = IpNetwork::range(
        "10.0.0.0".parse().expect("to parse"),
        "10.0.0.255".parse().expect("to parse"),
    )
    .expect("to decompose");
    assert_eq!(blocks, vec!["10.0.0.0/24".parse().expect("to parse")]);
}
