// Copyright (c) 2025 - Cowboy AI, Inc.
//! Properties of subnet address layouts

use cim_network_topology::domain::invariants::validate_subnet_blocks;
use cim_network_topology::{Ipv4Cidr, TopologyConfig};
use proptest::prelude::*;
use std::net::Ipv4Addr;

use crate::fixtures::{cidr, SUBNET_CIDRS, VPC_CIDR};

#[test]
fn test_fixture_subnets_contained_and_disjoint() {
    let vpc = cidr(VPC_CIDR);
    let subnets: Vec<Ipv4Cidr> = SUBNET_CIDRS.iter().map(|s| cidr(s)).collect();

    for (i, subnet) in subnets.iter().enumerate() {
        assert!(vpc.strictly_contains(subnet));
        for other in &subnets[i + 1..] {
            assert!(!subnet.overlaps(other));
        }
    }

    let config = TopologyConfig::default();
    let configured: Vec<Ipv4Cidr> = config.subnets.iter().map(|s| s.cidr_block).collect();
    assert_eq!(configured, subnets);
    assert_eq!(config.vpc_cidr, vpc);
}

fn arb_cidr() -> impl Strategy<Value = Ipv4Cidr> {
    (any::<u32>(), 0u8..=32).prop_map(|(bits, prefix)| {
        let mask = if prefix == 0 { 0 } else { u32::MAX << (32 - u32::from(prefix)) };
        Ipv4Cidr::new(Ipv4Addr::from(bits & mask), prefix).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_parse_display_is_stable(net in arb_cidr()) {
        let reparsed: Ipv4Cidr = net.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, net);
    }

    #[test]
    fn prop_overlap_is_symmetric(a in arb_cidr(), b in arb_cidr()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn prop_containment_implies_overlap(a in arb_cidr(), b in arb_cidr()) {
        if a.contains(&b) {
            prop_assert!(a.overlaps(&b));
            prop_assert!(a.prefix_len() <= b.prefix_len());
        }
    }

    /// Carving /24 blocks out of a /16 always yields a valid layout
    #[test]
    fn prop_distinct_slash24_blocks_are_valid(
        octets in proptest::collection::btree_set(0u8..=255, 1..8),
    ) {
        let vpc = cidr(VPC_CIDR);
        let blocks: Vec<(String, Ipv4Cidr)> = octets
            .iter()
            .map(|o| {
                let block = Ipv4Cidr::new(Ipv4Addr::new(10, 0, *o, 0), 24).unwrap();
                (format!("Subnet{}", o), block)
            })
            .collect();

        prop_assert!(validate_subnet_blocks(
            &vpc,
            blocks.iter().map(|(id, block)| (id.as_str(), block)),
        ).is_ok());
    }
}
