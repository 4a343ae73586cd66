// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-network-topology
//!
//! Deterministic naming contexts and layouts shared by the integration suites.

#![allow(dead_code)]

use cim_network_topology::{
    InMemoryProvider, Ipv4Cidr, NamingContext, ProvisionedTopology, ProvisioningResult,
    TopologyAssembler, TopologyConfig,
};

pub const SYSTEM_NAME: &str = "sys";
pub const ENV_TYPE: &str = "dev";

pub const VPC_CIDR: &str = "10.0.0.0/16";
pub const SUBNET_CIDRS: [&str; 4] = [
    "10.0.11.0/24",
    "10.0.12.0/24",
    "10.0.21.0/24",
    "10.0.22.0/24",
];

/// Parse a CIDR literal from a fixture
pub fn cidr(s: &str) -> Ipv4Cidr {
    s.parse().expect("Invalid CIDR in test fixture")
}

/// Naming context `sys` / `dev`
pub fn naming() -> NamingContext {
    NamingContext::new(SYSTEM_NAME, ENV_TYPE)
}

/// Assembler over the default layout
pub fn default_assembler() -> TopologyAssembler {
    TopologyAssembler::new(TopologyConfig::default(), naming())
}

/// Assemble the default layout against `provider`
pub fn assemble(provider: &mut InMemoryProvider) -> ProvisioningResult<ProvisionedTopology> {
    default_assembler().assemble(provider)
}
