// Copyright (c) 2025 - Cowboy AI, Inc.
//! Declarative network topology provisioning
//!
//! Expresses a VPC, its subnets, an internet gateway and route tables as
//! descriptor tables consumed by one generic factory, then assembles them in
//! dependency order against a pluggable provider binding.
//!
//! # Example
//!
//! ```rust
//! use cim_network_topology::{
//!     InMemoryProvider, NamingContext, TopologyAssembler, TopologyConfig,
//! };
//!
//! let mut provider = InMemoryProvider::new();
//! let topology = TopologyAssembler::new(
//!     TopologyConfig::default(),
//!     NamingContext::new("sys", "dev"),
//! )
//! .assemble(&mut provider)
//! .unwrap();
//!
//! assert_eq!(topology.subnets().len(), 4);
//! assert_eq!(provider.calls().len(), 15);
//! ```

pub mod config;
pub mod descriptor;
pub mod domain;
pub mod errors;
pub mod factory;
pub mod provider;
pub mod topology;

// Re-export commonly used types
pub use config::{SubnetSpec, TopologyConfig};
pub use descriptor::{
    AttributeValue, Attributes, ChildDescriptor, Reference, ResourceDescriptor, RouteDescriptor,
};
pub use domain::{Handle, Ipv4Cidr, NamingContext, ResourceKind, Visibility};
pub use errors::{ProvisioningError, ProvisioningResult};
pub use factory::{HandleRegistry, ResourceFactory};
pub use provider::{CreateRequest, InMemoryProvider, ProviderBinding, Scope, TemplateProvider};
pub use topology::{ProvisionedTopology, RunSummary, TopologyAssembler};
