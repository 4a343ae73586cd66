// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Topology Domain Models
//!
//! Value objects and pure rules shared by descriptors, the factory and the
//! topology stages.
//!
//! # Value Objects with Invariants
//!
//! - [`Ipv4Cidr`] - IPv4 block with aligned network address
//! - [`AvailabilityZone`] - provider zone name
//! - [`NamingContext`] - system name and environment type
//! - [`ResourceKind`] - provider object taxonomy
//! - [`Handle`] - opaque reference to a created object

pub mod invariants;
pub mod naming;
pub mod network;
pub mod resource_kind;

pub use invariants::{ValidationError, ValidationResult};
pub use naming::{resource_name, NamingContext};
pub use network::{AvailabilityZone, Ipv4Cidr, NetworkError, Visibility};
pub use resource_kind::{Handle, ResourceKind};
