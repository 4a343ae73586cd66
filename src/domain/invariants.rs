// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Topology Invariants
//!
//! All functions are pure (no side effects) and return detailed validation
//! results. The assembler runs them before the first provider call so an
//! unusable layout never produces half a network.
//!
//! # Invariants
//!
//! 1. Every subnet block lies strictly inside the VPC block
//! 2. Subnet blocks are pairwise disjoint
//! 3. Logical ids are unique across the layout
//! 4. Each visibility has at least one subnet

use std::collections::HashSet;

use super::naming::NamingContext;
use super::network::{Ipv4Cidr, Visibility};

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Naming context has an empty segment
    #[error("Naming context missing {field}")]
    IncompleteNamingContext { field: &'static str },

    /// Subnet block is not a strict sub-range of the VPC block
    #[error("Subnet {subnet} ({cidr}) is not inside VPC block {vpc}")]
    SubnetOutsideVpc {
        subnet: String,
        cidr: Ipv4Cidr,
        vpc: Ipv4Cidr,
    },

    /// Two subnet blocks share addresses
    #[error("Subnets {first} and {second} overlap")]
    OverlappingSubnets { first: String, second: String },

    /// Same logical id used twice
    #[error("Duplicate logical id: {0}")]
    DuplicateLogicalId(String),

    /// A route table would have nothing to associate with
    #[error("No {0} subnet defined")]
    MissingVisibility(Visibility),
}

/// Validate the naming context has both segments
pub fn validate_naming_context(context: &NamingContext) -> ValidationResult {
    if context.system_name().is_empty() {
        return Err(ValidationError::IncompleteNamingContext {
            field: "system_name",
        });
    }
    if context.env_type().is_empty() {
        return Err(ValidationError::IncompleteNamingContext { field: "env_type" });
    }
    Ok(())
}

/// Validate subnet blocks against the VPC block and each other
///
/// `subnets` pairs each subnet's logical id with its block.
pub fn validate_subnet_blocks<'a, I>(vpc: &Ipv4Cidr, subnets: I) -> ValidationResult
where
    I: IntoIterator<Item = (&'a str, &'a Ipv4Cidr)>,
{
    let subnets: Vec<_> = subnets.into_iter().collect();

    for (id, cidr) in &subnets {
        if !vpc.strictly_contains(cidr) {
            return Err(ValidationError::SubnetOutsideVpc {
                subnet: id.to_string(),
                cidr: **cidr,
                vpc: *vpc,
            });
        }
    }

    for (i, (first_id, first)) in subnets.iter().enumerate() {
        for (second_id, second) in &subnets[i + 1..] {
            if first.overlaps(second) {
                return Err(ValidationError::OverlappingSubnets {
                    first: first_id.to_string(),
                    second: second_id.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Validate that no logical id appears twice
pub fn validate_unique_ids<'a, I>(ids: I) -> ValidationResult
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateLogicalId(id.to_string()));
        }
    }
    Ok(())
}

/// Validate both route tables will have subnets to associate
pub fn validate_visibility_coverage<I>(visibilities: I) -> ValidationResult
where
    I: IntoIterator<Item = Visibility>,
{
    let present: HashSet<_> = visibilities.into_iter().collect();
    for required in [Visibility::Public, Visibility::Private] {
        if !present.contains(&required) {
            return Err(ValidationError::MissingVisibility(required));
        }
    }
    Ok(())
}
