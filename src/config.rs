// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Configuration
//!
//! The naming context comes from the deployment environment; the network
//! layout comes from an optional JSON file and otherwise defaults to the
//! standard two-zone layout:
//!
//! | Subnet            | Block          | Zone            | Visibility |
//! |-------------------|----------------|-----------------|------------|
//! | `SubnetPublic1a`  | `10.0.11.0/24` | ap-northeast-1a | public     |
//! | `SubnetPublic1c`  | `10.0.12.0/24` | ap-northeast-1c | public     |
//! | `SubnetPrivate1a` | `10.0.21.0/24` | ap-northeast-1a | private    |
//! | `SubnetPrivate1c` | `10.0.22.0/24` | ap-northeast-1c | private    |

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::path::Path;

use crate::domain::invariants::{
    validate_subnet_blocks, validate_unique_ids, validate_visibility_coverage, ValidationResult,
};
use crate::domain::{AvailabilityZone, Ipv4Cidr, NamingContext, Visibility};
use crate::errors::{ProvisioningError, ProvisioningResult};
use crate::topology::FIXED_LOGICAL_IDS;

/// Environment variable holding the system name
pub const SYSTEM_NAME_VAR: &str = "SYSTEM_NAME";

/// Environment variable holding the environment type
pub const ENV_TYPE_VAR: &str = "ENV_TYPE";

/// Environment variable pointing at a JSON layout file
pub const TOPOLOGY_CONFIG_VAR: &str = "TOPOLOGY_CONFIG";

impl NamingContext {
    /// Load the naming context from environment variables
    ///
    /// Absent values become empty strings; naming degrades instead of failing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the naming context through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(
            lookup(SYSTEM_NAME_VAR).unwrap_or_default(),
            lookup(ENV_TYPE_VAR).unwrap_or_default(),
        )
    }
}

/// One subnet of the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetSpec {
    /// Logical id of the subnet resource
    pub logical_id: String,
    /// Logical id of its route table association
    pub association_id: String,
    /// Suffix for the Name tag
    pub name_suffix: String,
    pub cidr_block: Ipv4Cidr,
    pub availability_zone: AvailabilityZone,
    pub visibility: Visibility,
}

impl SubnetSpec {
    fn standard(visibility: Visibility, zone_letter: char, third_octet: u8) -> Self {
        let title = match visibility {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        };
        Self {
            logical_id: format!("Subnet{}1{}", title, zone_letter),
            association_id: format!("Association{}1{}", title, zone_letter),
            name_suffix: format!("subnet-{}-1{}", visibility, zone_letter),
            cidr_block: Ipv4Cidr::aligned(Ipv4Addr::new(10, 0, third_octet, 0), 24),
            availability_zone: AvailabilityZone::known(&format!("ap-northeast-1{}", zone_letter)),
            visibility,
        }
    }
}

/// Full layout of the network topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Deployment stack identifier
    #[serde(default = "default_stack_id")]
    pub stack_id: String,

    /// Address range of the VPC
    #[serde(default = "default_vpc_cidr")]
    pub vpc_cidr: Ipv4Cidr,

    /// Subnets in creation order
    #[serde(default = "default_subnets")]
    pub subnets: Vec<SubnetSpec>,
}

fn default_stack_id() -> String {
    "NetworkStack".to_string()
}

fn default_vpc_cidr() -> Ipv4Cidr {
    Ipv4Cidr::aligned(Ipv4Addr::new(10, 0, 0, 0), 16)
}

fn default_subnets() -> Vec<SubnetSpec> {
    vec![
        SubnetSpec::standard(Visibility::Public, 'a', 11),
        SubnetSpec::standard(Visibility::Public, 'c', 12),
        SubnetSpec::standard(Visibility::Private, 'a', 21),
        SubnetSpec::standard(Visibility::Private, 'c', 22),
    ]
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            stack_id: default_stack_id(),
            vpc_cidr: default_vpc_cidr(),
            subnets: default_subnets(),
        }
    }
}

impl TopologyConfig {
    /// Parse a layout from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> ProvisioningResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a layout from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ProvisioningResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ProvisioningError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Load the layout named by `TOPOLOGY_CONFIG`, or the default layout
    pub fn from_env() -> ProvisioningResult<Self> {
        match std::env::var(TOPOLOGY_CONFIG_VAR) {
            Ok(path) if !path.is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Check the layout invariants before any resource is created
    pub fn validate(&self) -> ValidationResult {
        validate_unique_ids(
            FIXED_LOGICAL_IDS.iter().copied().chain(
                self.subnets
                    .iter()
                    .flat_map(|s| [s.logical_id.as_str(), s.association_id.as_str()]),
            ),
        )?;
        validate_subnet_blocks(
            &self.vpc_cidr,
            self.subnets
                .iter()
                .map(|s| (s.logical_id.as_str(), &s.cidr_block)),
        )?;
        validate_visibility_coverage(self.subnets.iter().map(|s| s.visibility))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_default_layout() {
        let config = TopologyConfig::default();
        assert_eq!(config.vpc_cidr.to_string(), "10.0.0.0/16");

        let blocks: Vec<_> = config
            .subnets
            .iter()
            .map(|s| {
                (
                    s.logical_id.as_str(),
                    s.cidr_block.to_string(),
                    s.availability_zone.as_str(),
                )
            })
            .collect();
        assert_eq!(
            blocks,
            vec![
                ("SubnetPublic1a", "10.0.11.0/24".to_string(), "ap-northeast-1a"),
                ("SubnetPublic1c", "10.0.12.0/24".to_string(), "ap-northeast-1c"),
                ("SubnetPrivate1a", "10.0.21.0/24".to_string(), "ap-northeast-1a"),
                ("SubnetPrivate1c", "10.0.22.0/24".to_string(), "ap-northeast-1c"),
            ]
        );
        assert_eq!(config.subnets[2].name_suffix, "subnet-private-1a");
        assert_eq!(config.subnets[1].association_id, "AssociationPublic1c");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_defaults_fill_missing_fields() {
        let config = TopologyConfig::from_json_str(r#"{ "stack_id": "Custom" }"#).unwrap();
        assert_eq!(config.stack_id, "Custom");
        assert_eq!(config.subnets, TopologyConfig::default().subnets);
    }

    #[test]
    fn test_json_layout() {
        let config = TopologyConfig::from_json_str(
            r#"{
                "vpc_cidr": "172.16.0.0/16",
                "subnets": [
                    {
                        "logical_id": "SubnetWeb",
                        "association_id": "AssociationWeb",
                        "name_suffix": "subnet-web",
                        "cidr_block": "172.16.1.0/24",
                        "availability_zone": "us-east-1a",
                        "visibility": "public"
                    },
                    {
                        "logical_id": "SubnetDb",
                        "association_id": "AssociationDb",
                        "name_suffix": "subnet-db",
                        "cidr_block": "172.16.2.0/24",
                        "availability_zone": "us-east-1b",
                        "visibility": "private"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.stack_id, "NetworkStack");
        assert_eq!(config.subnets[1].visibility, Visibility::Private);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = TopologyConfig::from_json_str(r#"{ "vpc_cidr": "10.0.0.1/16" }"#).unwrap_err();
        assert!(matches!(err, ProvisioningError::Serialization(_)));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = TopologyConfig::from_file("/nonexistent/topology.json").unwrap_err();
        assert!(matches!(err, ProvisioningError::Configuration(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut config = TopologyConfig::default();
        config.subnets[1].logical_id = "SubnetPublic1a".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::DuplicateLogicalId("SubnetPublic1a".to_string()))
        );
    }

    #[test]
    fn test_subnet_colliding_with_fixed_id_rejected() {
        let mut config = TopologyConfig::default();
        config.subnets[0].association_id = "Vpc".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_naming_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([(SYSTEM_NAME_VAR, "sys")]);
        let ctx = NamingContext::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(ctx.system_name(), "sys");
        assert_eq!(ctx.env_type(), "");
        assert!(ctx.is_degraded());
    }
}
