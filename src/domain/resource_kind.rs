// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Resource Kinds and Handles
//!
//! The vocabulary shared by descriptors, the factory and provider bindings:
//! which kind of object is being created, and the opaque handle the provider
//! returns for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of provider objects this crate creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Vpc,
    Subnet,
    InternetGateway,
    GatewayAttachment,
    RouteTable,
    Route,
    SubnetRouteTableAssociation,
}

impl ResourceKind {
    /// All kinds in dependency order
    pub const ALL: [ResourceKind; 7] = [
        Self::Vpc,
        Self::Subnet,
        Self::InternetGateway,
        Self::GatewayAttachment,
        Self::RouteTable,
        Self::Route,
        Self::SubnetRouteTableAssociation,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vpc => "vpc",
            Self::Subnet => "subnet",
            Self::InternetGateway => "internet_gateway",
            Self::GatewayAttachment => "gateway_attachment",
            Self::RouteTable => "route_table",
            Self::Route => "route",
            Self::SubnetRouteTableAssociation => "subnet_route_table_association",
        }
    }

    /// CloudFormation resource type name
    pub fn cfn_type(&self) -> &'static str {
        match self {
            Self::Vpc => "AWS::EC2::VPC",
            Self::Subnet => "AWS::EC2::Subnet",
            Self::InternetGateway => "AWS::EC2::InternetGateway",
            Self::GatewayAttachment => "AWS::EC2::VPCGatewayAttachment",
            Self::RouteTable => "AWS::EC2::RouteTable",
            Self::Route => "AWS::EC2::Route",
            Self::SubnetRouteTableAssociation => "AWS::EC2::SubnetRouteTableAssociation",
        }
    }

    /// Prefix used for provider-style physical ids
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Vpc => "vpc",
            Self::Subnet => "subnet",
            Self::InternetGateway => "igw",
            Self::GatewayAttachment => "igw-attach",
            Self::RouteTable => "rtb",
            Self::Route => "r",
            Self::SubnetRouteTableAssociation => "rtbassoc",
        }
    }

    /// Whether this kind carries a `Name` tag
    pub fn is_taggable(&self) -> bool {
        matches!(
            self,
            Self::Vpc | Self::Subnet | Self::InternetGateway | Self::RouteTable
        )
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to a created provider object
///
/// Depending on the binding this is a physical id (`vpc-00000001`) or the
/// logical id a template refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfn_types_are_distinct() {
        let mut types: Vec<_> = ResourceKind::ALL.iter().map(|k| k.cfn_type()).collect();
        types.sort();
        types.dedup();
        assert_eq!(types.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_taggable_kinds() {
        assert!(ResourceKind::Vpc.is_taggable());
        assert!(ResourceKind::RouteTable.is_taggable());
        assert!(!ResourceKind::Route.is_taggable());
        assert!(!ResourceKind::GatewayAttachment.is_taggable());
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ResourceKind::SubnetRouteTableAssociation).unwrap();
        assert_eq!(json, "\"subnet_route_table_association\"");
    }
}
