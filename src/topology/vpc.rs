// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stage 1 - VPC

use crate::descriptor::ResourceDescriptor;
use crate::domain::{Handle, Ipv4Cidr, ResourceKind};
use crate::errors::ProvisioningResult;
use crate::factory::ResourceFactory;
use crate::provider::ProviderBinding;

use super::unassigned;

/// Logical id of the VPC
pub const VPC_ID: &str = "Vpc";

/// The created VPC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vpc {
    handle: Handle,
    cidr_block: Ipv4Cidr,
}

impl Vpc {
    /// Create the VPC with the given address range
    pub fn create<P: ProviderBinding>(
        factory: &mut ResourceFactory<'_, P>,
        cidr_block: Ipv4Cidr,
    ) -> ProvisioningResult<Self> {
        let mut slot: Option<Handle> = None;
        let table = vec![ResourceDescriptor::new(ResourceKind::Vpc, VPC_ID, "vpc")
            .attribute("CidrBlock", cidr_block)
            .on_created(|slot: &mut Option<Handle>, handle| *slot = Some(handle))];

        factory.create_all(&mut slot, table)?;

        Ok(Self {
            handle: slot.ok_or_else(|| unassigned(VPC_ID))?,
            cidr_block,
        })
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn cidr_block(&self) -> Ipv4Cidr {
        self.cidr_block
    }
}
