// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stage 2 - Subnets
//!
//! One descriptor per configured subnet, each parameterized by block and zone
//! and placed in the VPC created by stage 1.

use crate::config::SubnetSpec;
use crate::descriptor::ResourceDescriptor;
use crate::domain::{AvailabilityZone, Handle, Ipv4Cidr, ResourceKind, Visibility};
use crate::errors::ProvisioningResult;
use crate::factory::ResourceFactory;
use crate::provider::ProviderBinding;

use super::unassigned;
use super::vpc::Vpc;

/// A created subnet with the spec it was created from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedSubnet {
    spec: SubnetSpec,
    handle: Handle,
}

impl ProvisionedSubnet {
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn logical_id(&self) -> &str {
        &self.spec.logical_id
    }

    pub fn association_id(&self) -> &str {
        &self.spec.association_id
    }

    pub fn cidr_block(&self) -> Ipv4Cidr {
        self.spec.cidr_block
    }

    pub fn availability_zone(&self) -> &AvailabilityZone {
        &self.spec.availability_zone
    }

    pub fn visibility(&self) -> Visibility {
        self.spec.visibility
    }
}

/// All subnets created by stage 2, in layout order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subnets {
    subnets: Vec<ProvisionedSubnet>,
}

type SubnetSlots = Vec<Option<Handle>>;

impl Subnets {
    /// Create every subnet of `specs` inside `vpc`
    pub fn create<P: ProviderBinding>(
        factory: &mut ResourceFactory<'_, P>,
        vpc: &Vpc,
        specs: &[SubnetSpec],
    ) -> ProvisioningResult<Self> {
        let mut slots: SubnetSlots = vec![None; specs.len()];

        let table = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                ResourceDescriptor::new(ResourceKind::Subnet, &spec.logical_id, &spec.name_suffix)
                    .attribute("CidrBlock", spec.cidr_block)
                    .attribute("VpcId", vpc.handle())
                    .attribute("AvailabilityZone", spec.availability_zone.as_str())
                    .on_created(move |slots: &mut SubnetSlots, handle| {
                        slots[index] = Some(handle)
                    })
            })
            .collect();

        factory.create_all(&mut slots, table)?;

        let subnets = specs
            .iter()
            .zip(slots)
            .map(|(spec, slot)| {
                let handle = slot.ok_or_else(|| unassigned(&spec.logical_id))?;
                Ok(ProvisionedSubnet {
                    spec: spec.clone(),
                    handle,
                })
            })
            .collect::<ProvisioningResult<Vec<_>>>()?;

        Ok(Self { subnets })
    }

    /// Handle of the subnet with `logical_id`
    pub fn handle(&self, logical_id: &str) -> Option<&Handle> {
        self.get(logical_id).map(ProvisionedSubnet::handle)
    }

    pub fn get(&self, logical_id: &str) -> Option<&ProvisionedSubnet> {
        self.subnets.iter().find(|s| s.logical_id() == logical_id)
    }

    /// Subnets of one visibility, in layout order
    pub fn by_visibility(
        &self,
        visibility: Visibility,
    ) -> impl Iterator<Item = &ProvisionedSubnet> {
        self.subnets
            .iter()
            .filter(move |s| s.visibility() == visibility)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProvisionedSubnet> {
        self.subnets.iter()
    }

    pub fn len(&self) -> usize {
        self.subnets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }
}
