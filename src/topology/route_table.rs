// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stage 4 - Route Tables
//!
//! One table per visibility. The public table's default route targets the
//! internet gateway. The private table's default route is declared with a
//! destination and no target; private egress is left unconfigured.
//!
//! Route targets and subnet associations are deferred references by logical
//! id, resolved by the factory when each child is created.

use crate::descriptor::{ChildDescriptor, Reference, ResourceDescriptor, RouteDescriptor};
use crate::domain::{Handle, Ipv4Cidr, ResourceKind, Visibility};
use crate::errors::ProvisioningResult;
use crate::factory::ResourceFactory;
use crate::provider::ProviderBinding;

use super::internet_gateway::InternetGateway;
use super::subnet::Subnets;
use super::unassigned;
use super::vpc::Vpc;

/// Logical ids and name suffix of one route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTableIds {
    pub table: &'static str,
    pub route: &'static str,
    pub name_suffix: &'static str,
}

/// Ids of the public route table
pub const PUBLIC_ROUTE_TABLE: RouteTableIds = RouteTableIds {
    table: "RouteTablePublic",
    route: "RoutePublic",
    name_suffix: "rtb-public",
};

/// Ids of the private route table
pub const PRIVATE_ROUTE_TABLE: RouteTableIds = RouteTableIds {
    table: "RouteTablePrivate",
    route: "RoutePrivate",
    name_suffix: "rtb-private",
};

impl RouteTableIds {
    pub fn for_visibility(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Public => PUBLIC_ROUTE_TABLE,
            Visibility::Private => PRIVATE_ROUTE_TABLE,
        }
    }
}

#[derive(Debug, Default)]
struct RouteTableSlots {
    public: Option<Handle>,
    private: Option<Handle>,
}

impl RouteTableSlots {
    fn assign(&mut self, visibility: Visibility, handle: Handle) {
        match visibility {
            Visibility::Public => self.public = Some(handle),
            Visibility::Private => self.private = Some(handle),
        }
    }
}

/// The public and private route tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTables {
    public: Handle,
    private: Handle,
}

impl RouteTables {
    /// Create both tables with their default routes and associations
    pub fn create<P: ProviderBinding>(
        factory: &mut ResourceFactory<'_, P>,
        vpc: &Vpc,
        subnets: &Subnets,
        internet_gateway: &InternetGateway,
    ) -> ProvisioningResult<Self> {
        let public_route = RouteDescriptor::new(PUBLIC_ROUTE_TABLE.route, Ipv4Cidr::DEFAULT_ROUTE)
            .with_gateway(Reference::to(internet_gateway.logical_id()));
        let private_route =
            RouteDescriptor::new(PRIVATE_ROUTE_TABLE.route, Ipv4Cidr::DEFAULT_ROUTE);

        let table = [
            (Visibility::Public, public_route),
            (Visibility::Private, private_route),
        ]
        .into_iter()
        .map(|(visibility, route)| {
            let ids = RouteTableIds::for_visibility(visibility);
            ResourceDescriptor::new(ResourceKind::RouteTable, ids.table, ids.name_suffix)
                .attribute("VpcId", vpc.handle())
                .child(ChildDescriptor::route(route))
                .children(subnets.by_visibility(visibility).map(|subnet| {
                    ChildDescriptor::association(
                        subnet.association_id(),
                        Reference::to(subnet.logical_id()),
                    )
                }))
                .on_created(move |slots: &mut RouteTableSlots, handle| {
                    slots.assign(visibility, handle)
                })
        })
        .collect();

        let mut slots = RouteTableSlots::default();
        factory.create_all(&mut slots, table)?;

        Ok(Self {
            public: slots
                .public
                .ok_or_else(|| unassigned(PUBLIC_ROUTE_TABLE.table))?,
            private: slots
                .private
                .ok_or_else(|| unassigned(PRIVATE_ROUTE_TABLE.table))?,
        })
    }

    pub fn public(&self) -> &Handle {
        &self.public
    }

    pub fn private(&self) -> &Handle {
        &self.private
    }

    pub fn handle(&self, visibility: Visibility) -> &Handle {
        match visibility {
            Visibility::Public => &self.public,
            Visibility::Private => &self.private,
        }
    }
}
