// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stage 3 - Internet Gateway
//!
//! Two provider calls: create the gateway, then attach it to the VPC. The
//! attachment needs both handles and carries no Name tag.

use crate::descriptor::{AttributeValue, Attributes, ResourceDescriptor};
use crate::domain::{Handle, ResourceKind};
use crate::errors::ProvisioningResult;
use crate::factory::ResourceFactory;
use crate::provider::ProviderBinding;

use super::unassigned;
use super::vpc::Vpc;

/// Logical id of the internet gateway
pub const INTERNET_GATEWAY_ID: &str = "InternetGateway";

/// Logical id of the gateway's VPC attachment
pub const GATEWAY_ATTACHMENT_ID: &str = "VpcGatewayAttachment";

/// The created gateway and its attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternetGateway {
    handle: Handle,
    attachment: Handle,
}

impl InternetGateway {
    /// Create the gateway and attach it to `vpc`
    pub fn create<P: ProviderBinding>(
        factory: &mut ResourceFactory<'_, P>,
        vpc: &Vpc,
    ) -> ProvisioningResult<Self> {
        let mut slot: Option<Handle> = None;
        let table = vec![
            ResourceDescriptor::new(ResourceKind::InternetGateway, INTERNET_GATEWAY_ID, "igw")
                .on_created(|slot: &mut Option<Handle>, handle| *slot = Some(handle)),
        ];
        factory.create_all(&mut slot, table)?;
        let handle = slot.ok_or_else(|| unassigned(INTERNET_GATEWAY_ID))?;

        let attributes = Attributes::from([
            ("VpcId".to_string(), AttributeValue::from(vpc.handle())),
            ("InternetGatewayId".to_string(), AttributeValue::from(&handle)),
        ]);
        let attachment = factory.create_resource(
            ResourceKind::GatewayAttachment,
            GATEWAY_ATTACHMENT_ID,
            &attributes,
        )?;

        Ok(Self { handle, attachment })
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn attachment(&self) -> &Handle {
        &self.attachment
    }

    pub fn logical_id(&self) -> &'static str {
        INTERNET_GATEWAY_ID
    }
}
