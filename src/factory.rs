// Copyright (c) 2025 - Cowboy AI, Inc.
//! Generic Resource Factory
//!
//! Drives a descriptor table through a provider binding.
//!
//! # Creation order
//!
//! ```text
//! for descriptor in table:
//!     attributes (+ Name tag if taggable) ──create──> handle ──register──> registry
//!     for child in descriptor.children:
//!         resolve references ──create(parent handle)──> child handle
//!     on_created(target, handle)
//! ```
//!
//! Calls are issued in table order, depth-first. The first failing call
//! aborts the table; nothing is retried or rolled back.

use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::descriptor::{
    AssociationDescriptor, AttributeValue, Attributes, ChildDescriptor, Reference,
    ResourceDescriptor, RouteDescriptor,
};
use crate::domain::{resource_name, Handle, ResourceKind};
use crate::errors::{ProvisioningError, ProvisioningResult};
use crate::provider::{CreateRequest, ProviderBinding, Scope};

/// Tag key carrying the human-readable resource name
pub const NAME_TAG: &str = "Name";

/// Attribute holding the tag list
pub const TAGS_ATTRIBUTE: &str = "Tags";

/// Handles created so far, keyed by logical id
#[derive(Debug, Clone, Default)]
pub struct HandleRegistry {
    handles: HashMap<String, Handle>,
}

impl HandleRegistry {
    pub fn get(&self, logical_id: &str) -> Option<&Handle> {
        self.handles.get(logical_id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    fn insert(&mut self, logical_id: &str, handle: Handle) {
        self.handles.insert(logical_id.to_string(), handle);
    }

    /// Resolve a reference against the handles created so far
    pub fn resolve(&self, reference: &Reference) -> ProvisioningResult<Handle> {
        match reference {
            Reference::Resolved(handle) => Ok(handle.clone()),
            Reference::Deferred(logical_id) => self.get(logical_id).cloned().ok_or_else(|| {
                ProvisioningError::Configuration(format!(
                    "reference to '{}' resolved before it was created",
                    logical_id
                ))
            }),
        }
    }
}

/// Merge the computed Name tag into a descriptor's attributes
///
/// Tags already present on the descriptor are kept, except a literal `Name`
/// tag which the computed one replaces.
pub fn with_name_tag(attributes: &Attributes, name: &str) -> Attributes {
    let mut merged = attributes.clone();

    let mut tags: Vec<Value> = match attributes.get(TAGS_ATTRIBUTE) {
        Some(AttributeValue::Literal(Value::Array(existing))) => existing
            .iter()
            .filter(|tag| tag.get("Key").and_then(Value::as_str) != Some(NAME_TAG))
            .cloned()
            .collect(),
        _ => Vec::new(),
    };
    tags.insert(0, json!({ "Key": NAME_TAG, "Value": name }));

    merged.insert(
        TAGS_ATTRIBUTE.to_string(),
        AttributeValue::Literal(Value::Array(tags)),
    );
    merged
}

/// Creates descriptor tables through one provider binding
///
/// A single factory spans every stage of a run so deferred references can
/// reach handles from earlier tables.
pub struct ResourceFactory<'s, P: ProviderBinding> {
    provider: P,
    scope: &'s Scope,
    registry: HandleRegistry,
    provider_calls: usize,
}

impl<'s, P: ProviderBinding> ResourceFactory<'s, P> {
    pub fn new(provider: P, scope: &'s Scope) -> Self {
        Self {
            provider,
            scope,
            registry: HandleRegistry::default(),
            provider_calls: 0,
        }
    }

    pub fn scope(&self) -> &Scope {
        self.scope
    }

    pub fn registry(&self) -> &HandleRegistry {
        &self.registry
    }

    /// Number of provider calls issued, including a failed final one
    pub fn provider_calls(&self) -> usize {
        self.provider_calls
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Create every descriptor in table order, storing handles into `target`
    pub fn create_all<'a, T>(
        &mut self,
        target: &mut T,
        descriptors: Vec<ResourceDescriptor<'a, T>>,
    ) -> ProvisioningResult<()> {
        let count = descriptors.len();
        for descriptor in descriptors {
            self.create_one(target, descriptor)?;
        }
        info!(
            descriptors = count,
            provider = self.provider.name(),
            "Descriptor table created"
        );
        Ok(())
    }

    fn create_one<'a, T>(
        &mut self,
        target: &mut T,
        mut descriptor: ResourceDescriptor<'a, T>,
    ) -> ProvisioningResult<()> {
        let attributes = if descriptor.kind.is_taggable() {
            let name = resource_name(self.scope.naming(), &descriptor.name_suffix);
            with_name_tag(&descriptor.attributes, &name)
        } else {
            descriptor.attributes.clone()
        };

        let handle = self.create_resource(descriptor.kind, &descriptor.id, &attributes)?;

        for child in &descriptor.children {
            self.create_child(&handle, child)?;
        }

        if let Some(assign) = descriptor.take_on_created() {
            assign(target, handle);
        }
        Ok(())
    }

    fn create_child(
        &mut self,
        parent: &Handle,
        child: &ChildDescriptor,
    ) -> ProvisioningResult<Handle> {
        let attributes = match child {
            ChildDescriptor::Route(route) => self.route_attributes(parent, route)?,
            ChildDescriptor::Association(association) => {
                self.association_attributes(parent, association)?
            }
        };
        self.create_resource(child.kind(), child.id(), &attributes)
    }

    fn route_attributes(
        &self,
        parent: &Handle,
        route: &RouteDescriptor,
    ) -> ProvisioningResult<Attributes> {
        let mut attributes = Attributes::new();
        attributes.insert("RouteTableId".to_string(), AttributeValue::from(parent));
        attributes.insert(
            "DestinationCidrBlock".to_string(),
            AttributeValue::from(route.destination_cidr_block),
        );

        // Gateway takes precedence; the NAT target is only consulted without one
        if let Some(gateway) = &route.gateway {
            let handle = self.registry.resolve(gateway)?;
            attributes.insert("GatewayId".to_string(), AttributeValue::Ref(handle));
        } else if let Some(nat_gateway) = &route.nat_gateway {
            let handle = self.registry.resolve(nat_gateway)?;
            attributes.insert("NatGatewayId".to_string(), AttributeValue::Ref(handle));
        } else {
            debug!(route = %route.id, "Route created without a target");
        }

        Ok(attributes)
    }

    fn association_attributes(
        &self,
        parent: &Handle,
        association: &AssociationDescriptor,
    ) -> ProvisioningResult<Attributes> {
        let subnet = self.registry.resolve(&association.subnet)?;
        let mut attributes = Attributes::new();
        attributes.insert("RouteTableId".to_string(), AttributeValue::from(parent));
        attributes.insert("SubnetId".to_string(), AttributeValue::Ref(subnet));
        Ok(attributes)
    }

    /// Issue one untagged provider call and register its handle
    pub fn create_resource(
        &mut self,
        kind: ResourceKind,
        logical_id: &str,
        attributes: &Attributes,
    ) -> ProvisioningResult<Handle> {
        self.provider_calls += 1;
        let request = CreateRequest {
            kind,
            scope: self.scope,
            logical_id,
            attributes,
        };
        let handle = self.provider.create(&request)?;

        debug!(kind = %kind, logical_id, handle = %handle, "Resource created");
        self.registry.insert(logical_id, handle.clone());
        Ok(handle)
    }
}
