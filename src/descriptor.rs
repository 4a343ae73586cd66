// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Descriptor Model
//!
//! Declarative tables describing same-shaped provider objects. A table is
//! plain data: attributes, nested children and one assignment callback. It is
//! defined before any provider call and consumed in order by
//! [`crate::factory::ResourceFactory::create_all`].
//!
//! ```text
//! ResourceDescriptor ──create──> Handle ──on_created──> caller slot
//!        │
//!        └── ChildDescriptor (Route | Association) ──resolve──> Handle
//! ```
//!
//! Cross-resource references that are not known when the table is written
//! are [`Reference::Deferred`] by logical id and resolved against the
//! factory's handle registry at child-creation time.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{Handle, Ipv4Cidr, ResourceKind};

/// Attribute value handed to a provider binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Literal JSON value
    Literal(Value),
    /// Reference to another created object
    Ref(Handle),
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Literal(Value::String(value))
    }
}

impl From<Handle> for AttributeValue {
    fn from(handle: Handle) -> Self {
        Self::Ref(handle)
    }
}

impl From<&Handle> for AttributeValue {
    fn from(handle: &Handle) -> Self {
        Self::Ref(handle.clone())
    }
}

impl From<Ipv4Cidr> for AttributeValue {
    fn from(cidr: Ipv4Cidr) -> Self {
        Self::Literal(Value::String(cidr.to_string()))
    }
}

/// Provider-facing attribute set, ordered by name
pub type Attributes = BTreeMap<String, AttributeValue>;

/// Reference to another resource's handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Already known when the table was written
    Resolved(Handle),
    /// Looked up by logical id when the child is created
    Deferred(String),
}

impl Reference {
    /// Defer resolution to the resource with `logical_id`
    pub fn to(logical_id: impl Into<String>) -> Self {
        Self::Deferred(logical_id.into())
    }
}

impl From<Handle> for Reference {
    fn from(handle: Handle) -> Self {
        Self::Resolved(handle)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(handle) => write!(f, "{}", handle),
            Self::Deferred(id) => write!(f, "deferred:{}", id),
        }
    }
}

/// Route inside a route table
///
/// At most one target is used. When both are set the gateway wins and the
/// NAT gateway is ignored. With neither, the route has no target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub id: String,
    pub destination_cidr_block: Ipv4Cidr,
    pub gateway: Option<Reference>,
    pub nat_gateway: Option<Reference>,
}

impl RouteDescriptor {
    pub fn new(id: impl Into<String>, destination_cidr_block: Ipv4Cidr) -> Self {
        Self {
            id: id.into(),
            destination_cidr_block,
            gateway: None,
            nat_gateway: None,
        }
    }

    pub fn with_gateway(mut self, gateway: Reference) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn with_nat_gateway(mut self, nat_gateway: Reference) -> Self {
        self.nat_gateway = Some(nat_gateway);
        self
    }
}

/// Binding of a subnet to the parent route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationDescriptor {
    pub id: String,
    pub subnet: Reference,
}

impl AssociationDescriptor {
    pub fn new(id: impl Into<String>, subnet: Reference) -> Self {
        Self {
            id: id.into(),
            subnet,
        }
    }
}

/// Sub-resource created against its parent's handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildDescriptor {
    Route(RouteDescriptor),
    Association(AssociationDescriptor),
}

impl ChildDescriptor {
    pub fn route(route: RouteDescriptor) -> Self {
        Self::Route(route)
    }

    pub fn association(id: impl Into<String>, subnet: Reference) -> Self {
        Self::Association(AssociationDescriptor::new(id, subnet))
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Route(route) => &route.id,
            Self::Association(association) => &association.id,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Route(_) => ResourceKind::Route,
            Self::Association(_) => ResourceKind::SubnetRouteTableAssociation,
        }
    }
}

/// Callback that stores a created handle into the caller's slots
pub type OnCreated<'a, T> = Box<dyn FnOnce(&mut T, Handle) + 'a>;

/// One entry of a descriptor table
///
/// `T` is the caller's slot type that `on_created` writes into.
pub struct ResourceDescriptor<'a, T> {
    pub id: String,
    pub kind: ResourceKind,
    pub name_suffix: String,
    pub attributes: Attributes,
    pub children: Vec<ChildDescriptor>,
    on_created: Option<OnCreated<'a, T>>,
}

impl<'a, T> ResourceDescriptor<'a, T> {
    pub fn new(kind: ResourceKind, id: impl Into<String>, name_suffix: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name_suffix: name_suffix.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            on_created: None,
        }
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: ChildDescriptor) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ChildDescriptor>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_created(mut self, assign: impl FnOnce(&mut T, Handle) + 'a) -> Self {
        self.on_created = Some(Box::new(assign));
        self
    }

    /// Split off the assignment callback, leaving the data part
    pub(crate) fn take_on_created(&mut self) -> Option<OnCreated<'a, T>> {
        self.on_created.take()
    }
}

impl<T> fmt::Debug for ResourceDescriptor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name_suffix", &self.name_suffix)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .field("on_created", &self.on_created.is_some())
            .finish()
    }
}
