// Copyright (c) 2025 - Cowboy AI, Inc.

//! Provider Bindings
//!
//! A provider binding is the boundary to whatever actually materializes
//! resources: a cloud SDK, a template synthesizer, or a test double. The core
//! only knows its inputs (kind, scope, logical id, attributes) and its output
//! (a [`Handle`]).
//!
//! Calls are synchronous and blocking. A binding either returns a handle or a
//! [`ProvisioningError::ProviderRejection`]; the factory never retries.
//!
//! # Bindings
//!
//! - [`InMemoryProvider`] - records every call and hands out physical ids
//! - [`TemplateProvider`] - synthesizes a CloudFormation-style JSON template

pub mod memory;
pub mod template;

pub use memory::{InMemoryProvider, RecordedCall};
pub use template::TemplateProvider;

use crate::descriptor::Attributes;
use crate::domain::{Handle, NamingContext, ResourceKind};
use crate::errors::ProvisioningResult;

/// Deployment scope a resource is created in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    stack_id: String,
    naming: NamingContext,
}

impl Scope {
    pub fn new(stack_id: impl Into<String>, naming: NamingContext) -> Self {
        Self {
            stack_id: stack_id.into(),
            naming,
        }
    }

    pub fn stack_id(&self) -> &str {
        &self.stack_id
    }

    pub fn naming(&self) -> &NamingContext {
        &self.naming
    }
}

/// Single create call as seen by a provider binding
#[derive(Debug, Clone, Copy)]
pub struct CreateRequest<'a> {
    pub kind: ResourceKind,
    pub scope: &'a Scope,
    pub logical_id: &'a str,
    pub attributes: &'a Attributes,
}

/// Materializes resources and returns their handles
pub trait ProviderBinding {
    /// Create one resource
    fn create(&mut self, request: &CreateRequest<'_>) -> ProvisioningResult<Handle>;

    /// Get the name of this binding
    fn name(&self) -> &str;
}

impl<P: ProviderBinding + ?Sized> ProviderBinding for &mut P {
    fn create(&mut self, request: &CreateRequest<'_>) -> ProvisioningResult<Handle> {
        (**self).create(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
