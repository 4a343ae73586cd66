// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory provider binding
//!
//! Records every attempted create call in order and hands out deterministic
//! physical ids (`vpc-00000001`, `subnet-00000002`, ...). Failures can be
//! injected per kind to exercise abort paths.

use std::collections::HashSet;
use tracing::debug;

use super::{CreateRequest, ProviderBinding};
use crate::descriptor::Attributes;
use crate::domain::{Handle, ResourceKind};
use crate::errors::{ProvisioningError, ProvisioningResult};

/// One create call as the provider saw it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub kind: ResourceKind,
    pub logical_id: String,
    pub attributes: Attributes,
    /// Handle returned, `None` when the call was rejected
    pub handle: Option<Handle>,
}

#[derive(Debug, Clone)]
struct InjectedFailure {
    kind: ResourceKind,
    occurrence: usize,
    reason: String,
}

/// Recording provider for tests and dry runs
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    calls: Vec<RecordedCall>,
    logical_ids: HashSet<String>,
    failures: Vec<InjectedFailure>,
    sequence: u32,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the `occurrence`-th (1-based) create call of `kind`
    pub fn fail_on(
        mut self,
        kind: ResourceKind,
        occurrence: usize,
        reason: impl Into<String>,
    ) -> Self {
        self.failures.push(InjectedFailure {
            kind,
            occurrence,
            reason: reason.into(),
        });
        self
    }

    /// All attempted calls in order
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Number of attempted calls of one kind
    pub fn calls_of(&self, kind: ResourceKind) -> usize {
        self.calls.iter().filter(|call| call.kind == kind).count()
    }

    /// Logical ids in call order
    pub fn call_order(&self) -> Vec<&str> {
        self.calls.iter().map(|call| call.logical_id.as_str()).collect()
    }

    /// Recorded call for a logical id
    pub fn call(&self, logical_id: &str) -> Option<&RecordedCall> {
        self.calls.iter().find(|call| call.logical_id == logical_id)
    }

    fn injected_failure(&self, kind: ResourceKind) -> Option<&InjectedFailure> {
        let occurrence = self.calls_of(kind);
        self.failures
            .iter()
            .find(|failure| failure.kind == kind && failure.occurrence == occurrence)
    }
}

impl ProviderBinding for InMemoryProvider {
    fn create(&mut self, request: &CreateRequest<'_>) -> ProvisioningResult<Handle> {
        self.calls.push(RecordedCall {
            kind: request.kind,
            logical_id: request.logical_id.to_string(),
            attributes: request.attributes.clone(),
            handle: None,
        });

        if let Some(failure) = self.injected_failure(request.kind) {
            return Err(ProvisioningError::rejection(
                request.kind,
                request.logical_id,
                failure.reason.clone(),
            ));
        }

        if !self.logical_ids.insert(request.logical_id.to_string()) {
            return Err(ProvisioningError::rejection(
                request.kind,
                request.logical_id,
                "duplicate logical id",
            ));
        }

        self.sequence += 1;
        let handle = Handle::new(format!("{}-{:08x}", request.kind.id_prefix(), self.sequence));
        debug!(
            kind = %request.kind,
            logical_id = request.logical_id,
            handle = %handle,
            "In-memory resource created"
        );

        if let Some(last) = self.calls.last_mut() {
            last.handle = Some(handle.clone());
        }
        Ok(handle)
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
