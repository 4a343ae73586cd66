// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for topology provisioning

use thiserror::Error;

use crate::domain::{NetworkError, ResourceKind, ValidationError};

/// Errors that can occur while assembling a topology
///
/// Configuration and provider errors are never caught inside the crate; they
/// abort the run and surface from [`crate::TopologyAssembler::assemble`].
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// A descriptor referenced a handle that has not been produced yet,
    /// or the topology layout is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider binding refused a create call
    #[error("Provider rejected {kind} '{logical_id}': {reason}")]
    ProviderRejection {
        kind: ResourceKind,
        logical_id: String,
        reason: String,
    },

    /// CIDR or address parsing failure
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Domain invariant violation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProvisioningError {
    /// Build a provider rejection for the given resource
    pub fn rejection(
        kind: ResourceKind,
        logical_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ProviderRejection {
            kind,
            logical_id: logical_id.into(),
            reason: reason.into(),
        }
    }

    /// Check whether this error came from the provider binding
    pub fn is_provider_rejection(&self) -> bool {
        matches!(self, Self::ProviderRejection { .. })
    }
}

/// Result type for provisioning operations
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

impl From<serde_json::Error> for ProvisioningError {
    fn from(err: serde_json::Error) -> Self {
        ProvisioningError::Serialization(err.to_string())
    }
}
