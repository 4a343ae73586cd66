// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Naming
//!
//! Every top-level resource carries a human-readable `Name` tag derived from
//! the deployment's naming context: `{system_name}-{env_type}-{suffix}`.
//!
//! Naming is total. An empty system name or environment type yields a name
//! with a missing segment rather than an error; callers that need a strict
//! contract call [`NamingContext::validate`] before assembly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::invariants::{validate_naming_context, ValidationResult};

/// System name and environment type supplied once per deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamingContext {
    system_name: String,
    env_type: String,
}

impl NamingContext {
    pub fn new(system_name: impl Into<String>, env_type: impl Into<String>) -> Self {
        Self {
            system_name: system_name.into(),
            env_type: env_type.into(),
        }
    }

    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    pub fn env_type(&self) -> &str {
        &self.env_type
    }

    /// True when either segment is empty and names will be malformed
    pub fn is_degraded(&self) -> bool {
        self.system_name.is_empty() || self.env_type.is_empty()
    }

    /// Strict check for callers that refuse degraded names
    pub fn validate(&self) -> ValidationResult {
        validate_naming_context(self)
    }

    /// Name for a resource with the given logical suffix
    pub fn name(&self, suffix: &str) -> String {
        resource_name(self, suffix)
    }
}

impl fmt::Display for NamingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.system_name, self.env_type)
    }
}

/// Derive the resource name for `suffix` under `context`
pub fn resource_name(context: &NamingContext, suffix: &str) -> String {
    format!("{}-{}-{}", context.system_name, context.env_type, suffix)
}
