// Copyright (c) 2025 - Cowboy AI, Inc.

//! Template provider binding
//!
//! Synthesizes a CloudFormation-style template instead of calling a live API.
//! Handles are logical ids; attributes that reference other resources render
//! as `{"Ref": "<LogicalId>"}`.
//!
//! ```text
//! F(Vpc)    = Resources.Vpc    { Type: AWS::EC2::VPC,    Properties }
//! F(Subnet) = Resources.Subnet { Type: AWS::EC2::Subnet, Properties.VpcId: {Ref: Vpc} }
//! ```

use serde_json::{json, Map, Value};
use tracing::debug;

use super::{CreateRequest, ProviderBinding};
use crate::descriptor::{AttributeValue, Attributes};
use crate::domain::Handle;
use crate::errors::{ProvisioningError, ProvisioningResult};

/// Template format version emitted in every template
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// Accumulates resources into a deployable template
#[derive(Debug, Default)]
pub struct TemplateProvider {
    description: Option<String>,
    resources: Map<String, Value>,
}

impl TemplateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Number of resources synthesized so far
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Synthesized resource body for a logical id
    pub fn resource(&self, logical_id: &str) -> Option<&Value> {
        self.resources.get(logical_id)
    }

    /// Full template document
    pub fn template(&self) -> Value {
        let mut template = Map::new();
        template.insert(
            "AWSTemplateFormatVersion".to_string(),
            Value::String(TEMPLATE_FORMAT_VERSION.to_string()),
        );
        if let Some(description) = &self.description {
            template.insert("Description".to_string(), Value::String(description.clone()));
        }
        template.insert("Resources".to_string(), Value::Object(self.resources.clone()));
        Value::Object(template)
    }

    /// Template rendered as indented JSON
    pub fn to_json_pretty(&self) -> ProvisioningResult<String> {
        Ok(serde_json::to_string_pretty(&self.template())?)
    }
}

fn render_value(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::Literal(literal) => literal.clone(),
        AttributeValue::Ref(handle) => json!({ "Ref": handle.as_str() }),
    }
}

fn render_properties(attributes: &Attributes) -> Value {
    Value::Object(
        attributes
            .iter()
            .map(|(key, value)| (key.clone(), render_value(value)))
            .collect(),
    )
}

impl ProviderBinding for TemplateProvider {
    fn create(&mut self, request: &CreateRequest<'_>) -> ProvisioningResult<Handle> {
        if self.resources.contains_key(request.logical_id) {
            return Err(ProvisioningError::rejection(
                request.kind,
                request.logical_id,
                "logical id already present in template",
            ));
        }

        let body = json!({
            "Type": request.kind.cfn_type(),
            "Properties": render_properties(request.attributes),
        });
        self.resources.insert(request.logical_id.to_string(), body);

        debug!(
            stack = request.scope.stack_id(),
            logical_id = request.logical_id,
            cfn_type = request.kind.cfn_type(),
            "Resource added to template"
        );

        Ok(Handle::new(request.logical_id))
    }

    fn name(&self) -> &str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NamingContext, ResourceKind};
    use crate::provider::Scope;

    #[test]
    fn test_refs_render_as_cfn_ref() {
        let scope = Scope::new("NetworkStack", NamingContext::new("sys", "dev"));
        let mut provider = TemplateProvider::new();

        let vpc = provider
            .create(&CreateRequest {
                kind: ResourceKind::Vpc,
                scope: &scope,
                logical_id: "Vpc",
                attributes: &Attributes::from([(
                    "CidrBlock".to_string(),
                    AttributeValue::from("10.0.0.0/16"),
                )]),
            })
            .unwrap();
        assert_eq!(vpc, Handle::new("Vpc"));

        provider
            .create(&CreateRequest {
                kind: ResourceKind::Subnet,
                scope: &scope,
                logical_id: "SubnetPublic1a",
                attributes: &Attributes::from([("VpcId".to_string(), AttributeValue::Ref(vpc))]),
            })
            .unwrap();

        let template = provider.template();
        assert_eq!(template["AWSTemplateFormatVersion"], "2010-09-09");
        assert_eq!(template["Resources"]["Vpc"]["Type"], "AWS::EC2::VPC");
        assert_eq!(
            template["Resources"]["SubnetPublic1a"]["Properties"]["VpcId"],
            json!({ "Ref": "Vpc" })
        );
    }

    #[test]
    fn test_duplicate_logical_id_rejected() {
        let scope = Scope::new("NetworkStack", NamingContext::default());
        let attributes = Attributes::new();
        let mut provider = TemplateProvider::new();
        let request = CreateRequest {
            kind: ResourceKind::InternetGateway,
            scope: &scope,
            logical_id: "InternetGateway",
            attributes: &attributes,
        };

        assert!(provider.create(&request).is_ok());
        assert!(provider.create(&request).unwrap_err().is_provider_rejection());
        assert_eq!(provider.resource_count(), 1);
    }
}
