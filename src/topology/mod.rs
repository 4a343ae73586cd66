// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Assembler
//!
//! Builds the network in four fixed stages, each a thin orchestrator over a
//! descriptor table:
//!
//! ```text
//! Stage 1  Vpc::create              ──> Vpc
//! Stage 2  Subnets::create(&Vpc)    ──> Subnets
//! Stage 3  InternetGateway::create(&Vpc)
//!                                   ──> InternetGateway (+ attachment)
//! Stage 4  RouteTables::create(&Vpc, &Subnets, &InternetGateway)
//!                                   ──> RouteTables (+ routes, associations)
//! ```
//!
//! A stage's output only exists once the stage has run, and each later stage
//! takes it by reference, so the order is fixed at compile time.
//!
//! # Failure
//!
//! The first failing provider call aborts the run. Resources created before
//! it are left in place; cleanup belongs to the provisioning tool.

pub mod internet_gateway;
pub mod route_table;
pub mod subnet;
pub mod vpc;

pub use internet_gateway::{InternetGateway, GATEWAY_ATTACHMENT_ID, INTERNET_GATEWAY_ID};
pub use route_table::{RouteTableIds, RouteTables, PRIVATE_ROUTE_TABLE, PUBLIC_ROUTE_TABLE};
pub use subnet::{ProvisionedSubnet, Subnets};
pub use vpc::{Vpc, VPC_ID};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::TopologyConfig;
use crate::domain::NamingContext;
use crate::errors::{ProvisioningError, ProvisioningResult};
use crate::factory::ResourceFactory;
use crate::provider::{ProviderBinding, Scope};

/// Logical ids used by the fixed stages regardless of layout
pub const FIXED_LOGICAL_IDS: [&str; 7] = [
    VPC_ID,
    INTERNET_GATEWAY_ID,
    GATEWAY_ATTACHMENT_ID,
    PUBLIC_ROUTE_TABLE.table,
    PUBLIC_ROUTE_TABLE.route,
    PRIVATE_ROUTE_TABLE.table,
    PRIVATE_ROUTE_TABLE.route,
];

pub(crate) fn unassigned(logical_id: &str) -> ProvisioningError {
    ProvisioningError::Configuration(format!("{} was created but never assigned", logical_id))
}

/// Bookkeeping for one assembly run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub provider_calls: usize,
}

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct ProvisionedTopology {
    run: RunSummary,
    vpc: Vpc,
    subnets: Subnets,
    internet_gateway: InternetGateway,
    route_tables: RouteTables,
}

impl ProvisionedTopology {
    pub fn run(&self) -> &RunSummary {
        &self.run
    }

    pub fn vpc(&self) -> &Vpc {
        &self.vpc
    }

    pub fn subnets(&self) -> &Subnets {
        &self.subnets
    }

    pub fn internet_gateway(&self) -> &InternetGateway {
        &self.internet_gateway
    }

    pub fn route_tables(&self) -> &RouteTables {
        &self.route_tables
    }
}

/// Runs the four stages against a provider binding
#[derive(Debug, Clone)]
pub struct TopologyAssembler {
    config: TopologyConfig,
    naming: NamingContext,
}

fn stage_failed(stage: &str, err: ProvisioningError) -> ProvisioningError {
    error!(stage, error = %err, "Topology stage aborted");
    err
}

impl TopologyAssembler {
    pub fn new(config: TopologyConfig, naming: NamingContext) -> Self {
        Self { config, naming }
    }

    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    pub fn naming(&self) -> &NamingContext {
        &self.naming
    }

    /// Assemble the whole topology
    ///
    /// The layout is validated before the first provider call. Pass
    /// `&mut provider` to keep the binding for inspection afterwards.
    pub fn assemble<P: ProviderBinding>(
        &self,
        provider: P,
    ) -> ProvisioningResult<ProvisionedTopology> {
        self.config.validate()?;

        if self.naming.is_degraded() {
            warn!(
                system_name = self.naming.system_name(),
                env_type = self.naming.env_type(),
                "Naming context incomplete; resource names will have empty segments"
            );
        }

        let run_id = Uuid::now_v7();
        let started_at = Utc::now();
        let scope = Scope::new(self.config.stack_id.clone(), self.naming.clone());
        let mut factory = ResourceFactory::new(provider, &scope);

        info!(
            %run_id,
            stack = scope.stack_id(),
            naming = %self.naming,
            provider = factory.provider().name(),
            "Assembling network topology"
        );

        let vpc = Vpc::create(&mut factory, self.config.vpc_cidr)
            .map_err(|e| stage_failed("vpc", e))?;
        info!(handle = %vpc.handle(), "Stage 1 complete: VPC");

        let subnets = Subnets::create(&mut factory, &vpc, &self.config.subnets)
            .map_err(|e| stage_failed("subnets", e))?;
        info!(count = subnets.len(), "Stage 2 complete: subnets");

        let internet_gateway = InternetGateway::create(&mut factory, &vpc)
            .map_err(|e| stage_failed("internet_gateway", e))?;
        info!(handle = %internet_gateway.handle(), "Stage 3 complete: internet gateway");

        let route_tables = RouteTables::create(&mut factory, &vpc, &subnets, &internet_gateway)
            .map_err(|e| stage_failed("route_tables", e))?;
        info!(
            public = %route_tables.public(),
            private = %route_tables.private(),
            "Stage 4 complete: route tables"
        );

        let run = RunSummary {
            run_id,
            started_at,
            completed_at: Utc::now(),
            provider_calls: factory.provider_calls(),
        };
        info!(%run_id, provider_calls = run.provider_calls, "Network topology assembled");

        Ok(ProvisionedTopology {
            run,
            vpc,
            subnets,
            internet_gateway,
            route_tables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResourceKind, Visibility};
    use crate::provider::InMemoryProvider;

    #[test]
    fn test_fixed_ids_do_not_collide_with_default_layout() {
        assert!(TopologyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_layout_makes_no_provider_call() {
        let mut config = TopologyConfig::default();
        config.subnets[3].cidr_block = "10.0.21.0/24".parse().unwrap();
        let mut provider = InMemoryProvider::new();

        let err = TopologyAssembler::new(config, NamingContext::new("sys", "dev"))
            .assemble(&mut provider)
            .unwrap_err();

        assert!(matches!(err, ProvisioningError::Validation(_)));
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn test_degraded_naming_still_assembles() {
        let mut provider = InMemoryProvider::new();
        let topology = TopologyAssembler::new(TopologyConfig::default(), NamingContext::default())
            .assemble(&mut provider)
            .unwrap();

        assert_eq!(topology.subnets().len(), 4);
        let vpc_call = provider.call(VPC_ID).unwrap();
        assert_eq!(
            vpc_call.attributes["Tags"],
            crate::descriptor::AttributeValue::Literal(serde_json::json!([
                { "Key": "Name", "Value": "--vpc" }
            ]))
        );
    }

    #[test]
    fn test_run_summary() {
        let mut provider = InMemoryProvider::new();
        let naming = NamingContext::new("sys", "dev");
        let topology = TopologyAssembler::new(TopologyConfig::default(), naming)
            .assemble(&mut provider)
            .unwrap();

        let run = topology.run();
        assert_eq!(run.provider_calls, 15);
        assert_eq!(run.run_id.get_version_num(), 7);
        assert!(run.started_at <= run.completed_at);
        assert_eq!(provider.calls_of(ResourceKind::Route), 2);
        assert_eq!(topology.subnets().by_visibility(Visibility::Public).count(), 2);
    }
}
