// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Synthesizer
//!
//! Assembles the network topology against the template provider and prints
//! the resulting template to stdout. Logs go to stderr.
//!
//! Environment:
//! - `SYSTEM_NAME`, `ENV_TYPE` - naming context (empty when unset)
//! - `TOPOLOGY_CONFIG` - optional JSON layout file
//! - `RUST_LOG` - log filter

use anyhow::{Context, Result};
use cim_network_topology::{NamingContext, TemplateProvider, TopologyAssembler, TopologyConfig};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let naming = NamingContext::from_env();
    let config = TopologyConfig::from_env().context("Failed to load topology configuration")?;
    info!(
        stack = %config.stack_id,
        vpc_cidr = %config.vpc_cidr,
        subnets = config.subnets.len(),
        naming = %naming,
        "Configuration loaded"
    );

    let mut template = TemplateProvider::new()
        .with_description(format!("Network topology for {}", naming));

    let topology = TopologyAssembler::new(config, naming)
        .assemble(&mut template)
        .context("Topology assembly failed")?;

    info!(
        run_id = %topology.run().run_id,
        resources = template.resource_count(),
        "Template synthesized"
    );

    let rendered = template
        .to_json_pretty()
        .context("Failed to render template")?;
    println!("{}", rendered);

    Ok(())
}
