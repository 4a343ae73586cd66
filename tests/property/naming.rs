// Copyright (c) 2025 - Cowboy AI, Inc.
//! Properties of resource naming

use cim_network_topology::domain::resource_name;
use cim_network_topology::NamingContext;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_name_is_deterministic(
        system in "[a-z][a-z0-9]{0,15}",
        env in "[a-z]{1,8}",
        suffix in "[a-z][a-z0-9-]{0,30}",
    ) {
        let ctx = NamingContext::new(system.clone(), env.clone());
        let first = resource_name(&ctx, &suffix);
        let second = resource_name(&NamingContext::new(system, env), &suffix);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_name_contains_suffix(
        system in "[a-z0-9-]{0,12}",
        env in "[a-z0-9-]{0,12}",
        suffix in "[a-z][a-z0-9-]{0,30}",
    ) {
        let ctx = NamingContext::new(system.clone(), env.clone());
        let name = resource_name(&ctx, &suffix);
        prop_assert!(name.contains(&suffix));
        prop_assert!(name.ends_with(&suffix));
        prop_assert!(name.starts_with(&system));
        prop_assert_eq!(name.len(), system.len() + env.len() + suffix.len() + 2);
    }
}
