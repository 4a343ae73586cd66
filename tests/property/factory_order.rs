// Copyright (c) 2025 - Cowboy AI, Inc.
//! Properties of the generic factory's call sequence

use cim_network_topology::descriptor::{
    ChildDescriptor, Reference, ResourceDescriptor, RouteDescriptor,
};
use cim_network_topology::{
    Handle, InMemoryProvider, Ipv4Cidr, ResourceFactory, ResourceKind, Scope,
};
use proptest::prelude::*;

use crate::fixtures::naming;

proptest! {
    /// N descriptors with k_i children issue N + sum(k_i) calls, depth-first
    #[test]
    fn prop_call_count_and_order(children in proptest::collection::vec(0usize..5, 0..6)) {
        let scope = Scope::new("PropStack", naming());
        let mut factory = ResourceFactory::new(InMemoryProvider::new(), &scope);
        let mut assigned: Vec<Handle> = Vec::new();

        let mut expected = Vec::new();
        let table: Vec<ResourceDescriptor<'_, Vec<Handle>>> = children
            .iter()
            .enumerate()
            .map(|(i, k)| {
                let parent = format!("Table{}", i);
                expected.push(parent.clone());
                let kids: Vec<ChildDescriptor> = (0..*k)
                    .map(|j| {
                        let id = format!("Table{}Child{}", i, j);
                        expected.push(id.clone());
                        if j % 2 == 0 {
                            let route = RouteDescriptor::new(id, Ipv4Cidr::DEFAULT_ROUTE);
                            ChildDescriptor::route(route)
                        } else {
                            let subnet = Reference::Resolved(Handle::new("subnet-p"));
                            ChildDescriptor::association(id, subnet)
                        }
                    })
                    .collect();
                ResourceDescriptor::new(ResourceKind::RouteTable, parent, format!("rtb-{}", i))
                    .children(kids)
                    .on_created(|slots: &mut Vec<Handle>, handle| slots.push(handle))
            })
            .collect();

        factory.create_all(&mut assigned, table).unwrap();

        let total: usize = children.len() + children.iter().sum::<usize>();
        prop_assert_eq!(factory.provider_calls(), total);
        let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
        prop_assert_eq!(factory.provider().call_order(), expected);
        prop_assert_eq!(assigned.len(), children.len());
        prop_assert_eq!(factory.registry().len(), total);
    }
}
