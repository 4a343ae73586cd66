// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod cidr_layout;
mod factory_order;
mod naming;
