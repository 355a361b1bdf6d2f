// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, CRD discovery, and credential lookup.

pub mod client;
pub mod clusters;
pub mod crd;
pub mod secrets;

pub use client::{create_management_client, infer_management_cluster, ManagementClient};
pub use clusters::find_openstack_cluster;
pub use crd::discover_openstack_cluster_resource;
pub use secrets::fetch_cloud;
