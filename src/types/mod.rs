// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Documents and resources handled during login.

pub mod clouds;
pub mod openstack_cluster;

pub use clouds::CloudsDocument;
pub use openstack_cluster::IdentityRef;
