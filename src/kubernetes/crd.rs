// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Discovery of the served OpenStackCluster version

use crate::constants::openstack_cluster::{GROUP, KIND, RESOURCE};
use crate::error::{LoginError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIGroupList;
use kube::{
    api::{ApiResource, GroupVersionKind},
    Client,
};
use tracing::{debug, instrument};

/// Find the preferred version of the OpenStackCluster CRD served by the cluster.
#[instrument(skip(client))]
pub async fn discover_openstack_cluster_resource(client: &Client) -> Result<ApiResource> {
    let groups = client
        .list_api_groups()
        .await
        .map_err(LoginError::Discovery)?;

    let version = preferred_version(&groups, GROUP)
        .ok_or_else(|| LoginError::GroupNotRegistered(GROUP.to_string()))?;

    debug!("{} served at {}/{}", KIND, GROUP, version);

    Ok(ApiResource::from_gvk_with_plural(
        &GroupVersionKind::gvk(GROUP, &version, KIND),
        RESOURCE,
    ))
}

/// Preferred version of the first group whose preferred group-version starts with `group`.
pub fn preferred_version(groups: &APIGroupList, group: &str) -> Option<String> {
    groups
        .groups
        .iter()
        .filter_map(|g| g.preferred_version.as_ref())
        .find(|pv| pv.group_version.starts_with(group))
        .map(|pv| pv.version.clone())
}
