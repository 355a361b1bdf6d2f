// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! OpenStackCluster lookup by name

use crate::error::{LoginError, Result};
use kube::{
    api::{ApiResource, DynamicObject, ListParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, info, instrument};

/// Fetch the named cluster, from `namespace` when given, otherwise by
/// searching all namespaces for a unique match.
#[instrument(skip(client, resource))]
pub async fn find_openstack_cluster(
    client: &Client,
    resource: &ApiResource,
    namespace: Option<&str>,
    name: &str,
) -> Result<DynamicObject> {
    if let Some(namespace) = namespace {
        let api: Api<DynamicObject> = Api::namespaced_with(client.clone(), namespace, resource);
        let cluster = api.get(name).await.map_err(LoginError::Server)?;
        info!("Found {} {}/{}", resource.kind, namespace, name);
        return Ok(cluster);
    }

    let api: Api<DynamicObject> = Api::all_with(client.clone(), resource);
    let list = api
        .list(&ListParams::default())
        .await
        .map_err(LoginError::Server)?;

    debug!("Listed {} {} objects", list.items.len(), resource.kind);

    let cluster = select_unique(list.items, name)?;
    info!(
        "Found {} {}/{}",
        resource.kind,
        cluster.namespace().unwrap_or_default(),
        name
    );
    Ok(cluster)
}

/// The only item named `name`
pub fn select_unique(items: Vec<DynamicObject>, name: &str) -> Result<DynamicObject> {
    let mut matches = items.into_iter().filter(|c| c.name_any() == name);

    match (matches.next(), matches.next()) {
        (Some(cluster), None) => Ok(cluster),
        (None, _) => Err(LoginError::ClusterNotFound(name.to_string())),
        (Some(_), Some(_)) => Err(LoginError::AmbiguousCluster(name.to_string())),
    }
}
