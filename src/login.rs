// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The `login` workflow: OpenStackCluster → identity Secret → local clouds file.

use std::io::Write;

use kube::{Client, ResourceExt};
use tracing::{info, instrument};

use crate::clouds_file;
use crate::config::Config;
use crate::error::{LoginError, Result};
use crate::kubernetes::{discover_openstack_cluster_resource, fetch_cloud, find_openstack_cluster};
use crate::types::openstack_cluster::describe;
use crate::types::IdentityRef;

/// Name of the merged cloud entry
pub fn cloud_name(management_cluster: &str, cluster: &str) -> String {
    format!("{}-{}", management_cluster, cluster)
}

/// Copy the cluster's OpenStack credentials into the local clouds file.
/// Progress notices and the follow-up command go to `out`. Returns the cloud name.
#[instrument(skip(client, config, out), fields(cluster = %config.cluster))]
pub async fn login<W: Write>(
    client: &Client,
    config: &Config,
    management_cluster: &str,
    out: &mut W,
) -> Result<String> {
    let resource = discover_openstack_cluster_resource(client).await?;
    let cluster =
        find_openstack_cluster(client, &resource, config.namespace.as_deref(), &config.cluster)
            .await?;

    let identity = IdentityRef::from_cluster(&cluster)?;
    let secret_name = identity.secret_name()?;
    let namespace = cluster
        .namespace()
        .ok_or_else(|| LoginError::FieldNotFound {
            resource: describe(&cluster),
            path: ".metadata.namespace".to_string(),
        })?;

    info!("Reading credentials from secret {}/{}", namespace, secret_name);
    let cloud = fetch_cloud(client, &namespace, secret_name).await?;

    let mut local = clouds_file::read(&config.clouds_file)?;
    let name = cloud_name(management_cluster, &config.cluster);
    let path = config.clouds_file.display();

    if local.contains(&name) {
        if !config.force {
            return Err(LoginError::CloudExists {
                name,
                path: config.clouds_file.clone(),
            });
        }
        writeln!(out, "Overwriting {:?} cloud in {}", name, path).map_err(LoginError::Output)?;
    } else {
        writeln!(out, "Writing {:?} cloud to {}", name, path).map_err(LoginError::Output)?;
    }

    local.insert(&name, cloud);
    clouds_file::write(&config.clouds_file, &local)?;

    write!(
        out,
        "\nTo use the cloud run:\n\n    openstack --os-cloud={:?} server list\n",
        name
    )
    .map_err(LoginError::Output)?;

    Ok(name)
}
