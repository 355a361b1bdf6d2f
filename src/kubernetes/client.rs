// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Management cluster client creation and name inference

use std::path::Path;

use http::Uri;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use tracing::{debug, instrument};

use crate::error::{LoginError, Result};

/// Client for the management cluster together with the API server URL it talks to
pub struct ManagementClient {
    pub client: Client,
    pub cluster_url: Uri,
}

/// Create a client from the kubeconfig file at `path`, using its current context
#[instrument]
pub async fn create_management_client(path: &Path) -> Result<ManagementClient> {
    let config = load_config(path).await?;
    let cluster_url = config.cluster_url.clone();
    debug!("Using API server {}", cluster_url);

    let client = Client::try_from(config)
        .map_err(|e| LoginError::KubeconfigError(format!("creating client: {}", e)))?;

    Ok(ManagementClient {
        client,
        cluster_url,
    })
}

/// Client configuration for the current context of the kubeconfig at `path`
pub async fn load_config(path: &Path) -> Result<kube::Config> {
    let kubeconfig = Kubeconfig::read_from(path)
        .map_err(|e| LoginError::KubeconfigError(format!("{}: {}", path.display(), e)))?;

    kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| LoginError::KubeconfigError(format!("{}: {}", path.display(), e)))
}

/// Infer the management cluster name from an `https://api.NAME....` server URL
pub fn infer_management_cluster(cluster_url: &Uri) -> Result<String> {
    let unrecognized = || LoginError::UnrecognizedClusterUrl {
        url: cluster_url.to_string(),
    };

    let host = cluster_url.host().ok_or_else(unrecognized)?;
    let rest = host.strip_prefix("api.").ok_or_else(unrecognized)?;

    match rest.split('.').next() {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(unrecognized()),
    }
}
