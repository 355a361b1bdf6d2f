// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Credential extraction from identity Secrets

use crate::constants::identity::CLOUDS_DATA_KEY;
use crate::error::{LoginError, Result};
use crate::types::CloudsDocument;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client, ResourceExt};
use serde_yaml::Mapping;
use tracing::{debug, instrument};

/// Get the secret and return the single cloud embedded in its `clouds.yaml`
#[instrument(skip(client))]
pub async fn fetch_cloud(client: &Client, namespace: &str, name: &str) -> Result<Mapping> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let secret = secrets.get(name).await.map_err(LoginError::Server)?;

    debug!("Got secret {}/{}", namespace, name);

    extract_single_cloud(&secret)
}

/// Parse the secret's `clouds.yaml` data, requiring exactly one cloud
pub fn extract_single_cloud(secret: &Secret) -> Result<Mapping> {
    let name = secret.name_any();
    let namespace = secret.namespace().unwrap_or_default();

    let Some(data) = secret.data.as_ref().and_then(|d| d.get(CLOUDS_DATA_KEY)) else {
        return Err(LoginError::MissingSecretData {
            name,
            namespace,
            key: CLOUDS_DATA_KEY.to_string(),
        });
    };

    let document = CloudsDocument::from_slice(&data.0).map_err(|source| {
        LoginError::SecretYaml {
            name: name.clone(),
            namespace: namespace.clone(),
            source,
        }
    })?;

    document
        .single_cloud()
        .cloned()
        .map_err(|clouds| LoginError::CloudCount {
            name,
            namespace,
            clouds,
        })
}
