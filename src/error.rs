// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Config(String),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("cluster URL {url:?} has unrecognized format, expected \"api.MANAGEMENT_CLUSTER...\"")]
    UnrecognizedClusterUrl { url: String },

    #[error("discovering server groups: {0}")]
    Discovery(#[source] kube::Error),

    #[error("GroupVersion {0:?} is not registered with the cluster")]
    GroupNotRegistered(String),

    #[error("from server: {0}")]
    Server(#[source] kube::Error),

    #[error("cluster with name {0:?} not found")]
    ClusterNotFound(String),

    #[error("found more than one cluster with name {0:?}, try re-running with --namespace flag")]
    AmbiguousCluster(String),

    #[error("{resource} path {path:?} not found")]
    FieldNotFound { resource: String, path: String },

    #[error("{resource} value for path {path:?} is empty")]
    FieldEmpty { resource: String, path: String },

    #[error("{resource}: value for path {path:?} is not a string")]
    FieldNotString { resource: String, path: String },

    #[error("only .spec.identityRef.kind = \"Secret\" supported but got {0:?}")]
    UnsupportedIdentityKind(String),

    #[error("secret/{name} in {namespace} does not have {key:?} data field")]
    MissingSecretData {
        name: String,
        namespace: String,
        key: String,
    },

    #[error("unmarshaling YAML data from secret/{name} in {namespace}: {source}")]
    SecretYaml {
        name: String,
        namespace: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("secret/{name} in {namespace}: expected single cloud data, got {}{}", .clouds.len(), format_cloud_names(.clouds))]
    CloudCount {
        name: String,
        namespace: String,
        clouds: Vec<String>,
    },

    #[error("unmarshaling YAML data from {path:?}: {source}")]
    LocalYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cloud {name:?} already exists in {}, re-run with --force to overwrite", .path.display())]
    CloudExists { name: String, path: PathBuf },

    #[error("marshalling updated clouds YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing output: {0}")]
    Output(#[source] std::io::Error),
}

fn format_cloud_names(clouds: &[String]) -> String {
    if clouds.is_empty() {
        String::new()
    } else {
        format!(" ({})", clouds.join(", "))
    }
}

pub type Result<T> = std::result::Result<T, LoginError>;
