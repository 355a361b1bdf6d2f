// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::Client;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

use crate::constants::identity::CLOUDS_DATA_KEY;
use crate::constants::openstack_cluster::{GROUP, KIND, RESOURCE};

pub const VERSION: &str = "v1beta1";

/// A mock HTTP service that returns predefined responses by method and path,
/// recording every request it sees.
#[derive(Clone, Default)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Whether a GET for `path` was made
    pub fn was_requested(&self, path: &str) -> bool {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .any(|(m, p)| m == "GET" && p == path)
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let key = (req.method().to_string(), req.uri().path().to_string());
        self.requests.lock().unwrap().push(key.clone());

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| (404, not_found_json("resource", &key.1)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// `GET /apis` response listing the given `(group, preferred version)` pairs
pub fn api_groups_json(groups: &[(&str, &str)]) -> String {
    let groups: Vec<_> = groups
        .iter()
        .map(|(group, version)| {
            let gv = serde_json::json!({
                "groupVersion": format!("{}/{}", group, version),
                "version": version
            });
            serde_json::json!({
                "name": group,
                "versions": [gv.clone()],
                "preferredVersion": gv
            })
        })
        .collect();

    serde_json::json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": groups
    })
    .to_string()
}

pub fn openstack_cluster_value(
    namespace: &str,
    name: &str,
    identity_kind: &str,
    identity_name: &str,
) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": format!("{}/{}", GROUP, VERSION),
        "kind": KIND,
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": format!("{}-{}", namespace, name)
        },
        "spec": {
            "identityRef": {
                "kind": identity_kind,
                "name": identity_name
            }
        }
    })
}

pub fn openstack_cluster_list_json(items: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "apiVersion": format!("{}/{}", GROUP, VERSION),
        "kind": format!("{}List", KIND),
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

pub fn openstack_clusters_path() -> String {
    format!("/apis/{}/{}/{}", GROUP, VERSION, RESOURCE)
}

pub fn openstack_cluster_path(namespace: &str, name: &str) -> String {
    format!(
        "/apis/{}/{}/namespaces/{}/{}/{}",
        GROUP, VERSION, namespace, RESOURCE, name
    )
}

pub fn secret_path(namespace: &str, name: &str) -> String {
    format!("/api/v1/namespaces/{}/secrets/{}", namespace, name)
}

/// Secret carrying `clouds_yaml` under the `clouds.yaml` data key
pub fn clouds_secret_json(namespace: &str, name: &str, clouds_yaml: &str) -> String {
    let secret = Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(
            CLOUDS_DATA_KEY.to_string(),
            ByteString(clouds_yaml.as_bytes().to_vec()),
        )])),
        type_: Some("Opaque".to_string()),
        ..Default::default()
    };
    serde_json::to_string(&secret).unwrap()
}
