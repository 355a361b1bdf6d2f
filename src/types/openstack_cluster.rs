// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::DynamicObject;
use kube::ResourceExt;
use serde_json::Value;

use crate::constants::{identity::SECRET_KIND, openstack_cluster::KIND};
use crate::error::{LoginError, Result};

/// `.spec.identityRef` of an OpenStackCluster
#[derive(Clone, Debug, PartialEq)]
pub struct IdentityRef {
    pub kind: String,
    pub name: String,
}

impl IdentityRef {
    pub fn from_cluster(cluster: &DynamicObject) -> Result<Self> {
        Ok(IdentityRef {
            kind: nested_string(cluster, &["spec", "identityRef", "kind"])?,
            name: nested_string(cluster, &["spec", "identityRef", "name"])?,
        })
    }

    /// Name of the referenced Secret; other kinds are rejected
    pub fn secret_name(&self) -> Result<&str> {
        if self.kind != SECRET_KIND {
            return Err(LoginError::UnsupportedIdentityKind(self.kind.clone()));
        }
        Ok(&self.name)
    }
}

/// `Kind namespace/name` for error messages
pub fn describe(obj: &DynamicObject) -> String {
    let kind = obj
        .types
        .as_ref()
        .map(|t| t.kind.as_str())
        .filter(|k| !k.is_empty())
        .unwrap_or(KIND);
    format!(
        "{} {}/{}",
        kind,
        obj.namespace().unwrap_or_default(),
        obj.name_any()
    )
}

/// Look up a non-empty string at `path` in the object's content
pub fn nested_string(obj: &DynamicObject, path: &[&str]) -> Result<String> {
    let dotted = format!(".{}", path.join("."));

    let value = path
        .iter()
        .try_fold(&obj.data, |v, key| v.get(*key))
        .ok_or_else(|| LoginError::FieldNotFound {
            resource: describe(obj),
            path: dotted.clone(),
        })?;

    match value {
        Value::String(s) if s.is_empty() => Err(LoginError::FieldEmpty {
            resource: describe(obj),
            path: dotted,
        }),
        Value::String(s) => Ok(s.clone()),
        _ => Err(LoginError::FieldNotString {
            resource: describe(obj),
            path: dotted,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cluster(spec: Value) -> DynamicObject {
        serde_json::from_value(serde_json::json!({
            "apiVersion": "infrastructure.cluster.x-k8s.io/v1beta1",
            "kind": "OpenStackCluster",
            "metadata": {
                "name": "alpha",
                "namespace": "org-acme"
            },
            "spec": spec
        }))
        .unwrap()
    }

    #[test]
    fn test_identity_ref_secret() {
        let cluster = make_cluster(serde_json::json!({
            "identityRef": { "kind": "Secret", "name": "alpha-cloud-config" }
        }));

        let id = IdentityRef::from_cluster(&cluster).unwrap();

        assert_eq!(id.kind, "Secret");
        assert_eq!(id.secret_name().unwrap(), "alpha-cloud-config");
    }

    #[test]
    fn test_identity_ref_unsupported_kind() {
        let cluster = make_cluster(serde_json::json!({
            "identityRef": { "kind": "ClusterIdentity", "name": "shared" }
        }));

        let err = IdentityRef::from_cluster(&cluster)
            .unwrap()
            .secret_name()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "only .spec.identityRef.kind = \"Secret\" supported but got \"ClusterIdentity\""
        );
    }

    #[test]
    fn test_identity_ref_missing() {
        let cluster = make_cluster(serde_json::json!({}));

        let err = IdentityRef::from_cluster(&cluster).unwrap_err();

        assert_eq!(
            err.to_string(),
            "OpenStackCluster org-acme/alpha path \".spec.identityRef.kind\" not found"
        );
    }

    #[test]
    fn test_identity_ref_empty_name() {
        let cluster = make_cluster(serde_json::json!({
            "identityRef": { "kind": "Secret", "name": "" }
        }));

        let err = IdentityRef::from_cluster(&cluster).unwrap_err();

        assert_eq!(
            err.to_string(),
            "OpenStackCluster org-acme/alpha value for path \".spec.identityRef.name\" is empty"
        );
    }

    #[test]
    fn test_identity_ref_not_a_string() {
        let cluster = make_cluster(serde_json::json!({
            "identityRef": { "kind": 7, "name": "alpha-cloud-config" }
        }));

        let err = IdentityRef::from_cluster(&cluster).unwrap_err();

        assert!(matches!(err, LoginError::FieldNotString { .. }));
    }
}
