// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Binary name, as invoked through the kubectl plugin mechanism
pub const PROGRAM: &str = "kubectl-openstack";

/// The only subcommand
pub const LOGIN_COMMAND: &str = "login";

/// OpenStackCluster custom resource coordinates
pub mod openstack_cluster {
    pub const GROUP: &str = "infrastructure.cluster.x-k8s.io";
    pub const RESOURCE: &str = "openstackclusters";
    pub const KIND: &str = "OpenStackCluster";
}

/// Identity reference handling
pub mod identity {
    /// The only supported `.spec.identityRef.kind`
    pub const SECRET_KIND: &str = "Secret";
    /// Data key holding the embedded clouds document
    pub const CLOUDS_DATA_KEY: &str = "clouds.yaml";
}

/// Local file defaults, relative to the home directory
pub mod paths {
    pub const KUBECONFIG: &[&str] = &[".kube", "config"];
    pub const CLOUDS_FILE: &[&str] = &[".config", "openstack", "clouds.yaml"];
    pub const KUBECONFIG_ENV: &str = "KUBECONFIG";
}
