// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use crate::constants::paths;
use crate::error::{LoginError, Result};

/// Login configuration resolved from flags and the environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub kubeconfig: PathBuf,
    pub clouds_file: PathBuf,
    /// Inferred from the API server URL when unset
    pub management_cluster: Option<String>,
    pub namespace: Option<String>,
    pub cluster: String,
    pub force: bool,
}

impl Config {
    /// Resolve against the process environment
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::resolve(cli, env::var_os(paths::KUBECONFIG_ENV), dirs::home_dir())
    }

    /// Resolve with explicit `KUBECONFIG` and home directory values
    pub fn resolve(cli: Cli, kubeconfig_env: Option<OsString>, home: Option<PathBuf>) -> Result<Self> {
        let kubeconfig = non_empty_path(cli.kubeconfig)
            .or_else(|| non_empty_path(kubeconfig_env.map(PathBuf::from)))
            .or_else(|| home.as_deref().map(|h| join_all(h, paths::KUBECONFIG)))
            .ok_or_else(|| {
                LoginError::Config("--kubeconfig flag / KUBECONFIG env var not set".to_string())
            })?;

        let clouds_file = non_empty_path(cli.clouds_file)
            .or_else(|| home.as_deref().map(|h| join_all(h, paths::CLOUDS_FILE)))
            .ok_or_else(|| LoginError::Config("--clouds-file flag not set".to_string()))?;

        let Command::Login(login) = cli.command;

        Ok(Config {
            kubeconfig,
            clouds_file,
            management_cluster: cli.management_cluster.filter(|m| !m.is_empty()),
            namespace: cli.namespace.filter(|ns| !ns.is_empty()),
            cluster: login.cluster,
            force: cli.force,
        })
    }
}

fn non_empty_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

fn join_all(base: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(base.to_path_buf(), |acc, part| acc.join(part))
}
