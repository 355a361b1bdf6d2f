// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::constants::{LOGIN_COMMAND, PROGRAM};
use crate::error::{LoginError, Result};

#[derive(Parser, Debug)]
#[command(name = PROGRAM, version, about = "Log into the OpenStack cloud behind an OpenStackCluster resource")]
pub struct Cli {
    /// absolute path to the clouds.yaml file
    #[arg(long, global = true, value_name = "PATH")]
    pub clouds_file: Option<PathBuf>,

    /// absolute path to the kubeconfig file
    #[arg(long, global = true, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// name of the management cluster, if not set will be inferred from the API URL
    #[arg(long, global = true, value_name = "NAME")]
    pub management_cluster: Option<String>,

    /// force overwriting existing cloud (if it exists) in the clouds file
    #[arg(short, long, global = true)]
    pub force: bool,

    /// namespace of the OpenStackCluster resource, required only if the cluster name is ambiguous
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the cluster's OpenStack credentials into the local clouds file
    Login(LoginArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// name of the OpenStackCluster resource
    #[arg(value_name = "OPENSTACKCLUSTER")]
    pub cluster: String,
}

pub fn usage() -> String {
    format!("usage: {PROGRAM} {LOGIN_COMMAND} [-n NAMESPACE] OPENSTACKCLUSTER")
}

impl Cli {
    /// Parse arguments, turning every clap failure into a usage error.
    /// `--help` and `--version` print and exit as usual.
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                debug!("argument parsing failed: {}", e);
                LoginError::Usage(usage())
            }
        })?;

        let Command::Login(login) = &cli.command;
        if login.cluster.is_empty() {
            return Err(LoginError::Usage(usage()));
        }

        Ok(cli)
    }
}
