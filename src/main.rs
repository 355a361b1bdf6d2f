// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kubectl_openstack::cli::Cli;
use kubectl_openstack::config::Config;
use kubectl_openstack::kubernetes::{create_management_client, infer_management_cluster};
use kubectl_openstack::login::login;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout is reserved for user-facing notices
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os())?;
    let config = Config::from_cli(cli)?;
    debug!("Configuration resolved: {:?}", config);

    let management = create_management_client(&config.kubeconfig).await?;
    info!("Connected to management cluster at {}", management.cluster_url);

    let management_cluster = match &config.management_cluster {
        Some(name) => name.clone(),
        None => infer_management_cluster(&management.cluster_url)?,
    };
    info!("Management cluster: {}", management_cluster);

    let mut stdout = std::io::stdout().lock();
    login(&management.client, &config, &management_cluster, &mut stdout).await?;

    Ok(())
}
