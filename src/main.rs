// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use std::path::Path;
use tracing::info;

use outfitter::config::Config;
use outfitter::export::{registry, write_manifest};
use outfitter::kubernetes::Installer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let descriptors = registry::list()?;

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        // Write the capability-guarded chart manifest instead of talking
        // to a cluster.
        Some("export") => {
            let path = args
                .next()
                .context("usage: outfitter export <output-path>")?;
            write_manifest(Path::new(&path), &descriptors)?;
        }
        _ => {
            let client = Client::try_default().await?;
            info!("Connected to Kubernetes cluster");

            let installer = Installer::new(client, config.wait_timeout);
            installer.install(&descriptors).await?;
        }
    }

    Ok(())
}
