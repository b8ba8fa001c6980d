// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Installing CRDs against a live cluster and waiting for establishment.

use crate::constants::install::POLL_INTERVAL_MILLIS;
use crate::constants::OPERATOR_NAME;
use crate::error::{OutfitterError, Result};
use crate::export::descriptor::ResourceDescriptor;
use crate::export::render::v1_object;
use futures::future::join_all;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::api::PostParams;
use kube::{Api, Client};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument, warn};

/// Terminal state of one CRD submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The CRD reached the Established condition
    Established,
    /// The server refused the create
    Rejected(String),
    /// The Established condition was not observed within the wait bound
    TimedOut,
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallOutcome::Established => write!(f, "established"),
            InstallOutcome::Rejected(reason) => write!(f, "rejected: {}", reason),
            InstallOutcome::TimedOut => write!(f, "timed out waiting for Established"),
        }
    }
}

/// Outcome of every descriptor in one install batch, reported together so
/// callers see the full picture instead of just the first failure.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub outcomes: Vec<(String, InstallOutcome)>,
}

impl InstallReport {
    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|(_, outcome)| *outcome == InstallOutcome::Established)
    }
}

impl fmt::Display for InstallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, outcome) in &self.outcomes {
            writeln!(f, "  {}: {}", name, outcome)?;
        }
        Ok(())
    }
}

/// Submits a batch of CRDs and waits for each to become Established.
pub struct Installer {
    client: Client,
    wait_timeout: Duration,
}

impl Installer {
    pub fn new(client: Client, wait_timeout: Duration) -> Self {
        Self {
            client,
            wait_timeout,
        }
    }

    /// Install all descriptors as CRDs. Creates are issued concurrently,
    /// then each CRD is polled independently until it is Established or the
    /// shared deadline passes. Every outcome is awaited before evaluation;
    /// any non-Established outcome fails the call with the full report.
    #[instrument(skip(self, descriptors), fields(count = descriptors.len()))]
    pub async fn install(&self, descriptors: &[ResourceDescriptor]) -> Result<()> {
        let mut seen = HashSet::new();
        for descriptor in descriptors {
            if !seen.insert(descriptor.name()) {
                return Err(OutfitterError::DuplicateResource(descriptor.name()));
            }
        }

        let crds: Vec<(String, CustomResourceDefinition)> = descriptors
            .iter()
            .map(|d| Ok((d.name(), v1_object(d)?)))
            .collect::<Result<_>>()?;

        let api: Api<CustomResourceDefinition> = Api::all(self.client.clone());
        let deadline = Instant::now() + self.wait_timeout;

        let outcomes = join_all(
            crds.iter()
                .map(|(name, crd)| self.install_one(&api, name, crd, deadline)),
        )
        .await;

        let report = InstallReport {
            outcomes: crds
                .iter()
                .map(|(name, _)| name.clone())
                .zip(outcomes)
                .collect(),
        };

        if report.is_success() {
            info!("All {} CRDs are established", descriptors.len());
            Ok(())
        } else {
            Err(OutfitterError::InstallFailed(report))
        }
    }

    async fn install_one(
        &self,
        api: &Api<CustomResourceDefinition>,
        name: &str,
        crd: &CustomResourceDefinition,
        deadline: Instant,
    ) -> InstallOutcome {
        let params = PostParams {
            field_manager: Some(OPERATOR_NAME.to_string()),
            ..Default::default()
        };

        match api.create(&params, crd).await {
            Ok(_) => {
                info!("Created CRD {}", name);
            }
            Err(kube::Error::Api(err)) if err.code == 409 => {
                // Create-if-absent: an existing CRD only needs the wait.
                debug!("CRD {} already exists", name);
            }
            Err(kube::Error::Api(err)) => {
                warn!("Server rejected CRD {}: {}", name, err);
                return InstallOutcome::Rejected(err.to_string());
            }
            Err(e) => {
                // Not a server verdict; the create may still have landed.
                // The establishment wait decides between success and timeout.
                warn!("Error creating CRD {}: {}, waiting for establishment", name, e);
            }
        }

        self.wait_established(api, name, deadline).await
    }

    /// Poll one CRD until its Established condition is True. Polling is
    /// independent per CRD; sleeps are capped at the remaining time so the
    /// deadline is honored promptly.
    async fn wait_established(
        &self,
        api: &Api<CustomResourceDefinition>,
        name: &str,
        deadline: Instant,
    ) -> InstallOutcome {
        let poll_interval = Duration::from_millis(POLL_INTERVAL_MILLIS);

        loop {
            match api.get_opt(name).await {
                Ok(Some(crd)) if is_established(&crd) => {
                    info!("CRD {} is established", name);
                    return InstallOutcome::Established;
                }
                Ok(_) => {
                    debug!("CRD {} not yet established", name);
                }
                Err(e) => {
                    warn!("Error checking CRD {}: {}, retrying...", name, e);
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                warn!("CRD {} did not become established in time", name);
                return InstallOutcome::TimedOut;
            }
            sleep(remaining.min(poll_interval)).await;
        }
    }
}

/// Check the CRD's condition list for Established with status True.
fn is_established(crd: &CustomResourceDefinition) -> bool {
    crd.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|c| c.type_ == "Established" && c.status == "True")
        })
}
