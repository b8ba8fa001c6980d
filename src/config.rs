// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::install::DEFAULT_WAIT_TIMEOUT_SECS;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// How long to wait for each CRD to reach the Established condition
    pub wait_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let wait_timeout_secs = match env::var("CRD_WAIT_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .context("CRD_WAIT_TIMEOUT_SECS is not a valid number of seconds")?,
            Err(_) => DEFAULT_WAIT_TIMEOUT_SECS,
        };

        Ok(Config {
            wait_timeout: Duration::from_secs(wait_timeout_secs),
        })
    }
}
