// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster-facing side of the pipeline: CRD installation.

pub mod install;

pub use install::{InstallOutcome, InstallReport, Installer};
