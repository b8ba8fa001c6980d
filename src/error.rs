// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::kubernetes::install::InstallReport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutfitterError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("duplicate printer column \"{column}\" on {kind}")]
    DuplicateColumn { kind: String, column: String },

    #[error("duplicate resource definition: {0}")]
    DuplicateResource(String),

    #[error("cannot derive a structural schema for {kind}: {field}")]
    SchemaDerivation { kind: String, field: String },

    #[error("failed to serialize CRD manifest: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("failed to encode validation schema: {0}")]
    SchemaEncoding(#[from] serde_json::Error),

    #[error("failed to write manifest: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("CRD installation failed:\n{0}")]
    InstallFailed(InstallReport),
}

pub type Result<T> = std::result::Result<T, OutfitterError>;
