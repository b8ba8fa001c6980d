// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Declarative description of one managed custom resource.

use crate::error::{OutfitterError, Result};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;
use kube::CustomResourceExt;

/// One additional printer column: a display name bound to a JSON path
/// rooted at the resource object. The path is not validated here; a
/// malformed path only surfaces at apply time on the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub json_path: String,
}

/// In-memory description of one custom resource to export: its identity,
/// scope, status subresource, structural schema and printer columns.
///
/// Descriptors are plain values; rendering and installation never mutate
/// them. Column order is preserved into the output, it controls table
/// display order.
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub plural: String,
    pub namespaced: bool,
    pub has_status: bool,
    pub schema: JSONSchemaProps,
    pub columns: Vec<ColumnSpec>,
}

impl ResourceDescriptor {
    /// Create a descriptor from explicit parts. Defaults to a namespaced
    /// resource without a status subresource; the plural name is derived
    /// from the kind.
    pub fn new(group: &str, version: &str, kind: &str, schema: JSONSchemaProps) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
            plural: plural_name(kind),
            namespaced: true,
            has_status: false,
            schema,
            columns: Vec::new(),
        }
    }

    /// Create a descriptor from a `#[derive(CustomResource)]` type, taking
    /// identity, scope, status subresource and the structural schema from
    /// the derived CRD.
    pub fn for_type<T: CustomResourceExt>() -> Result<Self> {
        let crd = T::crd();
        let kind = crd.spec.names.kind.clone();

        let version = crd.spec.versions.into_iter().next().ok_or_else(|| {
            OutfitterError::SchemaDerivation {
                kind: kind.clone(),
                field: "derived CRD declares no versions".to_string(),
            }
        })?;

        let has_status = version
            .subresources
            .as_ref()
            .and_then(|s| s.status.as_ref())
            .is_some();

        let schema = version
            .schema
            .and_then(|v| v.open_api_v3_schema)
            .ok_or_else(|| OutfitterError::SchemaDerivation {
                kind: kind.clone(),
                field: "derived CRD carries no openAPIV3Schema".to_string(),
            })?;

        Ok(Self {
            group: crd.spec.group,
            version: version.name,
            kind,
            plural: crd.spec.names.plural,
            namespaced: crd.spec.scope == "Namespaced",
            has_status,
            schema,
            columns: Vec::new(),
        })
    }

    /// Append a printer column. Column names must be unique within one
    /// descriptor; a duplicate fails with `DuplicateColumn` naming the
    /// offending column.
    pub fn with_column(mut self, name: &str, json_path: &str) -> Result<Self> {
        if self.columns.iter().any(|c| c.name == name) {
            return Err(OutfitterError::DuplicateColumn {
                kind: self.kind,
                column: name.to_string(),
            });
        }
        self.columns.push(ColumnSpec {
            name: name.to_string(),
            json_path: json_path.to_string(),
        });
        Ok(self)
    }

    /// Mark the resource cluster-scoped instead of namespaced.
    pub fn cluster_scoped(mut self) -> Self {
        self.namespaced = false;
        self
    }

    /// Attach a status subresource.
    pub fn with_status_subresource(mut self) -> Self {
        self.has_status = true;
        self
    }

    /// The CRD object name, `<plural>.<group>`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.plural, self.group)
    }

    /// The resource scope as the API server spells it.
    pub fn scope(&self) -> &'static str {
        if self.namespaced {
            "Namespaced"
        } else {
            "Cluster"
        }
    }

    /// The lowercased singular name.
    pub fn singular(&self) -> String {
        self.kind.to_lowercase()
    }
}

/// Derive the plural resource name from a kind: lowercase, then pluralize.
pub fn plural_name(kind: &str) -> String {
    let lower = kind.to_lowercase();
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        format!("{}es", lower)
    } else if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        format!("{}ies", &lower[..lower.len() - 1])
    } else {
        format!("{}s", lower)
    }
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut chars = lower.chars().rev();
    chars.next();
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}
