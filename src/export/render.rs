// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering a descriptor into the two CRD dialects.

use crate::error::{OutfitterError, Result};
use crate::export::descriptor::ResourceDescriptor;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceColumnDefinition, CustomResourceDefinition, CustomResourceDefinitionNames,
    CustomResourceDefinitionSpec, CustomResourceDefinitionVersion, CustomResourceSubresourceStatus,
    CustomResourceSubresources, CustomResourceValidation, JSONSchemaProps, JSONSchemaPropsOrArray,
    JSONSchemaPropsOrBool,
};
use kube::api::ObjectMeta;
use serde_json::{json, Map, Value};

/// The two CRD wire dialects. Selection is explicit: callers pick the
/// dialect, nothing here probes the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// apiextensions.k8s.io/v1 with a per-version structural schema
    V1,
    /// apiextensions.k8s.io/v1beta1 with one untyped validation blob
    V1Beta1,
}

impl Dialect {
    pub fn api_version(&self) -> &'static str {
        match self {
            Dialect::V1 => "apiextensions.k8s.io/v1",
            Dialect::V1Beta1 => "apiextensions.k8s.io/v1beta1",
        }
    }
}

/// An immutable, dialect-tagged serialized CRD.
#[derive(Debug, Clone)]
pub struct RenderedCrd {
    pub dialect: Dialect,
    pub name: String,
    pub yaml: String,
}

/// Render one descriptor under the requested dialect.
pub fn render(descriptor: &ResourceDescriptor, dialect: Dialect) -> Result<RenderedCrd> {
    let yaml = match dialect {
        Dialect::V1 => serde_yaml::to_string(&v1_object(descriptor)?)?,
        Dialect::V1Beta1 => serde_yaml::to_string(&legacy_object(descriptor)?)?,
    };

    Ok(RenderedCrd {
        dialect,
        name: descriptor.name(),
        yaml,
    })
}

/// Build the typed apiextensions.k8s.io/v1 CustomResourceDefinition.
///
/// Also used by the cluster installer; the installer always submits the
/// structural dialect.
pub fn v1_object(descriptor: &ResourceDescriptor) -> Result<CustomResourceDefinition> {
    ensure_structural(&descriptor.kind, "openAPIV3Schema", &descriptor.schema)?;

    let columns: Vec<CustomResourceColumnDefinition> = descriptor
        .columns
        .iter()
        .map(|c| CustomResourceColumnDefinition {
            name: c.name.clone(),
            json_path: c.json_path.clone(),
            type_: "string".to_string(),
            ..Default::default()
        })
        .collect();

    Ok(CustomResourceDefinition {
        metadata: ObjectMeta {
            name: Some(descriptor.name()),
            ..Default::default()
        },
        spec: CustomResourceDefinitionSpec {
            group: descriptor.group.clone(),
            names: CustomResourceDefinitionNames {
                plural: descriptor.plural.clone(),
                singular: Some(descriptor.singular()),
                kind: descriptor.kind.clone(),
                list_kind: Some(format!("{}List", descriptor.kind)),
                ..Default::default()
            },
            scope: descriptor.scope().to_string(),
            versions: vec![CustomResourceDefinitionVersion {
                name: descriptor.version.clone(),
                served: true,
                storage: true,
                schema: Some(CustomResourceValidation {
                    open_api_v3_schema: Some(descriptor.schema.clone()),
                }),
                subresources: descriptor.has_status.then(|| CustomResourceSubresources {
                    status: Some(CustomResourceSubresourceStatus(Value::Object(
                        Default::default(),
                    ))),
                    ..Default::default()
                }),
                additional_printer_columns: (!columns.is_empty()).then_some(columns),
                ..Default::default()
            }],
            ..Default::default()
        },
        status: None,
    })
}

/// Build the legacy apiextensions.k8s.io/v1beta1 CRD as an untyped value.
/// The validation schema is embedded as a single unstructured blob instead
/// of a per-version structural schema.
fn legacy_object(descriptor: &ResourceDescriptor) -> Result<Value> {
    let mut spec = Map::new();
    spec.insert("group".to_string(), json!(descriptor.group));
    spec.insert("version".to_string(), json!(descriptor.version));
    spec.insert(
        "versions".to_string(),
        json!([{
            "name": descriptor.version,
            "served": true,
            "storage": true,
        }]),
    );
    spec.insert(
        "names".to_string(),
        json!({
            "plural": descriptor.plural,
            "singular": descriptor.singular(),
            "kind": descriptor.kind,
            "listKind": format!("{}List", descriptor.kind),
        }),
    );
    spec.insert("scope".to_string(), json!(descriptor.scope()));
    spec.insert(
        "validation".to_string(),
        json!({ "openAPIV3Schema": serde_json::to_value(&descriptor.schema)? }),
    );

    if descriptor.has_status {
        spec.insert("subresources".to_string(), json!({ "status": {} }));
    }

    if !descriptor.columns.is_empty() {
        let columns: Vec<Value> = descriptor
            .columns
            .iter()
            .map(|c| {
                json!({
                    "name": c.name,
                    "type": "string",
                    "JSONPath": c.json_path,
                })
            })
            .collect();
        spec.insert("additionalPrinterColumns".to_string(), json!(columns));
    }

    Ok(json!({
        "apiVersion": Dialect::V1Beta1.api_version(),
        "kind": "CustomResourceDefinition",
        "metadata": { "name": descriptor.name() },
        "spec": Value::Object(spec),
    }))
}

/// Walk a schema and reject any field without a declared type.
///
/// Structural schemas require every property to carry an explicit type
/// unless it opts out via x-kubernetes-preserve-unknown-fields or
/// x-kubernetes-int-or-string. Violations are programming errors in the
/// descriptor and surface immediately with the offending field path.
fn ensure_structural(kind: &str, path: &str, schema: &JSONSchemaProps) -> Result<()> {
    if schema.type_.is_none()
        && schema.x_kubernetes_preserve_unknown_fields != Some(true)
        && schema.x_kubernetes_int_or_string != Some(true)
    {
        return Err(OutfitterError::SchemaDerivation {
            kind: kind.to_string(),
            field: format!("{} has no declared type", path),
        });
    }

    if let Some(properties) = &schema.properties {
        for (name, prop) in properties {
            ensure_structural(kind, &format!("{}.{}", path, name), prop)?;
        }
    }

    if let Some(JSONSchemaPropsOrArray::Schema(items)) = &schema.items {
        ensure_structural(kind, &format!("{}[]", path), items)?;
    }

    if let Some(JSONSchemaPropsOrBool::Schema(additional)) = &schema.additional_properties {
        ensure_structural(kind, &format!("{}.additionalProperties", path), additional)?;
    }

    Ok(())
}
