// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Assembling both dialect streams into one capability-guarded document.

use crate::constants::markers;
use crate::error::{OutfitterError, Result};
use crate::export::descriptor::ResourceDescriptor;
use crate::export::render::{render, Dialect, RenderedCrd};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Render every descriptor under both dialects and wrap the streams in the
/// Helm capability guard. The v1 block renders on clusters that serve
/// apiextensions.k8s.io/v1, the v1beta1 block everywhere else; the guard is
/// left for the chart renderer to evaluate.
///
/// All-or-nothing: any single render failure aborts the whole assembly.
pub fn assemble(descriptors: &[ResourceDescriptor]) -> Result<String> {
    let mut seen = HashSet::new();
    for descriptor in descriptors {
        if !seen.insert(descriptor.name()) {
            return Err(OutfitterError::DuplicateResource(descriptor.name()));
        }
    }

    let structural = render_all(descriptors, Dialect::V1)?;
    let legacy = render_all(descriptors, Dialect::V1Beta1)?;

    let mut out = String::new();
    out.push_str(markers::CAPABILITY_GUARD);
    out.push('\n');
    push_stream(&mut out, &structural);
    out.push_str(markers::ELSE);
    out.push('\n');
    push_stream(&mut out, &legacy);
    out.push_str(markers::END);
    out.push('\n');

    Ok(out)
}

/// Assemble and write the document to the given path, creating missing
/// parent directories on demand. Write failures are fatal.
pub fn write_manifest(path: &Path, descriptors: &[ResourceDescriptor]) -> Result<()> {
    let document = assemble(descriptors)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &document)?;

    info!(
        "Wrote CRD manifest for {} resource(s) to {}",
        descriptors.len(),
        path.display()
    );
    Ok(())
}

fn render_all(descriptors: &[ResourceDescriptor], dialect: Dialect) -> Result<Vec<RenderedCrd>> {
    descriptors.iter().map(|d| render(d, dialect)).collect()
}

fn push_stream(out: &mut String, docs: &[RenderedCrd]) {
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            out.push_str("---\n");
        }
        out.push_str(&doc.yaml);
    }
}
