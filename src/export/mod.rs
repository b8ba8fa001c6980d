// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The CRD schema-export pipeline: descriptors, dialect rendering,
//! capability-gated assembly and the registry of managed resources.

pub mod assemble;
pub mod descriptor;
pub mod registry;
pub mod render;

pub use assemble::{assemble, write_manifest};
pub use descriptor::{ColumnSpec, ResourceDescriptor};
pub use render::{render, Dialect, RenderedCrd};
