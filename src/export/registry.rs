// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The list of custom resources this tool manages.
//!
//! This is the single source of truth for which CRDs get exported and
//! installed. Adding a managed resource means appending one descriptor
//! here; order is fixed so exports stay byte-identical across runs.

use crate::error::Result;
use crate::export::descriptor::ResourceDescriptor;
use crate::types::pcidevice::PCIDevice;
use crate::types::pcidevice_claim::PCIDeviceClaim;

pub fn list() -> Result<Vec<ResourceDescriptor>> {
    Ok(vec![
        ResourceDescriptor::for_type::<PCIDevice>()?
            .with_column("Address", ".status.address")?
            .with_column("Vendor Id", ".status.vendorId")?
            .with_column("Device Id", ".status.deviceId")?
            .with_column("Node Name", ".status.nodeName")?
            .with_column("Description", ".status.description")?,
        ResourceDescriptor::for_type::<PCIDeviceClaim>()?
            .with_column("Address", ".spec.address")?
            .with_column("Node Name", ".spec.nodeName")?
            .with_column("User Name", ".spec.userName")?,
    ])
}
