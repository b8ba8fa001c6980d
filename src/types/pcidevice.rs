// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// A PCI device discovered on a node. The spec is empty: devices are
/// reported, not requested, so all detail lives in the status.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "devices.geeko.me", version = "v1beta1", kind = "PCIDevice")]
#[kube(status = "PCIDeviceStatus")]
#[serde(rename_all = "camelCase")]
pub struct PCIDeviceSpec {}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PCIDeviceStatus {
    /// PCI address, e.g. "0000:04:00.0"
    pub address: String,
    pub vendor_id: String,
    pub device_id: String,
    /// Node the device was discovered on
    pub node_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_driver_in_use: Option<String>,
    pub description: String,
}
