// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// A request to prepare one PCI device on one node for passthrough.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "devices.geeko.me", version = "v1beta1", kind = "PCIDeviceClaim")]
#[kube(status = "PCIDeviceClaimStatus")]
#[serde(rename_all = "camelCase")]
pub struct PCIDeviceClaimSpec {
    /// PCI address of the claimed device
    pub address: String,
    /// Node the claimed device lives on
    pub node_name: String,
    /// Who claimed the device
    pub user_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PCIDeviceClaimStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_driver_to_unbind: Option<String>,
    pub passthrough_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::CustomResourceExt;

    #[test]
    fn test_derived_crd_identity() {
        let crd = PCIDeviceClaim::crd();
        assert_eq!(crd.spec.group, "devices.geeko.me");
        assert_eq!(crd.spec.names.plural, "pcideviceclaims");
        assert_eq!(crd.spec.scope, "Cluster");
    }
}
