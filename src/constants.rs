// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name used for server-side identification
pub const OPERATOR_NAME: &str = "outfitter";

/// Helm template markers wrapping the generated CRD streams.
///
/// These three tokens are a contract with the chart renderer that consumes
/// the exported manifest; they must match byte-for-byte.
pub mod markers {
    /// Opens the block rendered on clusters that serve apiextensions.k8s.io/v1
    pub const CAPABILITY_GUARD: &str =
        "{{- if .Capabilities.APIVersions.Has \"apiextensions.k8s.io/v1\" -}}";
    /// Switches to the legacy v1beta1 block
    pub const ELSE: &str = "{{- else -}}";
    /// Closes the guarded block
    pub const END: &str = "{{- end -}}";
}

/// CRD installation configuration
pub mod install {
    /// Interval in milliseconds between Established-condition polls
    pub const POLL_INTERVAL_MILLIS: u64 = 500;
    /// Default wait bound in seconds for a CRD to become Established
    pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 120;
}
