// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Shared plumbing for every onlyfounders crate: process exit codes, the
//! machine-readable error envelope and configuration loading.

mod config;
mod errors;

use sha2::{Digest, Sha256};

pub use config::{load_config, resolve_config_path, ConfigError, LaunchpadConfig};
pub use errors::{ExitCode, MachineError};

pub const CRATE_NAME: &str = "onlyfounders-core";

pub const ENV_ONLYFOUNDERS_CONFIG: &str = "ONLYFOUNDERS_CONFIG";
pub const ENV_ONLYFOUNDERS_LOG_LEVEL: &str = "ONLYFOUNDERS_LOG_LEVEL";
pub const ENV_ONLYFOUNDERS_LOG_JSON: &str = "ONLYFOUNDERS_LOG_JSON";
pub const ENV_ONLYFOUNDERS_LATENCY_MS: &str = "ONLYFOUNDERS_LATENCY_MS";

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
