// SPDX-License-Identifier: Apache-2.0

use onlyfounders_core::{ENV_ONLYFOUNDERS_LOG_JSON, ENV_ONLYFOUNDERS_LOG_LEVEL};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn env_bool(key: &str) -> Option<bool> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    if let Some(level) = level_for_verbosity(verbose) {
        return EnvFilter::new(level);
    }
    std::env::var(ENV_ONLYFOUNDERS_LOG_LEVEL)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Logs always go to stderr so stdout stays
/// parseable in `--json` mode.
pub(crate) fn init_tracing(verbose: u8, config_log_json: bool) {
    let filter = build_filter(verbose);
    let log_json = env_bool(ENV_ONLYFOUNDERS_LOG_JSON).unwrap_or(config_log_json);
    let result = if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
