#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber for the CLI. Output goes to stderr so it
//! never mixes with anything printed on stdout.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding either a plain level or a full filter directive.
pub const LOG_ENV: &str = "OASDOC_LOG";

const CRATES: [&str; 2] = [module_path!(), "oasdoc_core"];

/// Builds the filter directive from the value of [`LOG_ENV`], if any.
///
/// A plain level (`debug`) applies to this workspace's crates only; anything
/// else is used verbatim (`oasdoc_core=trace,warn`).
pub fn filter_directive(value: Option<&str>) -> String {
    match value {
        Some(level) if is_plain_level(level) => scoped(level),
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => scoped("info"),
    }
}

fn scoped(level: &str) -> String {
    CRATES
        .iter()
        .map(|&krate| {
            // module_path! yields `oasdoc::logging`; filters want the crate root.
            let root = krate.split("::").next().unwrap_or(krate);
            format!("{root}={level}")
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    )
}

/// Initializes logging from [`LOG_ENV`].
pub fn init() {
    let value = std::env::var(LOG_ENV).ok();
    let filter = filter_directive(value.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
