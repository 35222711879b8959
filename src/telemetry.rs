//! Diagnostic logging to stderr, filtered by `RUST_LOG`.
use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `default_directive` applies when `RUST_LOG` is unset or invalid.
/// Logs go to stderr so program output on stdout stays exact.
pub fn init(default_directive: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()?;
    Ok(())
}
