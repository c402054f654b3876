use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` applies unless `verbose` forces
/// trace level for this crate and the core library.
pub fn enable_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new(format!(
            "{}={level},hoursum_core={level}",
            env!("CARGO_CRATE_NAME"),
            level = LevelFilter::TRACE
        ))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LevelFilter::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
