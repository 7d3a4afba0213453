//! Bridges that feed other logging crates into a console

#[cfg(feature = "log-compat")]
pub mod log_bridge;

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;

#[cfg(all(feature = "log-compat", feature = "tracing-compat"))]
use std::sync::Arc;

#[cfg(all(feature = "log-compat", feature = "tracing-compat"))]
use crate::{Console, Result};

/// Route both `log` and `tracing` output into `console`.
///
/// # Errors
///
/// Fails if either crate already has a global logger or subscriber.
#[cfg(all(feature = "log-compat", feature = "tracing-compat"))]
pub fn init_with_bridges(console: Arc<dyn Console>, max_level: log::LevelFilter) -> Result<()> {
    log_bridge::init_log_bridge(console.clone(), max_level)?;
    tracing_bridge::init_tracing_bridge(console)?;
    Ok(())
}
