//! Bridge from the `log` crate into a console

use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record};

use crate::{Arg, Console, Method, Result};

/// Wrapper implementing the log crate's `Log` trait on top of a console
pub struct LogBridge {
    console: Arc<dyn Console>,
    max_level: LevelFilter,
}

impl LogBridge {
    /// Create a new log bridge passing records up to `max_level`
    pub fn new(console: Arc<dyn Console>, max_level: LevelFilter) -> Self {
        Self { console, max_level }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Arg::String(record.args().to_string());
        self.console.call(map_level(record.level()), &[message]);
    }

    fn flush(&self) {}
}

/// Map log levels to console methods
pub const fn map_level(level: log::Level) -> Method {
    match level {
        log::Level::Error => Method::Error,
        log::Level::Warn => Method::Warn,
        log::Level::Info => Method::Info,
        log::Level::Debug | log::Level::Trace => Method::Debug,
    }
}

/// Make `console` the process-wide `log` logger.
///
/// The `log` crate only accepts one logger per process, so this succeeds only
/// if no other logger has been set.
///
/// # Errors
///
/// Returns [`crate::Error::SetLogger`] if a logger is already set.
///
/// # Example
/// ```no_run
/// use console_shim::{Environment, compat::log_bridge::init_log_bridge};
///
/// let environment = Environment::new();
/// environment.install();
///
/// if let Some(console) = environment.console() {
///     init_log_bridge(console, log::LevelFilter::Info).expect("Failed to set log bridge");
/// }
/// ```
pub fn init_log_bridge(console: Arc<dyn Console>, max_level: LevelFilter) -> Result<()> {
    // log::set_logger requires 'static
    let bridge = Box::leak(Box::new(LogBridge::new(console, max_level)));

    log::set_logger(bridge)?;
    log::set_max_level(max_level);
    Ok(())
}
