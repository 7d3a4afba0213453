//! Error types for console setup

use thiserror::Error;

/// Errors returned by host-side setup APIs.
///
/// Console operations themselves never fail; these only surface while a host
/// wires the console into its environment.
#[derive(Debug, Error)]
pub enum Error {
    /// A method name did not match any console operation
    #[error("unknown console method: {0}")]
    UnknownMethod(String),

    /// The environment already has a console bound
    #[error("a console is already bound to this environment")]
    ConsoleAlreadySet,

    /// The `log` crate already has a global logger
    #[cfg(feature = "log-compat")]
    #[error("failed to set log bridge: {0}")]
    SetLogger(#[from] log::SetLoggerError),

    /// A global tracing subscriber is already set
    #[cfg(feature = "tracing-compat")]
    #[error("failed to set tracing bridge: {0}")]
    TracingInit(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
