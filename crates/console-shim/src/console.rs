//! Core console trait

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Arg, Error};

/// The five operations every console exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// General log output
    Log,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
    /// Debug output
    Debug,
}

impl Method {
    /// Every console method, in declaration order
    pub const ALL: [Self; 5] = [Self::Log, Self::Info, Self::Warn, Self::Error, Self::Debug];

    /// Lowercase name, as a script would call it
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(Self::Log),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "debug" => Ok(Self::Debug),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

/// A process-wide logging facility.
///
/// Only `log` is required. The leveled methods default to forwarding their
/// arguments to `log` unchanged; a host console with real severities can
/// override them.
///
/// Implementations must never panic, whatever arguments they receive.
pub trait Console: Send + Sync + 'static {
    /// Log a message made of `args`
    fn log(&self, args: &[Arg]);

    /// Log informational output
    fn info(&self, args: &[Arg]) {
        self.log(args);
    }

    /// Log a warning
    fn warn(&self, args: &[Arg]) {
        self.log(args);
    }

    /// Log an error
    fn error(&self, args: &[Arg]) {
        self.log(args);
    }

    /// Log debug output
    fn debug(&self, args: &[Arg]) {
        self.log(args);
    }

    /// Dispatch to the operation named by `method`
    fn call(&self, method: Method, args: &[Arg]) {
        match method {
            Method::Log => self.log(args),
            Method::Info => self.info(args),
            Method::Warn => self.warn(args),
            Method::Error => self.error(args),
            Method::Debug => self.debug(args),
        }
    }
}
