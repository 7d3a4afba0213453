//! Fallback console facility.
//!
//! Code written against a conventional console (`log`, `info`, `warn`, `error`,
//! `debug`) can always call it, even when the host never provided one. The
//! host builds an [`Environment`] at its composition root and calls
//! [`Environment::install`]. If no console is bound yet, a [`ConsoleShim`] is
//! installed. The shim forwards each call to the application's error log when
//! the application and its log model are both present, and otherwise drops the
//! call silently. A console the host already bound is never replaced.
//!
//! ```
//! use std::sync::Arc;
//! use console_shim::{Console, Environment, Installation, TracingApplication, console_args};
//!
//! let environment = Environment::new();
//! assert_eq!(environment.install(), Installation::Installed);
//!
//! // Nothing to forward to yet, so this is a no-op
//! let console = environment.console().unwrap();
//! console.warn(&console_args![1, "x", true]);
//!
//! // Once an application shows up, messages reach its error log
//! environment.set_application(Arc::new(TracingApplication));
//! console.error(&console_args!["boom"]);
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod arg;
mod collaborator;
mod config;
mod console;
mod environment;
mod error;
mod shim;

pub mod compat;

pub use arg::{Arg, SEPARATOR, join};
pub use collaborator::{
    Application, ApplicationSlot, JAVASCRIPT_SOURCE, LogModel, TracingApplication,
    TracingLogModel,
};
pub use config::{ShimConfig, ShimConfigBuilder};
pub use console::{Console, Method};
pub use environment::{Environment, Installation};
pub use error::{Error, Result};
pub use shim::ConsoleShim;
