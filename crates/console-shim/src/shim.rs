//! Fallback console that forwards into the application's error log

use crate::{ApplicationSlot, Arg, Console, ShimConfig, join};

/// Stand-in console installed when the host has none.
///
/// Every operation funnels into [`Console::log`], which looks up the
/// application's log model at call time. With a model present the joined
/// message is reported as a single error; otherwise the call does nothing.
#[derive(Debug, Clone)]
pub struct ConsoleShim {
    applications: ApplicationSlot,
    config: ShimConfig,
}

impl ConsoleShim {
    /// Create a shim reading collaborators from `applications`
    #[must_use]
    pub fn new(applications: ApplicationSlot) -> Self {
        Self::with_config(applications, ShimConfig::default())
    }

    /// Create a shim with explicit configuration
    #[must_use]
    pub const fn with_config(applications: ApplicationSlot, config: ShimConfig) -> Self {
        Self {
            applications,
            config,
        }
    }

    /// The shim's configuration
    #[must_use]
    pub const fn config(&self) -> &ShimConfig {
        &self.config
    }
}

impl Console for ConsoleShim {
    fn log(&self, args: &[Arg]) {
        let Some(logs) = self.applications.log_model() else {
            return;
        };

        logs.log_error(&join(args), &self.config.source);
    }
}
