//! The execution environment a console is bound into

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::{Application, ApplicationSlot, Console, ConsoleShim, Error, Result, ShimConfig};

/// Outcome of [`Environment::install`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installation {
    /// No console was bound; the shim is now in place
    Installed,
    /// A console was already bound and was left untouched
    Existing,
}

/// Holds the process's console binding and its application collaborator.
///
/// Built once at the composition root and shared with whatever needs to log.
/// The console binding is written at most once and never replaced.
#[derive(Default)]
pub struct Environment {
    console: OnceLock<Arc<dyn Console>>,
    applications: ApplicationSlot,
}

impl Environment {
    /// Create an environment with no console and no application
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment whose host already provides a console
    #[must_use]
    pub fn with_console(console: Arc<dyn Console>) -> Self {
        let environment = Self::new();
        let _ = environment.console.set(console);
        environment
    }

    /// The bound console, if any
    #[must_use]
    pub fn console(&self) -> Option<Arc<dyn Console>> {
        self.console.get().cloned()
    }

    /// Bind a host-provided console.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConsoleAlreadySet`] if a console is already bound.
    pub fn set_console(&self, console: Arc<dyn Console>) -> Result<()> {
        self.console.set(console).map_err(|_| Error::ConsoleAlreadySet)
    }

    /// The application slot consulted by the shim
    #[must_use]
    pub const fn applications(&self) -> &ApplicationSlot {
        &self.applications
    }

    /// Bind the application, returning the previous one
    pub fn set_application(&self, application: Arc<dyn Application>) -> Option<Arc<dyn Application>> {
        self.applications.set(application)
    }

    /// Unbind the application, returning it
    pub fn clear_application(&self) -> Option<Arc<dyn Application>> {
        self.applications.clear()
    }

    /// Install the console shim if no console is bound.
    pub fn install(&self) -> Installation {
        self.install_with(ShimConfig::default())
    }

    /// Install the console shim with `config` if no console is bound.
    ///
    /// An existing console is never replaced, and `config` is ignored in that
    /// case.
    pub fn install_with(&self, config: ShimConfig) -> Installation {
        let mut installation = Installation::Existing;

        self.console.get_or_init(|| {
            installation = Installation::Installed;
            Arc::new(ConsoleShim::with_config(self.applications.clone(), config))
        });

        match installation {
            Installation::Installed => debug!("installed console shim"),
            Installation::Existing => debug!("console already present, leaving it in place"),
        }

        installation
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("console", &self.console.get().is_some())
            .field("applications", &self.applications)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arg, TracingApplication};
    use tracing_test::traced_test;

    struct Silent;

    impl Console for Silent {
        fn log(&self, _args: &[Arg]) {}
    }

    #[test]
    fn test_install_into_empty_environment() {
        let environment = Environment::new();
        assert!(environment.console().is_none());

        assert_eq!(environment.install(), Installation::Installed);
        assert!(environment.console().is_some());
    }

    #[test]
    fn test_install_is_idempotent() {
        let environment = Environment::new();

        assert_eq!(environment.install(), Installation::Installed);
        let first = environment.console().unwrap();

        assert_eq!(environment.install(), Installation::Existing);
        assert!(Arc::ptr_eq(&first, &environment.console().unwrap()));
    }

    #[test]
    fn test_install_keeps_host_console() {
        let host: Arc<dyn Console> = Arc::new(Silent);
        let environment = Environment::with_console(host.clone());

        assert_eq!(environment.install(), Installation::Existing);
        assert!(Arc::ptr_eq(&host, &environment.console().unwrap()));
    }

    #[test]
    fn test_set_console_only_once() {
        let environment = Environment::new();

        environment.set_console(Arc::new(Silent)).unwrap();
        let err = environment.set_console(Arc::new(Silent)).unwrap_err();

        assert!(matches!(err, Error::ConsoleAlreadySet));
    }

    #[test]
    fn test_set_console_after_install_fails() {
        let environment = Environment::new();
        environment.install();

        assert!(environment.set_console(Arc::new(Silent)).is_err());
    }

    #[test]
    fn test_application_helpers() {
        let environment = Environment::new();

        assert!(environment.set_application(Arc::new(TracingApplication)).is_none());
        assert!(environment.applications().log_model().is_some());
        assert!(environment.clear_application().is_some());
        assert!(environment.applications().get().is_none());
    }

    #[test]
    #[traced_test]
    fn test_install_is_logged() {
        let environment = Environment::new();
        environment.install();
        environment.install();

        assert!(logs_contain("installed console shim"));
        assert!(logs_contain("console already present"));
    }
}
