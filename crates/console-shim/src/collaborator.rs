//! External collaborators the console forwards into

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Source tag attached to every message forwarded by the shim
pub const JAVASCRIPT_SOURCE: &str = "javascript";

/// An application's error log.
pub trait LogModel: Send + Sync + 'static {
    /// Record an error message along with the runtime it came from
    fn log_error(&self, message: &str, source: &str);
}

/// The host application object.
///
/// An application may or may not carry a log model; both levels are optional
/// from the console's point of view.
pub trait Application: Send + Sync + 'static {
    /// The application's log model, if it has one
    fn logs(&self) -> Option<Arc<dyn LogModel>>;
}

/// Shared, late-bound reference to the current application.
///
/// The application can appear, change or go away at any point after the
/// console is installed, so lookups happen on every call.
#[derive(Clone, Default)]
pub struct ApplicationSlot {
    inner: Arc<RwLock<Option<Arc<dyn Application>>>>,
}

impl ApplicationSlot {
    /// Create an empty slot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an application, returning the previous one
    pub fn set(&self, application: Arc<dyn Application>) -> Option<Arc<dyn Application>> {
        self.inner.write().replace(application)
    }

    /// Unbind the current application, returning it
    pub fn clear(&self) -> Option<Arc<dyn Application>> {
        self.inner.write().take()
    }

    /// The current application, if any
    #[must_use]
    pub fn get(&self) -> Option<Arc<dyn Application>> {
        self.inner.read().clone()
    }

    /// Resolve the application's log model.
    ///
    /// Returns `None` when there is no application or the application has no
    /// log model. The slot lock is released before this returns.
    #[must_use]
    pub fn log_model(&self) -> Option<Arc<dyn LogModel>> {
        let application = self.get()?;
        application.logs()
    }
}

impl fmt::Debug for ApplicationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationSlot")
            .field("bound", &self.inner.read().is_some())
            .finish()
    }
}

/// Log model that reports each message as a `tracing` error event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogModel;

impl LogModel for TracingLogModel {
    fn log_error(&self, message: &str, source: &str) {
        tracing::error!(source, "{message}");
    }
}

/// Application whose log model is always a [`TracingLogModel`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingApplication;

impl Application for TracingApplication {
    fn logs(&self) -> Option<Arc<dyn LogModel>> {
        Some(Arc::new(TracingLogModel))
    }
}
