//! Bridge from tracing into a console

use std::fmt::Write;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

use crate::{Arg, Console, Error, Method, Result};

/// A tracing layer that forwards events to a console
pub struct TracingBridge<S> {
    console: Arc<dyn Console>,
    _phantom: PhantomData<S>,
}

impl<S> TracingBridge<S> {
    /// Create a new tracing bridge
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            console,
            _phantom: PhantomData,
        }
    }
}

impl<S> Layer<S> for TracingBridge<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let method = map_level(*event.metadata().level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut span_context = Vec::new();
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope.from_root() {
                span_context.push(span.name());
            }
        }

        let message = if span_context.is_empty() {
            visitor.message
        } else {
            format!("{}: {}", span_context.join("::"), visitor.message)
        };

        self.console.call(method, &[Arg::String(message)]);
    }
}

/// Map tracing levels to console methods
pub fn map_level(level: tracing::Level) -> Method {
    match level {
        tracing::Level::ERROR => Method::Error,
        tracing::Level::WARN => Method::Warn,
        tracing::Level::INFO => Method::Info,
        _ => Method::Debug,
    }
}

/// Collects the event message, with other fields appended as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Display) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        let _ = write!(self.message, "{name}={value}");
    }

    fn set_message(&mut self, message: &str) {
        // Fields recorded before the message stay after it
        if self.message.is_empty() {
            self.message = message.to_string();
        } else {
            self.message = format!("{message} {}", self.message);
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.set_message(value);
        } else {
            self.push_field(field.name(), &value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.set_message(&format!("{value:?}"));
        } else {
            self.push_field(field.name(), &format_args!("{value:?}"));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.push_field(field.name(), &value);
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.push_field(field.name(), &value);
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.push_field(field.name(), &value);
    }
}

/// Make a subscriber feeding `console` the global tracing default.
///
/// # Errors
///
/// Returns [`Error::TracingInit`] if a global subscriber is already set.
///
/// # Example
/// ```no_run
/// use console_shim::{Environment, compat::tracing_bridge::init_tracing_bridge};
///
/// let environment = Environment::new();
/// environment.install();
///
/// if let Some(console) = environment.console() {
///     init_tracing_bridge(console).expect("Failed to set tracing bridge");
/// }
/// ```
pub fn init_tracing_bridge(console: Arc<dyn Console>) -> Result<()> {
    use tracing_subscriber::prelude::*;

    let subscriber = tracing_subscriber::registry().with(TracingBridge::new(console));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::TracingInit(e.to_string()))
}
