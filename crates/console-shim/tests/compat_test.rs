//! Tests for compatibility bridges

mod common;

use std::sync::Arc;

use common::{RecordingConsole, TestApplication};
use console_shim::Environment;

#[test]
#[cfg(feature = "log-compat")]
fn test_log_bridge() {
    use console_shim::compat::log_bridge::init_log_bridge;

    let console = Arc::new(RecordingConsole::default());
    init_log_bridge(console.clone(), log::LevelFilter::Debug).expect("first logger");

    log::error!("Error from log crate");
    log::warn!("Warning from log crate");
    log::info!("Info from log crate {}", 42);
    log::debug!("Debug from log crate");
    log::trace!("Trace is filtered");

    assert_eq!(
        console.calls(),
        vec![
            ("error", "Error from log crate".to_string()),
            ("warn", "Warning from log crate".to_string()),
            ("info", "Info from log crate 42".to_string()),
            ("debug", "Debug from log crate".to_string()),
        ]
    );

    // Only one logger per process
    let second = init_log_bridge(console, log::LevelFilter::Info);
    assert!(matches!(second, Err(console_shim::Error::SetLogger(_))));
}

#[cfg(feature = "tracing-compat")]
mod tracing_compat {
    use super::*;
    use console_shim::compat::tracing_bridge::TracingBridge;
    use tracing_subscriber::prelude::*;

    #[test]
    fn test_tracing_bridge() {
        let console = Arc::new(RecordingConsole::default());
        let subscriber = tracing_subscriber::registry().with(TracingBridge::new(console.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("Error from tracing");
            tracing::warn!("Warning from tracing");
            tracing::info!(count = 42, "Message with field");
            tracing::trace!("Trace from tracing");
        });

        assert_eq!(
            console.calls(),
            vec![
                ("error", "Error from tracing".to_string()),
                ("warn", "Warning from tracing".to_string()),
                ("info", "Message with field count=42".to_string()),
                ("debug", "Trace from tracing".to_string()),
            ]
        );
    }

    #[test]
    fn test_tracing_spans() {
        let console = Arc::new(RecordingConsole::default());
        let subscriber = tracing_subscriber::registry().with(TracingBridge::new(console.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let outer = tracing::info_span!("outer");
            let _outer = outer.enter();
            let inner = tracing::info_span!("inner");
            let _inner = inner.enter();

            tracing::info!("Inside span");
        });

        assert_eq!(
            console.calls(),
            vec![("info", "outer::inner: Inside span".to_string())]
        );
    }

    #[test]
    fn test_tracing_into_installed_shim() {
        let environment = Environment::new();
        let (application, logs) = TestApplication::with_logs();
        environment.set_application(application);
        environment.install();

        let console = environment.console().expect("console bound");
        let subscriber = tracing_subscriber::registry().with(TracingBridge::new(console));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(attempt = 3, "retrying");
        });

        assert_eq!(
            logs.calls(),
            vec![("retrying attempt=3".to_string(), "javascript".to_string())]
        );
    }
}
