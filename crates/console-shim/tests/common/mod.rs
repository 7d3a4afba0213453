//! Shared collaborators for integration tests

#![allow(dead_code)]

use console_shim::{Application, Arg, Console, LogModel};
use parking_lot::Mutex;
use std::sync::Arc;

/// Log model that records every call
#[derive(Default)]
pub struct RecordingLogModel {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingLogModel {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

impl LogModel for RecordingLogModel {
    fn log_error(&self, message: &str, source: &str) {
        self.calls.lock().push((message.to_string(), source.to_string()));
    }
}

/// Application with an optional log model
pub struct TestApplication {
    pub logs: Option<Arc<RecordingLogModel>>,
}

impl TestApplication {
    pub fn with_logs() -> (Arc<Self>, Arc<RecordingLogModel>) {
        let logs = Arc::new(RecordingLogModel::default());
        let application = Arc::new(Self {
            logs: Some(logs.clone()),
        });
        (application, logs)
    }

    pub fn without_logs() -> Arc<Self> {
        Arc::new(Self { logs: None })
    }
}

impl Application for TestApplication {
    fn logs(&self) -> Option<Arc<dyn LogModel>> {
        self.logs.clone().map(|logs| logs as Arc<dyn LogModel>)
    }
}

/// Console that records the method and joined message of each call
#[derive(Default)]
pub struct RecordingConsole {
    calls: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingConsole {
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().clone()
    }

    fn record(&self, method: &'static str, args: &[Arg]) {
        self.calls.lock().push((method, console_shim::join(args)));
    }
}

impl Console for RecordingConsole {
    fn log(&self, args: &[Arg]) {
        self.record("log", args);
    }

    fn info(&self, args: &[Arg]) {
        self.record("info", args);
    }

    fn warn(&self, args: &[Arg]) {
        self.record("warn", args);
    }

    fn error(&self, args: &[Arg]) {
        self.record("error", args);
    }

    fn debug(&self, args: &[Arg]) {
        self.record("debug", args);
    }
}
