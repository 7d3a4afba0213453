//! In-memory collaborators for the console shim.
//!
//! [`MemoryLogModel`] keeps every reported error so a host (or a test) can
//! inspect what scripts logged; [`MemoryApplication`] exposes it to the shim.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use console_shim::{Application, LogModel};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A reported error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The joined message
    pub message: String,
    /// Runtime the message came from
    pub source: String,
    /// When the error was reported
    pub timestamp: DateTime<Utc>,
}

/// Error log held in memory, oldest entry first.
///
/// Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryLogModel {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    max_entries: Option<usize>,
}

impl MemoryLogModel {
    /// Creates an unbounded log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log that keeps at most `max_entries`, dropping the oldest.
    #[must_use]
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            max_entries: Some(max_entries),
        }
    }

    /// Snapshot of all entries
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Entries reported with the given source tag
    #[must_use]
    pub fn errors_from(&self, source: &str) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.source == source)
            .cloned()
            .collect()
    }

    /// Number of entries held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether no entries are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Removes all entries
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl LogModel for MemoryLogModel {
    fn log_error(&self, message: &str, source: &str) {
        let mut entries = self.entries.lock();

        if let Some(max) = self.max_entries {
            if max == 0 {
                return;
            }
            while entries.len() >= max {
                entries.pop_front();
            }
        }

        entries.push_back(LogEntry {
            message: message.to_string(),
            source: source.to_string(),
            timestamp: Utc::now(),
        });
    }
}

/// Application object with an optional log model
#[derive(Clone, Default)]
pub struct MemoryApplication {
    logs: Option<Arc<dyn LogModel>>,
}

impl MemoryApplication {
    /// Creates an application exposing `logs`
    pub fn new(logs: impl LogModel) -> Self {
        Self {
            logs: Some(Arc::new(logs)),
        }
    }

    /// Creates an application that has no log model
    #[must_use]
    pub fn without_logs() -> Self {
        Self::default()
    }
}

impl Application for MemoryApplication {
    fn logs(&self) -> Option<Arc<dyn LogModel>> {
        self.logs.clone()
    }
}
