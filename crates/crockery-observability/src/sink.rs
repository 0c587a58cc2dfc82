//! Log sinks.

use std::sync::{Arc, Mutex};

use crate::logging::{LogEntry, LogFormat, LogLevel};

/// Destination for structured log entries.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// Browser devtools console on `wasm32`, stderr elsewhere.
    #[default]
    Console,
    /// In-memory buffer, for tests and diagnostics panels.
    Memory(MemoryLog),
}

impl LogSink {
    pub(crate) fn write(&self, entry: &LogEntry, format: LogFormat) {
        match self {
            LogSink::Console => {
                let line = match format {
                    LogFormat::Json => entry.to_json(),
                    LogFormat::Human => entry.to_human(),
                };
                write_console(entry.level, &line);
            }
            LogSink::Memory(memory) => memory.push(entry.clone()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: LogLevel, line: &str) {
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(line);
    match level {
        LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&value),
        LogLevel::Info => web_sys::console::log_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: LogLevel, line: &str) {
    eprintln!("{}", line);
}

/// Shared in-memory log buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: LogEntry) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(entry);
    }

    /// Snapshot of all captured entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Entries at exactly the given level.
    pub fn at_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
