//! Log capture for the debug console
//!
//! The alternate screen belongs to the UI, so log records are kept in a
//! bounded in-memory buffer and rendered by the Ctrl+D console. Only
//! errors reach stderr.
use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

const CAPACITY: usize = 1000;

/// Crates whose debug output is captured when RUST_LOG is unset
const CAPTURED_CRATES: [&str; 2] = ["handle_scout", "handle_scout_ai"];

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    fn from_record(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }
}

/// Shared between the logger and the debug console view
pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

pub fn new_buffer() -> LogBuffer {
    Arc::new(Mutex::new(VecDeque::with_capacity(CAPACITY)))
}

/// Filter deciding what lands in the buffer
///
/// `rust_log` takes env_logger directive syntax, e.g. `handle_scout_ai=trace`.
fn capture_filter(rust_log: Option<&str>) -> env_logger::Logger {
    let mut builder = env_logger::Builder::new();
    match rust_log {
        Some(directives) => {
            builder.parse_filters(directives);
        }
        None => {
            for krate in CAPTURED_CRATES {
                builder.filter_module(krate, LevelFilter::Debug);
            }
        }
    }
    builder.build()
}

struct CaptureLogger {
    buffer: LogBuffer,
    capture: env_logger::Logger,
    stderr: env_logger::Logger,
}

impl CaptureLogger {
    fn new(buffer: LogBuffer, rust_log: Option<&str>) -> Self {
        Self {
            buffer,
            capture: capture_filter(rust_log),
            stderr: env_logger::Builder::new()
                .filter_level(LevelFilter::Error)
                .build(),
        }
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == CAPACITY {
                buffer.pop_front();
            }
            buffer.push_back(entry);
        }
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.capture.enabled(metadata) || self.stderr.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.capture.matches(record) {
            self.push(LogEntry::from_record(record));
        }
        if self.stderr.matches(record) {
            self.stderr.log(record);
        }
    }

    fn flush(&self) {
        self.stderr.flush();
    }
}

/// Install the capturing logger and return its buffer
///
/// Must run before the first log call. Without RUST_LOG the console shows
/// debug output of this app and its provider crate; `RUST_LOG=trace` also
/// shows every dispatched action.
pub fn init_logger() -> LogBuffer {
    let buffer = new_buffer();
    let rust_log = std::env::var("RUST_LOG").ok();
    let logger = CaptureLogger::new(buffer.clone(), rust_log.as_deref());

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    log::info!("Logging to debug console, Ctrl+D to open");

    buffer
}
