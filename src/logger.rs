// In-app logger: mirrors records to stderr and keeps a bounded buffer
// for display inside the egui Logs window, with level info.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

const MAX_LOG_LINES: usize = 2000;

lazy_static! {
    static ref LOGS: Mutex<VecDeque<LogEntry>> = Mutex::new(VecDeque::new());
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct BufferLogger;

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if let Some(max) = log::max_level().to_level() {
            metadata.level() <= max
        } else {
            false
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "[{:>5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );

        if let Ok(mut buf) = LOGS.lock() {
            buf.push_back(LogEntry {
                level: record.level(),
                target: record.target().to_string(),
                msg: format!("{}", record.args()),
            });
            if buf.len() > MAX_LOG_LINES {
                buf.pop_front();
            }
        }
        NEW_LOGS.store(true, Ordering::Relaxed);
    }

    fn flush(&self) {}
}

fn level_from_env() -> Option<LevelFilter> {
    let Ok(val) = std::env::var("RUST_LOG") else {
        return None;
    };
    let v = val.to_lowercase();
    if v.contains("trace") {
        Some(LevelFilter::Trace)
    } else if v.contains("debug") {
        Some(LevelFilter::Debug)
    } else if v.contains("info") {
        Some(LevelFilter::Info)
    } else if v.contains("warn") {
        Some(LevelFilter::Warn)
    } else if v.contains("error") {
        Some(LevelFilter::Error)
    } else if v.contains("off") {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

/// Install the logger. Level defaults to Info, overridable via RUST_LOG.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(BufferLogger));
    let level = level_from_env().unwrap_or(LevelFilter::Info);
    log::set_max_level(level);
    log::info!("logger initialized at level {level}");
}

/// Visit the `count` most recent entries, oldest first.
pub fn for_each_recent<F: FnMut(&LogEntry)>(count: usize, mut f: F) {
    if let Ok(buf) = LOGS.lock() {
        let skip = buf.len().saturating_sub(count);
        for entry in buf.iter().skip(skip) {
            f(entry);
        }
    }
}

pub fn len() -> usize {
    if let Ok(buf) = LOGS.lock() {
        buf.len()
    } else {
        0
    }
}

/// Returns true if new logs arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}
