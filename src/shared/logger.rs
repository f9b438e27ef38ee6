//! Runtime log sink for the `log` facade.
//!
//! Errors and warnings go to stderr, info and debug to stdout. Once file
//! logging is initialized every record is appended to the log file instead.
//! File logging is compiled in with the `file-logging` feature.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::path::Path;

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

/// Global sink installed by [`init`].
struct Logger {
    #[cfg(feature = "file-logging")]
    file: Mutex<Option<File>>,
}

static LOGGER: Logger = Logger {
    #[cfg(feature = "file-logging")]
    file: Mutex::new(None),
};

/// Install the logger and set the maximum level.
///
/// Calling this more than once only updates the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Change the maximum level after [`init`].
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Parse a level name (case-insensitive).
#[must_use]
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" | "err" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(feature = "file-logging")]
/// Redirect log output to a file, creating parent directories. Returns `true` on success.
#[must_use]
pub fn init_file_logging(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .is_ok_and(|file| {
            LOGGER.file.lock().is_ok_and(|mut log_file| {
                *log_file = Some(file);
                true
            })
        })
}

#[cfg(feature = "file-logging")]
/// Whether records currently go to a log file instead of the terminal.
#[must_use]
pub fn file_logging_active() -> bool {
    LOGGER.file.lock().is_ok_and(|log_file| log_file.is_some())
}

#[cfg(not(feature = "file-logging"))]
/// Always `false` without the `file-logging` feature.
#[must_use]
pub const fn file_logging_active() -> bool {
    false
}

#[cfg(not(feature = "file-logging"))]
/// Initialize file logging (no-op when `file-logging` feature is disabled).
#[must_use]
pub fn init_file_logging(_path: &Path) -> bool {
    false
}

impl Logger {
    #[cfg(feature = "file-logging")]
    fn write_to_file(&self, message: &str) -> bool {
        let Ok(mut log_file) = self.file.lock() else {
            return false;
        };
        match log_file.as_mut() {
            Some(file) => {
                let _ = writeln!(file, "{message}");
                let _ = file.flush();
                true
            }
            None => false,
        }
    }

    #[cfg(not(feature = "file-logging"))]
    #[allow(clippy::unused_self)]
    const fn write_to_file(&self, _message: &str) -> bool {
        false
    }
}

const fn prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "[ERROR]",
        Level::Warn => "[WARN]",
        Level::Info => "[INFO]",
        Level::Debug => "[DEBUG]",
        Level::Trace => "[TRACE]",
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = format!("{} {}", prefix(record.level()), record.args());
        if self.write_to_file(&message) {
            return;
        }
        if record.level() <= Level::Warn {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }

    fn flush(&self) {
        #[cfg(feature = "file-logging")]
        if let Ok(mut log_file) = self.file.lock() {
            if let Some(file) = log_file.as_mut() {
                let _ = file.flush();
            }
        }
    }
}
