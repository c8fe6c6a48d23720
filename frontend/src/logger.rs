//! `log` backend writing to the browser console through `gloo-console`.

use log::{Level, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    level: Level,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    level: if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    },
};

/// Installs the console logger. Only the first call has any effect.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LOGGER.level.to_level_filter());
    Ok(())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo_console::error!(line),
            Level::Warn => gloo_console::warn!(line),
            Level::Info => gloo_console::info!(line),
            Level::Debug | Level::Trace => gloo_console::debug!(line),
        }
    }

    fn flush(&self) {}
}
