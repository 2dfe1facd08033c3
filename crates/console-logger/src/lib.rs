//! Console Logger
//!
//! A `log` backend for WASM frontends. Records go to the browser devtools
//! console, routed by level so the console's own filters keep working.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Logger that forwards records to `console.*`
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from_str(&line);
        match console_method(record.level()) {
            ConsoleMethod::Error => web_sys::console::error_1(&value),
            ConsoleMethod::Warn => web_sys::console::warn_1(&value),
            ConsoleMethod::Log => web_sys::console::log_1(&value),
        }
    }

    fn flush(&self) {}
}

/// `console.*` function a record is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

/// Only errors and warnings get their own console channel
pub fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::Error => ConsoleMethod::Error,
        Level::Warn => ConsoleMethod::Warn,
        Level::Info | Level::Debug | Level::Trace => ConsoleMethod::Log,
    }
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Render a record as `[LEVEL target] message`.
///
/// The crate prefix is stripped from the target so `todo_web::api` shows as `api`.
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    let short = target.split_once("::").map(|(_, rest)| rest).unwrap_or(target);
    format!("[{} {}] {}", level, short, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_crate_prefix() {
        assert_eq!(
            format_line(Level::Info, "todo_web::api::todo", "Loaded 3 todos"),
            "[INFO api::todo] Loaded 3 todos"
        );
    }

    #[test]
    fn test_console_method_routing() {
        assert_eq!(console_method(Level::Error), ConsoleMethod::Error);
        assert_eq!(console_method(Level::Warn), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::Info), ConsoleMethod::Log);
        assert_eq!(console_method(Level::Debug), ConsoleMethod::Log);
        assert_eq!(console_method(Level::Trace), ConsoleMethod::Log);
    }

    #[test]
    fn test_format_line_keeps_bare_target() {
        assert_eq!(format_line(Level::Error, "todo_web", "boom"), "[ERROR todo_web] boom");
    }
}
