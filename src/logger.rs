//! Browser Console Logger
//!
//! `log` backend that writes records to the devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_record(record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    let target = target.strip_prefix("edusearch_ui::").unwrap_or(target);
    format!("[{} {}] {}", level, target, message)
}

/// Install the console logger. Calling it twice keeps the first logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_strips_crate_prefix() {
        assert_eq!(
            format_record(Level::Warn, "edusearch_ui::api::client", "request failed"),
            "[WARN api::client] request failed"
        );
        assert_eq!(format_record(Level::Info, "gloo_net", "ok"), "[INFO gloo_net] ok");
    }
}
