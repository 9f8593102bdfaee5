//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Once;
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&msg),
            Level::Warn => console::warn_1(&msg),
            Level::Info => console::info_1(&msg),
            Level::Debug => console::log_1(&msg),
            Level::Trace => console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger and panic hook. Later calls are ignored.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
        std::panic::set_hook(Box::new(|info| {
            let msg = format!("rings panic: {info}");
            console::error_1(&msg.into());
        }));
        log::debug!("logging initialized");
    });
}
