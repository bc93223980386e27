//! Kernel logger backed by the serial port.
//!
//! Log records go to serial only, never to the VGA console: logging must
//! stay usable from interrupt context and from fault paths where the
//! console lock may already be held.

use crate::serial_println;
use log::{Level, LevelFilter, Metadata, Record};

struct SerialLogger;

impl log::Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            serial_println!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SerialLogger = SerialLogger;

/// Installs the serial logger. Idempotent; a second call is a no-op.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}
