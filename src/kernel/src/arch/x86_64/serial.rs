//! Serial port driver for x86_64.
//!
//! Provides serial output via COM1 (0x3F8). The port doubles as the
//! console's mirror sink: every character the console emits to the display
//! is also forwarded here, in the same order, so a headless run still sees
//! the session.

use core::fmt::{self, Write};
use spin::Mutex;
use uart_16550::SerialPort;

/// COM1 I/O port address.
const COM1_PORT: u16 = 0x3F8;

/// Global serial port instance, lazily initialized.
///
/// Uses a spinlock for safe concurrent access from multiple contexts,
/// including interrupt handlers.
pub static SERIAL: spin::Once<Mutex<SerialPort>> = spin::Once::new();

/// Initializes the global serial port.
///
/// Idempotent - safe to call multiple times.
pub fn init() {
    SERIAL.call_once(|| {
        // SAFETY: COM1_PORT (0x3F8) is a well-known x86 serial port address
        // and we run in kernel mode with full I/O port access. The
        // uart_16550 crate performs the initialization sequence.
        let mut serial = unsafe { SerialPort::new(COM1_PORT) };
        serial.init();
        Mutex::new(serial)
    });
}

/// Runs `f` with the serial port locked and interrupts masked.
///
/// The port is locked from process context (log records, panic reporting)
/// and from the keyboard interrupt (the console's echo mirror). Masking
/// while the lock is held keeps the handler from spinning on a lock its
/// own core already owns.
fn with_serial<R>(f: impl FnOnce(&mut SerialPort) -> R) -> R {
    init();
    let serial = SERIAL.get().expect("serial port not initialized");
    x86_64::instructions::interrupts::without_interrupts(|| f(&mut serial.lock()))
}

/// Prints to the serial port without a newline.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::arch::x86_64::serial::_print(format_args!($($arg)*))
    };
}

/// Prints to the serial port with a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => ($crate::serial_print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    with_serial(|serial| {
        let _ = serial.write_fmt(args);
    });
}

/// The console's mirror sink over the global serial port.
pub struct UartMirror;

impl tessera_hal::Serial for UartMirror {
    fn write_byte(&mut self, byte: u8) {
        with_serial(|serial| serial.send(byte));
    }

    fn read_byte(&mut self) -> Option<u8> {
        with_serial(|serial| serial.try_receive().ok())
    }
}
