//! Test infrastructure for bare-metal testing with QEMU.
//!
//! Integration tests in `tests/` build as freestanding binaries; these
//! helpers give them a test runner, a panic handler, and a way to report
//! results back to the host through the isa-debug-exit device.

use crate::serial_println;

/// QEMU exit codes for signaling test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// One or more tests failed.
    Failed = 0x11,
}

/// Exit QEMU with the given exit code.
///
/// Requires QEMU started with `-device isa-debug-exit,iobase=0xf4,iosize=0x04`.
/// The observed exit code is `(value << 1) | 1`.
pub fn exit_qemu(exit_code: QemuExitCode) {
    use x86_64::instructions::port::Port;

    // SAFETY: Writing to the isa-debug-exit device port is safe when QEMU is
    // configured with this device. It triggers a QEMU exit.
    unsafe {
        let mut port = Port::new(0xf4);
        port.write(exit_code as u32);
    }
}

/// Trait for types that can be run as tests.
pub trait Testable {
    /// Run the test and report results.
    fn run(&self);
}

impl<T: Fn()> Testable for T {
    fn run(&self) {
        serial_println!("test {} ... ", core::any::type_name::<T>());
        self();
        serial_println!("[ok]");
    }
}

/// Custom test runner: runs every test, then exits QEMU with success.
pub fn test_runner(tests: &[&dyn Testable]) {
    serial_println!("Running {} tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Panic handler for test binaries: reports the failure and exits QEMU.
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    serial_println!("[failed]");
    serial_println!("Error: {}", info);
    exit_qemu(QemuExitCode::Failed);
    crate::arch::x86_64::halt_loop()
}
