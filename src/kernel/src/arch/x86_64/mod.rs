//! x86_64 architecture support.
//!
//! Hardware drivers behind the console: the VGA text buffer and CRT cursor,
//! the COM1 serial mirror, the 8259 PICs, and the interrupt descriptor table.

pub mod gdt;
pub mod interrupts;
pub mod pic;
pub mod serial;
pub mod vga;

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    ::x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
