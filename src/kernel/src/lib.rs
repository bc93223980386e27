//! Tessera Kernel
//!
//! A small teaching kernel whose centerpiece is a virtual-terminal console:
//! one physical VGA text display and one PS/2 keyboard are multiplexed
//! across six independent terminals, each with its own screen buffer, ANSI
//! color state, and line-edited input buffer. A shell reads complete lines
//! through a blocking character-device interface while the keyboard
//! interrupt feeds and echoes input.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `arch`: platform-specific drivers (VGA, serial, PIC, IDT/GDT)
//! - `console`: the terminal multiplexer, escape interpreter, line discipline
//! - `keyboard`: PS/2 scancode decoding
//! - `sync`: interrupt-safe locking and sleep/wakeup
//! - `dev`: the character-device switch table
//!
//! # Safety
//!
//! All unsafe code is documented with safety invariants explaining why the
//! usage is correct. Hardware access is confined to `arch`; the console core
//! is portable and tested on the host against mock devices.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod arch;
pub mod console;
pub mod dev;
pub mod fault;
pub mod keyboard;
pub mod sync;
pub mod task;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod diag;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod logger;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called once, early in the boot process. Interrupts are enabled last so
/// the keyboard handler never observes a half-initialized console.
pub fn init() {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    {
        arch::x86_64::serial::init();
        logger::init();
        arch::x86_64::gdt::init();
        console::init();
        arch::x86_64::interrupts::init_idt();
    }
}
