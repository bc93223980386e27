//! Architecture-specific implementations.
//!
//! This module provides platform abstractions for different target
//! architectures. Currently supported: bare-metal x86_64. Hosted builds get
//! no-op interrupt shims so the portable parts of the kernel can be tested
//! on a development machine.

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod x86_64;

/// Halts the current execution context forever.
///
/// Terminal state of the fatal path; never returns.
pub fn halt_forever() -> ! {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    x86_64::halt_loop();

    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    loop {
        core::hint::spin_loop();
    }
}

/// Blocks until the next hardware interrupt.
///
/// Used by a sleeping reader after it has released the console lock; the
/// caller must be in a context where interrupts can be taken.
pub fn wait_for_interrupt() {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    x86_64::hlt();

    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    core::hint::spin_loop();
}

/// Disables interrupts on this core and reports whether they were enabled.
///
/// Pair with [`restore_interrupts`] so nested critical sections unwind to
/// the state they found.
pub fn suspend_interrupts() -> bool {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    {
        use ::x86_64::instructions::interrupts;
        let enabled = interrupts::are_enabled();
        interrupts::disable();
        enabled
    }

    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    false
}

/// Re-enables interrupts if `enable` is set.
pub fn restore_interrupts(enable: bool) {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    if enable {
        ::x86_64::instructions::interrupts::enable();
    }

    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    let _ = enable;
}
