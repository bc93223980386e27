//! The fatal-error path.
//!
//! A violated console invariant means globally shared display state can no
//! longer be trusted, so the only recovery is to stop: latch the fault flag,
//! emit a best-effort diagnostic on the serial port, and halt the faulting
//! context. Other contexts observe the latch and stop producing output
//! rather than halting outright.

use core::sync::atomic::{AtomicBool, Ordering};

static PANICKED: AtomicBool = AtomicBool::new(false);

/// True once the kernel has taken the fatal path.
///
/// Output paths check this and go inert instead of touching shared state.
pub fn panicked() -> bool {
    PANICKED.load(Ordering::SeqCst)
}

/// Latches the fault flag without halting.
///
/// Used by the panic handler, which does its own reporting before halting.
pub fn mark() {
    PANICKED.store(true, Ordering::SeqCst);
}

/// Latches the fault flag, reports the fault origin, and halts this context.
///
/// Detected at the point of violation and invoked immediately; there is no
/// unwinding or retry. The serial report is best-effort: it bypasses the
/// console (whose state is what just went bad) and writes the UART directly.
#[track_caller]
pub fn fatal(msg: &str) -> ! {
    mark();

    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    {
        let location = core::panic::Location::caller();
        crate::serial_println!("kernel fault at {}: {}", location, msg);
    }
    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    let _ = msg;

    crate::arch::halt_forever()
}
