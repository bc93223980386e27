//! Synchronization primitives for the console.
//!
//! The console is mutated from two kinds of context: the keyboard interrupt
//! handler and ordinary process-context readers and writers. These
//! primitives are the only cross-context synchronization points:
//!
//! - [`IntrMutex<T>`]: spin lock that masks interrupts on the acquiring
//!   core, so the keyboard handler can never deadlock against a holder on
//!   the same core.
//! - [`WaitChannel`]: latched sleep/wakeup channel for the one place the
//!   kernel blocks, a reader waiting for a committed input line.

mod mutex;
mod wait;

pub use mutex::{IntrMutex, IntrMutexGuard};
pub use wait::WaitChannel;
