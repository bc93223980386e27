//! Sleep/wakeup channel for blocking reads.

use super::{IntrMutex, IntrMutexGuard};
use crate::arch;
use core::sync::atomic::{AtomicBool, Ordering};

/// A wakeup channel keyed to one wait condition.
///
/// Notifications latch: a wakeup racing into the window between releasing
/// the lock and starting to wait is observed on the sleeper's first check
/// instead of being lost. The channel supports one blocked sleeper at a
/// time; a notification wakes at most one, which matches the
/// one-reader-per-terminal usage.
///
/// A sleep also returns, without a notification, after the next hardware
/// interrupt. Sleepers must therefore re-check their wait condition and any
/// cancellation flag after reacquiring the lock, as in any sleep/wakeup
/// discipline; the spurious return is what lets a task killed mid-wait
/// observe that promptly instead of waiting for input that never comes.
pub struct WaitChannel {
    notified: AtomicBool,
}

impl WaitChannel {
    /// Creates a channel with no pending notification.
    pub const fn new() -> Self {
        Self {
            notified: AtomicBool::new(false),
        }
    }

    /// Wakes the sleeper, if any. Safe to call from interrupt context.
    pub fn notify(&self) {
        self.notified.store(true, Ordering::Release);
    }

    /// Releases `guard`, waits for a notification or the next interrupt,
    /// and reacquires the lock.
    ///
    /// The unlock and the wait are made atomic with respect to a racing
    /// [`notify`](Self::notify) by the latch: once the guard is dropped any
    /// notification stays visible until consumed here. Returns are not a
    /// promise that the condition holds; callers loop.
    pub fn sleep<'a, T>(&self, guard: IntrMutexGuard<'a, T>) -> IntrMutexGuard<'a, T> {
        let lock = IntrMutexGuard::mutex(&guard);
        drop(guard);
        if !self.notified.swap(false, Ordering::Acquire) {
            arch::wait_for_interrupt();
            // Consume a notification that raced in during the wait; the
            // caller is about to re-check the condition under the lock.
            self.notified.swap(false, Ordering::Acquire);
        }
        lock.lock()
    }
}

impl Default for WaitChannel {
    fn default() -> Self {
        Self::new()
    }
}
