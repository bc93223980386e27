//! Interrupt-safe spin lock.

use crate::arch;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};

/// A spin lock that masks interrupts on the acquiring core for as long as
/// the guard lives.
///
/// The console lock is taken from both the keyboard interrupt handler and
/// process context. A plain spin lock would deadlock the moment the
/// interrupt arrived while the lock was held on the same core, so
/// acquisition disables interrupts first; the guard restores the previous
/// interrupt state when dropped. Holders must never suspend.
pub struct IntrMutex<T> {
    inner: spin::Mutex<T>,
}

/// RAII guard for [`IntrMutex`]; unlocks and restores the interrupt state
/// on drop.
pub struct IntrMutexGuard<'a, T> {
    lock: &'a IntrMutex<T>,
    // Dropped by hand so the inner unlock always happens before interrupts
    // come back on.
    inner: ManuallyDrop<spin::MutexGuard<'a, T>>,
    reenable: bool,
}

impl<T> IntrMutex<T> {
    /// Creates a new unlocked mutex protecting `data`.
    pub const fn new(data: T) -> Self {
        Self {
            inner: spin::Mutex::new(data),
        }
    }

    /// Acquires the lock, spinning with interrupts masked until it is free.
    pub fn lock(&self) -> IntrMutexGuard<'_, T> {
        let reenable = arch::suspend_interrupts();
        IntrMutexGuard {
            lock: self,
            inner: ManuallyDrop::new(self.inner.lock()),
            reenable,
        }
    }

}

impl<'a, T> IntrMutexGuard<'a, T> {
    /// Returns the mutex this guard belongs to, for reacquisition after a
    /// sleep.
    pub fn mutex(guard: &Self) -> &'a IntrMutex<T> {
        guard.lock
    }
}

impl<T> Deref for IntrMutexGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for IntrMutexGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> Drop for IntrMutexGuard<'_, T> {
    fn drop(&mut self) {
        // SAFETY: the guard is never used again after Drop.
        unsafe {
            ManuallyDrop::drop(&mut self.inner);
        }
        arch::restore_interrupts(self.reenable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_gives_exclusive_access() {
        let mutex = IntrMutex::new(41);
        {
            let mut guard = mutex.lock();
            *guard += 1;
        }
        assert_eq!(*mutex.lock(), 42);
    }

    #[test]
    fn guard_exposes_its_mutex() {
        let mutex = IntrMutex::new(7);
        let guard = mutex.lock();
        let lock = IntrMutexGuard::mutex(&guard);
        drop(guard);
        assert_eq!(*lock.lock(), 7);
    }
}
