//! Task hooks used by the console.
//!
//! The kernel does not carry a scheduler of its own yet; the console only
//! needs one thing from one: a way to tell whether the task blocked in a
//! console read has been asked to die, so the read can return instead of
//! waiting forever.

use core::sync::atomic::{AtomicBool, Ordering};

static KILLED: AtomicBool = AtomicBool::new(false);

/// True if the current task has been marked for termination.
pub fn current_killed() -> bool {
    KILLED.load(Ordering::Acquire)
}

/// Marks the current task as killed.
///
/// A read blocked on console input observes this and returns
/// `DevError::Interrupted` instead of sleeping again.
pub fn kill_current() {
    KILLED.store(true, Ordering::Release);
}

/// Clears the kill mark, for the next task reusing this context.
pub fn clear_killed() {
    KILLED.store(false, Ordering::Release);
}
