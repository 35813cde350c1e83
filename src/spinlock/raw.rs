/*!
 * Raw Spin Lock
 * Atomic test-and-set flag with busy-wait acquisition
 */

use std::sync::atomic::{AtomicBool, Ordering};

/// Busy-wait mutual exclusion over a single atomic flag, without an owned
/// value.
///
/// The flag starts clear. [`acquire`](Self::acquire) loops on an atomic
/// test-and-set until it observes the clear-to-set transition under its own
/// attempt; [`release`](Self::release) clears the flag, letting exactly one
/// other spinner win its next attempt.
///
/// # Misuse
///
/// Re-acquiring from the holding thread spins forever. Releasing a lock the
/// caller does not hold hands the critical section to a concurrent spinner.
pub struct RawSpinLock {
    locked: AtomicBool,
}

impl RawSpinLock {
    /// Create the lock in the clear (unlocked) state.
    #[inline]
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }

    /// Spin until the flag is won.
    ///
    /// The test-and-set is a single atomic read-modify-write, never a
    /// separate load-then-store, so two spinners cannot both observe clear
    /// and proceed. Acquire ordering on success makes the previous holder's
    /// critical-section writes visible. Between attempts only the CPU
    /// spin-loop hint is issued; the thread never yields to the scheduler.
    #[inline]
    pub fn acquire(&self) {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
    }

    /// One test-and-set attempt, no spinning.
    ///
    /// Returns `true` if the flag was won.
    #[inline]
    pub fn try_acquire(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Clear the flag with release ordering, publishing the critical
    /// section's writes to the next winner.
    #[inline]
    pub fn release(&self) {
        self.locked.store(false, Ordering::Release);
    }

    /// Snapshot of the flag; stale as soon as it is read.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

impl Default for RawSpinLock {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RawSpinLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawSpinLock")
            .field("locked", &self.is_locked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_fresh_lock_is_clear() {
        let lock = RawSpinLock::new();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_acquire_sets_release_clears() {
        let lock = RawSpinLock::new();

        lock.acquire();
        assert!(lock.is_locked());

        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_try_acquire_loses_while_held() {
        let lock = RawSpinLock::new();

        assert!(lock.try_acquire());
        assert!(!lock.try_acquire());

        lock.release();
        assert!(lock.try_acquire());
        lock.release();
    }

    #[test]
    fn test_release_hands_off_to_spinner() {
        let lock = Arc::new(RawSpinLock::new());
        lock.acquire();

        let spinner = {
            let lock = lock.clone();
            thread::spawn(move || {
                lock.acquire();
                lock.release();
            })
        };

        lock.release();
        spinner.join().unwrap();
        assert!(!lock.is_locked());
    }
}
