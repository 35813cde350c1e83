/*!
 * Raw Reader-Writer Lock
 *
 * The bare acquire/release state machine, with no owned data. Callers are
 * responsible for pairing every successful acquisition with exactly one
 * `release`; [`RwLock`](super::RwLock) wraps this type with RAII guards that
 * make the pairing automatic.
 */

use super::state::{LockState, Mode};
use crate::errors::TryLockError;
use parking_lot::{Condvar, Mutex};

/// Writer-priority reader-writer lock without an owned value.
///
/// Any number of readers may hold the lock concurrently; a writer holds it
/// exclusively. Once any writer is waiting, new readers are refused
/// admission until the writer has been served, so a continuous stream of
/// readers cannot starve a writer. Readers already inside are never evicted;
/// they drain naturally.
///
/// # Misuse
///
/// Calling [`release`](Self::release) without a matching acquisition, or
/// re-acquiring from a thread that already holds the lock, is not detected:
/// the former breaks the pairing the caller promised, the latter deadlocks.
pub struct RawRwLock {
    state: Mutex<LockState>,
    /// Readers suspend here; woken all at once when admission reopens.
    readers: Condvar,
    /// Writers suspend here; woken one per vacancy.
    writers: Condvar,
}

impl RawRwLock {
    /// Create an idle lock with no holders and no waiters.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LockState::new()),
            readers: Condvar::new(),
            writers: Condvar::new(),
        }
    }

    /// Block the calling thread until shared (read) access is granted.
    ///
    /// Admission requires that no writer holds the lock and no writer is
    /// queued for it. The wait loop re-checks admission on every wakeup, so
    /// broadcast and spurious wakeups are both absorbed.
    pub fn acquire_read(&self) {
        let mut state = self.state.lock();

        if !state.read_admissible() {
            log::trace!(
                "read acquisition blocked: mode {:?}, {} writer(s) queued",
                state.mode,
                state.waiting_writers
            );
        }

        while !state.read_admissible() {
            state.waiting_readers += 1;
            self.readers.wait(&mut state);
            state.waiting_readers -= 1;
        }

        state.add_reader();
    }

    /// Block the calling thread until exclusive (write) access is granted.
    ///
    /// Admission requires a fully idle lock: no readers, no writer.
    pub fn acquire_write(&self) {
        let mut state = self.state.lock();

        if !state.write_admissible() {
            log::trace!(
                "write acquisition blocked: mode {:?}, {} writer(s) already queued",
                state.mode,
                state.waiting_writers
            );
        }

        while !state.write_admissible() {
            state.waiting_writers += 1;
            self.writers.wait(&mut state);
            state.waiting_writers -= 1;
        }

        state.mode = Mode::Exclusive;
    }

    /// Attempt shared access without blocking.
    ///
    /// Applies the same admission guard as [`acquire_read`](Self::acquire_read)
    /// and reports which half of it refused the attempt.
    pub fn try_acquire_read(&self) -> Result<(), TryLockError> {
        let mut state = self.state.lock();
        if state.mode == Mode::Exclusive {
            return Err(TryLockError::WriterActive);
        }
        if state.waiting_writers > 0 {
            return Err(TryLockError::WriterPending);
        }
        state.add_reader();
        Ok(())
    }

    /// Attempt exclusive access without blocking.
    pub fn try_acquire_write(&self) -> Result<(), TryLockError> {
        let mut state = self.state.lock();
        match state.mode {
            Mode::Idle => {
                state.mode = Mode::Exclusive;
                Ok(())
            }
            Mode::Shared(_) => Err(TryLockError::ReadersActive),
            Mode::Exclusive => Err(TryLockError::WriterActive),
        }
    }

    /// Release one acquisition, shared or exclusive, inferring which from
    /// the current state.
    ///
    /// Wake policy, evaluated after the state update:
    /// - no writers queued and readers waiting: wake **all** waiting readers
    ///   (they re-check admission and each counts itself in)
    /// - writers queued and the lock now idle: wake **one** waiting writer
    /// - writers queued but readers still inside: wake nobody; the remaining
    ///   readers drain and a later release performs the writer wake
    pub fn release(&self) {
        let mut state = self.state.lock();
        state.release_one();

        if state.waiting_writers == 0 && state.waiting_readers > 0 {
            self.readers.notify_all();
        } else if state.waiting_writers > 0 && state.mode == Mode::Idle {
            self.writers.notify_one();
        }
    }

    /// Number of readers currently holding the lock.
    ///
    /// Diagnostic snapshot; may be stale by the time the caller observes it.
    pub fn reader_count(&self) -> usize {
        self.state.lock().reader_count()
    }

    /// Threads currently blocked in [`acquire_read`](Self::acquire_read).
    pub fn waiting_readers(&self) -> usize {
        self.state.lock().waiting_readers
    }

    /// Threads currently blocked in [`acquire_write`](Self::acquire_write).
    pub fn waiting_writers(&self) -> usize {
        self.state.lock().waiting_writers
    }

    /// Whether a writer currently holds the lock.
    pub fn is_write_locked(&self) -> bool {
        self.state.lock().mode == Mode::Exclusive
    }
}

impl Default for RawRwLock {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RawRwLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("RawRwLock")
            .field("mode", &state.mode)
            .field("waiting_readers", &state.waiting_readers)
            .field("waiting_writers", &state.waiting_writers)
            .finish()
    }
}
