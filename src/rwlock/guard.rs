/*!
 * Data-Wrapping Lock and RAII Guards
 *
 * [`RwLock<T>`] owns the protected value and hands out guards whose `Drop`
 * performs the release, so safe code cannot unbalance the acquire/release
 * pairing or touch the value outside a critical section.
 */

use super::raw::RawRwLock;
use crate::errors::TryLockError;
use std::cell::UnsafeCell;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A writer-priority reader-writer lock owning the value it protects.
///
/// Shared access ([`read`](Self::read)) admits any number of threads at
/// once; exclusive access ([`write`](Self::write)) admits one. Queued
/// writers close admission to new readers, so writers are never starved by
/// a continuous reader stream.
///
/// # Examples
///
/// ```
/// use rwspin::RwLock;
/// use std::sync::Arc;
/// use std::thread;
///
/// let lock = Arc::new(RwLock::new(0u64));
///
/// let writer = {
///     let lock = lock.clone();
///     thread::spawn(move || *lock.write() += 1)
/// };
/// writer.join().unwrap();
///
/// assert_eq!(*lock.read(), 1);
/// ```
pub struct RwLock<T> {
    raw: RawRwLock,
    data: UnsafeCell<T>,
}

// Safety: the admission state machine guarantees either many `&T` or one
// `&mut T` is reachable at a time, never both.
unsafe impl<T: Send> Send for RwLock<T> {}
unsafe impl<T: Send + Sync> Sync for RwLock<T> {}

impl<T> RwLock<T> {
    /// Create an unlocked lock protecting `data`.
    pub fn new(data: T) -> Self {
        Self {
            raw: RawRwLock::new(),
            data: UnsafeCell::new(data),
        }
    }

    /// Block until shared access is granted.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.raw.acquire_read();
        RwLockReadGuard { lock: self }
    }

    /// Block until exclusive access is granted.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.raw.acquire_write();
        RwLockWriteGuard { lock: self }
    }

    /// Attempt shared access without blocking.
    pub fn try_read(&self) -> Result<RwLockReadGuard<'_, T>, TryLockError> {
        self.raw.try_acquire_read()?;
        Ok(RwLockReadGuard { lock: self })
    }

    /// Attempt exclusive access without blocking.
    pub fn try_write(&self) -> Result<RwLockWriteGuard<'_, T>, TryLockError> {
        self.raw.try_acquire_write()?;
        Ok(RwLockWriteGuard { lock: self })
    }

    /// Run `f` with shared access, releasing on return.
    pub fn with_read<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        let guard = self.read();
        f(&guard)
    }

    /// Run `f` with exclusive access, releasing on return.
    pub fn with_write<U>(&self, f: impl FnOnce(&mut T) -> U) -> U {
        let mut guard = self.write();
        f(&mut guard)
    }

    /// Number of readers currently holding the lock (diagnostic snapshot).
    pub fn reader_count(&self) -> usize {
        self.raw.reader_count()
    }

    /// Threads currently blocked waiting to read (diagnostic snapshot).
    pub fn waiting_readers(&self) -> usize {
        self.raw.waiting_readers()
    }

    /// Threads currently blocked waiting to write (diagnostic snapshot).
    pub fn waiting_writers(&self) -> usize {
        self.raw.waiting_writers()
    }

    /// Whether a writer currently holds the lock (diagnostic snapshot).
    pub fn is_write_locked(&self) -> bool {
        self.raw.is_write_locked()
    }

    /// Consume the lock, returning the protected value.
    ///
    /// Taking `self` by value proves no guard is outstanding.
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }

    /// Mutable access without locking.
    ///
    /// The exclusive borrow of `self` proves no guard is outstanding.
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }
}

impl<T: Default> Default for RwLock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for RwLock<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: fmt::Debug> fmt::Debug for RwLock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_read() {
            Ok(guard) => f.debug_struct("RwLock").field("data", &&*guard).finish(),
            Err(_) => f.debug_struct("RwLock").finish_non_exhaustive(),
        }
    }
}

/// Shared access to the value inside an [`RwLock`].
///
/// Dropping the guard releases the acquisition.
pub struct RwLockReadGuard<'a, T> {
    lock: &'a RwLock<T>,
}

impl<T> Deref for RwLockReadGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> Drop for RwLockReadGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.raw.release();
    }
}

impl<T: fmt::Debug> fmt::Debug for RwLockReadGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

/// Exclusive access to the value inside an [`RwLock`].
///
/// Dropping the guard releases the acquisition.
pub struct RwLockWriteGuard<'a, T> {
    lock: &'a RwLock<T>,
}

impl<T> Deref for RwLockWriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> DerefMut for RwLockWriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T> Drop for RwLockWriteGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.raw.release();
    }
}

impl<T: fmt::Debug> fmt::Debug for RwLockWriteGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
