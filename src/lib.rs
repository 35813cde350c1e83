/*!
 * Mutual-Exclusion Primitives
 *
 * Two independent locking primitives for protecting shared state in
 * multi-threaded programs:
 *
 * - [`RwLock`]: many concurrent readers or one exclusive writer, with
 *   writer-priority admission so a queued writer is never starved by a
 *   continuous stream of new readers. Waiting threads suspend on condition
 *   variables and are woken selectively on release.
 * - [`SpinLock`]: busy-wait mutual exclusion over a single atomic flag, for
 *   critical sections short enough that parking a thread would cost more
 *   than spinning.
 *
 * Each primitive comes in two shapes: a data-wrapping type ([`RwLock<T>`],
 * [`SpinLock<T>`]) whose RAII guards release on drop, and a raw state
 * machine ([`RawRwLock`], [`RawSpinLock`]) for callers that sequence access
 * to state the lock cannot own.
 *
 * # Limitations
 *
 * Neither primitive is reentrant: re-acquiring from the holding thread
 * deadlocks (rwlock) or spins forever (spinlock). Acquisition cannot be
 * timed out or cancelled. The spinlock is unfair by design: the next winner
 * among several spinners is whichever test-and-set lands first.
 */

pub mod errors;
pub mod rwlock;
pub mod spinlock;

// Re-exports
pub use errors::TryLockError;
pub use rwlock::{RawRwLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
pub use spinlock::{RawSpinLock, SpinGuard, SpinLock};
