/*!
 * Error Types
 * Refusal reasons for non-blocking lock attempts
 */

use thiserror::Error;

/// Why a non-blocking acquisition attempt was refused.
///
/// Blocking acquisition has no error surface: it waits until admitted. The
/// `try_*` operations instead report which admission guard turned them away.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryLockError {
    /// A writer currently holds the lock.
    #[error("a writer holds the lock")]
    WriterActive,

    /// No writer holds the lock, but writers are queued and new readers are
    /// not admitted ahead of them.
    #[error("queued writers block new readers")]
    WriterPending,

    /// One or more readers currently hold the lock.
    #[error("readers hold the lock")]
    ReadersActive,
}
