/*!
 * Spin Lock
 *
 * Busy-wait mutual exclusion over a single atomic flag. A contended
 * acquisition occupies its core until the flag is won; there is no parking,
 * no queue, and no fairness among spinners.
 *
 * Intended only for critical sections short enough that the cost of
 * OS-level blocking and waking would exceed the cost of spinning.
 */

mod guard;
mod raw;

pub use guard::{SpinGuard, SpinLock};
pub use raw::RawSpinLock;
