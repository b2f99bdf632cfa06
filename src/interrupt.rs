//! Per-thread cooperative-cancellation flag.
//!
//! When the capture boundary absorbs an
//! [`InterruptedError`](crate::InterruptedError), the interruption would
//! otherwise be swallowed into an ordinary `Failure` value and upstream
//! cancellation protocols would never see it. The boundary therefore reasserts
//! the signal on this thread-local flag *before* the `Failure` is returned;
//! cooperative loops can poll [`is_interrupted`] or consume the signal with
//! [`take_interrupted`].
//!
//! # Examples
//!
//! ```rust
//! use trywell::{interrupt, Cause, InterruptedError, Try};
//!
//! let t: Try<i32> = Try::of(|| Err(Cause::new(InterruptedError::new())));
//!
//! assert!(t.is_failure());
//! assert!(interrupt::is_interrupted());
//! assert!(interrupt::take_interrupted());
//! assert!(!interrupt::is_interrupted());
//! ```

use std::cell::Cell;

thread_local! {
    static INTERRUPTED: Cell<bool> = const { Cell::new(false) };
}

/// Set the calling thread's interrupt flag.
pub fn interrupt() {
    INTERRUPTED.with(|flag| flag.set(true));
}

/// Whether the calling thread's interrupt flag is set. Does not clear it.
pub fn is_interrupted() -> bool {
    INTERRUPTED.with(|flag| flag.get())
}

/// Read and clear the calling thread's interrupt flag.
pub fn take_interrupted() -> bool {
    INTERRUPTED.with(|flag| flag.replace(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_starts_clear() {
        assert!(!is_interrupted());
    }

    #[test]
    fn interrupt_sets_and_take_clears() {
        interrupt();
        assert!(is_interrupted());
        assert!(is_interrupted(), "polling must not clear the flag");
        assert!(take_interrupted());
        assert!(!is_interrupted());
        assert!(!take_interrupted());
    }

    #[test]
    fn flag_is_per_thread() {
        interrupt();
        let seen_elsewhere = std::thread::spawn(is_interrupted)
            .join()
            .expect("probe thread panicked");
        assert!(!seen_elsewhere);
        assert!(take_interrupted());
    }
}
