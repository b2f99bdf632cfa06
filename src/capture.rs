//! The capture boundary every absorbing combinator routes through.
//!
//! A single helper runs the caller's closure under `catch_unwind` and decides
//! what happens to anything it raises or returns as an error:
//!
//! - fatal causes (and panic payloads that are a
//!   [`FatalError`](crate::FatalError)) propagate unchanged;
//! - an [`InterruptedError`](crate::InterruptedError) sets the thread
//!   interrupt flag before being captured;
//! - everything else becomes a `Failure`.
//!
//! A panic payload that is itself a [`Cause`] (produced by
//! [`Cause::raise`]) is unwrapped and re-captured as-is, preserving identity.
//!
//! Closures are wrapped in `AssertUnwindSafe`: they are consumed by value and
//! the unwind is converted into a value at this boundary, so no witness of a
//! broken invariant escapes.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::cause::Cause;
use crate::error::{FatalError, PanicError};
use crate::interrupt;
use crate::try_::Try;

/// Run a fallible closure, capturing non-fatal errors and panics.
pub(crate) fn capture<T, F>(f: F) -> Try<T>
where
    F: FnOnce() -> Result<T, Cause>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Try::Success(value),
        Ok(Err(cause)) => absorb(cause),
        Err(payload) => absorb(cause_of_payload(payload)),
    }
}

/// Run a closure that yields a `Try` directly, capturing panics and returning
/// the yielded value flattened (never nested).
pub(crate) fn capture_flat<T, F>(f: F) -> Try<T>
where
    F: FnOnce() -> Try<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(payload) => absorb(cause_of_payload(payload)),
    }
}

/// Apply the capture policy to a non-returned error.
fn absorb<T>(cause: Cause) -> Try<T> {
    if cause.is_fatal() {
        cause.raise();
    }
    if cause.is_interrupted() {
        interrupt::interrupt();
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(cause = %cause, "captured non-fatal error");
    Try::Failure(cause)
}

/// Recover a `Cause` from a panic payload, resuming the unwind when the
/// payload is fatal.
fn cause_of_payload(payload: Box<dyn Any + Send>) -> Cause {
    let payload = match payload.downcast::<Cause>() {
        Ok(cause) if cause.is_fatal() => panic::resume_unwind(cause),
        Ok(cause) => return *cause,
        Err(other) => other,
    };
    if payload.is::<FatalError>() {
        panic::resume_unwind(payload);
    }
    Cause::from_panic(PanicError::from_payload(payload.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FatalKind, InterruptedError};
    use std::io;

    #[test]
    fn normal_completion_is_success() {
        assert_eq!(capture(|| Ok(7)), Try::Success(7));
    }

    #[test]
    fn returned_error_is_captured() {
        let t: Try<i32> = capture(|| Err(Cause::new(io::Error::other("boom"))));
        assert!(t.is_failure());
        assert!(t.get_cause().is::<io::Error>());
    }

    #[test]
    fn panic_is_captured_as_panic_error() {
        let t: Try<i32> = capture(|| panic!("kaboom"));
        let cause = t.get_cause();
        assert!(cause.is_panic());
        assert_eq!(
            cause.downcast_ref::<PanicError>().map(|e| e.message()),
            Some("kaboom")
        );
    }

    #[test]
    fn raised_cause_is_recaptured_with_identity() {
        let original = Cause::new(io::Error::other("boom"));
        let expected = original.clone();
        let t: Try<i32> = capture(move || original.raise());
        assert_eq!(t.get_cause(), expected);
    }

    #[test]
    #[should_panic]
    fn fatal_returned_error_escapes() {
        let _ = capture::<i32, _>(|| {
            Err(Cause::new(FatalError::new(FatalKind::OutOfMemory, "oom")))
        });
    }

    #[test]
    #[should_panic]
    fn fatal_panic_payload_escapes() {
        let _ = capture::<i32, _>(|| {
            panic::panic_any(FatalError::new(FatalKind::ThreadDeath, "dying"))
        });
    }

    #[test]
    #[should_panic]
    fn fatal_cause_escapes_nested_boundaries() {
        let _ = capture::<i32, _>(|| {
            capture::<i32, _>(|| {
                Err(Cause::new(FatalError::new(FatalKind::StackOverflow, "deep")))
            });
            Ok(0)
        });
    }

    #[test]
    fn interruption_sets_the_thread_flag() {
        let t: Try<i32> = capture(|| Err(Cause::new(InterruptedError::new())));
        assert!(t.is_failure());
        assert!(interrupt::take_interrupted());
    }

    #[test]
    fn capture_flat_passes_through_the_yielded_try() {
        let inner = Try::success(3);
        assert_eq!(capture_flat(move || inner), Try::Success(3));
    }

    #[test]
    fn capture_flat_absorbs_panics() {
        let t: Try<i32> = capture_flat(|| panic!("late"));
        assert!(t.get_cause().is_panic());
    }
}
