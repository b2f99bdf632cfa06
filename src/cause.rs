//! The captured error value held by a `Failure`.
//!
//! A [`Cause`] is a cheaply cloneable, immutable handle to the error a
//! computation raised, together with its origin: *declared* (returned as the
//! `Err` side of a fallible closure) or *panic* (captured by the boundary).
//!
//! # Identity semantics
//!
//! Two `Cause`s compare equal only when they refer to the same underlying
//! allocation. Clones of a cause are equal to the original; two independently
//! constructed errors with identical messages are not. Error values rarely
//! have a meaningful structural equality, so a `Failure` is compared by the
//! identity of what it captured.
//!
//! ```rust
//! use trywell::Cause;
//! use std::io;
//!
//! let a = Cause::new(io::Error::other("boom"));
//! let b = a.clone();
//! let c = Cause::new(io::Error::other("boom"));
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic;
use std::sync::Arc;

use crate::error::{FatalError, InterruptedError, PanicError};

/// How the error reached the capture boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Origin {
    Declared,
    Panic,
}

/// The error captured by a `Failure`.
///
/// A `Cause` never holds a fatal error: fatality is checked before any
/// `Failure` is materialized, so a cause you can observe is always
/// recoverable in principle.
///
/// # Examples
///
/// ```rust
/// use trywell::{Cause, Try};
/// use std::io;
///
/// let t: Try<i32> = Try::failure(io::Error::other("disk on fire"));
/// let cause = t.get_cause();
///
/// assert!(cause.is::<io::Error>());
/// assert!(!cause.is_panic());
/// assert_eq!(cause.to_string(), "disk on fire");
/// ```
#[derive(Debug, Clone)]
pub struct Cause {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
    origin: Origin,
}

impl Cause {
    /// Capture a declared error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Cause {
            inner: Arc::new(error),
            origin: Origin::Declared,
        }
    }

    /// Capture a non-fatal panic.
    pub(crate) fn from_panic(error: PanicError) -> Self {
        Cause {
            inner: Arc::new(error),
            origin: Origin::Panic,
        }
    }

    /// Test whether the captured error is exactly of type `X`.
    ///
    /// This is a dynamic-type test with no subtype relation: a cause matches
    /// `X` only when the stored error was constructed as an `X`.
    #[inline]
    pub fn is<X>(&self) -> bool
    where
        X: StdError + 'static,
    {
        self.downcast_ref::<X>().is_some()
    }

    /// Borrow the captured error as `X`, if it is exactly of that type.
    #[inline]
    pub fn downcast_ref<X>(&self) -> Option<&X>
    where
        X: StdError + 'static,
    {
        self.inner.downcast_ref::<X>()
    }

    /// Borrow the captured error as a trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Whether this cause is a fatal condition.
    ///
    /// Always `false` for a cause observed inside a `Failure`; the predicate
    /// exists for the capture sites, which re-raise fatal causes before a
    /// `Failure` is ever produced.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.is::<FatalError>()
    }

    /// Whether this cause was captured from a panic rather than a declared
    /// error.
    #[inline]
    pub fn is_panic(&self) -> bool {
        self.origin == Origin::Panic
    }

    /// Whether this cause is the cooperative-cancellation signal.
    #[inline]
    pub fn is_interrupted(&self) -> bool {
        self.is::<InterruptedError>()
    }

    /// Raise this cause, unwinding the calling thread.
    ///
    /// The cause itself travels as the panic payload, so an enclosing capture
    /// boundary (for example an outer [`Try::of`](crate::Try::of)) re-captures
    /// the identical cause instead of a stringified copy, and recognizes a
    /// fatal cause as one it must propagate.
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner) as *const ()
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }
}

impl Eq for Cause {}

impl Hash for Cause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.addr() as usize).hash(state);
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Cause::new(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FatalKind, NoSuchElementError};
    use std::collections::hash_map::DefaultHasher;
    use std::io;

    fn hash_of(cause: &Cause) -> u64 {
        let mut hasher = DefaultHasher::new();
        cause.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn clones_are_equal_and_hash_alike() {
        let a = Cause::new(io::Error::other("boom"));
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn independent_causes_are_unequal() {
        let a = Cause::new(io::Error::other("boom"));
        let b = Cause::new(io::Error::other("boom"));
        assert_ne!(a, b);
    }

    #[test]
    fn downcast_matches_exact_type_only() {
        let cause = Cause::new(NoSuchElementError::new("missing"));
        assert!(cause.is::<NoSuchElementError>());
        assert!(!cause.is::<io::Error>());
        assert_eq!(
            cause.downcast_ref::<NoSuchElementError>().map(|e| e.message()),
            Some("missing")
        );
    }

    #[test]
    fn classification_predicates() {
        let declared = Cause::new(io::Error::other("boom"));
        assert!(!declared.is_panic());
        assert!(!declared.is_fatal());
        assert!(!declared.is_interrupted());

        let panicked = Cause::from_panic(PanicError::new("kaboom"));
        assert!(panicked.is_panic());

        let fatal = Cause::new(FatalError::new(FatalKind::Linkage, "bad dylib"));
        assert!(fatal.is_fatal());

        let interrupted = Cause::new(InterruptedError::new());
        assert!(interrupted.is_interrupted());
    }

    #[test]
    fn raise_carries_the_cause_as_payload() {
        let cause = Cause::new(io::Error::other("boom"));
        let expected = cause.clone();
        let payload = panic::catch_unwind(panic::AssertUnwindSafe(move || cause.raise()))
            .expect_err("raise must unwind");
        let raised = payload.downcast::<Cause>().expect("payload is the cause");
        assert_eq!(*raised, expected);
    }

    #[test]
    fn display_delegates_to_the_error() {
        let cause = Cause::new(io::Error::other("disk on fire"));
        assert_eq!(cause.to_string(), "disk on fire");
    }
}
