//! The error taxonomy used by [`Try`](crate::Try) and [`Cause`](crate::Cause).
//!
//! Errors fall into three groups:
//!
//! - **Fatal**: [`FatalError`] marks conditions the process cannot meaningfully
//!   continue from (link/load failure, thread death, resource or stack
//!   exhaustion). A fatal error is never stored in a `Failure`; every capture
//!   site re-raises it immediately.
//! - **Recoverable-unchecked**: [`PanicError`] represents a non-fatal panic
//!   captured at the boundary.
//! - **Recoverable-declared**: any user error type implementing
//!   [`std::error::Error`], plus the crate's own declared errors
//!   ([`NoSuchElementError`], [`UnsupportedOperationError`],
//!   [`InterruptedError`]) and the [`NonFatalError`] wrapper raised by
//!   [`Try::get`](crate::Try::get).

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

use crate::cause::Cause;

/// The category of a [`FatalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FatalKind {
    /// A code-loading or linking failure.
    Linkage,
    /// A thread is being torn down and must not be resumed.
    ThreadDeath,
    /// The process ran out of memory.
    OutOfMemory,
    /// The call stack is exhausted.
    StackOverflow,
}

impl fmt::Display for FatalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FatalKind::Linkage => "linkage failure",
            FatalKind::ThreadDeath => "thread death",
            FatalKind::OutOfMemory => "out of memory",
            FatalKind::StackOverflow => "stack overflow",
        };
        f.write_str(label)
    }
}

/// An unrecoverable condition.
///
/// A `FatalError` is never captured into a `Failure`: constructing
/// [`Try::failure`](crate::Try::failure) with one, or raising one inside any
/// combinator closure, propagates it past the capture boundary unchanged.
///
/// # Examples
///
/// ```rust
/// use trywell::{FatalError, FatalKind};
///
/// let fatal = FatalError::new(FatalKind::OutOfMemory, "arena exhausted");
/// assert_eq!(fatal.kind(), FatalKind::OutOfMemory);
/// assert_eq!(fatal.to_string(), "fatal out of memory: arena exhausted");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FatalError {
    kind: FatalKind,
    message: String,
}

impl FatalError {
    /// Create a fatal error of the given kind.
    pub fn new(kind: FatalKind, message: impl Into<String>) -> Self {
        FatalError {
            kind,
            message: message.into(),
        }
    }

    /// The category of this fatal condition.
    #[inline]
    pub fn kind(&self) -> FatalKind {
        self.kind
    }

    /// The human-readable description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal {}: {}", self.kind, self.message)
    }
}

impl StdError for FatalError {}

/// A non-fatal panic captured by the boundary.
///
/// The message is extracted from `&str` and `String` panic payloads; other
/// payload types are reported generically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Create a panic error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        PanicError {
            message: message.into(),
        }
    }

    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("panic with non-string payload")
        };
        PanicError { message }
    }

    /// The panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for PanicError {}

/// Wrapper raised by [`Try::get`](crate::Try::get) when the stored cause is a
/// declared error rather than a captured panic.
///
/// This keeps the unsafe extractor's contract uniform: it always raises, and
/// a declared cause is marked as such by this wrapper instead of being
/// re-raised bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFatalError {
    cause: Cause,
}

impl NonFatalError {
    /// Wrap a captured cause.
    pub fn new(cause: Cause) -> Self {
        NonFatalError { cause }
    }

    /// The wrapped cause.
    #[inline]
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Unwrap the cause.
    #[inline]
    pub fn into_cause(self) -> Cause {
        self.cause
    }
}

impl fmt::Display for NonFatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "non-fatal: {}", self.cause)
    }
}

impl StdError for NonFatalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let inner: &(dyn StdError + 'static) = self.cause.as_error();
        Some(inner)
    }
}

/// Raised by [`Try::filter`](crate::Try::filter) when the predicate rejects
/// the success value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoSuchElementError {
    message: String,
}

impl NoSuchElementError {
    /// Create an element-not-found error.
    pub fn new(message: impl Into<String>) -> Self {
        NoSuchElementError {
            message: message.into(),
        }
    }

    /// The rejection message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for NoSuchElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for NoSuchElementError {}

/// Raised when an operation only defined for one variant is applied to the
/// other, e.g. [`Try::failed`](crate::Try::failed) on a `Success`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedOperationError {
    message: String,
}

impl UnsupportedOperationError {
    /// Create an unsupported-operation error.
    pub fn new(message: impl Into<String>) -> Self {
        UnsupportedOperationError {
            message: message.into(),
        }
    }

    /// The operation description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UnsupportedOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for UnsupportedOperationError {}

/// The cooperative-cancellation signal.
///
/// When the capture boundary absorbs an `InterruptedError` it reasserts the
/// calling thread's interrupt flag (see [`crate::interrupt`]) before
/// producing the `Failure`, so that upstream cancellation protocols are not
/// silently swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterruptedError {
    message: String,
}

impl InterruptedError {
    /// Create an interruption signal with the default message.
    pub fn new() -> Self {
        InterruptedError {
            message: String::from("operation interrupted"),
        }
    }

    /// Create an interruption signal with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        InterruptedError {
            message: message.into(),
        }
    }

    /// The interruption message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for InterruptedError {
    fn default() -> Self {
        InterruptedError::new()
    }
}

impl fmt::Display for InterruptedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for InterruptedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_display_includes_kind_and_message() {
        let e = FatalError::new(FatalKind::StackOverflow, "recursion too deep");
        assert_eq!(e.to_string(), "fatal stack overflow: recursion too deep");
        assert_eq!(e.kind(), FatalKind::StackOverflow);
        assert_eq!(e.message(), "recursion too deep");
    }

    #[test]
    fn panic_error_from_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        let e = PanicError::from_payload(payload.as_ref());
        assert_eq!(e.message(), "boom");
    }

    #[test]
    fn panic_error_from_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("kaboom"));
        let e = PanicError::from_payload(payload.as_ref());
        assert_eq!(e.message(), "kaboom");
    }

    #[test]
    fn panic_error_from_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        let e = PanicError::from_payload(payload.as_ref());
        assert_eq!(e.message(), "panic with non-string payload");
    }

    #[test]
    fn non_fatal_wraps_cause_and_exposes_source() {
        let cause = Cause::new(NoSuchElementError::new("missing"));
        let wrapped = NonFatalError::new(cause.clone());
        assert_eq!(wrapped.cause(), &cause);
        assert_eq!(wrapped.to_string(), "non-fatal: missing");
        assert!(StdError::source(&wrapped).is_some());
    }

    #[test]
    fn interrupted_default_message() {
        assert_eq!(InterruptedError::new().to_string(), "operation interrupted");
        assert_eq!(
            InterruptedError::with_message("pool draining").message(),
            "pool draining"
        );
    }
}
