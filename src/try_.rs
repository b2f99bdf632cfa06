//! The `Try` type: the outcome of a fallible computation.
//!
//! A `Try<T>` is either a `Success` wrapping a produced value or a `Failure`
//! wrapping a captured [`Cause`]. Chains of fallible operations compose
//! without inspecting error state at every step; handling is deferred to
//! whichever layer chooses to extract.
//!
//! # Capture policy
//!
//! Every combinator that invokes a fallible closure routes it through one
//! capture boundary:
//!
//! - a returned `Err` or a panic becomes a `Failure`;
//! - a [`FatalError`](crate::FatalError) propagates immediately and is never
//!   captured;
//! - an [`InterruptedError`](crate::InterruptedError) sets the thread
//!   interrupt flag (see [`crate::interrupt`]) before being captured.
//!
//! Observer hooks (`on_success`, `on_failure`) and the pure reductions
//! (`fold`) never capture: errors raised there reach the caller.
//!
//! # Examples
//!
//! ```rust
//! use trywell::{Cause, Try};
//! use std::num::ParseIntError;
//!
//! fn parse(s: &str) -> Try<i32> {
//!     Try::of(|| s.parse::<i32>().map_err(Cause::from))
//! }
//!
//! let doubled = parse("21").map(|n| Ok(n * 2));
//! assert_eq!(doubled, Try::success(42));
//!
//! let recovered = parse("twenty-one")
//!     .recover::<ParseIntError, _>(|_| Ok(0));
//! assert_eq!(recovered, Try::success(0));
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::capture::{capture, capture_flat};
use crate::cause::Cause;
use crate::either::Either;
use crate::error::{NoSuchElementError, NonFatalError, UnsupportedOperationError};

/// The outcome of a fallible computation: a produced value or a captured
/// cause.
///
/// Instances are immutable; combinators consume `self` and produce a fresh
/// value. Two `Success`es are equal when their values are; two `Failure`s are
/// equal only when they hold the identical cause (see [`Cause`] for the
/// identity semantics).
///
/// # Examples
///
/// ```rust
/// use trywell::Try;
///
/// let t = Try::of(|| Ok(2))
///     .map(|n| Ok(n + 2))
///     .filter(|n| Ok(n % 2 == 0));
///
/// assert_eq!(t.get_or(0), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Try<T> {
    /// A successfully produced value.
    Success(T),
    /// A captured, non-fatal cause.
    Failure(Cause),
}

impl<T> Try<T> {
    // ========== Constructors ==========

    /// Run a fallible computation under the capture boundary.
    ///
    /// The closure executes exactly once, synchronously, on the calling
    /// thread. A returned `Err` or a panic becomes a `Failure`; a fatal cause
    /// propagates instead of being captured; an interruption sets the thread
    /// interrupt flag before the `Failure` is returned.
    ///
    /// The closure is wrapped in `AssertUnwindSafe` internally: it is consumed
    /// by value and the unwind is converted into a value at the boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    ///
    /// let ok = Try::of(|| Ok(42));
    /// assert_eq!(ok, Try::success(42));
    ///
    /// let divisor = std::hint::black_box(0);
    /// let caught = Try::of(move || Ok(10 / divisor));
    /// assert!(caught.is_failure());
    /// ```
    pub fn of<F>(f: F) -> Try<T>
    where
        F: FnOnce() -> Result<T, Cause>,
    {
        capture(f)
    }

    /// Create a `Success` wrapping `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    ///
    /// let t = Try::success(5);
    /// assert!(t.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Try<T> {
        Try::Success(value)
    }

    /// Create a `Failure` wrapping the given cause.
    ///
    /// Raises immediately if the cause is fatal: a `Failure` never holds a
    /// fatal cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::io;
    ///
    /// let t: Try<i32> = Try::failure(io::Error::other("boom"));
    /// assert!(t.is_failure());
    /// ```
    pub fn failure(cause: impl Into<Cause>) -> Try<T> {
        let cause = cause.into();
        if cause.is_fatal() {
            cause.raise();
        }
        Try::Failure(cause)
    }

    // ========== Predicates ==========

    /// Whether this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    /// Whether this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Try::Failure(_))
    }

    /// Convert to a `Try<&T>`. A `Failure` keeps the same cause handle, so
    /// the borrowed view compares equal to the original.
    #[inline]
    pub fn as_ref(&self) -> Try<&T> {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(cause) => Try::Failure(cause.clone()),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value with a fallible mapper.
    ///
    /// A non-fatal error raised by the mapper becomes a `Failure`; on a
    /// `Failure` the mapper is not invoked and the cause passes through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    ///
    /// let t = Try::success(21).map(|n| Ok(n * 2));
    /// assert_eq!(t, Try::success(42));
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, Cause>,
    {
        match self {
            Try::Success(value) => capture(|| mapper(value)),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Chain a computation that itself yields a `Try`.
    ///
    /// The result is flattened, never nested. A non-fatal error raised by the
    /// mapper becomes a `Failure`; on a `Failure` the mapper is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    ///
    /// fn half(n: i32) -> Try<i32> {
    ///     if n % 2 == 0 {
    ///         Try::success(n / 2)
    ///     } else {
    ///         Try::failure(std::io::Error::other("odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Try::success(42).flat_map(half), Try::success(21));
    /// assert!(Try::success(7).flat_map(half).is_failure());
    /// ```
    pub fn flat_map<U, F>(self, mapper: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Try::Success(value) => capture_flat(|| mapper(value)),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Keep the success value only if the predicate holds for it.
    ///
    /// Rejection produces a `Failure` wrapping a
    /// [`NoSuchElementError`](crate::NoSuchElementError); a non-fatal error
    /// raised by the predicate becomes a `Failure`; a `Failure` passes
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::{NoSuchElementError, Try};
    ///
    /// let even = Try::success(4).filter(|n| Ok(n % 2 == 0));
    /// assert_eq!(even, Try::success(4));
    ///
    /// let odd = Try::success(4).filter(|n| Ok(n % 2 == 1));
    /// assert!(odd.get_cause().is::<NoSuchElementError>());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Try<T>
    where
        P: FnOnce(&T) -> Result<bool, Cause>,
    {
        match self {
            Try::Success(value) => match capture(|| predicate(&value)) {
                Try::Success(true) => Try::Success(value),
                Try::Success(false) => {
                    Try::failure(NoSuchElementError::new("predicate does not hold"))
                }
                Try::Failure(cause) => Try::Failure(cause),
            },
            failure => failure,
        }
    }

    /// Reduce both sides to a single value.
    ///
    /// This is a pure reduction: errors raised by either function are **not**
    /// captured and propagate to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    ///
    /// let description = Try::success(5).fold(
    ///     |cause| format!("failed: {cause}"),
    ///     |value| format!("got {value}"),
    /// );
    /// assert_eq!(description, "got 5");
    /// ```
    pub fn fold<U, FF, FS>(self, if_failure: FF, if_success: FS) -> U
    where
        FF: FnOnce(Cause) -> U,
        FS: FnOnce(T) -> U,
    {
        match self {
            Try::Success(value) => if_success(value),
            Try::Failure(cause) => if_failure(cause),
        }
    }

    /// Transform both sides with functions that yield a `Try` each.
    ///
    /// Unlike [`fold`](Try::fold), a non-fatal error raised while computing
    /// either side is captured as a `Failure`.
    pub fn transform<U, FF, FS>(self, if_failure: FF, if_success: FS) -> Try<U>
    where
        FF: FnOnce(Cause) -> Try<U>,
        FS: FnOnce(T) -> Try<U>,
    {
        match self {
            Try::Success(value) => capture_flat(|| if_success(value)),
            Try::Failure(cause) => capture_flat(|| if_failure(cause)),
        }
    }

    // ========== Recovery ==========

    /// Invert this `Try`.
    ///
    /// A `Failure` becomes a `Success` of its cause; a `Success` becomes a
    /// `Failure` wrapping an
    /// [`UnsupportedOperationError`](crate::UnsupportedOperationError).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::io;
    ///
    /// let failed: Try<i32> = Try::failure(io::Error::other("boom"));
    /// assert!(failed.failed().is_success());
    ///
    /// assert!(Try::success(5).failed().is_failure());
    /// ```
    pub fn failed(self) -> Try<Cause> {
        match self {
            Try::Failure(cause) => Try::Success(cause),
            Try::Success(_) => Try::failure(UnsupportedOperationError::new("failed() on Success")),
        }
    }

    /// Replace the cause of a `Failure` with a new one.
    ///
    /// A non-fatal error raised by the mapper becomes the `Failure`'s cause
    /// instead; a fatal cause returned by the mapper propagates. A `Success`
    /// passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::{Cause, Try};
    /// use std::io;
    ///
    /// let t: Try<i32> = Try::failure(io::Error::other("low-level"));
    /// let t = t.map_failure(|c| Cause::new(io::Error::other(format!("wrapped: {c}"))));
    /// assert_eq!(t.get_cause().to_string(), "wrapped: low-level");
    /// ```
    pub fn map_failure<F>(self, mapper: F) -> Try<T>
    where
        F: FnOnce(Cause) -> Cause,
    {
        match self {
            Try::Failure(cause) => match capture(|| Ok(mapper(cause))) {
                Try::Success(mapped) => Try::failure(mapped),
                Try::Failure(raised) => Try::Failure(raised),
            },
            success => success,
        }
    }

    /// Recover a `Failure` whose cause is exactly of type `X` with an
    /// alternate value.
    ///
    /// The recovery function runs under the capture boundary, so an error it
    /// raises is itself captured. A `Success`, or a `Failure` of a different
    /// cause type, passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::{PanicError, Try};
    ///
    /// let divisor = std::hint::black_box(0);
    /// let t = Try::of(move || Ok(10 / divisor))
    ///     .recover::<PanicError, _>(|_| Ok(i32::MAX));
    /// assert_eq!(t, Try::success(i32::MAX));
    /// ```
    pub fn recover<X, F>(self, recovery: F) -> Try<T>
    where
        X: StdError + 'static,
        F: FnOnce(&X) -> Result<T, Cause>,
    {
        match self {
            Try::Failure(cause) if cause.is::<X>() => capture(|| match cause.downcast_ref::<X>() {
                Some(matched) => recovery(matched),
                None => Err(cause.clone()),
            }),
            other => other,
        }
    }

    /// Recover a `Failure` whose cause is exactly of type `X` by performing
    /// an alternate computation.
    ///
    /// Like [`recover`](Try::recover), but the recovery function yields a
    /// `Try` itself; returning a `Failure` means recovery could not take
    /// place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::{NoSuchElementError, Try};
    ///
    /// let t = Try::success(3)
    ///     .filter(|n| Ok(n % 2 == 0))
    ///     .recover_with::<NoSuchElementError, _>(|_| Try::success(0));
    /// assert_eq!(t, Try::success(0));
    /// ```
    pub fn recover_with<X, F>(self, recovery: F) -> Try<T>
    where
        X: StdError + 'static,
        F: FnOnce(&X) -> Try<T>,
    {
        match self {
            Try::Failure(cause) if cause.is::<X>() => {
                capture_flat(|| match cause.downcast_ref::<X>() {
                    Some(matched) => recovery(matched),
                    None => Try::Failure(cause.clone()),
                })
            }
            other => other,
        }
    }

    /// Replace a `Failure` with another computation's outcome.
    ///
    /// The supplier runs under the capture boundary; the original cause is
    /// discarded. A `Success` passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::io;
    ///
    /// let t: Try<i32> = Try::failure(io::Error::other("boom"));
    /// assert_eq!(t.or_else(|| Try::success(7)), Try::success(7));
    ///
    /// assert_eq!(Try::success(1).or_else(|| Try::success(7)), Try::success(1));
    /// ```
    pub fn or_else<F>(self, supplier: F) -> Try<T>
    where
        F: FnOnce() -> Try<T>,
    {
        match self {
            success @ Try::Success(_) => success,
            Try::Failure(_) => capture_flat(supplier),
        }
    }

    // ========== Observers ==========

    /// Observe the success value. The action runs only on a `Success`;
    /// errors it raises are **not** captured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::cell::Cell;
    ///
    /// let fired = Cell::new(0);
    /// let t = Try::success(5).on_success(|_| fired.set(fired.get() + 1));
    /// assert_eq!(fired.get(), 1);
    /// assert_eq!(t, Try::success(5));
    /// ```
    pub fn on_success<F>(self, action: F) -> Try<T>
    where
        F: FnOnce(&T),
    {
        if let Try::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Observe the cause. The action runs only on a `Failure`; errors it
    /// raises are **not** captured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::cell::Cell;
    /// use std::io;
    ///
    /// let fired = Cell::new(false);
    /// let t: Try<i32> = Try::failure(io::Error::other("boom"));
    /// t.on_failure(|_| fired.set(true));
    /// assert!(fired.get());
    /// ```
    pub fn on_failure<F>(self, action: F) -> Try<T>
    where
        F: FnOnce(&Cause),
    {
        if let Try::Failure(cause) = &self {
            action(cause);
        }
        self
    }

    /// Observe the cause only when it is exactly of type `X`.
    pub fn on_failure_of<X, F>(self, action: F) -> Try<T>
    where
        X: StdError + 'static,
        F: FnOnce(&X),
    {
        if let Try::Failure(cause) = &self {
            if let Some(matched) = cause.downcast_ref::<X>() {
                action(matched);
            }
        }
        self
    }

    /// Raise the cause as-is when it is exactly of type `X`; otherwise return
    /// this `Try` unchanged.
    ///
    /// This is terminal for a matching `Failure`: the cause unwinds the
    /// calling thread with its identity intact (an enclosing capture boundary
    /// would re-capture the same cause).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::{PanicError, Try};
    /// use std::io;
    ///
    /// // The cause is an io::Error, not a PanicError: nothing is raised.
    /// let t: Try<i32> = Try::failure(io::Error::other("boom"));
    /// assert!(t.rethrow::<PanicError>().is_failure());
    /// ```
    pub fn rethrow<X>(self) -> Try<T>
    where
        X: StdError + 'static,
    {
        match self {
            Try::Failure(cause) if cause.is::<X>() => cause.raise(),
            other => other,
        }
    }

    // ========== Extraction ==========

    /// Extract the success value, raising the cause on a `Failure`.
    ///
    /// This is the unsafe extractor. A panic-origin cause is re-raised
    /// unchanged; a declared cause is wrapped in a
    /// [`NonFatalError`](crate::NonFatalError) and raised. Safe alternatives
    /// are [`fold`](Try::fold), [`get_or`](Try::get_or),
    /// [`get_or_else`](Try::get_or_else) and [`to_option`](Try::to_option).
    ///
    /// # Panics
    ///
    /// Panics when this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    ///
    /// assert_eq!(Try::success(5).get(), 5);
    /// ```
    pub fn get(self) -> T {
        match self {
            Try::Success(value) => value,
            Try::Failure(cause) => {
                if cause.is_panic() {
                    cause.raise();
                }
                Cause::new(NonFatalError::new(cause)).raise()
            }
        }
    }

    /// Extract the cause of a `Failure`.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnsupportedOperationError`](crate::UnsupportedOperationError)
    /// cause when this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::io;
    ///
    /// let t: Try<i32> = Try::failure(io::Error::other("boom"));
    /// assert!(t.get_cause().is::<io::Error>());
    /// ```
    pub fn get_cause(self) -> Cause {
        match self {
            Try::Failure(cause) => cause,
            Try::Success(_) => {
                Cause::new(UnsupportedOperationError::new("get_cause() on Success")).raise()
            }
        }
    }

    /// The success value, or `default` on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::io;
    ///
    /// assert_eq!(Try::success(5).get_or(0), 5);
    /// assert_eq!(Try::<i32>::failure(io::Error::other("boom")).get_or(0), 0);
    /// ```
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Try::Success(value) => value,
            Try::Failure(_) => default,
        }
    }

    /// The success value, or the supplier's result on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::io;
    ///
    /// let t: Try<i32> = Try::failure(io::Error::other("boom"));
    /// assert_eq!(t.get_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Try::Success(value) => value,
            Try::Failure(_) => supplier(),
        }
    }

    /// The success value, or raise a caller-chosen cause on a `Failure`.
    ///
    /// # Panics
    ///
    /// Panics with the mapped cause when this is a `Failure`.
    pub fn get_or_raise<F>(self, mapper: F) -> T
    where
        F: FnOnce(Cause) -> Cause,
    {
        match self {
            Try::Success(value) => value,
            Try::Failure(cause) => mapper(cause).raise(),
        }
    }

    // ========== Conversions ==========

    /// Convert to an [`Either`], mapping the cause to the left side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::{Either, Try};
    /// use std::io;
    ///
    /// assert_eq!(Try::success(5).to_either(|c| c.to_string()), Either::right(5));
    ///
    /// let t: Try<i32> = Try::failure(io::Error::other("boom"));
    /// assert_eq!(t.to_either(|c| c.to_string()), Either::left("boom".to_string()));
    /// ```
    pub fn to_either<L, F>(self, failure_mapper: F) -> Either<L, T>
    where
        F: FnOnce(Cause) -> L,
    {
        match self {
            Try::Success(value) => Either::right(value),
            Try::Failure(cause) => Either::left(failure_mapper(cause)),
        }
    }

    /// Convert to an `Option`, discarding the cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::io;
    ///
    /// assert_eq!(Try::success(5).to_option(), Some(5));
    /// assert_eq!(Try::<i32>::failure(io::Error::other("boom")).to_option(), None);
    /// ```
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    /// Convert to a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Cause> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(cause) => Err(cause),
        }
    }

    /// Create from a `Result`, applying the fatal-cause policy of
    /// [`failure`](Try::failure) to the `Err` side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::io;
    ///
    /// assert_eq!(Try::from_result(Ok::<_, io::Error>(5)), Try::success(5));
    /// assert!(Try::from_result(Err::<i32, _>(io::Error::other("boom"))).is_failure());
    /// ```
    pub fn from_result<E>(result: Result<T, E>) -> Try<T>
    where
        E: Into<Cause>,
    {
        match result {
            Ok(value) => Try::Success(value),
            Err(error) => Try::failure(error),
        }
    }

    // ========== Iterator support ==========

    /// Iterate over the success value, if present (0 or 1 elements).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    ///
    /// let t = Try::success(5);
    /// let collected: Vec<_> = t.iter().collect();
    /// assert_eq!(collected, vec![&5]);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
        .into_iter()
    }

    /// Mutably iterate over the success value, if present.
    #[inline]
    pub fn iter_mut(&mut self) -> std::option::IntoIter<&mut T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
        .into_iter()
    }
}

impl Try<()> {
    /// Run a side-effecting procedure under the capture boundary.
    ///
    /// Successful completion yields `Success(())`; the capture policy is the
    /// same as [`Try::of`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Try;
    /// use std::cell::Cell;
    ///
    /// let fired = Cell::new(false);
    /// let t = Try::run(|| {
    ///     fired.set(true);
    ///     Ok(())
    /// });
    /// assert_eq!(t, Try::success(()));
    /// assert!(fired.get());
    /// ```
    pub fn run<F>(f: F) -> Try<()>
    where
        F: FnOnce() -> Result<(), Cause>,
    {
        capture(f)
    }
}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Try::Success(value) => write!(f, "Success({value})"),
            Try::Failure(cause) => write!(f, "Failure({cause})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<Cause>,
{
    fn from(result: Result<T, E>) -> Self {
        Try::from_result(result)
    }
}

impl<T> From<Try<T>> for Result<T, Cause> {
    fn from(outcome: Try<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Try<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
