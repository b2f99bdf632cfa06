//! Assertion macros for tests over [`Try`](crate::Try) values.
//!
//! # Examples
//!
//! ```rust
//! use trywell::{assert_failure, assert_success, Try};
//! use std::io;
//!
//! let ok = Try::of(|| Ok(42));
//! assert_success!(ok);
//!
//! let failed: Try<i32> = Try::failure(io::Error::other("boom"));
//! assert_failure!(failed);
//! ```

/// Assert that a `Try` is a `Success`.
///
/// Panics with the captured cause if it is a `Failure`.
///
/// # Example
///
/// ```rust
/// use trywell::{assert_success, Try};
///
/// assert_success!(Try::success(42));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Try::Success(_) => {}
            $crate::Try::Failure(cause) => {
                panic!("Expected Success, got Failure: {:?}", cause);
            }
        }
    };
}

/// Assert that a `Try` is a `Failure`.
///
/// Panics with the success value if it is a `Success`.
///
/// # Example
///
/// ```rust
/// use trywell::{assert_failure, Try};
/// use std::io;
///
/// let t: Try<i32> = Try::failure(io::Error::other("boom"));
/// assert_failure!(t);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Try::Failure(_) => {}
            $crate::Try::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value);
            }
        }
    };
}

/// Assert that a `Try` is a `Failure` whose cause is exactly of the given
/// error type.
///
/// # Example
///
/// ```rust
/// use trywell::{assert_failure_of, NoSuchElementError, Try};
///
/// let t = Try::success(3).filter(|n| Ok(n % 2 == 0));
/// assert_failure_of!(t, NoSuchElementError);
/// ```
#[macro_export]
macro_rules! assert_failure_of {
    ($outcome:expr, $error_type:ty) => {
        match $outcome {
            $crate::Try::Failure(cause) => {
                if !cause.is::<$error_type>() {
                    panic!(
                        "Expected Failure of {}, got cause: {:?}",
                        stringify!($error_type),
                        cause
                    );
                }
            }
            $crate::Try::Success(value) => {
                panic!(
                    "Expected Failure of {}, got Success: {:?}",
                    stringify!($error_type),
                    value
                );
            }
        }
    };
}
