//! # Trywell
//!
//! Deferred error handling: capture a fallible computation as a value and
//! decide later what to do with its outcome.
//!
//! ## Model
//!
//! A [`Try<T>`] is either `Success(T)` or `Failure(Cause)`. Running a closure
//! through [`Try::of`] places a capture boundary around it:
//!
//! - a returned error or a panic becomes a `Failure` holding a [`Cause`];
//! - a [`FatalError`] is never captured and always propagates;
//! - an [`InterruptedError`] sets the thread's interrupt flag (see
//!   [`interrupt`]) before being captured.
//!
//! Combinators then transform, filter, recover and extract without touching
//! error state until the end of the pipeline.
//!
//! ## Quick Example
//!
//! ```rust
//! use trywell::{Cause, Try};
//! use std::num::ParseIntError;
//!
//! fn parse_port(raw: &str) -> Try<u16> {
//!     Try::of(|| raw.parse::<u16>().map_err(Cause::from))
//!         .filter(|port| Ok(*port >= 1024))
//! }
//!
//! let port = parse_port("8080")
//!     .recover::<ParseIntError, _>(|_| Ok(8080))
//!     .get_or(8080);
//! assert_eq!(port, 8080);
//!
//! let described = parse_port("not-a-port").fold(
//!     |cause| format!("rejected: {cause}"),
//!     |port| format!("listening on {port}"),
//! );
//! assert!(described.starts_with("rejected"));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod cause;
pub mod either;
pub mod error;
pub mod interrupt;
pub mod testing;
pub mod try_;

mod capture;

// Re-exports
pub use cause::Cause;
pub use either::Either;
pub use error::{
    FatalError, FatalKind, InterruptedError, NoSuchElementError, NonFatalError, PanicError,
    UnsupportedOperationError,
};
pub use try_::Try;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cause::Cause;
    pub use crate::either::Either;
    pub use crate::error::{
        FatalError, FatalKind, InterruptedError, NoSuchElementError, NonFatalError, PanicError,
        UnsupportedOperationError,
    };
    pub use crate::try_::Try;
}
