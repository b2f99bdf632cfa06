//! An unbiased sum type, used as the target of
//! [`Try::to_either`](crate::Try::to_either).
//!
//! Where a [`Try`](crate::Try) carries an opaque [`Cause`](crate::Cause) on
//! its failure side, an `Either<L, R>` carries whatever the caller mapped the
//! cause to: a domain error, a message, a retry token. Neither variant
//! implies failure by itself; by convention the combinators are right-biased,
//! with `Right` as the value produced by a successful computation.
//!
//! # Examples
//!
//! ```rust
//! use trywell::{Either, Try};
//!
//! let outcome: Either<String, i32> = Try::success(42).to_either(|c| c.to_string());
//!
//! let doubled = outcome.map(|n| n * 2);
//! assert_eq!(doubled, Either::right(84));
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Right-biased: `map`, `and_then` and the iterators operate on the `Right`
/// side and pass a `Left` through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a `Left` value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a `Right` value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Whether this is a `Left`.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Whether this is a `Right`.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// The left value, if present.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The right value, if present.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Convert to `Either<&mut L, &mut R>`.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Transformations ==========

    /// Transform the right value (right-biased `map`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(21);
    /// assert_eq!(e.map(|x| x * 2), Either::right(42));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.map_right(f)
    }

    /// Transform the left value, passing a `Right` through unchanged.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, passing a `Left` through unchanged.
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(1);
    /// assert_eq!(e.bimap(|x| x + 1, |s| s.len()), Either::left(2));
    /// ```
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(g(r)),
        }
    }

    /// Swap `Left` and `Right`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Chain a computation on the right value (right-biased `flat_map`).
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    // ========== Folding ==========

    /// Reduce both variants to a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trywell::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert_eq!(e.fold(|n| n.to_string(), |s| s.to_string()), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// The right value, or a default on a `Left`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(r) => r,
        }
    }

    /// The right value, or compute one from the left.
    #[inline]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r,
        }
    }

    // ========== Conversions ==========

    /// Convert to a `Result` (`Right` becomes `Ok`, `Left` becomes `Err`).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from a `Result` (`Ok` becomes `Right`, `Err` becomes `Left`).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    // ========== Iterator support ==========

    /// Iterate over the right value, if present (0 or 1 elements).
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.as_ref().into_right().into_iter()
    }

    /// Mutably iterate over the right value, if present.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut R> {
        self.as_mut().into_right().into_iter()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested `Either`.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(inner) => inner,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_right().into_iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_swap_involution(x: i32) {
            let e: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(e.swap().swap(), e);

            let e: Either<i32, i32> = Either::right(x);
            prop_assert_eq!(e.swap().swap(), e);
        }

        #[test]
        fn prop_functor_identity(x: i32) {
            let e: Either<(), i32> = Either::right(x);
            prop_assert_eq!(e.map(|v| v), Either::right(x));
        }

        #[test]
        fn prop_functor_composition(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let e: Either<(), i32> = Either::right(x);
            prop_assert_eq!(
                e.map(f).map(g),
                Either::right(x).map(|v| g(f(v)))
            );
        }

        #[test]
        fn prop_result_roundtrip(x: i32) {
            let either: Either<(), i32> = Either::right(x);
            let result: Result<i32, ()> = either.into();
            let back: Either<(), i32> = result.into();
            prop_assert_eq!(back, Either::right(x));
        }
    }
}
