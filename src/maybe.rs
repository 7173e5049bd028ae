//! # Maybe
//!
//! Optional value container: a value is either present or absent, and the
//! type system forces callers to say which case they handled.
//!
//! `Maybe<T>` replaces null references. Code that would otherwise pass a
//! nullable pointer around wraps the value once at the boundary (usually via
//! [`Maybe::wrap`]) and then transforms it with combinators:
//!
//! ```rust
//! use safewrap::Maybe;
//!
//! let port = Maybe::wrap(std::env::var("PORT").ok())
//!     .and_then(|raw| Maybe::wrap(raw.parse::<u16>().ok()))
//!     .get_or(8080);
//! ```
//!
//! Combinators consume `self` and return a fresh container; an existing
//! `Maybe` is never mutated in place. Absence is not a fault channel:
//! unlike [`Attempt::map`](crate::Attempt::map), [`Maybe::map`] lets panics
//! from the supplied closure propagate to the caller.

use crate::error::{AccessError, ConstructionError};

/// A value that may or may not be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present
    Present(T),
    /// No value is present
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// Wraps `value` in a present container.
    pub fn some(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Returns an absent container.
    pub fn nothing() -> Self {
        Maybe::Absent
    }

    /// Adapts a nullable value: `Some` becomes `Present`, `None` becomes
    /// `Absent`.
    pub fn wrap(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }

    /// Checked constructor: errs with [`ConstructionError::MissingValue`]
    /// when there is no value to wrap, instead of building an absent
    /// container.
    pub fn try_some(value: Option<T>) -> Result<Self, ConstructionError> {
        match value {
            Some(value) => Ok(Maybe::Present(value)),
            None => Err(ConstructionError::MissingValue),
        }
    }

    /// Returns `true` if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Borrows the wrapped value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>` so inspection does not
    /// consume the container.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Transforms the wrapped value with `f`.
    ///
    /// `Absent` passes through without invoking `f`. Panics raised by `f`
    /// propagate to the caller: absence is not a fault channel, so this
    /// combinator does not contain them (contrast with
    /// [`Attempt::map`](crate::Attempt::map)).
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Transforms the wrapped value with a function that itself returns a
    /// `Maybe`, without double-wrapping.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keeps the value only if `pred` accepts it.
    pub fn filter<P>(self, pred: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) if pred(&value) => Maybe::Present(value),
            _ => Maybe::Absent,
        }
    }

    /// Combines two present containers with `f`; absent if either side is.
    pub fn zip_with<T1, T2, F>(self, other: Maybe<T1>, f: F) -> Maybe<T2>
    where
        F: FnOnce(T, T1) -> T2,
    {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present(f(a, b)),
            _ => Maybe::Absent,
        }
    }

    /// Unwraps the value, or returns `default` when absent. Total.
    pub fn get_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Unwraps the value, or computes a fallback when absent.
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f(),
        }
    }

    /// Container-level recovery: an absent container becomes
    /// `Present(default)`, a present one is returned unchanged.
    ///
    /// Unlike [`get_or`](Maybe::get_or) the result stays wrapped, so further
    /// combinators can be chained after recovery.
    pub fn catch_nothing(self, default: T) -> Maybe<T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Present(default),
        }
    }

    /// Lazy variant of [`catch_nothing`](Maybe::catch_nothing): the default
    /// is only computed when the container is absent.
    pub fn catch_nothing_with<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Present(f()),
        }
    }

    /// Returns this container if present, otherwise `fallback`.
    pub fn some_or(self, fallback: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => fallback,
        }
    }

    /// Extracts the wrapped value.
    ///
    /// Errs with [`AccessError::Absent`] on an absent container. Callers
    /// that want totality use [`get_or`](Maybe::get_or) or recover first
    /// with [`catch_nothing`](Maybe::catch_nothing).
    pub fn get_value(self) -> Result<T, AccessError> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(AccessError::Absent),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::wrap(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}
