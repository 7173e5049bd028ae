//! # Attempt
//!
//! Fallible computation container: a computation either produced a value or
//! failed with a [`Fault`]. `Attempt<T>` replaces thrown-exception control
//! flow — the failure travels inside the container and callers decide at the
//! end of a chain whether to recover, substitute, or surface it.
//!
//! ## Fault containment
//!
//! [`Attempt::map`] and [`Attempt::evaluate`] run the supplied closure under
//! a containment boundary: a panic raised by the closure is caught and
//! re-expressed as a `Failure` instead of unwinding through the caller. This
//! is deliberately asymmetric with [`Maybe::map`](crate::Maybe::map), which
//! lets panics propagate — containing faults is this type's whole purpose,
//! while absence is not a fault channel.
//!
//! ## Example
//!
//! ```rust
//! use safewrap::Attempt;
//!
//! let parsed = Attempt::success("12")
//!     .map(|raw| raw.parse::<u32>().unwrap())
//!     .get_or(0);
//! assert_eq!(parsed, 12);
//!
//! let recovered = Attempt::success("oops")
//!     .map(|raw| raw.parse::<u32>().unwrap()) // panic becomes Failure
//!     .catch_failure(0)
//!     .get_value();
//! assert_eq!(recovered, Ok(0));
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::error::{AccessError, ConstructionError};
use crate::fault::Fault;
use crate::maybe::Maybe;

/// A computation that either produced a value or failed with a fault.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attempt<T> {
    /// The computation produced a value
    Success(T),
    /// The computation failed
    Failure(Fault),
}

impl<T> Attempt<T> {
    /// Wraps `value` in a successful container.
    pub fn success(value: T) -> Self {
        Attempt::Success(value)
    }

    /// Returns a failed container.
    ///
    /// Accepts anything convertible into a [`Fault`]: a message (`&str` or
    /// `String`) or a ready-made fault. An empty message is normalized to
    /// the default description so a failure always carries a non-empty one.
    pub fn failure(error: impl Into<Fault>) -> Self {
        Attempt::Failure(error.into())
    }

    /// Checked constructor: errs with [`ConstructionError::EmptyDescription`]
    /// for an empty message instead of normalizing it.
    pub fn try_failure(message: &str) -> Result<Self, ConstructionError> {
        if message.is_empty() {
            Err(ConstructionError::EmptyDescription)
        } else {
            Ok(Attempt::Failure(Fault::new(message)))
        }
    }

    /// Adapts a nullable value: `Some` becomes `Success`, `None` becomes
    /// `Failure(error)`.
    pub fn wrap(value: Option<T>, error: impl Into<Fault>) -> Self {
        match value {
            Some(value) => Attempt::Success(value),
            None => Attempt::Failure(error.into()),
        }
    }

    /// Runs `f` under the containment boundary and wraps its result.
    ///
    /// A panic raised by `f` is captured as a `Failure` carrying the panic
    /// message.
    pub fn evaluate<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Attempt::Success(value),
            Err(payload) => Attempt::Failure(Fault::from_panic(payload)),
        }
    }

    /// Returns `true` if the computation produced a value.
    pub fn is_success(&self) -> bool {
        matches!(self, Attempt::Success(_))
    }

    /// Returns `true` if the computation failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Attempt::Failure(_))
    }

    /// Borrows the wrapped value, if the computation succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Attempt::Success(value) => Some(value),
            Attempt::Failure(_) => None,
        }
    }

    /// Borrows the fault, if the computation failed.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Attempt::Success(_) => None,
            Attempt::Failure(fault) => Some(fault),
        }
    }

    /// Converts from `&Attempt<T>` to `Attempt<&T>` so inspection does not
    /// consume the container.
    pub fn as_ref(&self) -> Attempt<&T> {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(fault) => Attempt::Failure(fault.clone()),
        }
    }

    /// Transforms the wrapped value with `f` under the containment boundary.
    ///
    /// `Failure` passes through without invoking `f`. A panic raised by `f`
    /// is caught at this boundary and re-expressed as
    /// `Failure(fault-from-panic)` — it does not propagate further.
    pub fn map<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Attempt::Success(value) => match panic::catch_unwind(AssertUnwindSafe(|| f(value))) {
                Ok(mapped) => Attempt::Success(mapped),
                Err(payload) => Attempt::Failure(Fault::from_panic(payload)),
            },
            Attempt::Failure(fault) => Attempt::Failure(fault),
        }
    }

    /// Transforms the wrapped value with a function that itself returns an
    /// `Attempt`, without double-wrapping. `Failure` passes through.
    ///
    /// `f` is expected to express its own failures through the returned
    /// container, so no containment boundary is applied here.
    pub fn and_then<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        match self {
            Attempt::Success(value) => f(value),
            Attempt::Failure(fault) => Attempt::Failure(fault),
        }
    }

    /// Keeps the value only if `pred` accepts it; otherwise fails with
    /// `error`.
    pub fn filter<P>(self, pred: P, error: impl Into<Fault>) -> Attempt<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Attempt::Success(value) => {
                if pred(&value) {
                    Attempt::Success(value)
                } else {
                    Attempt::Failure(error.into())
                }
            }
            Attempt::Failure(fault) => Attempt::Failure(fault),
        }
    }

    /// Combines two successful containers with `f`; the first fault wins
    /// otherwise.
    pub fn zip_with<T1, T2, F>(self, other: Attempt<T1>, f: F) -> Attempt<T2>
    where
        F: FnOnce(T, T1) -> T2,
    {
        match (self, other) {
            (Attempt::Success(a), Attempt::Success(b)) => Attempt::Success(f(a, b)),
            (Attempt::Failure(fault), _) => Attempt::Failure(fault),
            (_, Attempt::Failure(fault)) => Attempt::Failure(fault),
        }
    }

    /// Unwraps the value, or returns `default` when failed. Total.
    pub fn get_or(self, default: T) -> T {
        match self {
            Attempt::Success(value) => value,
            Attempt::Failure(_) => default,
        }
    }

    /// Unwraps the value, or computes a fallback when failed.
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Attempt::Success(value) => value,
            Attempt::Failure(_) => f(),
        }
    }

    /// Container-level recovery: a failed container becomes
    /// `Success(default)`, a successful one is returned unchanged. The
    /// original fault is discarded.
    pub fn catch_failure(self, default: T) -> Attempt<T> {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(_) => Attempt::Success(default),
        }
    }

    /// Lazy variant of [`catch_failure`](Attempt::catch_failure): the
    /// default is only computed when the container failed.
    pub fn catch_failure_with<F>(self, f: F) -> Attempt<T>
    where
        F: FnOnce() -> T,
    {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(_) => Attempt::Success(f()),
        }
    }

    /// Returns this container if successful, otherwise `fallback`.
    pub fn success_or(self, fallback: Attempt<T>) -> Attempt<T> {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(_) => fallback,
        }
    }

    /// Extracts the wrapped value.
    ///
    /// Errs with [`AccessError::Failed`] on a failed container, carrying the
    /// original fault as context. Callers that want totality use
    /// [`get_or`](Attempt::get_or) or recover first with
    /// [`catch_failure`](Attempt::catch_failure).
    pub fn get_value(self) -> Result<T, AccessError> {
        match self {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(fault) => Err(AccessError::Failed(fault)),
        }
    }

    /// Converts to a [`Maybe`], discarding the fault: `Success` becomes
    /// `Present`, `Failure` becomes `Absent`.
    ///
    /// This is the single bridge between the two container families.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Attempt::Success(value) => Maybe::Present(value),
            Attempt::Failure(_) => Maybe::Absent,
        }
    }
}

impl<T, E> From<Result<T, E>> for Attempt<T>
where
    E: Into<Fault>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Attempt::Success(value),
            Err(error) => Attempt::Failure(error.into()),
        }
    }
}

impl<T> From<Attempt<T>> for Result<T, Fault> {
    fn from(attempt: Attempt<T>) -> Self {
        match attempt {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(fault) => Err(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::DEFAULT_FAULT_MESSAGE;

    #[test]
    fn test_constructors() {
        assert_eq!(Attempt::success(7), Attempt::Success(7));
        assert_eq!(
            Attempt::<i32>::failure("boom"),
            Attempt::Failure(Fault::new("boom"))
        );
        assert_eq!(Attempt::wrap(Some(7), "unused"), Attempt::Success(7));
        assert_eq!(
            Attempt::<i32>::wrap(None, "missing"),
            Attempt::Failure(Fault::new("missing"))
        );
    }

    #[test]
    fn test_failure_normalizes_empty_message() {
        let attempt = Attempt::<i32>::failure("");
        assert_eq!(attempt.fault().unwrap().message(), DEFAULT_FAULT_MESSAGE);
    }

    #[test]
    fn test_try_failure_rejects_empty_message() {
        assert_eq!(
            Attempt::<i32>::try_failure(""),
            Err(ConstructionError::EmptyDescription)
        );
        assert_eq!(
            Attempt::<i32>::try_failure("boom"),
            Ok(Attempt::Failure(Fault::new("boom")))
        );
    }

    #[test]
    fn test_evaluate_contains_panics() {
        assert_eq!(Attempt::evaluate(|| 1 + 1), Attempt::Success(2));

        let failed = Attempt::<i32>::evaluate(|| panic!("division by zero"));
        assert!(failed.is_failure());
        assert_eq!(failed.fault().unwrap().message(), "division by zero");
    }

    #[test]
    fn test_filter() {
        assert_eq!(
            Attempt::success(4).filter(|n| n % 2 == 0, "odd"),
            Attempt::Success(4)
        );
        assert_eq!(
            Attempt::success(3).filter(|n| n % 2 == 0, "odd"),
            Attempt::Failure(Fault::new("odd"))
        );
        // An already failed container keeps its original fault
        assert_eq!(
            Attempt::<i32>::failure("earlier").filter(|n| n % 2 == 0, "odd"),
            Attempt::Failure(Fault::new("earlier"))
        );
    }

    #[test]
    fn test_zip_with_first_fault_wins() {
        assert_eq!(
            Attempt::success(2).zip_with(Attempt::success(3), |a, b| a + b),
            Attempt::Success(5)
        );
        assert_eq!(
            Attempt::<i32>::failure("left")
                .zip_with(Attempt::<i32>::failure("right"), |a, b| a + b),
            Attempt::Failure(Fault::new("left"))
        );
        assert_eq!(
            Attempt::success(2).zip_with(Attempt::<i32>::failure("right"), |a, b| a + b),
            Attempt::Failure(Fault::new("right"))
        );
    }

    #[test]
    fn test_result_round_trip() {
        let attempt: Attempt<i32> = Ok::<_, Fault>(5).into();
        assert_eq!(attempt, Attempt::Success(5));

        let attempt: Attempt<i32> = Err::<i32, _>("boom").into();
        assert_eq!(Result::from(attempt), Err(Fault::new("boom")));
    }
}
