//! Error types raised at the container boundary.
//!
//! Two kinds exist: [`AccessError`] for extracting a value out of an empty or
//! failed container, and [`ConstructionError`] for the checked constructors.
//! Everything else in the crate is total and returns a container instead of
//! an error.

use crate::fault::Fault;
use thiserror::Error;

/// Raised when `get_value` is called on a container holding no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The container was `Absent`
    #[error("no value present in an absent container")]
    Absent,

    /// The container was `Failure`; the original fault is carried as context
    #[error("no value present in a failed container: {0}")]
    Failed(#[source] Fault),
}

impl AccessError {
    /// Returns the fault behind a [`AccessError::Failed`], if any.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            AccessError::Failed(fault) => Some(fault),
            AccessError::Absent => None,
        }
    }
}

/// Raised by the checked constructors. Construction is all-or-nothing: the
/// error arm never yields a partial container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// `try_some` was given no value to wrap
    #[error("cannot construct a present container from a missing value")]
    MissingValue,

    /// `try_failure` was given an empty description
    #[error("failure description must not be empty")]
    EmptyDescription,
}
