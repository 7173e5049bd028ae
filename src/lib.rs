//! # Safewrap
//!
//! Optional and fallible value containers that replace null references and
//! thrown-exception control flow with a small, closed set of immutable
//! states.
//!
//! Two independent container families share one combinator surface:
//!
//! - [`Maybe<T>`] — a value may or may not be present (`Present` / `Absent`)
//! - [`Attempt<T>`] — a computation produced a value or failed with a
//!   [`Fault`] (`Success` / `Failure`)
//!
//! Both are plain tagged unions: exactly one state holds, construction is
//! all-or-nothing, and combinators consume the container and return a fresh
//! one instead of mutating in place. With no interior mutability they are
//! `Send + Sync` whenever the wrapped value is, so instances can be shared
//! across concurrent readers without synchronization.
//!
//! ## Quick start
//!
//! ```rust
//! use safewrap::{Attempt, Maybe};
//!
//! // Absence, recovered at the container level
//! let n = Maybe::<i32>::nothing().catch_nothing(0).get_value();
//! assert_eq!(n, Ok(0));
//!
//! // Failure, recovered at the container level
//! let n = Attempt::<i32>::failure("lookup failed")
//!     .catch_failure(0)
//!     .get_value();
//! assert_eq!(n, Ok(0));
//!
//! // The single bridge between the families discards the fault
//! let absent = Attempt::<i32>::failure("lookup failed").to_maybe();
//! assert!(absent.is_absent());
//! ```
//!
//! ## Recovery vs unwrap
//!
//! `catch_nothing` / `catch_failure` recover *inside* the container so more
//! combinators can be chained afterwards; `get_or` unwraps to a raw value
//! and ends the chain. The two are deliberately separate operations.

pub mod attempt;
pub mod error;
pub mod fault;
pub mod maybe;

pub use attempt::Attempt;
pub use error::{AccessError, ConstructionError};
pub use fault::{Fault, DEFAULT_FAULT_MESSAGE};
pub use maybe::Maybe;
