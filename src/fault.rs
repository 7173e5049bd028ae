//! # Fault
//!
//! The error payload carried by a failed [`Attempt`](crate::Attempt).
//!
//! A `Fault` is a descriptive message plus an optional nested cause, forming
//! a chain that is walked through [`std::error::Error::source`]. It exists so
//! that a failed container can hold a concrete, cloneable, comparable error
//! value instead of a trait object.
//!
//! ## Example
//!
//! ```rust
//! use safewrap::Fault;
//!
//! let inner = Fault::new("connection refused");
//! let fault = Fault::chain("could not load profile", inner);
//!
//! assert_eq!(fault.message(), "could not load profile");
//! assert_eq!(fault.cause().unwrap().message(), "connection refused");
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;

/// Description substituted when a fault is built from an empty message.
///
/// A failure must always carry a non-empty description, so constructors fall
/// back to this text rather than storing an empty string.
pub const DEFAULT_FAULT_MESSAGE: &str = "value not available";

/// A descriptive error value with an optional nested cause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fault {
    message: String,
    cause: Option<Box<Fault>>,
}

impl Fault {
    /// Creates a fault from a message.
    ///
    /// An empty message is replaced by [`DEFAULT_FAULT_MESSAGE`] so the
    /// non-empty-description invariant holds for every constructed fault.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            DEFAULT_FAULT_MESSAGE.to_string()
        } else {
            message
        };
        Fault {
            message,
            cause: None,
        }
    }

    /// Creates a fault with `cause` as its underlying error.
    pub fn chain(message: impl Into<String>, cause: Fault) -> Self {
        let mut fault = Fault::new(message);
        fault.cause = Some(Box::new(cause));
        fault
    }

    /// Captures an arbitrary error value, preserving its `source()` chain
    /// as nested causes.
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut fault = Fault::new(error.to_string());
        if let Some(source) = error.source() {
            fault.cause = Some(Box::new(Fault::from_error(source)));
        }
        fault
    }

    /// Builds a fault from a panic payload.
    ///
    /// `&str` and `String` payloads keep their text; any other payload type
    /// falls back to a generic description.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "closure panicked with a non-string payload".to_string()
        };
        Fault::new(message)
    }

    /// Returns the fault's description. Never empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause, if one was recorded.
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Fault::new(message)
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Fault::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_is_normalized() {
        assert_eq!(Fault::new("").message(), DEFAULT_FAULT_MESSAGE);
        assert_eq!(Fault::new(String::new()).message(), DEFAULT_FAULT_MESSAGE);
        assert_eq!(Fault::new("boom").message(), "boom");
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(Fault::new("no such user").to_string(), "no such user");
    }

    #[test]
    fn test_chain_records_cause() {
        let fault = Fault::chain("outer", Fault::new("inner"));

        assert_eq!(fault.message(), "outer");
        assert_eq!(fault.cause().unwrap().message(), "inner");
        assert!(fault.cause().unwrap().cause().is_none());
    }

    #[test]
    fn test_source_walks_the_chain() {
        let fault = Fault::chain("outer", Fault::new("inner"));
        let source = Error::source(&fault).unwrap();

        assert_eq!(source.to_string(), "inner");
        assert!(source.source().is_none());
    }

    #[test]
    fn test_from_error_captures_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let fault = Fault::from_error(&io);

        assert_eq!(fault.message(), "missing file");

        let wrapped = Fault::chain("load failed", fault);
        let captured = Fault::from_error(&wrapped);
        assert_eq!(captured.message(), "load failed");
        assert_eq!(captured.cause().unwrap().message(), "missing file");
    }

    #[test]
    fn test_equality_compares_message_chain() {
        assert_eq!(Fault::new("a"), Fault::new("a"));
        assert_ne!(Fault::new("a"), Fault::new("b"));
        assert_ne!(Fault::new("a"), Fault::chain("a", Fault::new("b")));
    }
}
