//! Error types for value dumping.
//!
//! Almost everything this crate checks is checked at compile time: a type
//! without a rendering fails the `Dump` bound, and a type claiming two
//! container shapes at once is rejected as a conflicting-implementation
//! error. What remains at runtime is small:
//!
//! - **Sink failures**: the caller-supplied sink refused a write
//! - **I/O failures**: the [`to_writer`](crate::to_writer) adapter's
//!   underlying writer failed
//! - **Depth limit**: a value graph nested deeper than
//!   [`DumpOptions::max_depth`](crate::DumpOptions)
//! - **Unsupported shapes**: serde constructs the bridge does not map
//!   (enum variants carrying data)
//!
//! A failed write aborts the remainder of the dump; there is no
//! partial-output rollback.

use std::fmt;
use thiserror::Error;

/// Represents all runtime errors that can occur while dumping a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The output sink reported a write failure
    #[error("sink error: {0}")]
    Sink(String),

    /// I/O error from a `std::io::Write` destination
    #[error("IO error: {0}")]
    Io(String),

    /// Value graph nested deeper than the configured limit
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimit { limit: usize },

    /// Shape the serde bridge cannot express in the output grammar
    #[error("unsupported shape: {0}")]
    Unsupported(String),

    /// Custom error raised by a user-supplied renderer
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a depth-limit error for the given configured limit.
    pub fn depth_limit(limit: usize) -> Self {
        Error::DepthLimit { limit }
    }

    /// Creates an unsupported-shape error for constructs the output
    /// grammar has no spelling for.
    pub fn unsupported(msg: &str) -> Self {
        Error::Unsupported(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typedump::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Sink("formatter refused the write".to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
