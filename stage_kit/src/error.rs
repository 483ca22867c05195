//! Error types for StageKit
//!
//! Almost every failure in the geometry core is a contract violation by the
//! caller (wrong volume state, bad extent). These are reported synchronously
//! and never leave vertex data half-written.

use std::fmt;

/// Result type for StageKit operations
pub type Result<T> = std::result::Result<T, Error>;

/// StageKit errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Operation not valid for the current volume state
    /// (e.g. width accessor on a volume that is no longer axis-aligned)
    InvalidState(String),

    /// Degenerate input rejected at the API boundary (negative extent, NaN)
    InvalidArgument(String),

    /// No coordinate space connects the volume's node to the requested one
    MissingCoordinateSpace(String),

    /// Node key does not refer to a live node
    UnknownNode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::MissingCoordinateSpace(msg) => write!(f, "Missing coordinate space: {}", msg),
            Error::UnknownNode(msg) => write!(f, "Unknown node: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] and log it at ERROR severity (with file:line) before
/// handing it back to the caller.
///
/// ```ignore
/// return Err(stagekit_err!(InvalidState, "stagekit::PaintVolume",
///     "width requested on a non axis-aligned volume"));
/// ```
#[macro_export]
macro_rules! stagekit_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::stagekit_error!($source, "{}", message);
        $crate::stagekit::Error::$variant(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
