//! Error types for option resolution.
//!
//! The core itself is infallible once configured: bad gestures simply produce
//! no events. Errors only arise when parsing host-supplied configuration
//! strings into typed option values.

use thiserror::Error;

/// Errors that can occur while resolving resize options.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Axis string was not one of `x`, `y`, `xy`
    #[error("invalid axis {0:?} (expected \"x\", \"y\" or \"xy\")")]
    InvalidAxis(String),

    /// Invert string was not one of `none`, `negate`, `reposition`
    #[error("invalid invert mode {0:?} (expected \"none\", \"negate\" or \"reposition\")")]
    InvalidInvertMode(String),

    /// Margin must be a finite, non-negative distance
    #[error("invalid margin {0} (expected a finite value >= 0)")]
    InvalidMargin(f64),
}

/// Result type alias for option resolution.
pub type OptionsResult<T> = Result<T, OptionsError>;
