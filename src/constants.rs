//! Library-wide constants.
//!
//! Centralizes magic numbers so edge-probe behavior stays consistent across
//! hosts that don't override the margin.

/// Default margin around an edge, in page units, within which a zone probe
/// considers the pointer to be "on" that edge.
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Wider default margin suited to coarse (touch) pointers.
pub const TOUCH_MARGIN: f64 = 20.0;

/// Default per-element concurrent session limit.
pub const DEFAULT_MAX_PER_ELEMENT: usize = 1;
