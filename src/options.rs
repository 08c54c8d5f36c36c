//! Resize option resolution.
//!
//! Hosts configure resizing per target element. The core reads the resolved
//! [`ResizeOptions`] and never mutates it; defaulting and validation of raw
//! host config happens here so the state machine can assume sane values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MARGIN, DEFAULT_MAX_PER_ELEMENT};
use crate::error::{OptionsError, OptionsResult};
use crate::types::{Axis, ElementId, InvertMode};

// ============================================================================
// Edge rules
// ============================================================================

/// How a single edge decides whether it participates in a resize.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRule {
    /// Edge never resizes.
    #[default]
    Never,
    /// Edge is active when the pointer starts within the margin of its
    /// coordinate.
    Zone,
    /// Edge is active when the event target matches this selector somewhere
    /// up the ancestor chain, bounded by the interactable element.
    Selector(String),
    /// Edge is active when the event target is exactly this element.
    Handle(ElementId),
}

impl EdgeRule {
    pub fn is_never(&self) -> bool {
        matches!(self, EdgeRule::Never)
    }
}

/// Per-edge rules for an explicit edge specification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRules {
    pub top: EdgeRule,
    pub bottom: EdgeRule,
    pub left: EdgeRule,
    pub right: EdgeRule,
}

impl EdgeRules {
    /// All four edges probe the pointer-margin zone.
    pub fn zones() -> Self {
        Self {
            top: EdgeRule::Zone,
            bottom: EdgeRule::Zone,
            left: EdgeRule::Zone,
            right: EdgeRule::Zone,
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Resolved resize configuration for one target element.
///
/// Defaults mirror the library-wide defaults table: resizing disabled, free
/// (`xy`) axis, no square/aspect lock, non-invertible, margin from
/// [`DEFAULT_MARGIN`], unlimited total sessions and one session per element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResizeOptions {
    pub enabled: bool,
    /// Explicit per-edge rules. `None` selects the axis-fallback probe.
    pub edges: Option<EdgeRules>,
    pub axis: Axis,
    /// Couple width and height at a 1:1 delta ratio.
    pub square: bool,
    /// Keep the aspect ratio the rect had when the gesture started.
    /// Takes precedence over `square` when both are set.
    pub preserve_aspect_ratio: bool,
    pub invert: InvertMode,
    /// Edge-probe margin; `None` falls back to [`DEFAULT_MARGIN`].
    pub margin: Option<f64>,
    /// Total concurrent resize sessions allowed; `None` is unlimited.
    pub max: Option<usize>,
    /// Concurrent sessions allowed per target element.
    pub max_per_element: usize,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            edges: None,
            axis: Axis::Xy,
            square: false,
            preserve_aspect_ratio: false,
            invert: InvertMode::None,
            margin: None,
            max: None,
            max_per_element: DEFAULT_MAX_PER_ELEMENT,
        }
    }
}

impl ResizeOptions {
    /// Enabled options with everything else defaulted.
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn edges(mut self, edges: EdgeRules) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn square(mut self, square: bool) -> Self {
        self.square = square;
        self
    }

    pub fn preserve_aspect_ratio(mut self, preserve: bool) -> Self {
        self.preserve_aspect_ratio = preserve;
        self
    }

    pub fn invert(mut self, invert: InvertMode) -> Self {
        self.invert = invert;
        self
    }

    /// Set the edge-probe margin, rejecting non-finite or negative values.
    pub fn margin(mut self, margin: f64) -> OptionsResult<Self> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(OptionsError::InvalidMargin(margin));
        }
        self.margin = Some(margin);
        Ok(self)
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn max_per_element(mut self, max: usize) -> Self {
        self.max_per_element = max;
        self
    }

    /// Margin to use for edge probes, falling back to the library default.
    pub fn effective_margin(&self) -> f64 {
        self.margin.unwrap_or(DEFAULT_MARGIN)
    }
}

// ============================================================================
// String parsing for host config values
// ============================================================================

impl FromStr for Axis {
    type Err = OptionsError;

    fn from_str(s: &str) -> OptionsResult<Self> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "xy" => Ok(Axis::Xy),
            other => Err(OptionsError::InvalidAxis(other.to_string())),
        }
    }
}

impl FromStr for InvertMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> OptionsResult<Self> {
        match s {
            "none" => Ok(InvertMode::None),
            "negate" => Ok(InvertMode::Negate),
            "reposition" => Ok(InvertMode::Reposition),
            other => Err(OptionsError::InvalidInvertMode(other.to_string())),
        }
    }
}
