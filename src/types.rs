//! Core geometry and mode types for the resize state machine.
//!
//! Rectangles carry derived `width`/`height` fields for fast access; every
//! mutation must re-establish `width == right - left` and
//! `height == bottom - top` (see [`Rect::sync_size`]).

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque host-side element identifier.
///
/// The core never dereferences this; it only compares it when a resize handle
/// is specified as an element reference, or when counting concurrent sessions
/// per target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Opaque pointer/gesture identifier, one per concurrent gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

// ============================================================================
// Geometry
// ============================================================================

/// A point in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page coordinates.
///
/// `width` and `height` are derived from the edge coordinates but stored
/// explicitly. A rect may be inverted (negative width/height) while a gesture
/// with `invert: negate` is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build a rect from its edge coordinates, deriving width/height.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Build a rect from an origin and a size.
    pub fn from_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Re-derive `width`/`height` from the edge coordinates.
    pub fn sync_size(&mut self) {
        self.width = self.right - self.left;
        self.height = self.bottom - self.top;
    }

    /// Aspect ratio at this rect's current size. Non-finite when height is 0;
    /// callers enabling aspect lock on degenerate rects must guard for this.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Per-field difference between the restricted rect at step N and step N-1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectDelta {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl RectDelta {
    pub const ZERO: RectDelta = RectDelta {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Difference `to - from`, field by field.
    pub fn between(from: &Rect, to: &Rect) -> Self {
        Self {
            left: to.left - from.left,
            top: to.top - from.top,
            right: to.right - from.right,
            bottom: to.bottom - from.bottom,
            width: to.width - from.width,
            height: to.height - from.height,
        }
    }
}

// ============================================================================
// Edges and modes
// ============================================================================

/// Which edges a gesture is allowed to move.
///
/// When produced by a margin-zone probe, `left`/`right` are mutually
/// exclusive, as are `top`/`bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSet {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeSet {
    pub const NONE: EdgeSet = EdgeSet {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub fn new(top: bool, bottom: bool, left: bool, right: bool) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// True if at least one edge is active.
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Axis constraint for the fallback (edge-less) resize mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Xy,
}

impl Axis {
    /// True if this constraint permits horizontal resizing.
    pub fn allows_x(&self) -> bool {
        !matches!(self, Axis::Y)
    }

    /// True if this constraint permits vertical resizing.
    pub fn allows_y(&self) -> bool {
        !matches!(self, Axis::X)
    }
}

/// Policy for rectangles dragged "through" themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvertMode {
    /// Clamp the rect to a minimum of 0x0; no inversion.
    #[default]
    None,
    /// Allow negative width/height.
    Negate,
    /// Keep width/height positive by swapping the crossed edge pair.
    Reposition,
}
