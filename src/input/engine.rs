//! The rect-update state machine.
//!
//! `RectEngine` owns the per-gesture rectangles exclusively: the immutable
//! `start` rect, the additively-updated (possibly inverted) `current` rect,
//! the policy-corrected `restricted` rect, and the `previous` rect used for
//! per-step deltas. Each pointer delta runs to completion synchronously;
//! there are no suspension points within a step.

use crate::input::link::derive_linked_edges;
use crate::options::ResizeOptions;
use crate::profile_scope;
use crate::types::{EdgeSet, InvertMode, Rect, RectDelta};

/// Result of applying one pointer delta.
///
/// `dx`/`dy` are the deltas actually applied after square/aspect adjustment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    pub rect: Rect,
    pub delta: RectDelta,
    pub dx: f64,
    pub dy: f64,
}

/// Per-gesture resize state machine.
#[derive(Clone, Debug)]
pub struct RectEngine {
    start: Rect,
    current: Rect,
    restricted: Rect,
    previous: Rect,
    delta: RectDelta,
    active_edges: EdgeSet,
    linked_edges: Option<EdgeSet>,
    start_aspect_ratio: Option<f64>,
}

impl RectEngine {
    /// Initialize a gesture from its start rect and detected edges.
    ///
    /// Under `preserve_aspect_ratio`, a zero-height start rect records a
    /// non-finite ratio that will propagate through subsequent steps; this
    /// degenerate input is deliberately not special-cased here, callers
    /// must guard.
    pub fn new(start: Rect, active_edges: EdgeSet, options: &ResizeOptions) -> Self {
        let linked_edges = (options.square || options.preserve_aspect_ratio)
            .then(|| derive_linked_edges(active_edges));

        let start_aspect_ratio = options
            .preserve_aspect_ratio
            .then(|| start.aspect_ratio());

        Self {
            start,
            current: start,
            restricted: start,
            previous: start,
            delta: RectDelta::ZERO,
            active_edges,
            linked_edges,
            start_aspect_ratio,
        }
    }

    /// The policy-corrected rect after the most recent step.
    pub fn restricted(&self) -> Rect {
        self.restricted
    }

    /// The delta produced by the most recent step.
    pub fn delta(&self) -> RectDelta {
        self.delta
    }

    /// The edges this gesture was started with (never the linked set).
    pub fn active_edges(&self) -> EdgeSet {
        self.active_edges
    }

    /// Apply one pointer delta and produce the next restricted rect.
    pub fn step(&mut self, dx: f64, dy: f64, options: &ResizeOptions) -> StepOutcome {
        profile_scope!("engine_step");

        // No edges engaged: pass through untouched. The axis-only mode never
        // reaches the engine; it routes through the session's simpler delta
        // model instead.
        if !self.active_edges.any() {
            return StepOutcome {
                rect: self.restricted,
                delta: RectDelta::ZERO,
                dx,
                dy,
            };
        }

        let (dx, dy) = self.couple_deltas(dx, dy, options);

        // Under a ratio lock the linked set is what actually moves; the
        // coupling above was already decided from the original active set.
        let edges = if options.preserve_aspect_ratio || options.square {
            self.linked_edges.unwrap_or(self.active_edges)
        } else {
            self.active_edges
        };

        // update the current rect without modification; it may invert
        if edges.top {
            self.current.top += dy;
        }
        if edges.bottom {
            self.current.bottom += dy;
        }
        if edges.left {
            self.current.left += dx;
        }
        if edges.right {
            self.current.right += dx;
        }

        match options.invert {
            InvertMode::Negate => {
                self.restricted = self.current;
            }
            InvertMode::Reposition => {
                self.restricted = self.current;

                // swap crossed edge pairs to keep width/height positive
                if self.restricted.top > self.restricted.bottom {
                    std::mem::swap(&mut self.restricted.top, &mut self.restricted.bottom);
                }
                if self.restricted.left > self.restricted.right {
                    std::mem::swap(&mut self.restricted.left, &mut self.restricted.right);
                }
            }
            InvertMode::None => {
                // not invertible: floor each axis at a 0-sized rect against
                // the immutable start rect
                self.restricted.top = self.current.top.min(self.start.bottom);
                self.restricted.bottom = self.current.bottom.max(self.start.top);
                self.restricted.left = self.current.left.min(self.start.right);
                self.restricted.right = self.current.right.max(self.start.left);
            }
        }

        self.restricted.sync_size();

        self.delta = RectDelta::between(&self.previous, &self.restricted);
        // explicit copy, no aliasing with restricted
        self.previous = self.restricted;

        StepOutcome {
            rect: self.restricted,
            delta: self.delta,
            dx,
            dy,
        }
    }

    /// Adjust (dx, dy) for a square or aspect-ratio lock.
    ///
    /// Evaluated against the ORIGINAL active edges, not the linked set: a
    /// diagonal-opposite-corner drag (left+bottom or right+top) inverts the
    /// sign relationship between the axes. `preserve_aspect_ratio` takes
    /// precedence over `square` when both are set.
    fn couple_deltas(&self, dx: f64, dy: f64, options: &ResizeOptions) -> (f64, f64) {
        let edges = self.active_edges;

        if options.preserve_aspect_ratio {
            if let Some(ratio) = self.start_aspect_ratio {
                if (edges.left && edges.bottom) || (edges.right && edges.top) {
                    return (dx, -dx / ratio);
                } else if edges.left || edges.right {
                    return (dx, dx / ratio);
                } else if edges.top || edges.bottom {
                    return (dy * ratio, dy);
                }
            }
        } else if options.square {
            if (edges.left && edges.bottom) || (edges.right && edges.top) {
                return (dx, -dx);
            } else if edges.left || edges.right {
                return (dx, dx);
            } else if edges.top || edges.bottom {
                return (dy, dy);
            }
        }

        (dx, dy)
    }
}
