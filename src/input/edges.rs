//! Edge detection at gesture start.
//!
//! Detection runs exactly once per gesture, against the pointer's starting
//! page position. It never re-evaluates mid-gesture; a gesture keeps the
//! edges it started with.

use tracing::trace;

use crate::events::ResizeAction;
use crate::options::{EdgeRule, EdgeRules, ResizeOptions};
use crate::types::{Axis, EdgeSet, ElementId, Point, Rect};

/// Host-side DOM queries for handle-based edge rules.
///
/// The core has no DOM; when an edge is specified by selector or element
/// reference, the host answers these questions about the originating event's
/// target. Selector matching is expected to walk the ancestor chain up to
/// (and including) the interactable element.
pub trait DomQuery {
    /// True when the originating event has a target element at all.
    fn has_target(&self) -> bool;

    /// True when the event target is exactly the given element.
    fn target_is(&self, handle: ElementId) -> bool;

    /// True when the event target or one of its bounded ancestors matches
    /// the selector.
    fn target_matches_up_to(&self, selector: &str) -> bool;
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Decide what (if anything) a gesture starting at `pointer` resizes.
///
/// With explicit edge rules each edge is tested independently and the result
/// is an [`EdgeSet`] with `left`/`right` and `top`/`bottom` made mutually
/// exclusive. Without rules, the fallback probe checks the right/bottom
/// margin zones subject to the axis constraint and yields the degenerate
/// axis-only mode. Returns `None` when resizing is disabled, the rect is
/// missing, or nothing is engaged.
pub fn detect(
    pointer: Point,
    rect: Option<&Rect>,
    options: &ResizeOptions,
    dom: Option<&dyn DomQuery>,
) -> Option<ResizeAction> {
    let rect = rect?;

    if !options.enabled {
        return None;
    }

    let margin = options.effective_margin();

    if let Some(rules) = &options.edges {
        let action = detect_edges(pointer, rect, margin, rules, dom);
        trace!(?action, "edge detection");
        return action;
    }

    // Fallback: no edge spec, probe the right/bottom zones per the axis
    // constraint. This is the degenerate single-axis mode with no linking
    // and no invert handling.
    let right = options.axis.allows_x() && pointer.x > rect.right - margin;
    let bottom = options.axis.allows_y() && pointer.y > rect.bottom - margin;

    let action = match (right, bottom) {
        (true, true) => Some(ResizeAction::Axes(Axis::Xy)),
        (true, false) => Some(ResizeAction::Axes(Axis::X)),
        (false, true) => Some(ResizeAction::Axes(Axis::Y)),
        (false, false) => None,
    };
    trace!(?action, "axis fallback detection");
    action
}

fn detect_edges(
    pointer: Point,
    rect: &Rect,
    margin: f64,
    rules: &EdgeRules,
    dom: Option<&dyn DomQuery>,
) -> Option<ResizeAction> {
    let mut edges = EdgeSet {
        top: check_edge(Edge::Top, &rules.top, pointer, rect, margin, dom),
        bottom: check_edge(Edge::Bottom, &rules.bottom, pointer, rect, margin, dom),
        left: check_edge(Edge::Left, &rules.left, pointer, rect, margin, dom),
        right: check_edge(Edge::Right, &rules.right, pointer, rect, margin, dom),
    };

    // a single probe must never engage both edges of one axis
    edges.left = edges.left && !edges.right;
    edges.top = edges.top && !edges.bottom;

    edges.any().then_some(ResizeAction::Edges(edges))
}

fn check_edge(
    edge: Edge,
    rule: &EdgeRule,
    pointer: Point,
    rect: &Rect,
    margin: f64,
    dom: Option<&dyn DomQuery>,
) -> bool {
    match rule {
        EdgeRule::Never => false,
        EdgeRule::Zone => check_zone(edge, pointer, rect, margin),
        // handle rules need a DOM target to test against
        EdgeRule::Handle(handle) => match dom {
            Some(dom) if dom.has_target() => dom.target_is(*handle),
            _ => false,
        },
        EdgeRule::Selector(selector) => match dom {
            Some(dom) if dom.has_target() => dom.target_matches_up_to(selector),
            _ => false,
        },
    }
}

/// Pointer-within-margin test for one edge, with edge identity swapped when
/// the rect's computed size is negative: a "left" test against a rect whose
/// width is negative actually tests the right coordinate.
fn check_zone(edge: Edge, pointer: Point, rect: &Rect, margin: f64) -> bool {
    let width = rect.width;
    let height = rect.height;

    let edge = match edge {
        Edge::Left if width < 0.0 => Edge::Right,
        Edge::Right if width < 0.0 => Edge::Left,
        Edge::Top if height < 0.0 => Edge::Bottom,
        Edge::Bottom if height < 0.0 => Edge::Top,
        other => other,
    };

    match edge {
        Edge::Left => {
            let x = if width >= 0.0 { rect.left } else { rect.right };
            pointer.x < x + margin
        }
        Edge::Top => {
            let y = if height >= 0.0 { rect.top } else { rect.bottom };
            pointer.y < y + margin
        }
        Edge::Right => {
            let x = if width >= 0.0 { rect.right } else { rect.left };
            pointer.x > x - margin
        }
        Edge::Bottom => {
            let y = if height >= 0.0 { rect.bottom } else { rect.top };
            pointer.y > y - margin
        }
    }
}
