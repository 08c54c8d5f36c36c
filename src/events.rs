//! Outward-facing event payloads.
//!
//! Sessions hand these back as plain return values; there is no process-wide
//! named-event bus. Hosts route them to their own listeners however they like.

use serde::{Deserialize, Serialize};

use crate::types::{Axis, EdgeSet, Rect, RectDelta};

/// Which part of a gesture an event describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePhase {
    Start,
    Move,
    End,
}

/// What a gesture resizes: an explicit edge set, or the degenerate
/// axis-only mode from the fallback probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAction {
    Edges(EdgeSet),
    Axes(Axis),
}

impl ResizeAction {
    pub fn edges(&self) -> Option<EdgeSet> {
        match self {
            ResizeAction::Edges(e) => Some(*e),
            ResizeAction::Axes(_) => None,
        }
    }

    pub fn axes(&self) -> Option<Axis> {
        match self {
            ResizeAction::Axes(a) => Some(*a),
            ResizeAction::Edges(_) => None,
        }
    }
}

/// One emitted resize event.
///
/// `rect`/`delta_rect` are present in edge mode only; the axis fallback mode
/// carries deltas but no rectangle. `dx`/`dy` are the pointer deltas after
/// any square/aspect adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub phase: ResizePhase,
    pub action: ResizeAction,
    pub dx: f64,
    pub dy: f64,
    pub rect: Option<Rect>,
    pub delta_rect: Option<RectDelta>,
}
