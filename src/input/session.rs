//! Per-gesture orchestration.
//!
//! A `ResizeSession` owns its state for exactly one gesture: created at
//! gesture start, stepped on every pointer move, discarded at gesture end.
//! Sessions for different targets are fully independent; aborting a gesture
//! is just dropping its session, no cleanup required.

use tracing::{debug, trace};

use crate::events::{ResizeAction, ResizeEvent, ResizePhase};
use crate::input::engine::RectEngine;
use crate::options::ResizeOptions;
use crate::profile_scope;
use crate::types::{Axis, Rect};

/// One in-flight resize gesture.
#[derive(Clone, Debug)]
pub struct ResizeSession {
    action: ResizeAction,
    // present in edge mode only; the axis fallback carries no rect
    engine: Option<RectEngine>,
}

impl ResizeSession {
    /// Start a gesture from a detected action.
    ///
    /// Edge mode needs a start rect; with none available no session is
    /// created and the gesture silently produces no resize events. The start
    /// event carries the initial restricted rect and a zero delta in edge
    /// mode, and no rect at all in axis mode.
    pub fn begin(
        action: ResizeAction,
        start_rect: Option<Rect>,
        options: &ResizeOptions,
    ) -> Option<(Self, ResizeEvent)> {
        let engine = match action {
            ResizeAction::Edges(edges) => {
                let rect = start_rect?;
                Some(RectEngine::new(rect, edges, options))
            }
            ResizeAction::Axes(_) => None,
        };

        debug!(?action, "resize session started");

        let event = ResizeEvent {
            phase: ResizePhase::Start,
            action,
            dx: 0.0,
            dy: 0.0,
            rect: engine.as_ref().map(|e| e.restricted()),
            delta_rect: engine.as_ref().map(|e| e.delta()),
        };

        Some((Self { action, engine }, event))
    }

    /// The action this session was started with.
    pub fn action(&self) -> ResizeAction {
        self.action
    }

    /// Apply one pointer move and produce the move event.
    pub fn pointer_move(&mut self, dx: f64, dy: f64, options: &ResizeOptions) -> ResizeEvent {
        profile_scope!("session_pointer_move");

        match (&mut self.engine, self.action) {
            (Some(engine), _) => {
                let outcome = engine.step(dx, dy, options);
                trace!(
                    dx = outcome.dx,
                    dy = outcome.dy,
                    width = outcome.rect.width,
                    height = outcome.rect.height,
                    "resize step"
                );

                ResizeEvent {
                    phase: ResizePhase::Move,
                    // events report the edges the gesture started with, not
                    // the linked set
                    action: self.action,
                    dx: outcome.dx,
                    dy: outcome.dy,
                    rect: Some(outcome.rect),
                    delta_rect: Some(outcome.delta),
                }
            }
            (None, ResizeAction::Axes(axes)) => {
                let (axes, dx, dy) = couple_axis_deltas(axes, dx, dy, options);

                ResizeEvent {
                    phase: ResizePhase::Move,
                    action: ResizeAction::Axes(axes),
                    dx,
                    dy,
                    rect: None,
                    delta_rect: None,
                }
            }
            // unreachable by construction: edge actions always carry an engine
            (None, ResizeAction::Edges(_)) => ResizeEvent {
                phase: ResizePhase::Move,
                action: self.action,
                dx,
                dy,
                rect: None,
                delta_rect: None,
            },
        }
    }

    /// Produce the end event. No further rect mutation happens; the caller
    /// drops the session afterwards.
    pub fn end(&self) -> ResizeEvent {
        debug!(action = ?self.action, "resize session ended");

        ResizeEvent {
            phase: ResizePhase::End,
            action: self.action,
            dx: 0.0,
            dy: 0.0,
            rect: None,
            delta_rect: None,
        }
    }
}

/// Delta coupling for the axis-only mode.
///
/// A square lock forces both axes to move together (the reported axes become
/// `xy`); otherwise the suppressed axis's delta is zeroed.
fn couple_axis_deltas(axes: Axis, dx: f64, dy: f64, options: &ResizeOptions) -> (Axis, f64, f64) {
    if options.square {
        let (dx, dy) = match axes {
            Axis::Y => (dy, dy),
            _ => (dx, dx),
        };
        (Axis::Xy, dx, dy)
    } else {
        match axes {
            Axis::X => (Axis::X, dx, 0.0),
            Axis::Y => (Axis::Y, 0.0, dy),
            Axis::Xy => (Axis::Xy, dx, dy),
        }
    }
}
