//! Multi-gesture coordination.
//!
//! `ResizeRecognizer` maps each pointer to at most one live session and
//! enforces the configured concurrency limits: `max` total sessions and
//! `max_per_element` sessions per target. Moves of one session are always
//! processed to completion before the next is accepted; sessions never share
//! mutable state, so unrelated gestures interleave freely.

use std::collections::HashMap;

use tracing::debug;

use crate::events::ResizeEvent;
use crate::input::edges::{DomQuery, detect};
use crate::input::session::ResizeSession;
use crate::options::ResizeOptions;
use crate::types::{ElementId, Point, PointerId, Rect};

struct ActiveSession {
    target: ElementId,
    session: ResizeSession,
}

/// Tracks concurrent resize gestures, one per pointer.
#[derive(Default)]
pub struct ResizeRecognizer {
    sessions: HashMap<PointerId, ActiveSession>,
}

impl ResizeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of live sessions on the given target.
    pub fn active_count_for(&self, target: ElementId) -> usize {
        self.sessions.values().filter(|s| s.target == target).count()
    }

    /// True when this pointer has a gesture in flight.
    pub fn is_resizing(&self, pointer: PointerId) -> bool {
        self.sessions.contains_key(&pointer)
    }

    /// Attempt to start a gesture for `pointer` over `target`.
    ///
    /// Runs edge detection against the start position, honors the
    /// concurrency limits, and returns the start event when a session was
    /// created. A missing rect, disabled options, no engaged edges, an
    /// exhausted limit, or a pointer that is already resizing all yield
    /// `None` with no session created.
    pub fn try_start(
        &mut self,
        pointer: PointerId,
        target: ElementId,
        position: Point,
        rect: Option<Rect>,
        options: &ResizeOptions,
        dom: Option<&dyn DomQuery>,
    ) -> Option<ResizeEvent> {
        if self.sessions.contains_key(&pointer) {
            return None;
        }

        if let Some(max) = options.max {
            if self.active_count() >= max {
                debug!(max, "resize refused: session limit reached");
                return None;
            }
        }
        if self.active_count_for(target) >= options.max_per_element {
            debug!(
                ?target,
                max_per_element = options.max_per_element,
                "resize refused: per-element limit reached"
            );
            return None;
        }

        let action = detect(position, rect.as_ref(), options, dom)?;
        let (session, event) = ResizeSession::begin(action, rect, options)?;

        self.sessions.insert(pointer, ActiveSession { target, session });
        Some(event)
    }

    /// Apply a pointer move to this pointer's session, if any.
    pub fn pointer_move(
        &mut self,
        pointer: PointerId,
        dx: f64,
        dy: f64,
        options: &ResizeOptions,
    ) -> Option<ResizeEvent> {
        let active = self.sessions.get_mut(&pointer)?;
        Some(active.session.pointer_move(dx, dy, options))
    }

    /// Finish this pointer's gesture and emit the end event.
    pub fn end(&mut self, pointer: PointerId) -> Option<ResizeEvent> {
        let active = self.sessions.remove(&pointer)?;
        Some(active.session.end())
    }

    /// Abort this pointer's gesture without emitting anything.
    pub fn cancel(&mut self, pointer: PointerId) {
        if self.sessions.remove(&pointer).is_some() {
            debug!(?pointer, "resize session cancelled");
        }
    }
}
