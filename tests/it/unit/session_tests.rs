//! Unit tests for per-gesture orchestration.

use resizekit::{
    Axis, Rect, RectDelta, ResizeAction, ResizeOptions, ResizePhase, ResizeSession,
};

use crate::helpers::{GestureBuilder, edges, start_rect};

#[test]
fn start_event_carries_initial_rect_and_zero_delta() {
    let (_, event, _) = GestureBuilder::new()
        .with_edges(edges(false, true, false, true))
        .session();

    assert_eq!(event.phase, ResizePhase::Start);
    assert_eq!(event.rect, Some(start_rect()));
    assert_eq!(event.delta_rect, Some(RectDelta::ZERO));
    assert_eq!(event.dx, 0.0);
    assert_eq!(event.dy, 0.0);
}

#[test]
fn edge_mode_without_rect_starts_nothing() {
    let action = ResizeAction::Edges(edges(false, true, false, true));
    assert!(ResizeSession::begin(action, None, &ResizeOptions::new()).is_none());
}

#[test]
fn axis_mode_needs_no_rect_and_carries_none() {
    let options = ResizeOptions::new();
    let (mut session, start) =
        ResizeSession::begin(ResizeAction::Axes(Axis::X), None, &options).unwrap();

    assert_eq!(start.rect, None);
    assert_eq!(start.delta_rect, None);

    let event = session.pointer_move(7.0, 3.0, &options);
    assert_eq!(event.phase, ResizePhase::Move);
    assert_eq!(event.rect, None);
}

#[test]
fn axis_mode_zeroes_the_suppressed_axis() {
    let options = ResizeOptions::new();

    let (mut x_session, _) =
        ResizeSession::begin(ResizeAction::Axes(Axis::X), None, &options).unwrap();
    let event = x_session.pointer_move(7.0, 3.0, &options);
    assert_eq!((event.dx, event.dy), (7.0, 0.0));
    assert_eq!(event.action, ResizeAction::Axes(Axis::X));

    let (mut y_session, _) =
        ResizeSession::begin(ResizeAction::Axes(Axis::Y), None, &options).unwrap();
    let event = y_session.pointer_move(7.0, 3.0, &options);
    assert_eq!((event.dx, event.dy), (0.0, 3.0));

    let (mut xy_session, _) =
        ResizeSession::begin(ResizeAction::Axes(Axis::Xy), None, &options).unwrap();
    let event = xy_session.pointer_move(7.0, 3.0, &options);
    assert_eq!((event.dx, event.dy), (7.0, 3.0));
}

#[test]
fn axis_mode_square_couples_both_axes() {
    let options = ResizeOptions::new().square(true);

    let (mut x_session, _) =
        ResizeSession::begin(ResizeAction::Axes(Axis::X), None, &options).unwrap();
    let event = x_session.pointer_move(7.0, 3.0, &options);
    assert_eq!((event.dx, event.dy), (7.0, 7.0));
    assert_eq!(event.action, ResizeAction::Axes(Axis::Xy));

    let (mut y_session, _) =
        ResizeSession::begin(ResizeAction::Axes(Axis::Y), None, &options).unwrap();
    let event = y_session.pointer_move(7.0, 3.0, &options);
    assert_eq!((event.dx, event.dy), (3.0, 3.0));
    assert_eq!(event.action, ResizeAction::Axes(Axis::Xy));
}

#[test]
fn move_events_report_original_edges_not_linked() {
    let active = edges(false, false, false, true);
    let (mut session, _, options) = GestureBuilder::new()
        .with_edges(active)
        .with_square()
        .session();

    let event = session.pointer_move(20.0, 0.0, &options);

    // the linked bottom edge moves the rect, but the event reports the
    // edges the gesture started with
    assert_eq!(event.action, ResizeAction::Edges(active));
    assert_eq!(event.rect, Some(Rect::new(0.0, 0.0, 120.0, 70.0)));
}

#[test]
fn end_event_mutates_nothing() {
    let (mut session, _, options) = GestureBuilder::new()
        .with_edges(edges(false, true, false, true))
        .session();

    let last_move = session.pointer_move(20.0, 10.0, &options);
    let end = session.end();

    assert_eq!(end.phase, ResizePhase::End);
    assert_eq!(end.rect, None);
    assert_eq!(end.delta_rect, None);

    // a session is inert after end until dropped; stepping again would be a
    // host bug, but the engine state was not disturbed by end()
    assert_eq!(last_move.rect, Some(Rect::new(0.0, 0.0, 120.0, 60.0)));
}
