//! Cursor-style lookup by edge/axis combination.
//!
//! A process-wide, init-once table the core never mutates. The names are the
//! standard CSS cursor keywords so hosts can apply them directly.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::events::ResizeAction;
use crate::types::Axis;

static CURSORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("x", "ew-resize"),
        ("y", "ns-resize"),
        ("xy", "nwse-resize"),
        ("top", "ns-resize"),
        ("left", "ew-resize"),
        ("bottom", "ns-resize"),
        ("right", "ew-resize"),
        ("topleft", "nwse-resize"),
        ("bottomright", "nwse-resize"),
        ("topright", "nesw-resize"),
        ("bottomleft", "nesw-resize"),
    ])
});

/// Look up the cursor keyword for a detected action.
///
/// Returns `None` for an empty edge set (nothing to resize, nothing to show).
pub fn cursor_for(action: &ResizeAction) -> Option<&'static str> {
    let key = match action {
        ResizeAction::Axes(Axis::X) => "x".to_string(),
        ResizeAction::Axes(Axis::Y) => "y".to_string(),
        ResizeAction::Axes(Axis::Xy) => "xy".to_string(),
        ResizeAction::Edges(edges) => {
            let mut key = String::new();
            // key order matters: the table is keyed top/bottom before left/right
            for (name, active) in [
                ("top", edges.top),
                ("bottom", edges.bottom),
                ("left", edges.left),
                ("right", edges.right),
            ] {
                if active {
                    key.push_str(name);
                }
            }
            key
        }
    };

    CURSORS.get(key.as_str()).copied()
}
