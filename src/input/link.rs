//! Linked-edge derivation for square and aspect-locked resizing.
//!
//! Resizing one edge under a locked ratio must move an orthogonal edge too.
//! E.g. with a square lock, growing the right edge must grow the bottom edge
//! by the same amount. The derived set adds "which single extra edge becomes
//! active" for each single/double-edge start configuration; a corner drag
//! (two adjacent edges) already has both axes engaged and links nothing new.

use crate::types::EdgeSet;

/// Derive the linked edge set from the active edges.
///
/// Computed once at gesture start and held immutable for the gesture. Every
/// rule reads the ORIGINAL set, not progressively mutated state, so this is
/// a pure function of the snapshot.
pub fn derive_linked_edges(active: EdgeSet) -> EdgeSet {
    EdgeSet {
        top: active.top || (active.left && !active.bottom),
        left: active.left || (active.top && !active.right),
        bottom: active.bottom || (active.right && !active.top),
        right: active.right || (active.bottom && !active.left),
    }
}
