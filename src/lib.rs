//! Resize-gesture core for pointer-interaction libraries.
//!
//! Given a stream of pointer events over a rectangular target, this crate
//! decides which edges of the target are being dragged, applies each pointer
//! delta to produce a consistent rectangle under the configured constraints
//! (free resize, square, aspect-ratio lock, edge-inversion policy), and
//! packages the results into start/move/end event payloads.
//!
//! ## Architecture
//!
//! The crate is a pure state machine: it owns no event loop and touches no
//! real DOM. Hosts feed it pointer coordinates and per-move deltas, and
//! implement [`DomQuery`](input::DomQuery) when edge handles are specified
//! by selector or element reference.
//!
//! - [`input::edges`] - edge detection at gesture start
//! - [`input::link`] - linked-edge derivation for square/aspect modes
//! - [`input::engine`] - the rect-update/invert/clamp state machine
//! - [`input::session`] - per-gesture orchestration and event packaging
//! - [`input::recognizer`] - multi-gesture coordination with concurrency limits
//! - [`cursor`] - static cursor-style lookup by edge/axis combination

pub mod constants;
pub mod cursor;
pub mod error;
pub mod events;
pub mod input;
pub mod options;
pub mod perf;
pub mod types;

pub use error::{OptionsError, OptionsResult};
pub use events::{ResizeAction, ResizeEvent, ResizePhase};
pub use input::{
    DomQuery, RectEngine, ResizeRecognizer, ResizeSession, StepOutcome, derive_linked_edges,
    detect,
};
pub use options::{EdgeRule, EdgeRules, ResizeOptions};
pub use types::{Axis, EdgeSet, ElementId, InvertMode, Point, PointerId, Rect, RectDelta};
