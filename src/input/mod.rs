//! The resize state machine.
//!
//! This module implements the whole gesture pipeline: which edges a pointer
//! engages at gesture start, how a locked ratio links extra edges in, and how
//! each pointer delta becomes a consistent rectangle.
//!
//! ## Data flow
//!
//! ```text
//! pointer down -> edges::detect      (once, at gesture start)
//!              -> ResizeSession::begin
//! pointer move -> ResizeSession::pointer_move -> RectEngine::step
//! pointer up   -> ResizeSession::end
//! ```
//!
//! ## Modules
//!
//! - `edges` - edge detection from the start position (plus axis fallback)
//! - `link` - linked-edge derivation for square/aspect-locked resizing
//! - `engine` - the rect-update/invert/clamp state machine
//! - `session` - per-gesture orchestration and event packaging
//! - `recognizer` - multi-gesture coordination and concurrency limits

pub mod edges;
pub mod engine;
pub mod link;
pub mod recognizer;
pub mod session;

pub use edges::{DomQuery, detect};
pub use engine::{RectEngine, StepOutcome};
pub use link::derive_linked_edges;
pub use recognizer::ResizeRecognizer;
pub use session::ResizeSession;
