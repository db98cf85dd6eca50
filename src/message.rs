//! Command surface for the interaction layer.
//!
//! Every action a front end can trigger is represented as a message; each
//! variant maps 1:1 onto a session or controller operation.

use crate::handlers::InteractionMode;

/// Commands a front end can issue against the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Re-run color segmentation with the given cluster count.
    Segment(usize),
    /// Zoom one step in.
    ZoomIn,
    /// Zoom one step out.
    ZoomOut,
    /// Switch the pointer interaction mode.
    SetMode(InteractionMode),
    /// Select the paint category by name.
    SetCategory(String),
    /// Finalize the pending lasso polygon into a label.
    FinishPolygon,
    /// Undo the most recent mutating action.
    Undo,
}
