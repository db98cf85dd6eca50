//! Linear undo history over the editable session state.
//!
//! Before every mutating action the session pushes a deep-copied snapshot;
//! undo pops the most recent one and restores all of its fields atomically.

use image::RgbImage;

use crate::annotation::Label;

/// Deep copy of everything a mutating action can touch.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The painted raster buffer.
    pub painted: RgbImage,
    /// The label list.
    pub labels: Vec<Label>,
    /// Screen-space points of the pending polygon, if any.
    pub pending_points: Vec<(f32, f32)>,
}

/// LIFO stack of snapshots.
///
/// Depth is bounded only by memory; there is no eviction and no redo.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    snapshots: Vec<Snapshot>,
}

impl HistoryStack {
    /// Create a new empty history stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot taken just before a mutating action.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
        log::debug!("📝 History: pushed snapshot #{}", self.snapshots.len());
    }

    /// Pop the most recent snapshot, or `None` when there is nothing to
    /// undo (a benign condition, not an error).
    pub fn pop(&mut self) -> Option<Snapshot> {
        let snapshot = self.snapshots.pop();
        if snapshot.is_some() {
            log::debug!("⏪ History: popped, {} remaining", self.snapshots.len());
        }
        snapshot
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Number of snapshots on the stack.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
