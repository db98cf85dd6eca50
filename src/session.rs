//! Editable session state and its operations.
//!
//! The session owns everything one image-editing workflow can touch — the
//! three raster buffers, the label list, the pending polygon, the undo
//! history, and the view state — and has no dependency on any presentation
//! toolkit, so the whole editing model is directly unit-testable.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::annotation::{Label, PendingPolygon, interior_point};
use crate::constants::fill;
use crate::error::SessionError;
use crate::history::{HistoryStack, Snapshot};
use crate::loader;
use crate::painter;
use crate::segmentation;
use crate::view::ViewState;

/// Collaborator that asks the user for label text.
///
/// Returning `None` means the prompt was dismissed; an empty or
/// whitespace-only answer is treated the same way.
pub trait LabelPrompt {
    /// Show `message` and collect a line of text from the user.
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Outcome of a finalize attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// No capture in progress or no points accumulated; nothing to do.
    NothingToFinalize,
    /// The prompt was cancelled or answered with an empty string. The
    /// capture stays active so the user can extend the outline or retry.
    PromptCancelled,
    /// A label was placed at the given image-space anchor.
    Labeled { anchor: (i32, i32) },
}

/// Outcome of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The history stack was empty; state is unchanged.
    NothingToUndo,
    /// The most recent snapshot was restored.
    Restored,
}

/// The complete in-memory editable state of one image-editing workflow.
pub struct Session {
    /// Source pixels, never mutated after load.
    original: RgbImage,
    /// Result of the most recent clustering pass; starts as a copy of
    /// `original`.
    segmented: RgbImage,
    /// The buffer flood fills mutate; reset to a copy of `segmented`
    /// whenever segmentation re-runs.
    painted: RgbImage,
    labels: Vec<Label>,
    pending: PendingPolygon,
    history: HistoryStack,
    /// Live pan/zoom state; every coordinate mapping reads it fresh.
    pub view: ViewState,
    fill_tolerance: u8,
}

impl Session {
    /// Build a session around an already-decoded raster.
    pub fn new(original: RgbImage) -> Self {
        let segmented = original.clone();
        let painted = segmented.clone();
        Self {
            original,
            segmented,
            painted,
            labels: Vec::new(),
            pending: PendingPolygon::new(),
            history: HistoryStack::new(),
            view: ViewState::default(),
            fill_tolerance: fill::DEFAULT_TOLERANCE,
        }
    }

    /// Load the image at `path` and build a session around it. A load
    /// failure is fatal before any editing state exists.
    pub fn from_path(path: &Path) -> Result<Self, SessionError> {
        Ok(Self::new(loader::load_from_path(path)?))
    }

    /// Override the per-channel flood-fill tolerance.
    pub fn with_fill_tolerance(mut self, tolerance: u8) -> Self {
        self.fill_tolerance = tolerance;
        self
    }

    // ---- accessors ----------------------------------------------------------

    /// Raster dimensions shared by all three buffers.
    pub fn dimensions(&self) -> (u32, u32) {
        self.original.dimensions()
    }

    pub fn original(&self) -> &RgbImage {
        &self.original
    }

    pub fn segmented(&self) -> &RgbImage {
        &self.segmented
    }

    /// The buffer the render layer displays.
    pub fn painted(&self) -> &RgbImage {
        &self.painted
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn pending(&self) -> &PendingPolygon {
        &self.pending
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    // ---- mutating operations ------------------------------------------------

    /// Re-run color segmentation over the source image.
    ///
    /// Replaces `segmented` and resets `painted` to match, discarding any
    /// unsaved fills; the snapshot taken first makes that reversible. An
    /// invalid cluster count leaves both state and history untouched.
    pub fn run_segmentation(&mut self, k: usize) -> Result<(), SessionError> {
        let segmented = segmentation::segment(&self.original, k)?;
        self.snapshot();
        self.segmented = segmented;
        self.painted = self.segmented.clone();
        Ok(())
    }

    /// Flood-fill the painted buffer at a screen position, mapping through
    /// the live view state first.
    pub fn paint_at_screen(&mut self, screen_x: f32, screen_y: f32, color: Rgb<u8>) -> bool {
        let (image_x, image_y) = self.view.to_image_space(screen_x, screen_y);
        self.paint_at(image_x, image_y, color)
    }

    /// Flood-fill the painted buffer at an image-space seed.
    ///
    /// Seeds outside the raster are silently ignored (no fill, no
    /// snapshot); returns whether a fill happened.
    pub fn paint_at(&mut self, image_x: i32, image_y: i32, color: Rgb<u8>) -> bool {
        let (width, height) = self.painted.dimensions();
        if image_x < 0 || image_y < 0 || image_x >= width as i32 || image_y >= height as i32 {
            log::debug!(
                "Paint seed ({}, {}) outside {}x{} raster, ignored",
                image_x,
                image_y,
                width,
                height
            );
            return false;
        }
        self.snapshot();
        painter::flood_fill(
            &mut self.painted,
            image_x as u32,
            image_y as u32,
            color,
            self.fill_tolerance,
        );
        true
    }

    /// Route a lasso click: the first starts a capture, later ones extend
    /// the outline.
    pub fn lasso_click(&mut self, screen_x: f32, screen_y: f32) {
        if self.pending.is_active() {
            self.pending.push((screen_x, screen_y));
            log::debug!(
                "✏️ Added lasso point ({:.1}, {:.1}), total: {}",
                screen_x,
                screen_y,
                self.pending.len()
            );
        } else {
            self.pending.start((screen_x, screen_y));
            log::debug!("✏️ Started lasso at ({:.1}, {:.1})", screen_x, screen_y);
        }
    }

    /// Finalize the pending polygon into a label.
    ///
    /// The outline is validated before the user is prompted, so nobody is
    /// asked to name a shape that cannot be labeled. On success the anchor
    /// is the polygon's interior point converted to image space through the
    /// live view state.
    pub fn finish_polygon(
        &mut self,
        prompt: &mut dyn LabelPrompt,
    ) -> Result<FinalizeOutcome, SessionError> {
        if !self.pending.is_active() || self.pending.is_empty() {
            return Ok(FinalizeOutcome::NothingToFinalize);
        }

        let inside = interior_point(&self.pending.points)?;

        let text = match prompt.prompt("Label for the enclosed area") {
            Some(answer) if !answer.trim().is_empty() => answer.trim().to_string(),
            _ => {
                log::debug!("Label prompt cancelled; capture stays active");
                return Ok(FinalizeOutcome::PromptCancelled);
            }
        };

        let anchor = self.view.to_image_space(inside.0, inside.1);
        self.snapshot();
        log::info!("🏷️ Placed label {:?} at {:?}", text, anchor);
        self.labels.push(Label::new(text, anchor));
        self.pending.cancel();
        Ok(FinalizeOutcome::Labeled { anchor })
    }

    /// Undo the most recent mutating action.
    ///
    /// Restores the painted buffer, the label list, and the pending points
    /// atomically. Any in-progress capture is forced inactive: the restored
    /// points are data, and the render layer only previews active captures.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(snapshot) = self.history.pop() else {
            log::debug!("Nothing to undo");
            return UndoOutcome::NothingToUndo;
        };
        self.painted = snapshot.painted;
        self.labels = snapshot.labels;
        self.pending.points = snapshot.pending_points;
        self.pending.deactivate();
        UndoOutcome::Restored
    }

    fn snapshot(&mut self) {
        self.history.push(Snapshot {
            painted: self.painted.clone(),
            labels: self.labels.clone(),
            pending_points: self.pending.points.clone(),
        });
    }
}
