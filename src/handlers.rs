//! Pointer and command dispatch for the interaction layer.
//!
//! Translates raw pointer events and [`Message`] commands into session
//! operations, keeping the session itself free of any toolkit types. The
//! controller owns only transient input state: the active mode, the
//! selected paint category, and the pan-drag anchor.

use image::Rgb;

use crate::category::{Category, default_categories};
use crate::error::SessionError;
use crate::message::Message;
use crate::session::{LabelPrompt, Session};

/// Mutually exclusive pointer interaction modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Pan the view by dragging.
    Drag,
    /// Flood-fill the region under the pointer.
    #[default]
    Paint,
    /// Capture a freehand polygon outline point by point.
    Lasso,
}

impl InteractionMode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            InteractionMode::Drag => "Drag",
            InteractionMode::Paint => "Paint",
            InteractionMode::Lasso => "Lasso",
        }
    }

    /// Get all available modes.
    pub fn all() -> &'static [InteractionMode] {
        &[
            InteractionMode::Drag,
            InteractionMode::Paint,
            InteractionMode::Lasso,
        ]
    }
}

/// Transient state for the pan drag.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether the view is currently being dragged
    is_dragging: bool,
    /// Last pointer position for calculating the delta
    last_pos: Option<(f32, f32)>,
}

impl DragState {
    /// Record the press position as the pan anchor.
    pub fn start(&mut self, pos: (f32, f32)) {
        self.is_dragging = true;
        self.last_pos = Some(pos);
    }

    /// Advance the anchor to `pos` and return the delta since the last
    /// motion event. Deltas re-anchor continuously; they are never measured
    /// against the original press.
    pub fn update(&mut self, pos: (f32, f32)) -> Option<(f32, f32)> {
        if self.is_dragging {
            if let Some(last) = self.last_pos {
                let delta = (pos.0 - last.0, pos.1 - last.1);
                self.last_pos = Some(pos);
                return Some(delta);
            }
        }
        None
    }

    /// Clear the pan anchor.
    pub fn end(&mut self) {
        self.is_dragging = false;
        self.last_pos = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}

/// Dispatches pointer events and commands to a session.
#[derive(Debug, Clone)]
pub struct Controller {
    /// The active pointer mode.
    pub mode: InteractionMode,
    categories: Vec<Category>,
    selected_category: usize,
    drag: DragState,
}

impl Controller {
    /// Create a controller with the default palette; "Urban" starts
    /// selected, matching the tool's traditional default.
    pub fn new() -> Self {
        let categories = default_categories();
        let selected_category = categories
            .iter()
            .position(|c| c.name == "Urban")
            .unwrap_or(0);
        Self {
            mode: InteractionMode::default(),
            categories,
            selected_category,
            drag: DragState::default(),
        }
    }

    /// Create a controller with a custom palette. Falls back to the default
    /// palette when `categories` is empty.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        if categories.is_empty() {
            return Self::new();
        }
        Self {
            mode: InteractionMode::default(),
            categories,
            selected_category: 0,
            drag: DragState::default(),
        }
    }

    /// The palette available for painting.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The category fills are painted with.
    pub fn selected_category(&self) -> &Category {
        &self.categories[self.selected_category]
    }

    /// Select a category by name; returns false when no such category
    /// exists (selection unchanged).
    pub fn select_category(&mut self, name: &str) -> bool {
        match self.categories.iter().position(|c| c.name == name) {
            Some(index) => {
                self.selected_category = index;
                log::debug!("🏷️ Category: {}", name);
                true
            }
            None => false,
        }
    }

    /// Pointer press at a screen position.
    pub fn on_press(&mut self, session: &mut Session, x: f32, y: f32) {
        match self.mode {
            InteractionMode::Lasso => session.lasso_click(x, y),
            InteractionMode::Paint => {
                let color = Rgb(self.selected_category().color);
                session.paint_at_screen(x, y, color);
            }
            InteractionMode::Drag => self.drag.start((x, y)),
        }
    }

    /// Pointer motion with the button held. Only the drag mode reacts,
    /// panning by the delta since the previous motion event.
    pub fn on_motion(&mut self, session: &mut Session, x: f32, y: f32) {
        if self.mode != InteractionMode::Drag {
            return;
        }
        if let Some((dx, dy)) = self.drag.update((x, y)) {
            session.view = session.view.pan_by(dx.round() as i32, dy.round() as i32);
        }
    }

    /// Pointer release: clears the pan anchor.
    pub fn on_release(&mut self) {
        self.drag.end();
    }

    /// Apply a command from the surface layer.
    pub fn handle_message(
        &mut self,
        session: &mut Session,
        prompt: &mut dyn LabelPrompt,
        message: Message,
    ) -> Result<(), SessionError> {
        match message {
            Message::Segment(k) => session.run_segmentation(k)?,
            Message::ZoomIn => {
                session.view = session.view.zoom_in();
                log::debug!("🔍 Zoom in: {:.2}x", session.view.scale);
            }
            Message::ZoomOut => {
                session.view = session.view.zoom_out();
                log::debug!("🔍 Zoom out: {:.2}x", session.view.scale);
            }
            Message::SetMode(mode) => {
                self.mode = mode;
                log::debug!("🖌️ Mode: {}", mode.name());
            }
            Message::SetCategory(name) => {
                if !self.select_category(&name) {
                    log::warn!("Unknown category {:?}, selection unchanged", name);
                }
            }
            Message::FinishPolygon => {
                session.finish_polygon(prompt)?;
            }
            Message::Undo => {
                session.undo();
            }
        }
        Ok(())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
