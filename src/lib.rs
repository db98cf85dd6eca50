//! SPLAT - Segment, Paint & Label Annotation Tool
//!
//! Engine crate for interactive segmentation and labeling of raster
//! images: k-means color reduction, tolerance-bounded flood-fill painting,
//! lasso label capture with pan/zoom coordinate mapping, and a linear undo
//! history. The crate is presentation-free; a GUI front end drives it with
//! pointer events and [`Message`] commands.

pub mod annotation;
pub mod category;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod history;
pub mod loader;
pub mod message;
pub mod painter;
pub mod segmentation;
pub mod session;
pub mod view;

pub use annotation::{Label, PendingPolygon};
pub use category::Category;
pub use config::{AppConfig, LogLevel, init_logging};
pub use error::SessionError;
pub use handlers::{Controller, InteractionMode};
pub use message::Message;
pub use session::{FinalizeOutcome, LabelPrompt, Session, UndoOutcome};
pub use view::ViewState;
