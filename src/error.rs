//! Error types for session operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by session operations.
///
/// Benign conditions (an empty undo stack, an out-of-bounds paint seed, a
/// finalize with nothing captured) are expressed through return values on
/// the operations themselves, not through this enum.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The source image could not be read or decoded.
    #[error("failed to load image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An in-memory image buffer could not be decoded.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Cluster count outside the supported range.
    #[error("cluster count must be between 1 and {max}, got {requested}")]
    InvalidClusterCount { requested: usize, max: usize },

    /// Too few captured points to form a polygon with an interior.
    #[error("polygon needs at least {min} points, got {actual}")]
    DegeneratePolygon { actual: usize, min: usize },

    /// The geometry backend could not produce an interior point for the
    /// captured outline.
    #[error("could not compute an interior point for the captured polygon")]
    NoInteriorPoint,
}
