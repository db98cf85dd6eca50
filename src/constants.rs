//! Global constants for the splat engine.
//!
//! This module centralizes the numeric bounds and defaults shared by the
//! view, painter, segmentation, and capture modules.

/// Zoom limits and step factors for the image view.
pub mod zoom {
    /// Smallest permitted zoom scale.
    pub const MIN: f32 = 0.5;
    /// Largest permitted zoom scale.
    pub const MAX: f32 = 5.0;
    /// Multiplier applied per zoom-in step.
    pub const IN_FACTOR: f32 = 1.1;
    /// Multiplier applied per zoom-out step.
    pub const OUT_FACTOR: f32 = 0.9;
}

/// Flood-fill defaults.
pub mod fill {
    /// Default per-channel tolerance against the seed color.
    pub const DEFAULT_TOLERANCE: u8 = 20;
}

/// Segmentation bounds and defaults.
pub mod cluster {
    /// Default cluster count offered to the user.
    pub const DEFAULT_K: usize = 4;
    /// Upper bound on the cluster count, imposed by the clustering
    /// backend's u8 cluster indices.
    pub const MAX_K: usize = 255;
    /// Iteration cap for a single k-means run. RGB-space runs converge
    /// slower than Lab, so the cap is generous.
    pub const MAX_ITERATIONS: usize = 40;
    /// Convergence threshold passed to the clustering backend, scaled for
    /// sRGB component ranges of 0.0..=1.0.
    pub const CONVERGENCE: f32 = 0.0025;
    /// Base RNG seed, so repeated runs produce identical clusterings.
    pub const SEED: u64 = 0;
    /// Number of seeded restarts; the lowest-score run wins.
    pub const RUNS: u64 = 3;
}

/// Polygon capture limits.
pub mod lasso {
    /// Minimum number of vertices for an outline that can enclose an
    /// interior point.
    pub const MIN_VERTICES: usize = 3;
}
