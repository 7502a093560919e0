//! Orchestrator chaining the coarse and fine passes.
//!
//! Overview
//! - Coarse pass: [`run_grid_search_with`](crate::search::run_grid_search_with)
//!   over a wide, stepped grid on a strongly reduced image, scored with the
//!   global objective.
//! - Region of interest: bounding box of the cells above the two-sigma
//!   threshold, padded by small margins. No region aborts the detection.
//! - Fine pass: unit-step search over that region on a finer image, scored
//!   with the local buffer-contrast objective; the argmax is the horizon.
//!
//! No grid or record survives from one pass to the next except the region
//! of interest. Candidates `(θ, d)` are resolution independent, so the fine
//! winner applies to the full-resolution image as is.
pub mod params;
mod pipeline;

pub use params::{CoarseParams, FineParams, HorizonParams};
pub use pipeline::{detect_horizon, HorizonDetector};
