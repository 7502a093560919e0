//! Objective Scorers turning a [`SearchGrid`](crate::search::SearchGrid) into
//! a scalar surface.
//!
//! - [`compute_global_score`]: coarse signal-to-noise score
//!   `max(μ_above − μ_below, 0) / σ²` and the two-sigma region of interest.
//! - [`compute_local_score`]: buffer contrast `(μ_buf_above − μ_buf_below)² / σ²`
//!   and the winning candidate.
//!
//! Degenerate cells score `None` and never enter a mean, deviation, or argmax.
mod global;
mod local;
mod roi;
mod surface;

pub use global::{compute_global_score, global_score, GlobalObjective};
pub use local::{compute_local_score, local_score, LocalObjective};
pub use roi::{RegionOfInterest, RoiOptions, ANGLE_LIMITS, DISTANCE_LIMITS};
pub use surface::{ObjectiveSurface, SurfaceSummary};
