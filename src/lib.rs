#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage-level modules, public for tools and experiments.
pub mod angle;
pub mod config;
pub mod geometry;
pub mod objective;
pub mod resample;
pub mod search;
pub mod stats;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect_horizon, CoarseParams, FineParams, HorizonDetector, HorizonParams};
pub use crate::error::{DegenerateRegion, HorizonError};
pub use crate::types::{HorizonResult, ScoredCandidate};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::DetectionReport;

// Core stage entry points.
pub use crate::geometry::{line_endpoints, EndpointMode};
pub use crate::objective::{compute_global_score, compute_local_score};
pub use crate::search::{run_grid_search, SampleRange, SearchGrid};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use horizon_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8::packed(w, h, &gray);
///
/// let det = HorizonDetector::new(HorizonParams::default());
/// if let Ok(res) = det.detect(img) {
///     println!("angle={} latency_ms={:.3}", res.best.angle, res.latency_ms);
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{HorizonDetector, HorizonError, HorizonParams, HorizonResult};
}
