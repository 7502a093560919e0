//! Diagnostics returned alongside a detection.
//!
//! `DetectionReport` bundles the compact [`HorizonResult`](crate::types::HorizonResult)
//! with per-pass traces, both objective surfaces, and the fine search grid so
//! external tools can plot the surfaces or overlay the line.
pub mod report;
pub mod timing;

pub use report::{DetectionReport, InputDescriptor, PassTrace};
pub use timing::{StageTiming, TimingBreakdown};
