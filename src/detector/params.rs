//! Parameter types configuring the two search passes.
//!
//! Defaults favour a cheap coarse pass (10% of the image, 5° × 5% steps)
//! followed by a unit-step fine pass on a quarter-resolution image. For
//! tuning, start with the coarse grid step and the region-of-interest
//! margins: a margin smaller than half the coarse step can miss the peak.
use crate::objective::{RegionOfInterest, RoiOptions};
use crate::search::{ParallelOptions, PassOptions, SampleRange};
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonParams {
    pub coarse: CoarseParams,
    pub fine: FineParams,
    pub parallel: ParallelOptions,
    /// Wall-clock budget for one detection, in milliseconds.
    pub timeout_ms: Option<f64>,
}

impl Default for HorizonParams {
    fn default() -> Self {
        Self {
            coarse: CoarseParams::default(),
            fine: FineParams::default(),
            parallel: ParallelOptions::default(),
            timeout_ms: None,
        }
    }
}

/// Coarse (global) pass configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoarseParams {
    pub angles: SampleRange,
    pub distances: SampleRange,
    pub reduction: f64,
    pub buffer_half_width: f64,
    pub compute_buffer_stats: bool,
    pub roi: RoiOptions,
}

impl Default for CoarseParams {
    fn default() -> Self {
        Self {
            angles: SampleRange::new(-45, 46, 5),
            distances: SampleRange::new(0, 101, 5),
            reduction: 0.1,
            buffer_half_width: 2.0,
            compute_buffer_stats: true,
            roi: RoiOptions::default(),
        }
    }
}

impl CoarseParams {
    pub fn pass_options(&self) -> PassOptions {
        PassOptions {
            angles: self.angles,
            distances: self.distances,
            reduction: self.reduction,
            buffer_half_width: self.buffer_half_width,
            compute_buffer_stats: self.compute_buffer_stats,
        }
    }
}

/// Fine (local) pass configuration. Its ranges come from the region of
/// interest, sampled at unit step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineParams {
    /// Downsampling factor of the fine pass.
    ///
    /// The reduced level must stay large enough that a one-degree tilt moves
    /// the line across pixel centres. On tiny levels (a 64×48 input at the
    /// default 0.25 gives 16×12) neighbouring angles split the pixels
    /// identically, their scores tie, and the first angle of the region wins.
    pub reduction: f64,
    pub buffer_half_width: f64,
}

impl Default for FineParams {
    fn default() -> Self {
        Self {
            reduction: 0.25,
            buffer_half_width: 3.0,
        }
    }
}

impl FineParams {
    /// Pass options covering `roi` inclusively. Buffer statistics are always
    /// collected since the local score reads nothing else.
    pub fn pass_options(&self, roi: &RegionOfInterest) -> PassOptions {
        PassOptions {
            angles: roi.angle_range(),
            distances: roi.distance_range(),
            reduction: self.reduction,
            buffer_half_width: self.buffer_half_width,
            compute_buffer_stats: true,
        }
    }
}
