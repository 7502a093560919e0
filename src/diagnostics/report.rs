use crate::diagnostics::TimingBreakdown;
use crate::objective::{ObjectiveSurface, RegionOfInterest, SurfaceSummary};
use crate::search::SearchGrid;
use crate::types::{HorizonResult, ScoredCandidate};
use serde::Serialize;

/// Result produced by [`HorizonDetector::detect_with_diagnostics`](crate::HorizonDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub result: HorizonResult,
    pub input: InputDescriptor,
    pub coarse: PassTrace,
    pub fine: PassTrace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coarse_summary: Option<SurfaceSummary>,
    /// Two-sigma threshold applied to the coarse surface.
    pub threshold: f64,
    /// Coarse cells above the threshold, angle-major.
    pub retained: Vec<ScoredCandidate>,
    pub region: RegionOfInterest,
    pub coarse_surface: ObjectiveSurface,
    pub fine_surface: ObjectiveSurface,
    pub fine_grid: SearchGrid,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Shape and cost of one grid search pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassTrace {
    pub angles: usize,
    pub distances: usize,
    pub level_width: usize,
    pub level_height: usize,
    pub reduction: f64,
    pub defined: usize,
    pub elapsed_ms: f64,
}

impl PassTrace {
    pub fn from_grid(grid: &SearchGrid, elapsed_ms: f64) -> Self {
        let (angles, distances) = grid.shape();
        let (level_width, level_height) = grid.level_size();
        Self {
            angles,
            distances,
            level_width,
            level_height,
            reduction: grid.reduction(),
            defined: grid.defined_count(),
            elapsed_ms,
        }
    }

    pub fn candidates(&self) -> usize {
        self.angles * self.distances
    }
}
