use super::roi::{RegionOfInterest, RoiOptions};
use super::surface::{ObjectiveSurface, SurfaceSummary};
use crate::error::HorizonError;
use crate::search::{CandidateFeatures, SearchGrid};
use crate::types::ScoredCandidate;
use log::{debug, warn};

/// Coarse score: brighter-above contrast normalised by the pooled variance.
#[inline]
pub fn global_score(f: &CandidateFeatures) -> f64 {
    (f.mean_above - f.mean_below).max(0.0) / f.variance
}

/// Global objective surface of a coarse pass.
#[derive(Clone, Debug)]
pub struct GlobalObjective {
    pub surface: ObjectiveSurface,
    pub summary: Option<SurfaceSummary>,
}

/// Score every cell of `grid` with [`global_score`].
pub fn compute_global_score(grid: &SearchGrid) -> GlobalObjective {
    let surface = ObjectiveSurface::from_grid(grid, |f| Some(global_score(f)));
    let summary = surface.summary();
    if let Some(s) = &summary {
        debug!(
            "global score defined={} mean={:.6} std={:.6} max={:.6}",
            s.defined, s.mean, s.std_dev, s.max
        );
    }
    GlobalObjective { surface, summary }
}

impl GlobalObjective {
    /// `mean + sigma_multiplier · std_dev` over the defined cells.
    pub fn threshold(&self, sigma_multiplier: f64) -> Option<f64> {
        self.summary
            .map(|s| s.mean + sigma_multiplier * s.std_dev)
    }

    /// Cells scoring strictly above the threshold, angle-major.
    pub fn retained(&self, sigma_multiplier: f64) -> Vec<ScoredCandidate> {
        match self.threshold(sigma_multiplier) {
            Some(t) => self.surface.defined().filter(|c| c.score > t).collect(),
            None => Vec::new(),
        }
    }

    pub fn best(&self) -> Option<ScoredCandidate> {
        self.surface.argmax()
    }

    /// Bounding box of the retained cells grown by the configured margins.
    ///
    /// Fails with [`HorizonError::NoRegionOfInterest`] when nothing clears
    /// the threshold, which includes flat and fully degenerate surfaces.
    pub fn region_of_interest(&self, options: &RoiOptions) -> Result<RegionOfInterest, HorizonError> {
        let threshold = self.threshold(options.sigma_multiplier);
        let retained = self.retained(options.sigma_multiplier);
        let roi = RegionOfInterest::bounding(retained.iter().map(|c| (c.angle, c.distance)));
        match roi {
            Some(r) => {
                let r = r.expanded(options.angle_margin, options.distance_margin);
                debug!(
                    "region of interest retained={} angles={}..={} distances={}..={}",
                    retained.len(),
                    r.angle_min,
                    r.angle_max,
                    r.distance_min,
                    r.distance_max
                );
                Ok(r)
            }
            None => {
                let defined = self.surface.defined_count();
                warn!("no region of interest: defined={defined} threshold={threshold:?}");
                Err(HorizonError::NoRegionOfInterest { defined, threshold })
            }
        }
    }
}
