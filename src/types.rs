use crate::geometry::LineEndpoints;
use crate::objective::RegionOfInterest;
use serde::Serialize;

/// A candidate line together with its objective score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub angle: i32,
    pub distance: i32,
    pub score: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonResult {
    /// Winning candidate of the fine pass (local score).
    pub best: ScoredCandidate,
    /// Coarse candidate space the fine pass was restricted to.
    pub region: RegionOfInterest,
    /// Line clipped to the full-resolution image; `None` if it misses it.
    pub endpoints: Option<LineEndpoints>,
    pub width: usize,
    pub height: usize,
    pub latency_ms: f64,
}
