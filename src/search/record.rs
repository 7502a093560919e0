use crate::error::DegenerateRegion;
use crate::stats::{PartitionSummary, RegionStats, VARIANCE_EPS};
use serde::Serialize;

/// Means of the buffer strip on either side of the line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferMeans {
    pub mean_above: f64,
    pub mean_below: f64,
}

/// Feature set of a candidate whose statistics are defined.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFeatures {
    pub mean_above: f64,
    pub mean_below: f64,
    /// Variance over every pixel of the pass image; strictly positive.
    pub variance: f64,
    pub above_count: usize,
    pub below_count: usize,
    /// `None` when buffer statistics were skipped or one strip side is empty.
    pub buffer: Option<BufferMeans>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CandidateStatus {
    Defined(CandidateFeatures),
    Degenerate { reason: DegenerateRegion },
}

/// One evaluated cell of a [`SearchGrid`](super::SearchGrid).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub angle: i32,
    pub distance: i32,
    #[serde(flatten)]
    pub status: CandidateStatus,
}

impl CandidateRecord {
    /// Turn raw partition statistics into a record, flagging degenerate cells.
    ///
    /// `level` holds the statistics of the whole image the partition was
    /// taken on; its variance is the normaliser shared by every candidate.
    pub fn from_summary(
        angle: i32,
        distance: i32,
        summary: &PartitionSummary,
        level: &RegionStats,
    ) -> Self {
        let status = match (summary.above.finish(), summary.below.finish()) {
            (None, _) => CandidateStatus::Degenerate {
                reason: DegenerateRegion::EmptyAbove,
            },
            (_, None) => CandidateStatus::Degenerate {
                reason: DegenerateRegion::EmptyBelow,
            },
            _ if !(level.mean.is_finite() && level.variance.is_finite()) => {
                CandidateStatus::Degenerate {
                    reason: DegenerateRegion::NonFiniteIntensity,
                }
            }
            _ if level.variance <= VARIANCE_EPS => CandidateStatus::Degenerate {
                reason: DegenerateRegion::ZeroVariance,
            },
            (Some(above), Some(below)) => {
                let buffer = match (summary.buffer_above.finish(), summary.buffer_below.finish()) {
                    (Some(a), Some(b)) => Some(BufferMeans {
                        mean_above: a.mean,
                        mean_below: b.mean,
                    }),
                    _ => None,
                };
                CandidateStatus::Defined(CandidateFeatures {
                    mean_above: above.mean,
                    mean_below: below.mean,
                    variance: level.variance,
                    above_count: above.count,
                    below_count: below.count,
                    buffer,
                })
            }
        };
        Self {
            angle,
            distance,
            status,
        }
    }

    pub fn features(&self) -> Option<&CandidateFeatures> {
        match &self.status {
            CandidateStatus::Defined(f) => Some(f),
            CandidateStatus::Degenerate { .. } => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.features().is_some()
    }
}
