//! Error types shared by the search, scoring, and orchestration stages.
//!
//! Phase-level failures surface as [`HorizonError`]. Single bad candidates are
//! not errors: they are recorded in the grid as [`DegenerateRegion`] and
//! skipped by every aggregate.
use serde::Serialize;

/// Which axis of candidate space a range belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeAxis {
    Angle,
    Distance,
}

impl std::fmt::Display for RangeAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeAxis::Angle => f.write_str("angle"),
            RangeAxis::Distance => f.write_str("distance"),
        }
    }
}

/// Why a pass stopped before visiting every candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CancelReason {
    Requested,
    DeadlineExceeded,
}

/// Reason a single candidate carries no usable statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DegenerateRegion {
    /// No pixel lies strictly above the line.
    EmptyAbove,
    /// No pixel lies below or on the line.
    EmptyBelow,
    /// The pass image is flat, so its variance is zero.
    ZeroVariance,
    /// The image holds NaN or infinite intensities.
    NonFiniteIntensity,
}

/// Failures reported by the detector stages.
#[derive(Clone, Debug, PartialEq)]
pub enum HorizonError {
    InvalidRange {
        axis: RangeAxis,
        start: i32,
        stop: i32,
        step: i32,
    },
    InvalidReduction {
        factor: f64,
    },
    InvalidBufferWidth {
        width: f64,
    },
    EmptyImage {
        width: usize,
        height: usize,
    },
    NoRegionOfInterest {
        defined: usize,
        threshold: Option<f64>,
    },
    NoValidCandidate {
        candidates: usize,
    },
    Cancelled {
        reason: CancelReason,
    },
}

impl std::fmt::Display for HorizonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HorizonError::InvalidRange {
                axis,
                start,
                stop,
                step,
            } => write!(
                f,
                "invalid {axis} range (start={start}, stop={stop}, step={step})"
            ),
            HorizonError::InvalidReduction { factor } => {
                write!(f, "reduction factor {factor} outside (0, 1]")
            }
            HorizonError::InvalidBufferWidth { width } => {
                write!(f, "buffer half-width {width} must be finite and non-negative")
            }
            HorizonError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({width}x{height})")
            }
            HorizonError::NoRegionOfInterest { defined, threshold } => match threshold {
                Some(t) => write!(
                    f,
                    "no region of interest: no candidate above threshold {t:.6} ({defined} defined)"
                ),
                None => write!(f, "no region of interest: no defined candidates"),
            },
            HorizonError::NoValidCandidate { candidates } => {
                write!(f, "none of {candidates} candidates produced a defined score")
            }
            HorizonError::Cancelled { reason } => match reason {
                CancelReason::Requested => f.write_str("search cancelled"),
                CancelReason::DeadlineExceeded => f.write_str("search deadline exceeded"),
            },
        }
    }
}

impl std::error::Error for HorizonError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_axis_and_triple() {
        let err = HorizonError::InvalidRange {
            axis: RangeAxis::Distance,
            start: 10,
            stop: 0,
            step: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid distance range (start=10, stop=0, step=5)"
        );
    }

    #[test]
    fn buffer_width_error_names_the_value() {
        let err = HorizonError::InvalidBufferWidth { width: -1.0 };
        assert_eq!(
            err.to_string(),
            "buffer half-width -1 must be finite and non-negative"
        );
    }

    #[test]
    fn no_region_without_threshold_reads_cleanly() {
        let err = HorizonError::NoRegionOfInterest {
            defined: 0,
            threshold: None,
        };
        assert!(err.to_string().contains("no defined candidates"));
    }
}
