use super::cancel::CancelToken;
use super::grid::SearchGrid;
use super::range::SampleRange;
use super::record::CandidateRecord;
use crate::error::{CancelReason, HorizonError, RangeAxis};
use crate::geometry::{HorizonLine, Partition};
use crate::image::{ImageF32, ImageView};
use crate::resample::{downsample, validate_reduction};
use crate::stats::{image_stats, PartitionSummary, RegionStats};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Candidate grid and sampling knobs for one pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassOptions {
    pub angles: SampleRange,
    pub distances: SampleRange,
    /// Downsampling factor in (0, 1] applied once before the pass.
    pub reduction: f64,
    /// Half-width of the buffer strip, in pixels of the downsampled image.
    pub buffer_half_width: f64,
    pub compute_buffer_stats: bool,
}

impl PassOptions {
    pub fn validate(&self) -> Result<(), HorizonError> {
        self.angles.validate(RangeAxis::Angle)?;
        self.distances.validate(RangeAxis::Distance)?;
        validate_reduction(self.reduction)?;
        if !(self.buffer_half_width.is_finite() && self.buffer_half_width >= 0.0) {
            return Err(HorizonError::InvalidBufferWidth {
                width: self.buffer_half_width,
            });
        }
        Ok(())
    }

    pub fn candidate_count(&self) -> usize {
        self.angles.len() * self.distances.len()
    }
}

/// Controls whether candidates are evaluated sequentially or with Rayon.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelOptions {
    pub enabled: bool,
    pub min_candidates: usize,
}

impl ParallelOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_candidates: usize::MAX,
        }
    }

    /// Returns true when a pass over `candidates` cells should use the pool.
    pub fn should_parallelize(&self, candidates: usize) -> bool {
        self.enabled && candidates >= self.min_candidates.max(1)
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_candidates: 32,
        }
    }
}

/// Execution controls shared by the passes of one detection.
#[derive(Clone, Debug, Default)]
pub struct SearchControl {
    pub parallel: ParallelOptions,
    pub cancel: Option<CancelToken>,
    pub deadline: Option<Instant>,
}

impl SearchControl {
    #[inline]
    fn check(&self) -> Result<(), HorizonError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(HorizonError::Cancelled {
                reason: CancelReason::Requested,
            });
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(HorizonError::Cancelled {
                reason: CancelReason::DeadlineExceeded,
            });
        }
        Ok(())
    }
}

/// Run one pass with default controls (no cancellation, default parallelism).
pub fn run_grid_search(image: &ImageF32, options: &PassOptions) -> Result<SearchGrid, HorizonError> {
    run_grid_search_with(image, options, &SearchControl::default())
}

/// Run one pass: downsample `image` by `options.reduction`, then evaluate the
/// cartesian product of the angle and distance ranges.
pub fn run_grid_search_with(
    image: &ImageF32,
    options: &PassOptions,
    control: &SearchControl,
) -> Result<SearchGrid, HorizonError> {
    options.validate()?;
    if image.is_empty() {
        return Err(HorizonError::EmptyImage {
            width: image.w,
            height: image.h,
        });
    }
    control.check()?;

    let start = Instant::now();
    let level = downsample(image, options.reduction)?;
    let level_stats = image_stats(&level).ok_or(HorizonError::EmptyImage {
        width: level.w,
        height: level.h,
    })?;
    let angles: Vec<i32> = options.angles.values().collect();
    let distances: Vec<i32> = options.distances.values().collect();
    let cells: Vec<(i32, i32)> = angles
        .iter()
        .flat_map(|&a| distances.iter().map(move |&d| (a, d)))
        .collect();
    debug!(
        "grid search start level={}x{} r={} variance={:.4} grid={}x{} buffer_stats={}",
        level.w,
        level.h,
        options.reduction,
        level_stats.variance,
        angles.len(),
        distances.len(),
        options.compute_buffer_stats
    );

    let records = evaluate_cells(&level, &level_stats, &cells, options, control)?;
    let grid = SearchGrid::new(
        angles,
        distances,
        records,
        (level.w, level.h),
        options.reduction,
        options.buffer_half_width,
    );
    debug!(
        "grid search done candidates={} defined={} elapsed_ms={:.3}",
        grid.len(),
        grid.defined_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(grid)
}

fn evaluate_candidate(
    level: &ImageF32,
    level_stats: &RegionStats,
    angle: i32,
    distance: i32,
    options: &PassOptions,
) -> CandidateRecord {
    let line = HorizonLine::new(level.w, level.h, angle as f64, distance as f64);
    let partition = Partition::new(line, options.buffer_half_width);
    let summary = PartitionSummary::collect(level, &partition, options.compute_buffer_stats);
    CandidateRecord::from_summary(angle, distance, &summary, level_stats)
}

fn evaluate_cells(
    level: &ImageF32,
    level_stats: &RegionStats,
    cells: &[(i32, i32)],
    options: &PassOptions,
    control: &SearchControl,
) -> Result<Vec<CandidateRecord>, HorizonError> {
    if control.parallel.should_parallelize(cells.len()) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            // Indexed collect keeps angle-major order regardless of scheduling.
            return cells
                .par_iter()
                .map(|&(a, d)| -> Result<CandidateRecord, HorizonError> {
                    control.check()?;
                    Ok(evaluate_candidate(level, level_stats, a, d, options))
                })
                .collect();
        }
    }

    cells
        .iter()
        .map(|&(a, d)| -> Result<CandidateRecord, HorizonError> {
            control.check()?;
            Ok(evaluate_candidate(level, level_stats, a, d, options))
        })
        .collect()
}
