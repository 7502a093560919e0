//! Two-pass horizon detection.
//!
//! The [`HorizonDetector`] runs a coarse grid search on a heavily reduced
//! image, keeps the two-sigma peak of the global score as a region of
//! interest, then searches that region at unit step on a finer image and
//! returns the local-score winner.
//!
//! Typical usage:
//! ```no_run
//! use horizon_detector::{HorizonDetector, HorizonParams};
//! use horizon_detector::image::ImageU8;
//!
//! # fn example(gray: ImageU8) -> Result<(), horizon_detector::HorizonError> {
//! let detector = HorizonDetector::new(HorizonParams::default());
//! let result = detector.detect(gray)?;
//! println!("angle={} distance={}", result.best.angle, result.best.distance);
//! # Ok(())
//! # }
//! ```
use super::params::{CoarseParams, FineParams, HorizonParams};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{DetectionReport, InputDescriptor, PassTrace, StageTiming, TimingBreakdown};
use crate::error::HorizonError;
use crate::geometry::{line_endpoints, EndpointMode};
use crate::image::{ImageF32, ImageU8};
use crate::objective::{compute_global_score, compute_local_score};
use crate::search::{run_grid_search_with, CancelToken, PassOptions, SearchControl, SearchGrid};
use crate::types::{HorizonResult, ScoredCandidate};
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Horizon detector orchestrating the coarse and fine passes.
#[derive(Clone, Debug, Default)]
pub struct HorizonDetector {
    params: HorizonParams,
    cancel: Option<CancelToken>,
}

impl HorizonDetector {
    pub fn new(params: HorizonParams) -> Self {
        Self {
            params,
            cancel: None,
        }
    }

    /// Attach a token that aborts the running detection when cancelled.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn params(&self) -> &HorizonParams {
        &self.params
    }

    /// Run both passes on an 8-bit image and return the compact result.
    pub fn detect(&self, gray: ImageU8) -> Result<HorizonResult, HorizonError> {
        self.detect_with_diagnostics(gray).map(|r| r.result)
    }

    /// Run both passes and return the result with surfaces and timings.
    pub fn detect_with_diagnostics(&self, gray: ImageU8) -> Result<DetectionReport, HorizonError> {
        let total_start = Instant::now();
        let convert_start = Instant::now();
        let image = ImageF32::from_u8(&gray);
        let convert_ms = elapsed_ms(convert_start);
        let mut report = self.run(&image, total_start)?;
        report
            .timings
            .stages
            .insert(0, StageTiming::new("convert", convert_ms));
        Ok(report)
    }

    pub fn detect_f32(&self, image: &ImageF32) -> Result<HorizonResult, HorizonError> {
        self.detect_f32_with_diagnostics(image).map(|r| r.result)
    }

    pub fn detect_f32_with_diagnostics(&self, image: &ImageF32) -> Result<DetectionReport, HorizonError> {
        self.run(image, Instant::now())
    }

    fn control(&self, start: Instant) -> SearchControl {
        let deadline = match self.params.timeout_ms {
            Some(ms) if ms.is_finite() && ms >= 0.0 => Duration::try_from_secs_f64(ms / 1000.0)
                .ok()
                .and_then(|budget| start.checked_add(budget)),
            Some(ms) => {
                warn!("ignoring invalid timeout_ms={ms}");
                None
            }
            None => None,
        };
        SearchControl {
            parallel: self.params.parallel,
            cancel: self.cancel.clone(),
            deadline,
        }
    }

    fn run(&self, image: &ImageF32, total_start: Instant) -> Result<DetectionReport, HorizonError> {
        let (width, height) = (image.w, image.h);
        debug!("HorizonDetector::detect start w={width} h={height}");
        let control = self.control(total_start);
        let mut timings = TimingBreakdown::default();

        let coarse_opts = self.params.coarse.pass_options();
        let (coarse_grid, coarse_ms) = timed_pass(image, &coarse_opts, &control, "coarse")?;
        timings.push("coarse_search", coarse_ms);

        let global_start = Instant::now();
        let global = compute_global_score(&coarse_grid);
        let roi_opts = &self.params.coarse.roi;
        let region = global.region_of_interest(roi_opts)?;
        let threshold = global.threshold(roi_opts.sigma_multiplier).unwrap_or(f64::NAN);
        let retained = global.retained(roi_opts.sigma_multiplier);
        timings.push_since("global_score", global_start);
        debug!(
            "coarse threshold={threshold:.6} retained={} fine candidates={}",
            retained.len(),
            region.candidate_count()
        );

        let fine_opts = self.params.fine.pass_options(&region);
        let (fine_grid, fine_ms) = timed_pass(image, &fine_opts, &control, "fine")?;
        timings.push("fine_search", fine_ms);

        let local_start = Instant::now();
        let local = compute_local_score(&fine_grid)?;
        timings.push_since("local_score", local_start);

        let best = local.best;
        let endpoints = line_endpoints(
            width,
            height,
            best.angle as f64,
            best.distance as f64,
            EndpointMode::Clipped,
        );
        let latency_ms = elapsed_ms(total_start);
        timings.total_ms = latency_ms;
        debug!(
            "HorizonDetector::detect done angle={} distance={} score={:.6} latency_ms={latency_ms:.3}",
            best.angle, best.distance, best.score
        );

        Ok(DetectionReport {
            result: HorizonResult {
                best,
                region,
                endpoints,
                width,
                height,
                latency_ms,
            },
            input: InputDescriptor { width, height },
            coarse: PassTrace::from_grid(&coarse_grid, coarse_ms),
            fine: PassTrace::from_grid(&fine_grid, fine_ms),
            coarse_summary: global.summary,
            threshold,
            retained,
            region,
            coarse_surface: global.surface,
            fine_surface: local.surface,
            fine_grid,
            timings,
        })
    }
}

fn timed_pass(
    image: &ImageF32,
    options: &PassOptions,
    control: &SearchControl,
    label: &str,
) -> Result<(SearchGrid, f64), HorizonError> {
    let start = Instant::now();
    match run_grid_search_with(image, options, control) {
        Ok(grid) => Ok((grid, elapsed_ms(start))),
        Err(err @ HorizonError::Cancelled { .. }) => {
            warn!("{label} pass aborted: {err}");
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Detect the horizon in `image` with explicit pass configurations.
///
/// Uses default parallelism and no deadline. Returns the fine-pass winner.
pub fn detect_horizon(
    image: &ImageF32,
    coarse: &CoarseParams,
    fine: &FineParams,
) -> Result<ScoredCandidate, HorizonError> {
    let detector = HorizonDetector::new(HorizonParams {
        coarse: coarse.clone(),
        fine: fine.clone(),
        ..Default::default()
    });
    detector.detect_f32(image).map(|r| r.best)
}
