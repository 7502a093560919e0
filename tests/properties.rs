mod common;

use common::init_logger;
use common::synthetic_image::{gradient, split_f32, tilted_split, uniform};
use horizon_detector::error::{CancelReason, RangeAxis};
use horizon_detector::geometry::{HorizonLine, Partition, Side, ON_LINE_EPS};
use horizon_detector::objective::{compute_global_score, RoiOptions};
use horizon_detector::resample::downsample;
use horizon_detector::search::{
    run_grid_search, run_grid_search_with, CancelToken, ParallelOptions, PassOptions, SampleRange,
    SearchControl,
};
use horizon_detector::stats::PartitionSummary;
use horizon_detector::{HorizonDetector, HorizonError, HorizonParams};

fn coarse_pass(reduction: f64) -> PassOptions {
    PassOptions {
        angles: SampleRange::new(-45, 46, 5),
        distances: SampleRange::new(0, 101, 5),
        reduction,
        buffer_half_width: 2.0,
        compute_buffer_stats: true,
    }
}

#[test]
fn identical_inputs_give_identical_grids_and_winner() {
    init_logger();
    let img = tilted_split(120, 90, -12.0, 57.0);
    let opts = coarse_pass(0.25);
    let a = run_grid_search(&img, &opts).unwrap();
    let b = run_grid_search(&img, &opts).unwrap();
    assert_eq!(a, b);

    let det = HorizonDetector::new(HorizonParams::default());
    let first = det.detect_f32(&img).unwrap();
    let second = det.detect_f32(&img).unwrap();
    assert_eq!(first.best, second.best);
    assert_eq!(first.region, second.region);
}

#[test]
fn parallel_evaluation_matches_sequential() {
    let img = tilted_split(96, 72, 18.0, 41.0);
    let opts = coarse_pass(0.5);
    let seq = run_grid_search_with(
        &img,
        &opts,
        &SearchControl {
            parallel: ParallelOptions::disabled(),
            ..Default::default()
        },
    )
    .unwrap();
    let par = run_grid_search_with(
        &img,
        &opts,
        &SearchControl {
            parallel: ParallelOptions {
                enabled: true,
                min_candidates: 1,
            },
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn halfplanes_are_disjoint_and_cover_the_image() {
    let (w, h) = (37usize, 23usize);
    for angle in [-90, -63, -45, -8, 0, 30, 45, 77, 90] {
        for distance in [0, 13, 50, 71, 100] {
            let line = HorizonLine::new(w, h, angle as f64, distance as f64);
            let part = Partition::new(line, 1.5);
            let masks = part.masks();
            for i in 0..w * h {
                assert!(masks.above[i] != masks.below[i], "({angle}, {distance}) pixel {i}");
                let (x, y) = (i % w, i / w);
                if line.pixel_signed_distance(x, y).abs() <= ON_LINE_EPS {
                    assert_eq!(part.classify(x, y).side, Side::Below, "({angle}, {distance}) pixel {i}");
                }
            }
            assert_eq!(masks.above_count() + masks.below_count(), w * h);
        }
    }
}

#[test]
fn global_scores_are_never_negative() {
    // Dark sky over bright ground drives every raw contrast negative somewhere.
    let img = gradient(80, 60);
    let grid = run_grid_search(&img, &coarse_pass(0.5)).unwrap();
    let global = compute_global_score(&grid);
    assert!(global.surface.defined_count() > 0);
    for cell in global.surface.defined() {
        assert!(cell.score >= 0.0, "negative score at {cell:?}");
        assert!(cell.score.is_finite());
    }
}

#[test]
fn uniform_image_has_no_region_of_interest() {
    init_logger();
    let img = uniform(100, 80, 128.0);
    let grid = run_grid_search(&img, &coarse_pass(0.2)).unwrap();
    assert_eq!(grid.defined_count(), 0);
    let global = compute_global_score(&grid);
    assert!(global.best().is_none());
    assert_eq!(
        global.region_of_interest(&RoiOptions::default()),
        Err(HorizonError::NoRegionOfInterest {
            defined: 0,
            threshold: None
        })
    );

    let err = HorizonDetector::new(HorizonParams::default())
        .detect_f32(&img)
        .unwrap_err();
    assert!(matches!(err, HorizonError::NoRegionOfInterest { .. }));
}

#[test]
fn downsampled_means_stay_close_on_smooth_images() {
    let full = gradient(200, 100);
    let reduced = downsample(&full, 0.1).unwrap();
    assert_eq!((reduced.w, reduced.h), (20, 10));
    for (angle, distance) in [(0.0, 50.0), (10.0, 40.0), (-25.0, 65.0), (40.0, 30.0)] {
        let stats_at = |img: &horizon_detector::image::ImageF32| {
            let part = Partition::new(HorizonLine::new(img.w, img.h, angle, distance), 2.0);
            let s = PartitionSummary::collect(img, &part, false);
            (
                s.above.finish().unwrap().mean,
                s.below.finish().unwrap().mean,
            )
        };
        let (a_full, b_full) = stats_at(&full);
        let (a_red, b_red) = stats_at(&reduced);
        assert!((a_full - a_red).abs() <= 5.0, "above ({angle}, {distance}): {a_full} vs {a_red}");
        assert!((b_full - b_red).abs() <= 5.0, "below ({angle}, {distance}): {b_full} vs {b_red}");
    }
}

#[test]
fn invalid_ranges_propagate_from_the_detector() {
    let img = split_f32(40, 20);
    let mut params = HorizonParams::default();
    params.coarse.distances = SampleRange::new(0, 100, -5);
    let err = HorizonDetector::new(params).detect_f32(&img).unwrap_err();
    assert_eq!(
        err,
        HorizonError::InvalidRange {
            axis: RangeAxis::Distance,
            start: 0,
            stop: 100,
            step: -5
        }
    );

    let mut params = HorizonParams::default();
    params.coarse.reduction = 0.0;
    let err = HorizonDetector::new(params).detect_f32(&img).unwrap_err();
    assert_eq!(err, HorizonError::InvalidReduction { factor: 0.0 });
}

#[test]
fn cancellation_aborts_without_partial_result() {
    let token = CancelToken::new();
    let det = HorizonDetector::new(HorizonParams::default()).with_cancel_token(token.clone());
    token.cancel();
    let err = det.detect_f32(&split_f32(200, 100)).unwrap_err();
    assert_eq!(
        err,
        HorizonError::Cancelled {
            reason: CancelReason::Requested
        }
    );
}
