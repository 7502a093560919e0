use super::surface::ObjectiveSurface;
use crate::error::HorizonError;
use crate::search::{CandidateFeatures, SearchGrid};
use crate::types::ScoredCandidate;
use log::debug;

/// Fine score: squared buffer contrast normalised by the pooled variance.
///
/// `None` when the record carries no buffer statistics.
#[inline]
pub fn local_score(f: &CandidateFeatures) -> Option<f64> {
    let b = f.buffer?;
    let contrast = b.mean_above - b.mean_below;
    Some(contrast * contrast / f.variance)
}

/// Local objective surface of a fine pass and its winner.
#[derive(Clone, Debug)]
pub struct LocalObjective {
    pub surface: ObjectiveSurface,
    pub best: ScoredCandidate,
}

/// Score every cell of `grid` with [`local_score`] and pick the maximum.
///
/// Ties resolve to the first cell in angle-major, then distance order.
pub fn compute_local_score(grid: &SearchGrid) -> Result<LocalObjective, HorizonError> {
    let surface = ObjectiveSurface::from_grid(grid, local_score);
    let best = surface.argmax().ok_or(HorizonError::NoValidCandidate {
        candidates: grid.len(),
    })?;
    debug!(
        "local score defined={} best angle={} distance={} score={:.6}",
        surface.defined_count(),
        best.angle,
        best.distance,
        best.score
    );
    Ok(LocalObjective { surface, best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;
    use crate::search::{run_grid_search, BufferMeans, PassOptions, SampleRange};

    #[test]
    fn sign_of_contrast_does_not_matter() {
        let mut f = CandidateFeatures {
            mean_above: 0.0,
            mean_below: 0.0,
            variance: 4.0,
            above_count: 1,
            below_count: 1,
            buffer: Some(BufferMeans {
                mean_above: 10.0,
                mean_below: 6.0,
            }),
        };
        assert_eq!(local_score(&f), Some(4.0));
        f.buffer = Some(BufferMeans {
            mean_above: 6.0,
            mean_below: 10.0,
        });
        assert_eq!(local_score(&f), Some(4.0));
        f.buffer = None;
        assert_eq!(local_score(&f), None);
    }

    #[test]
    fn grid_without_buffer_means_has_no_local_winner() {
        let img = ImageF32::from_fn(30, 20, |_, y| if y < 10 { 200.0 } else { 50.0 });
        let opts = PassOptions {
            angles: SampleRange::new(-5, 6, 5),
            distances: SampleRange::new(40, 61, 10),
            reduction: 1.0,
            buffer_half_width: 2.0,
            compute_buffer_stats: false,
        };
        let grid = run_grid_search(&img, &opts).unwrap();
        assert!(grid.defined_count() > 0);
        let err = compute_local_score(&grid).unwrap_err();
        assert_eq!(err, HorizonError::NoValidCandidate { candidates: 9 });
    }
}
