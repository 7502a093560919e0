//! Intensity statistics over candidate partitions.
//!
//! Means and variances use Welford's running update in `f64` so flat regions
//! produce an exact zero variance, and partial results merge with Chan's
//! formula. An empty region yields `None` rather than a numeric zero.
//!
//! The score normaliser is the variance of the whole (downsampled) image:
//! the halfplanes always cover every pixel, so their pooled variance is the
//! same for every candidate of a pass and is taken once by [`image_stats`].
use crate::geometry::{Partition, Region, Side};
use crate::image::{ImageF32, ImageView};

/// Variances at or below this value are treated as zero.
pub const VARIANCE_EPS: f64 = 1e-9;

/// Mean and population variance of a non-empty pixel set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionStats {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
}

/// Streaming mean/variance accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Combine two accumulators as if all samples had been pushed into one.
    pub fn merge(&self, other: &RunningStats) -> RunningStats {
        if self.count == 0 {
            return *other;
        }
        if other.count == 0 {
            return *self;
        }
        let count = self.count + other.count;
        let delta = other.mean - self.mean;
        let w = other.count as f64 / count as f64;
        RunningStats {
            count,
            mean: self.mean + delta * w,
            m2: self.m2 + other.m2 + delta * delta * self.count as f64 * w,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Final statistics, or `None` when nothing was pushed.
    ///
    /// A NaN sample leaves both mean and variance NaN.
    pub fn finish(&self) -> Option<RegionStats> {
        (self.count > 0).then(|| {
            let variance = self.m2 / self.count as f64;
            RegionStats {
                count: self.count,
                mean: self.mean,
                // Rounding can leave m2 a hair below zero; `f64::max` would also eat NaN.
                variance: if variance < 0.0 { 0.0 } else { variance },
            }
        })
    }
}

/// Mean and variance of `image` over one region of `partition`.
///
/// The partition must have been built for the image's dimensions.
pub fn region_stats(image: &ImageF32, partition: &Partition, region: Region) -> Option<RegionStats> {
    debug_assert_eq!(partition.line().width(), image.w);
    debug_assert_eq!(partition.line().height(), image.h);
    let mut acc = RunningStats::default();
    for (y, row) in image.rows().enumerate() {
        for (&px, class) in row.iter().zip(partition.classify_row(y)) {
            if region.contains(class) {
                acc.push(px as f64);
            }
        }
    }
    acc.finish()
}

/// Mean and variance over every pixel of `image`; `None` when it is empty.
pub fn image_stats(image: &ImageF32) -> Option<RegionStats> {
    let mut acc = RunningStats::default();
    for row in image.rows() {
        for &px in row {
            acc.push(px as f64);
        }
    }
    acc.finish()
}

/// Every per-candidate statistic, gathered in one sweep over the image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartitionSummary {
    pub above: RunningStats,
    pub below: RunningStats,
    pub buffer_above: RunningStats,
    pub buffer_below: RunningStats,
}

impl PartitionSummary {
    /// Accumulate halfplane statistics, and buffer statistics when
    /// `with_buffer` is set.
    pub fn collect(image: &ImageF32, partition: &Partition, with_buffer: bool) -> Self {
        debug_assert_eq!(partition.line().width(), image.w);
        debug_assert_eq!(partition.line().height(), image.h);
        let mut summary = PartitionSummary::default();
        for (y, row) in image.rows().enumerate() {
            for (&px, class) in row.iter().zip(partition.classify_row(y)) {
                let v = px as f64;
                match class.side {
                    Side::Above => {
                        summary.above.push(v);
                        if with_buffer && class.in_buffer {
                            summary.buffer_above.push(v);
                        }
                    }
                    Side::Below => {
                        summary.below.push(v);
                        if with_buffer && class.in_buffer {
                            summary.buffer_below.push(v);
                        }
                    }
                }
            }
        }
        summary
    }

    /// Statistics over both halfplanes together.
    pub fn pooled(&self) -> Option<RegionStats> {
        self.above.merge(&self.below).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HorizonLine;

    fn split_image(w: usize, h: usize) -> ImageF32 {
        ImageF32::from_fn(w, h, |_, y| if y < h / 2 { 200.0 } else { 50.0 })
    }

    #[test]
    fn running_stats_match_closed_form() {
        let mut acc = RunningStats::default();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            acc.push(v);
        }
        let s = acc.finish().unwrap();
        assert_eq!(s.count, 8);
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.variance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn merge_equals_single_stream() {
        let values = [1.0, 3.5, -2.0, 8.0, 0.25, 4.0, 4.0];
        let mut all = RunningStats::default();
        let mut left = RunningStats::default();
        let mut right = RunningStats::default();
        for (i, &v) in values.iter().enumerate() {
            all.push(v);
            if i < 3 {
                left.push(v);
            } else {
                right.push(v);
            }
        }
        let merged = left.merge(&right).finish().unwrap();
        let direct = all.finish().unwrap();
        assert!((merged.mean - direct.mean).abs() < 1e-12);
        assert!((merged.variance - direct.variance).abs() < 1e-12);
    }

    #[test]
    fn empty_region_is_undefined() {
        assert!(RunningStats::default().finish().is_none());
        let img = split_image(10, 10);
        let part = Partition::new(HorizonLine::new(10, 10, 0.0, 0.0), 1.0);
        assert!(region_stats(&img, &part, Region::Above).is_none());
    }

    #[test]
    fn flat_image_has_exact_zero_variance() {
        let img = ImageF32::from_fn(9, 7, |_, _| 123.0);
        let part = Partition::new(HorizonLine::new(9, 7, 12.0, 40.0), 1.0);
        let pooled = PartitionSummary::collect(&img, &part, false).pooled().unwrap();
        assert_eq!(pooled.variance, 0.0);
        assert_eq!(image_stats(&img).unwrap().variance, 0.0);
    }

    #[test]
    fn summary_agrees_with_region_stats() {
        let img = ImageF32::from_fn(23, 19, |x, y| ((x * 31 + y * 17) % 41) as f32);
        let part = Partition::new(HorizonLine::new(23, 19, -28.0, 57.0), 2.5);
        let summary = PartitionSummary::collect(&img, &part, true);
        let pairs = [
            (summary.above, Region::Above),
            (summary.below, Region::Below),
            (summary.buffer_above, Region::BufferAbove),
            (summary.buffer_below, Region::BufferBelow),
        ];
        for (acc, region) in pairs {
            let a = acc.finish().unwrap();
            let b = region_stats(&img, &part, region).unwrap();
            assert_eq!(a.count, b.count, "{region:?}");
            assert!((a.mean - b.mean).abs() < 1e-9, "{region:?}");
        }
        let pooled = summary.pooled().unwrap();
        let all = image_stats(&img).unwrap();
        assert_eq!(pooled.count, img.w * img.h);
        assert!((pooled.variance - all.variance).abs() < 1e-9);
        assert_eq!(region_stats(&img, &part, Region::All).unwrap().count, all.count);
    }

    #[test]
    fn split_midline_separates_the_two_levels() {
        let img = split_image(20, 10);
        let part = Partition::new(HorizonLine::new(20, 10, 0.0, 50.0), 1.0);
        let s = PartitionSummary::collect(&img, &part, true);
        assert_eq!(s.above.finish().unwrap().mean, 200.0);
        assert_eq!(s.below.finish().unwrap().mean, 50.0);
        assert_eq!(s.above.finish().unwrap().variance, 0.0);
        // Pooled variance covers both levels: (150 / 2)^2.
        assert!((s.pooled().unwrap().variance - 5625.0).abs() < 1e-9);
    }

    #[test]
    fn row_on_the_line_keeps_pooled_variance_at_image_variance() {
        // d = 45 on 10 rows puts the line through the centres of row 4.
        let img = split_image(20, 10);
        let all = image_stats(&img).unwrap();
        for d in [45.0, 50.0, 55.0] {
            let part = Partition::new(HorizonLine::new(20, 10, 0.0, d), 3.0);
            let pooled = PartitionSummary::collect(&img, &part, true).pooled().unwrap();
            assert_eq!(pooled.count, 200, "d = {d}");
            assert!((pooled.variance - all.variance).abs() < 1e-9, "d = {d}");
        }
    }

    #[test]
    fn nan_sample_is_not_flattened_to_zero_variance() {
        let mut acc = RunningStats::default();
        for v in [1.0, f64::NAN, 3.0] {
            acc.push(v);
        }
        let s = acc.finish().unwrap();
        assert!(s.mean.is_nan());
        assert!(s.variance.is_nan());
    }

    #[test]
    fn empty_image_has_no_statistics() {
        assert!(image_stats(&ImageF32::new(0, 4)).is_none());
    }

    #[test]
    fn buffer_statistics_are_skipped_on_request() {
        let img = split_image(8, 8);
        let part = Partition::new(HorizonLine::new(8, 8, 0.0, 50.0), 2.0);
        let s = PartitionSummary::collect(&img, &part, false);
        assert_eq!(s.buffer_above.count(), 0);
        assert_eq!(s.buffer_below.count(), 0);
    }
}
