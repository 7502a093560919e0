//! Per-axis area weights for box resampling.

/// One source sample contributing to an output sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tap {
    pub src: usize,
    pub weight: f64,
}

/// Weight table mapping `n_out` output samples onto `n_in` source samples.
///
/// Every output sample covers the interval `[i·s, (i+1)·s)` of the source axis
/// with `s = n_in / n_out`; each source sample is weighted by its overlap with
/// that interval. Weights of one output sample sum to one.
#[derive(Clone, Debug)]
pub(crate) struct AxisWeights {
    taps: Vec<Tap>,
    spans: Vec<(usize, usize)>,
}

impl AxisWeights {
    pub(crate) fn box_area(n_in: usize, n_out: usize) -> Self {
        assert!(n_in > 0 && n_out > 0, "axis lengths must be positive");
        let scale = n_in as f64 / n_out as f64;
        let mut taps = Vec::with_capacity(n_out * (scale.ceil() as usize + 1));
        let mut spans = Vec::with_capacity(n_out);
        for i in 0..n_out {
            let lo = i as f64 * scale;
            let hi = ((i + 1) as f64 * scale).min(n_in as f64);
            let first = taps.len();
            let mut total = 0.0f64;
            let mut j = lo.floor() as usize;
            while j < n_in && (j as f64) < hi {
                let overlap = hi.min((j + 1) as f64) - lo.max(j as f64);
                if overlap > 1e-12 {
                    taps.push(Tap {
                        src: j,
                        weight: overlap,
                    });
                    total += overlap;
                }
                j += 1;
            }
            if total > 0.0 {
                for tap in &mut taps[first..] {
                    tap.weight /= total;
                }
            }
            spans.push((first, taps.len()));
        }
        Self { taps, spans }
    }

    #[inline]
    pub(crate) fn taps(&self, out: usize) -> &[Tap] {
        let (a, b) = self.spans[out];
        &self.taps[a..b]
    }

    pub(crate) fn len(&self) -> usize {
        self.spans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ratio_averages_blocks() {
        let w = AxisWeights::box_area(6, 3);
        assert_eq!(w.len(), 3);
        let t = w.taps(1);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].src, 2);
        assert!((t[0].weight - 0.5).abs() < 1e-12);
    }

    #[test]
    fn fractional_ratio_weights_sum_to_one() {
        let w = AxisWeights::box_area(10, 3);
        for i in 0..w.len() {
            let sum: f64 = w.taps(i).iter().map(|t| t.weight).sum();
            assert!((sum - 1.0).abs() < 1e-9, "output {i} sums to {sum}");
        }
        // Output 1 covers [3.33, 6.67): partial 3, full 4 and 5, partial 6.
        let srcs: Vec<usize> = w.taps(1).iter().map(|t| t.src).collect();
        assert_eq!(srcs, vec![3, 4, 5, 6]);
    }
}
