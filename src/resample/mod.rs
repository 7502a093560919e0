//! Reduction-factor downsampling of the working image.
//!
//! The search runs on a copy of the input scaled by a factor `r ∈ (0, 1]`.
//! Output dimensions are `max(1, round(W·r)) × max(1, round(H·r))` and each
//! output pixel is the area-weighted mean of the source pixels it covers, so
//! region means survive the reduction up to boundary effects. The filter is
//! separable: rows are reduced first, then columns.
pub mod weights;

use crate::error::HorizonError;
use crate::image::{ImageF32, ImageView, ImageViewMut};
use weights::AxisWeights;

/// Check that `factor` is a usable reduction factor.
pub fn validate_reduction(factor: f64) -> Result<(), HorizonError> {
    if factor.is_finite() && factor > 0.0 && factor <= 1.0 {
        Ok(())
    } else {
        Err(HorizonError::InvalidReduction { factor })
    }
}

/// Dimensions of an image of size `w × h` after reduction by `factor`.
pub fn reduced_size(w: usize, h: usize, factor: f64) -> (usize, usize) {
    let scale = |n: usize| ((n as f64 * factor).round() as usize).clamp(1, n.max(1));
    (scale(w), scale(h))
}

/// Downsample `image` by `factor` using area averaging.
pub fn downsample(image: &ImageF32, factor: f64) -> Result<ImageF32, HorizonError> {
    validate_reduction(factor)?;
    if image.is_empty() {
        return Err(HorizonError::EmptyImage {
            width: image.w,
            height: image.h,
        });
    }
    let (ow, oh) = reduced_size(image.w, image.h, factor);
    if ow == image.w && oh == image.h {
        return Ok(image.clone());
    }

    let wx = AxisWeights::box_area(image.w, ow);
    let wy = AxisWeights::box_area(image.h, oh);
    debug_assert_eq!((wx.len(), wy.len()), (ow, oh));

    // Horizontal pass: h × ow, kept in f64 until the final write.
    let mut horiz = vec![0.0f64; image.h * ow];
    for (y, src_row) in image.rows().enumerate() {
        let dst = &mut horiz[y * ow..(y + 1) * ow];
        for (x, out) in dst.iter_mut().enumerate() {
            *out = wx
                .taps(x)
                .iter()
                .map(|t| src_row[t.src] as f64 * t.weight)
                .sum();
        }
    }

    let mut out = ImageF32::new(ow, oh);
    for y in 0..oh {
        let taps = wy.taps(y);
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let v: f64 = taps
                .iter()
                .map(|t| horiz[t.src * ow + x] * t.weight)
                .sum();
            *px = v as f32;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_factors() {
        let img = ImageF32::new(4, 4);
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                downsample(&img, bad),
                Err(HorizonError::InvalidReduction { .. })
            ));
        }
    }

    #[test]
    fn unit_factor_is_identity() {
        let img = ImageF32::from_fn(5, 3, |x, y| (x * 7 + y) as f32);
        assert_eq!(downsample(&img, 1.0).unwrap(), img);
    }

    #[test]
    fn halving_averages_two_by_two_blocks() {
        let img = ImageF32::from_fn(4, 2, |x, _| if x < 2 { 10.0 } else { 30.0 });
        let out = downsample(&img, 0.5).unwrap();
        assert_eq!((out.w, out.h), (2, 1));
        assert!((out.get(0, 0) - 10.0).abs() < 1e-5);
        assert!((out.get(1, 0) - 30.0).abs() < 1e-5);
    }

    #[test]
    fn reduction_preserves_global_mean() {
        let img = ImageF32::from_fn(37, 23, |x, y| ((x * 13 + y * 7) % 50) as f32);
        let out = downsample(&img, 0.3).unwrap();
        assert!((img.mean().unwrap() - out.mean().unwrap()).abs() < 0.5);
    }

    #[test]
    fn tiny_factor_keeps_one_pixel() {
        assert_eq!(reduced_size(10, 3, 0.01), (1, 1));
    }
}
