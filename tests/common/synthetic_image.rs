use horizon_detector::geometry::HorizonLine;
use horizon_detector::image::ImageF32;

pub const SKY: f32 = 200.0;
pub const GROUND: f32 = 50.0;

/// Top half at `SKY`, bottom half at `GROUND`, as packed 8-bit pixels.
pub fn split_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![GROUND as u8; width * height];
    for px in img.iter_mut().take(width * (height / 2)) {
        *px = SKY as u8;
    }
    img
}

pub fn split_f32(width: usize, height: usize) -> ImageF32 {
    ImageF32::from_fn(width, height, |_, y| if y < height / 2 { SKY } else { GROUND })
}

/// `SKY` strictly above the candidate line `(angle, distance)`, `GROUND`
/// elsewhere, including pixel centres exactly on the line.
pub fn tilted_split(width: usize, height: usize, angle: f64, distance: f64) -> ImageF32 {
    let line = HorizonLine::new(width, height, angle, distance);
    ImageF32::from_fn(width, height, |x, y| {
        if line.pixel_signed_distance(x, y) < 0.0 {
            SKY
        } else {
            GROUND
        }
    })
}

/// Smooth ramp `2·y + 0.5·x`.
pub fn gradient(width: usize, height: usize) -> ImageF32 {
    ImageF32::from_fn(width, height, |x, y| 2.0 * y as f32 + 0.5 * x as f32)
}

pub fn uniform(width: usize, height: usize, value: f32) -> ImageF32 {
    ImageF32::from_fn(width, height, |_, _| value)
}
