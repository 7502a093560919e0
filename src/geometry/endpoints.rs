use super::line::HorizonLine;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// How [`line_endpoints`] bounds the returned segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndpointMode {
    /// Intersections with the image rectangle `[0, W] × [0, H]`.
    #[default]
    Clipped,
    /// Points one image diagonal either side of the line's foot point.
    Extended,
}

/// Two points on a candidate line, `a` first along the line direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineEndpoints {
    pub a: [f64; 2],
    pub b: [f64; 2],
}

impl LineEndpoints {
    pub fn length(&self) -> f64 {
        (self.b[0] - self.a[0]).hypot(self.b[1] - self.a[1])
    }
}

/// Endpoints of candidate `(angle_deg, distance)` on a `width × height` image.
///
/// Returns `None` in [`EndpointMode::Clipped`] when the line misses the image
/// rectangle. A line grazing a corner yields two coincident points.
pub fn line_endpoints(
    width: usize,
    height: usize,
    angle_deg: f64,
    distance: f64,
    mode: EndpointMode,
) -> Option<LineEndpoints> {
    let line = HorizonLine::new(width, height, angle_deg, distance);
    let foot = line.foot();
    let dir = line.direction();
    let (s0, s1) = match mode {
        EndpointMode::Clipped => clip_parameters(&foot, dir.x, dir.y, width as f64, height as f64)?,
        EndpointMode::Extended => {
            let half = (width as f64).hypot(height as f64);
            (-half, half)
        }
    };
    let a = foot + dir * s0;
    let b = foot + dir * s1;
    Some(LineEndpoints {
        a: [a.x, a.y],
        b: [b.x, b.y],
    })
}

/// Liang–Barsky clipping of `foot + s·(dx, dy)` against `[0, w] × [0, h]`.
fn clip_parameters(foot: &Point2<f64>, dx: f64, dy: f64, w: f64, h: f64) -> Option<(f64, f64)> {
    const PARALLEL_EPS: f64 = 1e-12;
    const TOUCH_EPS: f64 = 1e-9;
    let mut lo = f64::NEG_INFINITY;
    let mut hi = f64::INFINITY;
    for (p, d, max) in [(foot.x, dx, w), (foot.y, dy, h)] {
        if d.abs() < PARALLEL_EPS {
            if p < -TOUCH_EPS || p > max + TOUCH_EPS {
                return None;
            }
            continue;
        }
        let t0 = -p / d;
        let t1 = (max - p) / d;
        lo = lo.max(t0.min(t1));
        hi = hi.min(t0.max(t1));
    }
    if lo > hi + TOUCH_EPS {
        return None;
    }
    Some((lo, hi.max(lo)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: [f64; 2], q: [f64; 2]) -> bool {
        (p[0] - q[0]).abs() < 1e-6 && (p[1] - q[1]).abs() < 1e-6
    }

    #[test]
    fn horizontal_midline_spans_full_width() {
        let ep = line_endpoints(200, 100, 0.0, 50.0, EndpointMode::Clipped).unwrap();
        assert!(close(ep.a, [0.0, 50.0]), "{:?}", ep);
        assert!(close(ep.b, [200.0, 50.0]), "{:?}", ep);
    }

    #[test]
    fn vertical_line_spans_full_height() {
        let ep = line_endpoints(200, 100, 90.0, 50.0, EndpointMode::Clipped).unwrap();
        assert!((ep.a[0] - 100.0).abs() < 1e-6 && (ep.b[0] - 100.0).abs() < 1e-6);
        assert!((ep.length() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn tilted_line_stays_inside_rectangle() {
        let ep = line_endpoints(320, 240, 17.0, 35.0, EndpointMode::Clipped).unwrap();
        for p in [ep.a, ep.b] {
            assert!(p[0] >= -1e-6 && p[0] <= 320.0 + 1e-6);
            assert!(p[1] >= -1e-6 && p[1] <= 240.0 + 1e-6);
        }
        // Positive angle: the right end sits higher on screen.
        assert!(ep.b[0] > ep.a[0] && ep.b[1] < ep.a[1]);
    }

    #[test]
    fn line_outside_image_has_no_clipped_endpoints() {
        assert!(line_endpoints(64, 48, 10.0, 140.0, EndpointMode::Clipped).is_none());
        let ep = line_endpoints(64, 48, 10.0, 140.0, EndpointMode::Extended).unwrap();
        assert!((ep.length() - 2.0 * 80.0).abs() < 1e-6);
    }
}
