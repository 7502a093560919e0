//! Degree-based angle helpers for candidate lines.
//!
//! A candidate angle θ (degrees) describes the line direction
//! `(cos θ, −sin θ)` in image coordinates (y down), so positive angles rotate
//! the line counter-clockwise on screen. Its unit normal `(sin θ, cos θ)`
//! points toward the bottom of the frame for |θ| < 90°.
use nalgebra::Vector2;

/// Unit normal of a candidate line at `angle_deg`.
#[inline]
pub fn line_normal(angle_deg: f64) -> Vector2<f64> {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Vector2::new(s, c)
}

/// Unit direction of a candidate line at `angle_deg`.
#[inline]
pub fn line_direction(angle_deg: f64) -> Vector2<f64> {
    let n = line_normal(angle_deg);
    Vector2::new(n.y, -n.x)
}

/// Length of a `width × height` rectangle projected onto `normal`.
#[inline]
pub fn projected_extent(width: f64, height: f64, normal: &Vector2<f64>) -> f64 {
    width * normal.x.abs() + height * normal.y.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn horizontal_line_normal_points_down() {
        let n = line_normal(0.0);
        assert!(approx_eq(n.x, 0.0));
        assert!(approx_eq(n.y, 1.0));
    }

    #[test]
    fn direction_is_perpendicular_to_normal() {
        for a in [-90.0, -37.5, 0.0, 12.0, 89.9, 90.0] {
            let n = line_normal(a);
            let t = line_direction(a);
            assert!(approx_eq(n.dot(&t), 0.0), "angle {a}");
            assert!(approx_eq(t.norm(), 1.0));
        }
    }

    #[test]
    fn positive_angle_rises_to_the_right() {
        // y decreases (moves up on screen) when walking along +x.
        let t = line_direction(30.0);
        assert!(t.x > 0.0 && t.y < 0.0);
    }

    #[test]
    fn extent_matches_axis_aligned_cases() {
        assert!(approx_eq(projected_extent(200.0, 100.0, &line_normal(0.0)), 100.0));
        assert!(approx_eq(projected_extent(200.0, 100.0, &line_normal(90.0)), 200.0));
        assert!(approx_eq(projected_extent(200.0, 100.0, &line_normal(-90.0)), 200.0));
    }
}
