use crate::angle::{line_direction, line_normal, projected_extent};
use nalgebra::{Point2, Vector2};

/// Pixel centres closer to the line than this count as lying on it.
pub const ON_LINE_EPS: f64 = 1e-9;

/// Which halfplane of a candidate line a pixel centre is assigned to.
///
/// Centres on the line (within [`ON_LINE_EPS`]) go below, so the two
/// halfplanes always cover the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    #[inline]
    pub fn from_signed(signed: f64) -> Self {
        if signed < -ON_LINE_EPS {
            Side::Above
        } else {
            Side::Below
        }
    }
}

/// A candidate dividing line over a `width × height` pixel grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizonLine {
    angle_deg: f64,
    distance: f64,
    width: usize,
    height: usize,
    normal: Vector2<f64>,
    center: Point2<f64>,
    offset: f64,
}

impl HorizonLine {
    /// Line for candidate `(angle_deg, distance)` on an image of the given size.
    pub fn new(width: usize, height: usize, angle_deg: f64, distance: f64) -> Self {
        let normal = line_normal(angle_deg);
        let (w, h) = (width as f64, height as f64);
        let extent = projected_extent(w, h, &normal);
        Self {
            angle_deg,
            distance,
            width,
            height,
            normal,
            center: Point2::new(0.5 * w, 0.5 * h),
            offset: (distance / 100.0 - 0.5) * extent,
        }
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Unit normal; "below" is the side it points to.
    pub fn normal(&self) -> Vector2<f64> {
        self.normal
    }

    /// Unit direction along the line.
    pub fn direction(&self) -> Vector2<f64> {
        line_direction(self.angle_deg)
    }

    /// Signed offset ρ of the line from the image centre along the normal.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    /// Point of the line closest to the image centre.
    pub fn foot(&self) -> Point2<f64> {
        self.center + self.normal * self.offset
    }

    /// Signed distance of `p` to the line; negative above, positive below.
    #[inline]
    pub fn signed_distance(&self, p: &Point2<f64>) -> f64 {
        self.normal.x * (p.x - self.center.x)
            + (self.normal.y * (p.y - self.center.y) - self.offset)
    }

    /// Signed distance of the centre of pixel `(x, y)`.
    #[inline]
    pub fn pixel_signed_distance(&self, x: usize, y: usize) -> f64 {
        self.normal.x * (x as f64 + 0.5 - self.center.x) + self.row_term(y)
    }

    /// Part of the signed distance that depends only on the row.
    #[inline]
    pub(crate) fn row_term(&self, y: usize) -> f64 {
        self.normal.y * (y as f64 + 0.5 - self.center.y) - self.offset
    }

    /// Whether the line passes through the open image rectangle.
    pub fn crosses_image(&self) -> bool {
        let half = 0.5 * projected_extent(self.width as f64, self.height as f64, &self.normal);
        self.offset.abs() < half
    }
}
