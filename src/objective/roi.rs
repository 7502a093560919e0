use crate::search::SampleRange;
use serde::{Deserialize, Serialize};

/// Admissible candidate angles (degrees), inclusive.
pub const ANGLE_LIMITS: (i32, i32) = (-90, 90);
/// Admissible candidate distances (percent), inclusive.
pub const DISTANCE_LIMITS: (i32, i32) = (0, 100);

/// Knobs for deriving the region of interest from the coarse surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiOptions {
    /// Cells scoring above `mean + sigma_multiplier · std_dev` are retained.
    pub sigma_multiplier: f64,
    /// Degrees added on both sides of the retained angle span.
    pub angle_margin: i32,
    /// Percent added on both sides of the retained distance span.
    pub distance_margin: i32,
}

impl Default for RoiOptions {
    fn default() -> Self {
        Self {
            sigma_multiplier: 2.0,
            angle_margin: 2,
            distance_margin: 3,
        }
    }
}

/// Axis-aligned rectangle in candidate space, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionOfInterest {
    pub angle_min: i32,
    pub angle_max: i32,
    pub distance_min: i32,
    pub distance_max: i32,
}

impl RegionOfInterest {
    /// Bounding box of `(angle, distance)` cells; `None` for no cells.
    pub fn bounding<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        cells.into_iter().fold(None, |roi: Option<Self>, (a, d)| {
            Some(match roi {
                None => Self {
                    angle_min: a,
                    angle_max: a,
                    distance_min: d,
                    distance_max: d,
                },
                Some(r) => Self {
                    angle_min: r.angle_min.min(a),
                    angle_max: r.angle_max.max(a),
                    distance_min: r.distance_min.min(d),
                    distance_max: r.distance_max.max(d),
                },
            })
        })
    }

    /// Grow by the given margins, clamped to [`ANGLE_LIMITS`] and [`DISTANCE_LIMITS`].
    pub fn expanded(&self, angle_margin: i32, distance_margin: i32) -> Self {
        let am = angle_margin.max(0);
        let dm = distance_margin.max(0);
        let (a_lo, a_hi) = ANGLE_LIMITS;
        let (d_lo, d_hi) = DISTANCE_LIMITS;
        let angle_min = self.angle_min.saturating_sub(am).clamp(a_lo, a_hi);
        let distance_min = self.distance_min.saturating_sub(dm).clamp(d_lo, d_hi);
        Self {
            angle_min,
            angle_max: self.angle_max.saturating_add(am).clamp(angle_min, a_hi),
            distance_min,
            distance_max: self
                .distance_max
                .saturating_add(dm)
                .clamp(distance_min, d_hi),
        }
    }

    pub fn contains(&self, angle: i32, distance: i32) -> bool {
        (self.angle_min..=self.angle_max).contains(&angle)
            && (self.distance_min..=self.distance_max).contains(&distance)
    }

    /// Unit-step angle range covering the region.
    pub fn angle_range(&self) -> SampleRange {
        SampleRange::inclusive(self.angle_min, self.angle_max)
    }

    /// Unit-step distance range covering the region.
    pub fn distance_range(&self) -> SampleRange {
        SampleRange::inclusive(self.distance_min, self.distance_max)
    }

    /// Number of unit-step candidates inside the region.
    pub fn candidate_count(&self) -> usize {
        self.angle_range().len() * self.distance_range().len()
    }
}
