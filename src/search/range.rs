use crate::error::{HorizonError, RangeAxis};
use serde::{Deserialize, Serialize};

/// Half-open integer sampling range `start..stop` with stride `step`.
///
/// Serialised as a `[start, stop, step]` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct SampleRange {
    pub start: i32,
    pub stop: i32,
    pub step: i32,
}

impl SampleRange {
    pub const fn new(start: i32, stop: i32, step: i32) -> Self {
        Self { start, stop, step }
    }

    /// Unit-step range covering `min..=max`.
    pub const fn inclusive(min: i32, max: i32) -> Self {
        Self {
            start: min,
            stop: max + 1,
            step: 1,
        }
    }

    /// Reject empty ranges and non-positive steps.
    pub fn validate(&self, axis: RangeAxis) -> Result<(), HorizonError> {
        if self.step > 0 && self.start < self.stop {
            Ok(())
        } else {
            Err(HorizonError::InvalidRange {
                axis,
                start: self.start,
                stop: self.stop,
                step: self.step,
            })
        }
    }

    /// Number of sampled values; zero for invalid ranges.
    pub fn len(&self) -> usize {
        if self.step <= 0 || self.start >= self.stop {
            return 0;
        }
        let span = self.stop as i64 - self.start as i64;
        ((span - 1) / self.step as i64 + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sampled values in increasing order.
    pub fn values(&self) -> impl Iterator<Item = i32> {
        let start = self.start;
        let step = self.step.max(1) as i64;
        (0..self.len() as i64).map(move |i| (start as i64 + i * step) as i32)
    }
}

impl From<[i32; 3]> for SampleRange {
    fn from([start, stop, step]: [i32; 3]) -> Self {
        Self::new(start, stop, step)
    }
}

impl From<SampleRange> for [i32; 3] {
    fn from(r: SampleRange) -> Self {
        [r.start, r.stop, r.step]
    }
}
