use super::record::CandidateRecord;
use serde::Serialize;

/// Dense `angles × distances` table of candidate records from one pass.
///
/// Records are stored angle-major: index `ai * distances.len() + di`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGrid {
    angles: Vec<i32>,
    distances: Vec<i32>,
    records: Vec<CandidateRecord>,
    level_width: usize,
    level_height: usize,
    reduction: f64,
    buffer_half_width: f64,
}

impl SearchGrid {
    pub(crate) fn new(
        angles: Vec<i32>,
        distances: Vec<i32>,
        records: Vec<CandidateRecord>,
        level_size: (usize, usize),
        reduction: f64,
        buffer_half_width: f64,
    ) -> Self {
        debug_assert_eq!(records.len(), angles.len() * distances.len());
        Self {
            angles,
            distances,
            records,
            level_width: level_size.0,
            level_height: level_size.1,
            reduction,
            buffer_half_width,
        }
    }

    /// `(number of angles, number of distances)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.angles.len(), self.distances.len())
    }

    pub fn angles(&self) -> &[i32] {
        &self.angles
    }

    pub fn distances(&self) -> &[i32] {
        &self.distances
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    /// Size of the downsampled image the pass ran on.
    pub fn level_size(&self) -> (usize, usize) {
        (self.level_width, self.level_height)
    }

    pub fn reduction(&self) -> f64 {
        self.reduction
    }

    pub fn buffer_half_width(&self) -> f64 {
        self.buffer_half_width
    }

    pub fn get(&self, angle_idx: usize, distance_idx: usize) -> Option<&CandidateRecord> {
        if angle_idx >= self.angles.len() || distance_idx >= self.distances.len() {
            return None;
        }
        self.records.get(angle_idx * self.distances.len() + distance_idx)
    }

    /// Record for a candidate value pair, if it was sampled.
    pub fn find(&self, angle: i32, distance: i32) -> Option<&CandidateRecord> {
        let ai = self.angles.iter().position(|&a| a == angle)?;
        let di = self.distances.iter().position(|&d| d == distance)?;
        self.get(ai, di)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn defined_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_defined()).count()
    }
}
