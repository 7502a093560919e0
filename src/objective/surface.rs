use crate::search::{CandidateFeatures, SearchGrid};
use crate::types::ScoredCandidate;
use serde::Serialize;

/// Per-candidate score laid out like the grid it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveSurface {
    angles: Vec<i32>,
    distances: Vec<i32>,
    values: Vec<Option<f64>>,
}

/// Population statistics of the defined cells of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSummary {
    pub defined: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl ObjectiveSurface {
    /// Score every defined record; non-finite scores are dropped.
    pub fn from_grid<F>(grid: &SearchGrid, score: F) -> Self
    where
        F: Fn(&CandidateFeatures) -> Option<f64>,
    {
        let values = grid
            .records()
            .iter()
            .map(|r| r.features().and_then(&score).filter(|v| v.is_finite()))
            .collect();
        Self {
            angles: grid.angles().to_vec(),
            distances: grid.distances().to_vec(),
            values,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.angles.len(), self.distances.len())
    }

    pub fn angles(&self) -> &[i32] {
        &self.angles
    }

    pub fn distances(&self) -> &[i32] {
        &self.distances
    }

    /// Flat angle-major values.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn get(&self, angle_idx: usize, distance_idx: usize) -> Option<f64> {
        if angle_idx >= self.angles.len() || distance_idx >= self.distances.len() {
            return None;
        }
        self.values[angle_idx * self.distances.len() + distance_idx]
    }

    /// Defined cells as scored candidates, in angle-major order.
    pub fn defined(&self) -> impl Iterator<Item = ScoredCandidate> + '_ {
        let cols = self.distances.len();
        self.values.iter().enumerate().filter_map(move |(i, v)| {
            v.map(|score| ScoredCandidate {
                angle: self.angles[i / cols],
                distance: self.distances[i % cols],
                score,
            })
        })
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Highest defined score; the first cell in angle-major order wins ties.
    pub fn argmax(&self) -> Option<ScoredCandidate> {
        self.defined().fold(None, |best: Option<ScoredCandidate>, c| match best {
            Some(b) if b.score >= c.score => Some(b),
            _ => Some(c),
        })
    }

    pub fn summary(&self) -> Option<SurfaceSummary> {
        let mut n = 0usize;
        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.values.iter().flatten() {
            n += 1;
            sum += v;
            min = min.min(*v);
            max = max.max(*v);
        }
        if n == 0 {
            return None;
        }
        let mean = sum / n as f64;
        let var = self
            .values
            .iter()
            .flatten()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / n as f64;
        Some(SurfaceSummary {
            defined: n,
            mean,
            std_dev: var.sqrt(),
            min,
            max,
        })
    }
}

#[cfg(test)]
impl ObjectiveSurface {
    pub(crate) fn from_values(angles: Vec<i32>, distances: Vec<i32>, values: Vec<Option<f64>>) -> Self {
        assert_eq!(values.len(), angles.len() * distances.len());
        Self {
            angles,
            distances,
            values,
        }
    }
}
