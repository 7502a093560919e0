//! Grid Search Driver: evaluates every `(θ, d)` candidate of a pass.
//!
//! A pass downsamples the input once, then builds one partition and one
//! [`PartitionSummary`](crate::stats::PartitionSummary) per candidate. The
//! resulting [`SearchGrid`] is dense, angle-major, and independent of
//! whether candidates were evaluated sequentially or on the Rayon pool.
mod cancel;
mod driver;
mod grid;
mod range;
mod record;

pub use cancel::CancelToken;
pub use driver::{run_grid_search, run_grid_search_with, ParallelOptions, PassOptions, SearchControl};
pub use grid::SearchGrid;
pub use range::SampleRange;
pub use record::{BufferMeans, CandidateFeatures, CandidateRecord, CandidateStatus};
