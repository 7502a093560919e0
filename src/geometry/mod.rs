//! Candidate line geometry and the pixel partitions it induces.
//!
//! A candidate `(θ, d)` is turned into a [`HorizonLine`] in normal form
//! `n·(p − c) = ρ`, where `c` is the image centre, `n` the unit normal from
//! [`crate::angle::line_normal`] and `ρ = (d/100 − ½)·E(θ)` with `E(θ)` the
//! extent of the image rectangle projected on `n`. `d = 50` therefore passes
//! through the centre and every `d ∈ [0, 100]` meets the image for every θ.
//! No slope is ever formed, so near-vertical candidates are as stable as
//! horizontal ones.
//!
//! [`Partition`] classifies pixel centres against that line into the above
//! and below halfplanes plus a buffer strip of half-width `b`;
//! [`line_endpoints`] clips the line to the image rectangle for overlays.
mod endpoints;
mod line;
mod partition;

pub use endpoints::{line_endpoints, EndpointMode, LineEndpoints};
pub use line::{HorizonLine, Side, ON_LINE_EPS};
pub use partition::{Partition, PartitionMasks, PixelClass, Region};
