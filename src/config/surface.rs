use crate::detector::CoarseParams;
use crate::search::ParallelOptions;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration of the `coarse_surface` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct SurfaceToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub coarse: CoarseParams,
    #[serde(default)]
    pub parallel: ParallelOptions,
    pub output: SurfaceOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SurfaceOutputConfig {
    /// Global objective surface, threshold, and region of interest.
    pub surface_json: PathBuf,
    /// Optional dump of the raw coarse search grid.
    #[serde(default)]
    pub grid_json: Option<PathBuf>,
}
