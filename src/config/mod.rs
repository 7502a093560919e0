//! JSON configuration for the demo binaries.
//!
//! Each tool reads one file naming the input image, optional detector
//! parameters (missing fields fall back to their defaults), and output paths.
pub mod detect;
pub mod surface;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON tool configuration.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
