use horizon_detector::config::load_config;
use horizon_detector::config::surface::SurfaceToolConfig;
use horizon_detector::image::io::{load_grayscale_image, write_json_file};
use horizon_detector::objective::{compute_global_score, ObjectiveSurface, RegionOfInterest, SurfaceSummary};
use horizon_detector::search::{run_grid_search_with, SearchControl};
use horizon_detector::types::ScoredCandidate;
use serde::Serialize;
use std::env;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CoarseSurfaceDump {
    width: usize,
    height: usize,
    level_width: usize,
    level_height: usize,
    surface: ObjectiveSurface,
    summary: Option<SurfaceSummary>,
    threshold: Option<f64>,
    retained: Vec<ScoredCandidate>,
    best: Option<ScoredCandidate>,
    region: Option<RegionOfInterest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region_error: Option<String>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: coarse_surface <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: SurfaceToolConfig = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let image = gray.to_f32();
    let control = SearchControl {
        parallel: config.parallel,
        ..Default::default()
    };
    let grid = run_grid_search_with(&image, &config.coarse.pass_options(), &control)
        .map_err(|e| format!("Coarse search failed: {e}"))?;

    let global = compute_global_score(&grid);
    let sigma = config.coarse.roi.sigma_multiplier;
    let (region, region_error) = match global.region_of_interest(&config.coarse.roi) {
        Ok(r) => (Some(r), None),
        Err(e) => (None, Some(e.to_string())),
    };
    let (level_width, level_height) = grid.level_size();
    let dump = CoarseSurfaceDump {
        width: gray.width(),
        height: gray.height(),
        level_width,
        level_height,
        threshold: global.threshold(sigma),
        retained: global.retained(sigma),
        best: global.best(),
        summary: global.summary,
        surface: global.surface,
        region,
        region_error,
    };

    write_json_file(&config.output.surface_json, &dump)?;
    println!(
        "Coarse surface ({}x{} cells) written to {}",
        grid.shape().0,
        grid.shape().1,
        config.output.surface_json.display()
    );
    if let Some(path) = &config.output.grid_json {
        write_json_file(path, &grid)?;
        println!("Coarse grid written to {}", path.display());
    }
    Ok(())
}
