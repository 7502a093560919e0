use horizon_detector::config::detect::HorizonToolConfig;
use horizon_detector::config::load_config;
use horizon_detector::diagnostics::DetectionReport;
use horizon_detector::image::io::{load_grayscale_image, write_json_file};
use horizon_detector::HorizonDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: horizon_demo <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: HorizonToolConfig = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let detector = HorizonDetector::new(config.params.clone());
    let report = detector
        .detect_with_diagnostics(gray.as_view())
        .map_err(|e| format!("Detection failed on {}: {e}", config.input.display()))?;

    let format = config.output.format;
    if format.includes_text() {
        print_text_summary(&report);
    }

    if format.includes_json() {
        let json = if config.output.include_diagnostics {
            serde_json::to_value(&report)
        } else {
            serde_json::to_value(&report.result)
        }
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
        match &config.output.json_out {
            Some(path) => {
                write_json_file(path, &json)?;
                println!("JSON written to {}", path.display());
            }
            None => {
                let text = serde_json::to_string_pretty(&json)
                    .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
                println!("{text}");
            }
        }
    }

    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let res = &report.result;
    println!("Horizon detection {}x{}", res.width, res.height);
    println!(
        "  best: angle={} distance={} score={:.4}",
        res.best.angle, res.best.distance, res.best.score
    );
    match &res.endpoints {
        Some(e) => println!(
            "  endpoints: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            e.a[0], e.a[1], e.b[0], e.b[1]
        ),
        None => println!("  endpoints: line misses the image"),
    }
    println!(
        "  region: angle {}..={} distance {}..={}",
        res.region.angle_min, res.region.angle_max, res.region.distance_min, res.region.distance_max
    );
    println!(
        "  coarse: {}x{} cells on {}x{} (defined={}) threshold={:.4} retained={}",
        report.coarse.angles,
        report.coarse.distances,
        report.coarse.level_width,
        report.coarse.level_height,
        report.coarse.defined,
        report.threshold,
        report.retained.len()
    );
    println!(
        "  fine: {}x{} cells on {}x{} (defined={})",
        report.fine.angles,
        report.fine.distances,
        report.fine.level_width,
        report.fine.level_height,
        report.fine.defined
    );
    let stages: Vec<String> = report
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "  timings (ms): {} total={:.3}",
        stages.join(" "),
        report.timings.total_ms
    );
}
