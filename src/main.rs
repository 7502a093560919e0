use horizon_detector::image::ImageU8;
use horizon_detector::{HorizonDetector, HorizonParams};

fn main() {
    env_logger::init();
    // Demo: a bright sky over darker ground, split slightly below the middle.
    let (w, h) = (320usize, 240usize);
    let split = h * 3 / 5;
    let gray: Vec<u8> = (0..w * h)
        .map(|i| if i / w < split { 200 } else { 60 })
        .collect();
    let img = ImageU8::packed(w, h, &gray);

    let det = HorizonDetector::new(HorizonParams::default());
    match det.detect(img) {
        Ok(res) => println!(
            "angle={} distance={} score={:.3} latency_ms={:.3}",
            res.best.angle, res.best.distance, res.best.score, res.latency_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
