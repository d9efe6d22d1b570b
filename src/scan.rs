use chrono::Utc;
use image::RgbImage;

use crate::classify::detect_color;
use crate::config::Config;
use crate::error::ScanError;
use crate::fetch;
use crate::grid::GridConfig;
use crate::report::{self, QueueSchedule};

/// One full scan: fetch, sample, classify, publish.
pub fn run(cfg: &Config) -> Result<(), ScanError> {
    println!("Fetching schedule image for region '{}'...", cfg.region_id);
    let img = fetch::fetch_image(&cfg.image_url)?;
    let (width, height) = img.dimensions();
    println!("✓ Loaded schedule image: {width}x{height}px");

    fetch::save_copy(&img, &cfg.output_image)?;
    println!("✓ Saved source image to {}", cfg.output_image.display());

    let schedule = classify_cells(&img, &cfg.grid);
    let report = report::build_report(&cfg.region_id, Utc::now(), schedule);
    report::write_report(&report, &cfg.output_json)?;
    println!("✓ Saved report to {}", cfg.output_json.display());

    Ok(())
}

/// Samples every in-bounds cell center and classifies it.
///
/// Queues are seeded up front, so a queue whose cells all fall outside the
/// image still shows up in the report, just with no hours.
pub fn classify_cells(img: &RgbImage, grid: &GridConfig) -> QueueSchedule {
    let (width, height) = img.dimensions();

    let mut schedule = QueueSchedule::new();
    for row in 0..grid.rows {
        schedule.insert(queue_name(row), Default::default());
    }

    for cell in grid.samples(width, height) {
        let status = detect_color(*img.get_pixel(cell.x, cell.y)).status();
        schedule
            .entry(queue_name(cell.row))
            .or_default()
            .insert((cell.col + 1).to_string(), status);
    }

    schedule
}

fn queue_name(row: u32) -> String {
    format!("queue{}", row + 1)
}
