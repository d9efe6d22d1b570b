use std::path::PathBuf;

use crate::grid::GridConfig;

/// Published schedule image for the monitored region.
pub const IMAGE_URL: &str =
    "https://hoe.com.ua/Content/Uploads/2025/11/file20251112193957906.png";

/// Opaque region tag carried into the report.
pub const REGION_ID: &str = "hoe";

/// Report destination.
pub const OUTPUT_JSON: &str = "data/hoe.json";

/// Decoded copy of the source image.
pub const OUTPUT_IMAGE: &str = "data/hoe-source.png";

/// Left edge of the schedule table inside the image, in pixels.
pub const GRID_X: u32 = 100;
/// Top edge of the schedule table, in pixels.
pub const GRID_Y: u32 = 200;
/// Width of one table cell.
pub const CELL_W: u32 = 70;
/// Height of one table cell.
pub const CELL_H: u32 = 60;
/// One column per hour of the day.
pub const COLS: u32 = 24;
/// One row per outage queue.
pub const ROWS: u32 = 6;

/// Everything one run needs, fixed before the run starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub image_url: String,
    pub region_id: String,
    pub output_json: PathBuf,
    pub output_image: PathBuf,
    pub grid: GridConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_url: IMAGE_URL.to_owned(),
            region_id: REGION_ID.to_owned(),
            output_json: PathBuf::from(OUTPUT_JSON),
            output_image: PathBuf::from(OUTPUT_IMAGE),
            grid: GridConfig {
                origin_x: GRID_X,
                origin_y: GRID_Y,
                cell_w: CELL_W,
                cell_h: CELL_H,
                cols: COLS,
                rows: ROWS,
            },
        }
    }
}
