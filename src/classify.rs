use image::Rgb;
use serde::Serialize;

/// Legend colors the schedule uses for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    White,
    Gray,
    Blue,
}

/// Published status of one queue-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Power is on.
    Yes,
    /// Possible outage.
    Maybe,
    /// Power is off.
    No,
}

impl CellColor {
    /// Legend mapping: white means power, gray a possible outage, blue an
    /// outage.
    pub fn status(self) -> Status {
        match self {
            CellColor::White => Status::Yes,
            CellColor::Gray => Status::Maybe,
            CellColor::Blue => Status::No,
        }
    }
}

/// Classifies one sampled pixel into a legend color.
///
/// The blue test runs first and wins regardless of brightness; everything
/// else is bucketed by the channel average.
pub fn detect_color(pixel: Rgb<u8>) -> CellColor {
    let Rgb([r, g, b]) = pixel;

    if b > 150 && r < 100 && g < 150 {
        return CellColor::Blue;
    }

    let avg = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    if avg > 220 {
        CellColor::White
    } else if avg < 150 {
        CellColor::Gray
    } else {
        // The 150..=220 band has no legend color of its own; the published
        // schedules render it as white.
        CellColor::White
    }
}
