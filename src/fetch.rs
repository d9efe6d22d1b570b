use std::fs::File;
use std::path::Path;

use image::{ImageOutputFormat, RgbImage};

use crate::error::ScanError;

/// Performs the blocking GET against the schedule URL.
///
/// A non-2xx response is treated the same as a transport fault. The request
/// uses the transport's default timeouts and is never retried.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, ScanError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

/// Decodes the payload and converts it to RGB, discarding any alpha channel.
/// The classifier reads exactly three channels per pixel.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, ScanError> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Retrieves and decodes the schedule image.
pub fn fetch_image(url: &str) -> Result<RgbImage, ScanError> {
    let bytes = fetch_bytes(url)?;
    decode_rgb(&bytes)
}

/// Writes the decoded image as PNG to its fixed path.
///
/// The destination directory must already exist; a missing directory is an
/// i/o failure, not something the run repairs.
pub fn save_copy(img: &RgbImage, path: &Path) -> Result<(), ScanError> {
    let mut file = File::create(path)?;
    img.write_to(&mut file, ImageOutputFormat::Png)
        .map_err(|err| match err {
            image::ImageError::IoError(err) => ScanError::Io(err),
            other => ScanError::Decode(other),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn decode_converts_to_rgb_and_drops_alpha() {
        let rgba = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 128]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut buf, ImageOutputFormat::Png)
            .unwrap();

        let rgb = decode_rgb(buf.get_ref()).unwrap();
        assert_eq!(rgb.dimensions(), (4, 3));
        assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([10, 20, 30]));
    }

    #[test]
    fn garbage_payload_is_a_decode_error() {
        let err = decode_rgb(b"not an image").unwrap_err();
        assert!(matches!(err, ScanError::Decode(_)));
    }

    #[test]
    fn saving_into_a_missing_directory_fails_with_io() {
        let dir = tempfile::TempDir::new().unwrap();
        let img = RgbImage::new(2, 2);
        let path = dir.path().join("no-such-dir").join("copy.png");
        let err = save_copy(&img, &path).unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }

    #[test]
    fn saved_copy_round_trips_through_the_decoder() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("copy.png");
        let img = RgbImage::from_pixel(5, 4, image::Rgb([200, 10, 60]));

        save_copy(&img, &path).unwrap();
        let reloaded = decode_rgb(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(reloaded, img);
    }
}
