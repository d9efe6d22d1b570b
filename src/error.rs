use thiserror::Error;

/// Everything that can abort a scan run.
///
/// Nothing is caught or retried internally; each failure propagates out of
/// [`crate::scan::run`] and ends the process with a non-zero status.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Transport failure or non-2xx response while fetching the image.
    #[error("failed to retrieve schedule image")]
    Retrieval(#[from] reqwest::Error),

    /// The payload could not be read as a raster image.
    #[error("failed to decode schedule image")]
    Decode(#[from] image::ImageError),

    /// File write failed, including a missing destination directory.
    #[error("i/o failure")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),
}
