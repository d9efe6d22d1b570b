//! Reads a published power-outage schedule image and republishes it as
//! per-queue hourly status JSON.
//!
//! One run is a single pass: fetch the schedule image, sample the center
//! pixel of every grid cell, classify each sample against the legend colors,
//! and write the timestamped report.

pub mod classify;
pub mod config;
pub mod error;
pub mod fetch;
pub mod grid;
pub mod report;
pub mod scan;
