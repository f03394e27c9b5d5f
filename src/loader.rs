//! Snapshot loading from JSON files.
//!
//! A load failure is reported once and not retried: the caller decides
//! whether to fall back or to stop.

use std::fs;
use std::path::Path;

use log::info;
use weather_common::WeatherSnapshot;

use crate::error::{AppError, Result};

/// Read, parse and validate a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<WeatherSnapshot> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = parse_snapshot(&text).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    snapshot.validate().map_err(|source| AppError::InvalidSnapshot {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "loaded snapshot from {} ({} forecast days)",
        path.display(),
        snapshot.forecast.len()
    );
    Ok(snapshot)
}

/// Parse snapshot JSON without validating readings.
pub fn parse_snapshot(text: &str) -> serde_json::Result<WeatherSnapshot> { serde_json::from_str(text) }
