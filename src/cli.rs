//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::error::{AppError, Result};

/// Largest accepted window scale.
const MAX_SCALE: u32 = 8;

#[derive(Parser, Debug)]
#[command(name = "weather-dashboard")]
#[command(about = "Temperature-themed weather view in a simulator window", long_about = None)]
pub struct Args {
    /// Snapshot JSON to show instead of the built-in fallback
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Device memory hint in GB for capability classification (default 4)
    #[arg(long, value_name = "GB", allow_negative_numbers = true)]
    pub device_memory: Option<f32>,

    /// Window pixel scale
    #[arg(long, default_value_t = 2)]
    pub scale: u32,
}

impl Args {
    /// Reject values clap's parsers accept but the dashboard cannot use.
    pub fn validate(&self) -> Result<()> {
        if let Some(gb) = self.device_memory
            && !(gb.is_finite() && gb >= 0.0)
        {
            return Err(AppError::InvalidArgument(format!("--device-memory {gb} must be a non-negative number")));
        }
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(AppError::InvalidArgument(format!(
                "--scale {} must be between 1 and {MAX_SCALE}",
                self.scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("weather-dashboard").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.snapshot.is_none());
        assert!(args.device_memory.is_none());
        assert_eq!(args.scale, 2);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["--snapshot", "w.json", "--device-memory", "1.5", "--scale", "3"]);
        assert_eq!(args.snapshot, Some(PathBuf::from("w.json")));
        assert_eq!(args.device_memory, Some(1.5));
        assert_eq!(args.scale, 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["--scale", "0"]).validate().is_err());
        assert!(parse(&["--scale", "9"]).validate().is_err());
        assert!(parse(&["--device-memory", "-1"]).validate().is_err());
        assert!(parse(&["--device-memory", "NaN"]).validate().is_err());
    }

    #[test]
    fn test_unknown_flag() {
        assert!(Args::try_parse_from(["weather-dashboard", "--fps"]).is_err());
    }
}
