/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::math::rotation::EulerAngles;
use crate::math::Decimal;

/// `found`: estimates a spacecraft's position from an image of Earth's
/// limb, and propagates a position history forward in time (spec.md SS6).
#[derive(Parser, Debug)]
#[command(name = "found", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Composes a local orientation against a reference orientation.
    Calibration(CalibrationArgs),
    /// Determines the camera's distance from Earth from a limb image.
    Distance(DistanceArgs),
    /// Propagates a position history forward in time.
    Orbit(OrbitArgs),
}

#[derive(Args, Debug)]
pub struct CalibrationArgs {
    #[arg(long = "local-orientation", value_parser = parse_euler)]
    pub local_orientation: EulerAngles,

    #[arg(long = "reference-orientation", value_parser = parse_euler, default_value = "0,0,0")]
    pub reference_orientation: EulerAngles,

    #[arg(long = "output-file")]
    pub output_file: PathBuf,
}

#[derive(Args, Debug)]
pub struct DistanceArgs {
    #[arg(long)]
    pub image: PathBuf,

    #[arg(long = "calibration-data")]
    pub calibration_data: Option<PathBuf>,

    #[arg(
        long = "reference-as-orientation",
        value_parser = parse_bool_flag,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
    )]
    pub reference_as_orientation: bool,

    #[arg(long = "camera-focal-length")]
    pub camera_focal_length: Decimal,

    #[arg(long = "camera-pixel-size")]
    pub camera_pixel_size: Decimal,

    #[arg(long = "camera-x-resolution")]
    pub camera_x_resolution: u32,

    #[arg(long = "camera-y-resolution")]
    pub camera_y_resolution: u32,

    #[arg(long = "reference-orientation", value_parser = parse_euler, default_value = "0,0,0")]
    pub reference_orientation: EulerAngles,

    #[arg(long = "relative-orientation", value_parser = parse_euler, default_value = "0,0,0")]
    pub relative_orientation: EulerAngles,

    #[arg(long = "planetary-radius", default_value_t = 6_371_000.0)]
    pub planetary_radius: Decimal,

    #[arg(long = "seda-threshold", default_value_t = 128)]
    pub seda_threshold: u8,

    #[arg(long = "seda-border-len", default_value_t = 1)]
    pub seda_border_len: u32,

    #[arg(long = "seda-offset", default_value_t = 0.0)]
    pub seda_offset: Decimal,

    #[arg(
        long = "seda-filter-components",
        value_parser = parse_bool_flag,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
    )]
    pub seda_filter_components: bool,

    #[arg(long = "distance-algo", value_enum, default_value_t = DistanceAlgo::Sdda)]
    pub distance_algo: DistanceAlgo,

    #[arg(long = "isdda-loss-order", default_value_t = 2)]
    pub isdda_loss_order: i32,

    #[arg(long = "isdda-radius-prior-weight", default_value_t = 0.01)]
    pub isdda_radius_prior_weight: Decimal,

    #[arg(long = "isdda-min-iterations", default_value_t = 5)]
    pub isdda_min_iterations: u32,

    #[arg(long = "isdda-max-iterations", default_value_t = 50)]
    pub isdda_max_iterations: u32,

    #[arg(long = "isdda-learning-rate", default_value_t = 0.1)]
    pub isdda_learning_rate: Decimal,

    #[arg(long = "output-file")]
    pub output_file: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DistanceAlgo {
    Sdda,
    Isdda,
}

#[derive(Args, Debug)]
pub struct OrbitArgs {
    #[arg(long = "position-data")]
    pub position_data: PathBuf,

    #[arg(long = "output-form", default_value = "text")]
    pub output_form: String,

    #[arg(long = "total-time")]
    pub total_time: Decimal,

    #[arg(long = "time-step")]
    pub time_step: Decimal,

    #[arg(long, default_value_t = 6_371_000.0)]
    pub radius: Decimal,

    #[arg(long, default_value_t = 3.986004418e14)]
    pub mu: Decimal,

    #[arg(long = "output-file")]
    pub output_file: PathBuf,
}

/// Parses three comma- or space-separated decimal degree values into
/// [`EulerAngles`], converting to radians on ingest (spec.md SS6).
pub fn parse_euler(s: &str) -> Result<EulerAngles, String> {
    let parts: Vec<&str> = s.split([',', ' ']).map(str::trim).filter(|p| !p.is_empty()).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma- or space-separated values, got \"{s}\""));
    }
    let mut values = [0.0 as Decimal; 3];
    for (slot, part) in values.iter_mut().zip(parts.iter()) {
        *slot = part.parse::<Decimal>().map_err(|_| format!("invalid decimal value \"{part}\""))?.to_radians();
    }
    Ok(EulerAngles::new(values[0], values[1], values[2]))
}

/// Parses the boolean flag syntax of spec.md SS6: absent -> false (via
/// clap's default), flag alone -> true (via `default_missing_value`),
/// `0`/`false`/empty -> false, anything else -> true.
pub fn parse_bool_flag(s: &str) -> Result<bool, String> {
    match s.trim() {
        "" | "0" | "false" => Ok(false),
        _ => Ok(true),
    }
}

#[cfg(test)]
mod ut_args {
    use super::*;

    #[test]
    fn parses_comma_separated_euler() {
        let angles = parse_euler("90,0,0").unwrap();
        assert!((angles.ra - std::f64::consts::FRAC_PI_2 as Decimal).abs() < 1e-9);
    }

    #[test]
    fn parses_space_separated_euler() {
        let angles = parse_euler("0 0 180").unwrap();
        assert!((angles.roll - std::f64::consts::PI as Decimal).abs() < 1e-9);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(parse_euler("1,2").is_err());
    }

    #[test]
    fn bool_flag_syntax() {
        assert_eq!(parse_bool_flag("0").unwrap(), false);
        assert_eq!(parse_bool_flag("false").unwrap(), false);
        assert_eq!(parse_bool_flag("").unwrap(), false);
        assert_eq!(parse_bool_flag("true").unwrap(), true);
        assert_eq!(parse_bool_flag("yes").unwrap(), true);
    }
}
