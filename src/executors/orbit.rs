/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use hifitime::Epoch;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OrbitArgs;
use crate::datafile::{DataFile, LocationRecord};
use crate::errors::{FoundError, FoundResult};
use crate::math::rotation::Quaternion;
use crate::math::{Decimal, Vec3};
use crate::orbit::OrbitPropagator;

use super::io_error;

#[derive(Tabled)]
struct Row {
    timestamp: Epoch,
    x: Decimal,
    y: Decimal,
    z: Decimal,
    altitude: Decimal,
}

impl From<&LocationRecord> for Row {
    fn from(record: &LocationRecord) -> Self {
        Self {
            timestamp: Epoch::from_tai_seconds(record.timestamp as f64),
            x: record.position.x,
            y: record.position.y,
            z: record.position.z,
            altitude: record.position.norm(),
        }
    }
}

/// Loads a position history from `position-data` (a `.found` data file or
/// a whitespace-delimited text fallback), propagates it `total-time`
/// seconds forward in `time-step`-second increments, and writes the result
/// to `output-file`. When `output-form` is `"text"`, also prints the
/// propagated history as a table (spec.md SS4.9, SS6). Position timestamps
/// remain raw TAI-second offsets for the propagation math; they're only
/// wrapped in a [`hifitime::Epoch`] for display (SPEC_FULL.md SS B).
pub fn run(args: &OrbitArgs) -> FoundResult<()> {
    log::info!("orbit: entering pipeline for {}", args.position_data.display());

    match run_inner(args) {
        Ok(()) => {
            log::info!("orbit: pipeline exited cleanly");
            Ok(())
        }
        Err(err) => {
            log::error!("orbit: pipeline failed: {err}");
            Err(err)
        }
    }
}

fn run_inner(args: &OrbitArgs) -> FoundResult<()> {
    let history = load_positions(&args.position_data)?;
    if history.is_empty() {
        log::warn!("orbit: position history at {} is empty", args.position_data.display());
    }

    let propagator = OrbitPropagator::new(args.mu, args.radius, args.time_step, args.total_time);
    let propagated = propagator.run(&history)?;

    if args.output_form == "text" {
        let rows: Vec<Row> = propagated.iter().map(Row::from).collect();
        let mut table = Table::new(rows);
        let table = table.with(Style::rounded());
        println!("{table}");
    }

    let datafile = DataFile::new(Quaternion::identity(), propagated);
    datafile.write(&args.output_file).map_err(|source| io_error(&args.output_file, source))?;

    Ok(())
}

fn load_positions(path: &Path) -> FoundResult<Vec<LocationRecord>> {
    if path.extension().and_then(|ext| ext.to_str()) == Some("found") {
        let datafile = DataFile::read(path).map_err(|source| io_error(path, source))?;
        Ok(datafile.positions)
    } else {
        parse_text_positions(path)
    }
}

/// Parses the text fallback format: one `timestamp posX posY posZ` record
/// per whitespace-delimited line (spec.md SS6).
fn parse_text_positions(path: &Path) -> FoundResult<Vec<LocationRecord>> {
    let contents = std::fs::read_to_string(path).map_err(|source| io_error(path, source))?;

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_position_line(line))
        .collect()
}

fn parse_position_line(line: &str) -> FoundResult<LocationRecord> {
    let malformed = || FoundError::InvalidArgument {
        what: format!("malformed position record line: \"{line}\""),
    };

    let fields: Vec<Decimal> = line
        .split_whitespace()
        .map(|field| field.parse::<Decimal>().map_err(|_| malformed()))
        .collect::<FoundResult<Vec<_>>>()?;

    match fields.as_slice() {
        [timestamp, x, y, z] => Ok(LocationRecord::new(Vec3::new(*x, *y, *z), *timestamp)),
        _ => Err(malformed()),
    }
}
