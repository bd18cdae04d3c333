/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::calibration::LostCalibrator;
use crate::cli::CalibrationArgs;
use crate::datafile::DataFile;
use crate::errors::FoundResult;
use crate::math::rotation::{EulerAngles, Quaternion};
use crate::pipeline::SequentialPipeline;

use super::io_error;

/// Composes `local-orientation` against `reference-orientation` and writes
/// the resulting relative attitude to `output-file` as a data file with no
/// position records, so it can later be handed to `distance` as
/// `calibration-data` (spec.md SS4.7, SS6).
pub fn run(args: &CalibrationArgs) -> FoundResult<()> {
    log::info!("calibration: entering pipeline");

    match run_inner(args) {
        Ok(()) => {
            log::info!("calibration: pipeline exited cleanly");
            Ok(())
        }
        Err(err) => {
            log::error!("calibration: pipeline failed: {err}");
            Err(err)
        }
    }
}

fn run_inner(args: &CalibrationArgs) -> FoundResult<()> {
    let mut pipeline: SequentialPipeline<(EulerAngles, EulerAngles), Quaternion> = SequentialPipeline::new();
    pipeline.complete(LostCalibrator)?;

    let relative_attitude = pipeline.try_run((args.local_orientation, args.reference_orientation))?;

    log::info!(
        "calibrated relative attitude: euler = {:?}",
        EulerAngles::from_quaternion(&relative_attitude)
    );

    let datafile = DataFile::new(relative_attitude, Vec::new());
    datafile.write(&args.output_file).map_err(|source| io_error(&args.output_file, source))?;

    Ok(())
}
