/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::camera::Camera;
use crate::cli::{DistanceAlgo, DistanceArgs};
use crate::datafile::{DataFile, LocationRecord};
use crate::distance::SphericalDistanceDetector;
use crate::edge::SimpleThresholdDetector;
use crate::errors::{FoundError, FoundResult};
use crate::image::Image;
use crate::math::rotation::{spherical_to_quaternion, Attitude, Quaternion};
use crate::vectorgen::VectorGenerator;

use super::io_error;

/// Detects Earth's limb in `image`, reconstructs the camera-frame
/// Earth-centre vector, rotates it into the celestial frame, and writes
/// the resulting position to `output-file` (spec.md SS4.4-4.6, SS6).
pub fn run(args: &DistanceArgs) -> FoundResult<()> {
    log::info!("distance: entering pipeline for {}", args.image.display());

    match run_inner(args) {
        Ok(()) => {
            log::info!("distance: pipeline exited cleanly");
            Ok(())
        }
        Err(err) => {
            log::error!("distance: pipeline failed: {err}");
            Err(err)
        }
    }
}

fn run_inner(args: &DistanceArgs) -> FoundResult<()> {
    let image = Image::open(&args.image)?;

    let camera = Camera::ideal(args.camera_focal_length, args.camera_pixel_size, args.camera_x_resolution, args.camera_y_resolution);

    let edge_detector = SimpleThresholdDetector::new(args.seda_threshold, args.seda_border_len, args.seda_offset, args.seda_filter_components);
    let limb_points = edge_detector.detect(&image)?;
    if limb_points.len() < 3 {
        log::warn!("distance: only {} limb point(s) detected, below the minimum of 3", limb_points.len());
    }

    let v_e = match args.distance_algo {
        DistanceAlgo::Sdda => SphericalDistanceDetector::new(camera, args.planetary_radius).run(&limb_points)?,
        DistanceAlgo::Isdda => isdda_distance(camera, args, &limb_points)?,
    };

    let reference = Attitude::from_quaternion(spherical_to_quaternion(args.reference_orientation));

    let generator = if args.reference_as_orientation {
        VectorGenerator::reference_only(reference)
    } else {
        let relative = match &args.calibration_data {
            Some(path) => {
                let calibration = DataFile::read(path).map_err(|source| io_error(path, source))?;
                Attitude::from_quaternion(calibration.relative_attitude)
            }
            None => Attitude::from_quaternion(spherical_to_quaternion(args.relative_orientation)),
        };
        VectorGenerator::new(reference, relative)
    };

    let position = generator.run(v_e);
    log::info!("recovered position: {position:?}");

    let datafile = DataFile::new(Quaternion::identity(), vec![LocationRecord::new(position, 0.0)]);
    datafile.write(&args.output_file).map_err(|source| io_error(&args.output_file, source))?;

    Ok(())
}

#[cfg(feature = "isdda")]
fn isdda_distance(camera: Camera, args: &DistanceArgs, limb_points: &[crate::math::Vec2]) -> FoundResult<crate::math::Vec3> {
    use crate::distance::{IsddaParams, IterativeSphericalDistanceDetector};
    let params = IsddaParams {
        loss_order: args.isdda_loss_order,
        radius_prior_weight: args.isdda_radius_prior_weight,
        min_iterations: args.isdda_min_iterations,
        max_iterations: args.isdda_max_iterations,
        learning_rate: args.isdda_learning_rate,
    };
    let detector = IterativeSphericalDistanceDetector::new(camera, args.planetary_radius, params);
    Ok(detector.run(limb_points)?)
}

#[cfg(not(feature = "isdda"))]
fn isdda_distance(_camera: Camera, _args: &DistanceArgs, _limb_points: &[crate::math::Vec2]) -> FoundResult<crate::math::Vec3> {
    Err(FoundError::InvalidArgument {
        what: "distance-algo=ISDDA requires the isdda feature".to_string(),
    })
}
