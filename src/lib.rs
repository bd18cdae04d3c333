/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! FOUND estimates a spacecraft's position relative to Earth from a single
//! image of Earth's limb, and propagates a series of such positions forward
//! in time.

pub mod calibration;
pub mod camera;
pub mod cli;
pub mod datafile;
pub mod distance;
pub mod edge;
pub mod errors;
pub mod executors;
pub mod geometry;
pub mod image;
pub mod math;
pub mod orbit;
pub mod pipeline;
pub mod vectorgen;

pub mod prelude {
    pub use crate::calibration::LostCalibrator;
    pub use crate::camera::Camera;
    pub use crate::datafile::{DataFile, DataFileHeader, LocationRecord};
    pub use crate::errors::FoundError;
    pub use crate::math::rotation::{Attitude, EulerAngles, Quaternion, DCM};
    pub use crate::math::{Decimal, Vec2, Vec3};
    pub use crate::pipeline::{Action, ModifyingPipeline, ModifyingStage, SequentialPipeline, Stage};
}

/// The default cap on the number of stages a pipeline can hold.
pub const DEFAULT_NUM_STAGES: usize = 10;
