/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::math::rotation::Attitude;
use crate::math::Vec3;
use crate::pipeline::Stage;

/// Rotates a camera-frame Earth-centre vector into the celestial frame
/// using a reference orientation and an optional calibration-derived
/// relative orientation (spec.md SS4.6).
pub struct VectorGenerator {
    reference: Attitude,
    relative: Option<Attitude>,
}

impl VectorGenerator {
    pub fn new(reference: Attitude, relative: Attitude) -> Self {
        Self { reference, relative: Some(relative) }
    }

    /// When configured with `reference-as-orientation`, the relative
    /// orientation is ignored and `q = q_ref`.
    pub fn reference_only(reference: Attitude) -> Self {
        Self { reference, relative: None }
    }

    /// `v_e` is the camera-frame vector from the satellite toward Earth's
    /// centre; the result is the satellite's position in the celestial
    /// frame, with Earth at the origin.
    pub fn run(&self, v_e: Vec3) -> Vec3 {
        let q = match self.relative {
            Some(relative) => self.reference.quaternion() * relative.quaternion(),
            None => self.reference.quaternion(),
        };
        let earth_to_satellite = -v_e;
        q.rotate(earth_to_satellite)
    }
}

impl Stage<Vec3, Vec3> for VectorGenerator {
    fn run(&self, v_e: Vec3) -> Vec3 {
        VectorGenerator::run(self, v_e)
    }
}

#[cfg(test)]
mod ut_vectorgen {
    use super::*;
    use crate::math::rotation::Quaternion;

    #[test]
    fn reference_only_negates_and_rotates() {
        let reference = Attitude::from_quaternion(Quaternion::identity());
        let gen = VectorGenerator::reference_only(reference);
        let result = gen.run(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(result, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn composes_reference_and_relative() {
        let reference = Attitude::from_quaternion(Quaternion::axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2 as _));
        let relative = Attitude::from_quaternion(Quaternion::identity());
        let gen = VectorGenerator::new(reference, relative);
        let result = gen.run(Vec3::new(1.0, 0.0, 0.0));
        assert!((result.norm() - 1.0).abs() < 1e-6);
    }
}
