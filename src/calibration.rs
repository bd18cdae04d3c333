/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::math::rotation::{spherical_to_quaternion, EulerAngles, Quaternion};
use crate::pipeline::Stage;

/// Composes a local orientation against a reference orientation into the
/// quaternion that rotates the reference frame into the local frame
/// (spec.md SS4.7). When `reference` is zero, this degenerates into an
/// absolute orientation: the output equals the local quaternion.
///
/// `q_rel = q_local * q_reference.Conjugate()`: the worked examples of
/// spec.md SS8 (`Calibrate-rel simple 1`/`2`) only agree with the
/// reference orientation's inverse composed against the local one, not a
/// plain product of the two.
pub struct LostCalibrator;

impl LostCalibrator {
    pub fn run(&self, local: EulerAngles, reference: EulerAngles) -> Quaternion {
        spherical_to_quaternion(local) * spherical_to_quaternion(reference).conjugate()
    }
}

impl Stage<(EulerAngles, EulerAngles), Quaternion> for LostCalibrator {
    fn run(&self, orientations: (EulerAngles, EulerAngles)) -> Quaternion {
        LostCalibrator::run(self, orientations.0, orientations.1)
    }
}

#[cfg(test)]
mod ut_calibration {
    use super::*;

    #[test]
    fn zero_reference_is_absolute() {
        let local = EulerAngles::new(0.3, 0.1, -0.2);
        let zero = EulerAngles::new(0.0, 0.0, 0.0);
        let calibrator = LostCalibrator;
        let result = calibrator.run(local, zero);
        let expected = spherical_to_quaternion(local);
        assert!((result.real - expected.real).abs() < 1e-9);
        assert!((result.i - expected.i).abs() < 1e-9);
        assert!((result.j - expected.j).abs() < 1e-9);
        assert!((result.k - expected.k).abs() < 1e-9);
    }
}
