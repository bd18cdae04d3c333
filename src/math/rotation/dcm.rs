/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::math::{angle_unit, Decimal, Mat3, Vec3};

use super::Quaternion;

/// A direction cosine matrix: an orthogonal 3x3 rotation matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DCM(pub Mat3);

impl DCM {
    pub fn from_matrix(m: Mat3) -> Self {
        Self(m)
    }

    /// Rotates `v` by this DCM.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        self.0 * v
    }

    pub fn column(&self, i: usize) -> Vec3 {
        self.0.column(i).into_owned()
    }

    /// `true` iff `D . D^T = I` within `tolerance`.
    pub fn is_orthogonal(&self, tolerance: Decimal) -> bool {
        let should_be_identity = self.0 * self.0.transpose();
        (should_be_identity - Mat3::identity()).iter().all(|x| x.abs() < tolerance)
    }
}

/// Materializes the three rotated basis vectors as the columns of a DCM
/// (spec.md SS4.1).
pub fn quaternion_to_dcm(q: &Quaternion) -> DCM {
    let x = q.rotate(Vec3::new(1.0, 0.0, 0.0));
    let y = q.rotate(Vec3::new(0.0, 1.0, 0.0));
    let z = q.rotate(Vec3::new(0.0, 0.0, 1.0));
    DCM(Mat3::from_columns(&[x, y, z]))
}

/// Reconstructs a quaternion from a DCM by first aligning +X with the
/// DCM's first column, then rotating about that new +X to align +Y; the
/// handedness of the residual Y-axis cross product selects the rotation
/// sign (spec.md SS4.1).
pub fn dcm_to_quaternion(dcm: &DCM) -> Quaternion {
    let old_x = Vec3::new(1.0, 0.0, 0.0);
    let new_x = dcm.column(0);
    let x_align_axis = old_x.cross(&new_x).normalize();
    let x_align_angle = angle_unit(&old_x, &new_x);
    let x_align = Quaternion::axis_angle(x_align_axis, x_align_angle);

    let old_y = x_align.rotate(Vec3::new(0.0, 1.0, 0.0));
    let new_y = dcm.column(1);
    let rotate_clockwise = old_y.cross(&new_y).dot(&new_x) > 0.0;
    let sign = if rotate_clockwise { 1.0 } else { -1.0 };
    let y_align = Quaternion::axis_angle(Vec3::new(1.0, 0.0, 0.0), angle_unit(&old_y, &new_y) * sign);

    x_align * y_align
}
