/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::math::Vec3;

use super::dcm::{dcm_to_quaternion, quaternion_to_dcm, DCM};
use super::Quaternion;

/// An orientation stored as *either* a quaternion or a DCM, remembering
/// which so the other representation is computed lazily on read
/// (spec.md SS3).
#[derive(Clone, Copy, Debug)]
pub enum Attitude {
    Quaternion(Quaternion),
    Dcm(DCM),
}

impl Attitude {
    pub fn from_quaternion(q: Quaternion) -> Self {
        Attitude::Quaternion(q)
    }

    pub fn from_dcm(dcm: DCM) -> Self {
        Attitude::Dcm(dcm)
    }

    /// The quaternion representation, converting from a DCM if necessary.
    pub fn quaternion(&self) -> Quaternion {
        match self {
            Attitude::Quaternion(q) => *q,
            Attitude::Dcm(dcm) => dcm_to_quaternion(dcm),
        }
    }

    /// The DCM representation, converting from a quaternion if necessary.
    pub fn dcm(&self) -> DCM {
        match self {
            Attitude::Dcm(dcm) => *dcm,
            Attitude::Quaternion(q) => quaternion_to_dcm(q),
        }
    }

    /// Rotates `v` from the reference frame into the body frame.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        match self {
            Attitude::Quaternion(q) => q.rotate(v),
            Attitude::Dcm(dcm) => dcm.rotate(v),
        }
    }
}
