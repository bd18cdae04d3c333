/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::math::Decimal;

use super::Quaternion;

/// A z-y'-x'' (yaw, pitch, roll) Euler angle triple.
///
/// `ra` (yaw) and `roll` lie in `[0, 2*pi)`; `de` (pitch) lies in
/// `[-pi/2, pi/2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerAngles {
    pub ra: Decimal,
    pub de: Decimal,
    pub roll: Decimal,
}

impl EulerAngles {
    pub const fn new(ra: Decimal, de: Decimal, roll: Decimal) -> Self {
        Self { ra, de, roll }
    }

    pub(crate) fn from_quaternion(q: &Quaternion) -> Self {
        // Same convention as https://en.wikipedia.org/wiki/Conversion_between_quaternions_and_Euler_angles,
        // adjusted for de/roll running in the opposite sense and for the
        // conjugate storage convention used by `spherical_to_quaternion`.
        let (real, i, j, k) = (q.real, q.i, q.j, q.k);
        let mut ra = (2.0 * (-real * k + i * j)).atan2(1.0 - 2.0 * (j * j + k * k));
        if ra < 0.0 {
            ra += 2.0 * std::f64::consts::PI as Decimal;
        }
        let de = -(2.0 * (-real * j - i * k)).asin();
        let mut roll = -(2.0 * (-real * i + j * k)).atan2(1.0 - 2.0 * (i * i + j * j));
        if roll < 0.0 {
            roll += 2.0 * std::f64::consts::PI as Decimal;
        }
        EulerAngles::new(ra, de, roll)
    }
}

/// Converts yaw/pitch/roll into a unit quaternion by composing three
/// axis-angle rotations -- z by `ra`, y by `-de`, x by `-roll` -- and
/// returning the conjugate of the product (spec.md SS4.1).
pub fn spherical_to_quaternion(angles: EulerAngles) -> Quaternion {
    use crate::math::Vec3;

    let a = Quaternion::axis_angle(Vec3::new(0.0, 0.0, 1.0), angles.ra);
    let b = Quaternion::axis_angle(Vec3::new(0.0, 1.0, 0.0), -angles.de);
    let c = Quaternion::axis_angle(Vec3::new(1.0, 0.0, 0.0), -angles.roll);
    let result = (a * b * c).conjugate();
    debug_assert!(result.is_unit(1e-5));
    result
}

#[cfg(test)]
mod ut_euler {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, 0.0)]
    #[case(1.0, 0.2, 2.5)]
    #[case(3.0, -0.5, 5.0)]
    fn round_trips_through_quaternion(#[case] ra: Decimal, #[case] de: Decimal, #[case] roll: Decimal) {
        let angles = EulerAngles::new(ra, de, roll);
        let q = spherical_to_quaternion(angles);
        let back = q.to_spherical();
        assert!((back.ra - ra).abs() < 1e-4 || (back.ra - ra).abs() > 2.0 * std::f64::consts::PI as Decimal - 1e-4);
        assert!((back.de - de).abs() < 1e-4);
        assert!((back.roll - roll).abs() < 1e-4 || (back.roll - roll).abs() > 2.0 * std::f64::consts::PI as Decimal - 1e-4);
    }
}
