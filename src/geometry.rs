/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::math::rotation::spherical_to_quaternion;
use crate::math::rotation::EulerAngles;
use crate::math::{Decimal, Vec3};

/// A geodetic-style fix: longitude and latitude in degrees, and altitude
/// as the raw vector magnitude (spec.md SS4.10).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthCoordinates {
    pub longitude_deg: Decimal,
    pub latitude_deg: Decimal,
    pub altitude: Decimal,
}

/// Rotates a celestial-frame position vector into Earth's rotating frame
/// by `GMST_rad` about the Z-axis, then reads off longitude, latitude,
/// and altitude.
pub fn to_earth_coordinates(v: Vec3, gmst_rad: Decimal) -> EarthCoordinates {
    let q = spherical_to_quaternion(EulerAngles::new(gmst_rad, 0.0, 0.0));
    let rotated = q.rotate(v);

    let longitude_rad = rotated.y.atan2(rotated.x);
    let magnitude = rotated.norm();
    let latitude_rad = (rotated.z / magnitude).asin();

    EarthCoordinates {
        longitude_deg: longitude_rad.to_degrees(),
        latitude_deg: latitude_rad.to_degrees(),
        altitude: magnitude,
    }
}

#[cfg(test)]
mod ut_geometry {
    use super::*;

    #[test]
    fn zero_gmst_reads_vector_directly() {
        let v = Vec3::new(7_000_000.0, 0.0, 0.0);
        let fix = to_earth_coordinates(v, 0.0);
        assert!((fix.longitude_deg - 0.0).abs() < 1e-6);
        assert!((fix.latitude_deg - 0.0).abs() < 1e-6);
        assert!((fix.altitude - 7_000_000.0).abs() < 1e-3);
    }

    #[test]
    fn quarter_turn_gmst_rotates_longitude() {
        let v = Vec3::new(7_000_000.0, 0.0, 0.0);
        let fix = to_earth_coordinates(v, std::f64::consts::FRAC_PI_2 as Decimal);
        assert!((fix.longitude_deg - (-90.0)).abs() < 1e-3 || (fix.longitude_deg - 90.0).abs() < 1e-3);
    }
}
