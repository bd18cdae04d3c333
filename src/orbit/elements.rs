/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::math::{Decimal, Vec3};

const EPS: Decimal = 1e-10;

/// The six classical orbital elements: specific angular momentum,
/// eccentricity, right ascension of the ascending node, inclination,
/// argument of perigee, and true anomaly (spec.md SS4.9).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub h: Decimal,
    pub e: Decimal,
    pub raan: Decimal,
    pub inclination: Decimal,
    pub arg_perigee: Decimal,
    pub true_anomaly: Decimal,
}

/// Converts a state vector `(r, v)` into classical orbital elements.
/// Falls back to placing `arg_perigee`/`raan` at zero when the orbit is
/// circular or equatorial, deriving true anomaly from the position vector
/// directly.
pub fn state_vector_to_elements(r: Vec3, v: Vec3, mu: Decimal) -> OrbitalElements {
    let r_mag = r.norm();
    let radial_velocity = r.dot(&v) / r_mag;

    let h_vec = r.cross(&v);
    let h = h_vec.norm();

    let inclination = (h_vec.z / h).acos();

    let k = Vec3::new(0.0, 0.0, 1.0);
    let n_vec = k.cross(&h_vec);
    let n = n_vec.norm();

    let raan = if n > EPS {
        let mut raan = (n_vec.x / n).acos();
        if n_vec.y < 0.0 {
            raan = 2.0 * std::f64::consts::PI as Decimal - raan;
        }
        raan
    } else {
        0.0
    };

    let e_vec = (r * (v.dot(&v) - mu / r_mag) - v * (r_mag * radial_velocity)) * (1.0 / mu);
    let e = e_vec.norm();

    let arg_perigee = if n > EPS && e > EPS {
        let mut w = (n_vec.dot(&e_vec) / (n * e)).clamp(-1.0, 1.0).acos();
        if e_vec.z < 0.0 {
            w = 2.0 * std::f64::consts::PI as Decimal - w;
        }
        w
    } else {
        0.0
    };

    let true_anomaly = if e > EPS {
        let mut ta = (e_vec.dot(&r) / (e * r_mag)).clamp(-1.0, 1.0).acos();
        if radial_velocity < 0.0 {
            ta = 2.0 * std::f64::consts::PI as Decimal - ta;
        }
        ta
    } else {
        let cos_ta = (r.x / r_mag).clamp(-1.0, 1.0);
        if r.y >= 0.0 {
            cos_ta.acos()
        } else {
            2.0 * std::f64::consts::PI as Decimal - cos_ta.acos()
        }
    };

    OrbitalElements { h, e, raan, inclination, arg_perigee, true_anomaly }
}

/// Converts classical orbital elements back into a state vector `(r, v)`,
/// via the perifocal frame and the Z-X-Z rotation into the geocentric
/// equatorial frame.
pub fn elements_to_state_vector(elements: &OrbitalElements, mu: Decimal) -> (Vec3, Vec3) {
    let OrbitalElements { h, e, raan, inclination, arg_perigee, true_anomaly } = *elements;

    let (sin_ta, cos_ta) = true_anomaly.sin_cos();
    let radius = (h * h / mu) / (1.0 + e * cos_ta);
    let r_perifocal = Vec3::new(radius * cos_ta, radius * sin_ta, 0.0);
    let v_perifocal = Vec3::new(-(mu / h) * sin_ta, (mu / h) * (e + cos_ta), 0.0);

    let (sin_raan, cos_raan) = raan.sin_cos();
    let (sin_incl, cos_incl) = inclination.sin_cos();
    let (sin_w, cos_w) = arg_perigee.sin_cos();

    let r11 = cos_raan * cos_w - sin_raan * sin_w * cos_incl;
    let r12 = cos_raan * sin_w + sin_raan * cos_w * cos_incl;
    let r13 = sin_raan * sin_incl;

    let r21 = -sin_raan * cos_w - cos_raan * sin_w * cos_incl;
    let r22 = -sin_raan * sin_w + cos_raan * cos_w * cos_incl;
    let r23 = cos_raan * sin_incl;

    let r31 = sin_w * sin_incl;
    let r32 = -cos_w * sin_incl;
    let r33 = cos_incl;

    let rotate = |p: Vec3| {
        Vec3::new(r11 * p.x + r12 * p.y + r13 * p.z, r21 * p.x + r22 * p.y + r23 * p.z, r31 * p.x + r32 * p.y + r33 * p.z)
    };

    (rotate(r_perifocal), rotate(v_perifocal))
}

/// The specific angular momentum of an orbit with periapsis altitude
/// `altitude` above a body of the given `radius`, gravitational
/// parameter `mu`, and eccentricity `e`.
pub fn altitude_to_specific_angular_momentum(e: Decimal, altitude: Decimal, mu: Decimal, radius: Decimal) -> Decimal {
    let periapsis_radius = radius + altitude;
    let semi_major_axis = periapsis_radius / (1.0 - e);
    (mu * semi_major_axis * (1.0 - e * e)).sqrt()
}
