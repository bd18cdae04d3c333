/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::Mul;

use crate::math::{Decimal, Vec3, EPSILON};

/// A unit quaternion `(real, i, j, k)` representing a rotation.
///
/// A quaternion and its negation represent the same rotation; the
/// *canonical* form has `real >= 0` (see [`Quaternion::canonicalize`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub real: Decimal,
    pub i: Decimal,
    pub j: Decimal,
    pub k: Decimal,
}

impl Quaternion {
    pub const fn new(real: Decimal, i: Decimal, j: Decimal, k: Decimal) -> Self {
        Self { real, i, j, k }
    }

    /// The identity rotation.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Constructs the quaternion representing a rotation of `theta` radians
    /// about `axis`. `axis` need not be unit; it is normalized first.
    pub fn axis_angle(axis: Vec3, theta: Decimal) -> Self {
        let axis = axis.normalize();
        let (s, c) = (theta / 2.0).sin_cos();
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    fn norm(&self) -> Decimal {
        (self.real * self.real + self.i * self.i + self.j * self.j + self.k * self.k).sqrt()
    }

    /// True iff this is a unit quaternion within `tolerance`.
    pub fn is_unit(&self, tolerance: Decimal) -> bool {
        ((self.norm() * self.norm()) - 1.0).abs() < tolerance
    }

    pub fn normalize(&self) -> Self {
        let n = self.norm();
        Self::new(self.real / n, self.i / n, self.j / n, self.k / n)
    }

    /// The vector formed by the imaginary components.
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.i, self.j, self.k)
    }

    /// The conjugate, which for a unit quaternion is also its inverse.
    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.i, -self.j, -self.k)
    }

    /// Rotates `v` by this quaternion: `q . (0, v) . q^-1`.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let qv = Quaternion::new(0.0, v.x, v.y, v.z);
        (*self * qv * self.conjugate()).vector()
    }

    /// The rotation angle represented by this quaternion, in `[0, 2*pi)`.
    ///
    /// `real <= -1` is treated as a full turn (angle 0) rather than an
    /// error, matching the source algorithm's handling of floating-point
    /// overshoot past the domain of `acos`.
    pub fn angle(&self) -> Decimal {
        if self.real <= -1.0 {
            return 0.0;
        }
        let real = self.real.min(1.0);
        2.0 * real.acos()
    }

    /// The representative of this rotation with non-negative real part.
    pub fn canonicalize(&self) -> Self {
        if self.real >= 0.0 {
            *self
        } else {
            Self::new(-self.real, -self.i, -self.j, -self.k)
        }
    }

    /// Converts this quaternion into z-y'-x'' Euler angles (spec.md SS4.1).
    pub fn to_spherical(&self) -> super::EulerAngles {
        super::EulerAngles::from_quaternion(self)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, other: Quaternion) -> Quaternion {
        Quaternion::new(
            self.real * other.real - self.i * other.i - self.j * other.j - self.k * other.k,
            self.real * other.i + other.real * self.i + self.j * other.k - self.k * other.j,
            self.real * other.j - self.i * other.k + other.real * self.j + self.k * other.i,
            self.real * other.k + self.i * other.j - self.j * other.i + other.real * self.k,
        )
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::new(-self.real, -self.i, -self.j, -self.k)
    }
}

/// True iff the dot product of `a` and `b` equals `|a||b|`, i.e. they
/// describe the same rotation up to sign (see spec.md SS3).
pub(crate) fn approx_eq(a: &Quaternion, b: &Quaternion) -> bool {
    let a = a.canonicalize();
    let b = b.canonicalize();
    (a.real - b.real).abs() < EPSILON
        && (a.i - b.i).abs() < EPSILON
        && (a.j - b.j).abs() < EPSILON
        && (a.k - b.k).abs() < EPSILON
}
