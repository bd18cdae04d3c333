/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Spatial primitives: vectors, matrices, and rotations.

pub mod rotation;

/// The scalar type used throughout the in-memory math. Chosen at build time
/// via the `decimal-f32` feature; the on-disk format is always `f64`
/// regardless of this choice (spec.md SS4.8).
#[cfg(feature = "decimal-f32")]
pub type Decimal = f32;
#[cfg(not(feature = "decimal-f32"))]
pub type Decimal = f64;

/// The smallest difference treated as zero when comparing unit-magnitude
/// invariants (spec.md SS3).
pub const EPSILON: Decimal = 1e-5;

pub type Vec2 = nalgebra::Vector2<Decimal>;
pub type Vec3 = nalgebra::Vector3<Decimal>;
pub type Mat3 = nalgebra::Matrix3<Decimal>;

/// True iff `v` has unit magnitude within [`EPSILON`].
pub fn is_unit_vec3(v: &Vec3) -> bool {
    (v.norm() - 1.0).abs() < EPSILON
}

/// The midpoint between two points.
pub fn midpoint(a: &Vec3, b: &Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// The angle between two unit vectors, clamping the dot product into
/// `(-1+EPSILON, 1)` before taking `acos` (spec.md SS4.1 `AngleUnit`).
///
/// Callers must supply unit vectors; this function does not renormalize.
pub fn angle_unit(a: &Vec3, b: &Vec3) -> Decimal {
    let d = a.dot(b).clamp(-1.0 + EPSILON, 1.0);
    d.acos()
}
