/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zerocopy::byteorder::big_endian::U64 as BeU64;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::math::{Decimal, Vec3};

pub const QUATERNION_LEN: usize = 32;
pub const RECORD_LEN: usize = 32;

/// The on-disk, big-endian layout of a quaternion or location record: four
/// 64-bit IEEE-754 fields, always `f64` regardless of the build's
/// `decimal` width (spec.md SS4.8).
#[derive(FromZeroes, FromBytes, AsBytes, Debug, Clone, Copy, PartialEq)]
#[repr(C)]
struct RawQuad {
    a: BeU64,
    b: BeU64,
    c: BeU64,
    d: BeU64,
}

impl RawQuad {
    fn from_f64s(values: [f64; 4]) -> Self {
        Self {
            a: values[0].to_bits().into(),
            b: values[1].to_bits().into(),
            c: values[2].to_bits().into(),
            d: values[3].to_bits().into(),
        }
    }

    fn to_f64s(self) -> [f64; 4] {
        [
            f64::from_bits(self.a.into()),
            f64::from_bits(self.b.into()),
            f64::from_bits(self.c.into()),
            f64::from_bits(self.d.into()),
        ]
    }
}

/// Serializes a quaternion's `(real, i, j, k)` as four big-endian `f64`s,
/// widening from the build's `Decimal` if necessary.
pub fn quaternion_to_bytes(q: &crate::math::rotation::Quaternion) -> [u8; QUATERNION_LEN] {
    let raw = RawQuad::from_f64s([q.real as f64, q.i as f64, q.j as f64, q.k as f64]);
    let mut out = [0u8; QUATERNION_LEN];
    out.copy_from_slice(raw.as_bytes());
    out
}

/// Deserializes a quaternion, narrowing to `Decimal` if the build uses
/// `decimal-f32`.
pub fn quaternion_from_bytes(bytes: &[u8]) -> crate::math::rotation::Quaternion {
    let raw = RawQuad::read_from(bytes).expect("caller guarantees QUATERNION_LEN bytes");
    let [real, i, j, k] = raw.to_f64s();
    crate::math::rotation::Quaternion::new(real as Decimal, i as Decimal, j as Decimal, k as Decimal)
}

/// A single recorded satellite position with its timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationRecord {
    pub position: Vec3,
    pub timestamp: Decimal,
}

impl LocationRecord {
    pub fn new(position: Vec3, timestamp: Decimal) -> Self {
        Self { position, timestamp }
    }

    pub fn to_bytes(self) -> [u8; RECORD_LEN] {
        let raw = RawQuad::from_f64s([
            self.position.x as f64,
            self.position.y as f64,
            self.position.z as f64,
            self.timestamp as f64,
        ]);
        let mut out = [0u8; RECORD_LEN];
        out.copy_from_slice(raw.as_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let raw = RawQuad::read_from(bytes).expect("caller guarantees RECORD_LEN bytes");
        let [x, y, z, t] = raw.to_f64s();
        Self { position: Vec3::new(x as Decimal, y as Decimal, z as Decimal), timestamp: t as Decimal }
    }
}
