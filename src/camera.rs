/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::math::{Decimal, Vec2, Vec3};

/// A pinhole camera model: focal length, pixel pitch, principal point and
/// resolution, enough to reconstruct a camera matrix (spec.md SS4.2).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    focal_length: Decimal,
    pixel_size: Decimal,
    x_center: Decimal,
    y_center: Decimal,
    x_resolution: u32,
    y_resolution: u32,
}

impl Camera {
    /// Builds a camera from real parameters, with an explicit principal
    /// point (it need not be exactly the resolution midpoint).
    pub fn new(
        focal_length: Decimal,
        pixel_size: Decimal,
        x_center: Decimal,
        y_center: Decimal,
        x_resolution: u32,
        y_resolution: u32,
    ) -> Self {
        Self {
            focal_length,
            pixel_size,
            x_center,
            y_center,
            x_resolution,
            y_resolution,
        }
    }

    /// Builds an ideal camera whose principal point sits at the resolution
    /// midpoint.
    pub fn ideal(focal_length: Decimal, pixel_size: Decimal, x_resolution: u32, y_resolution: u32) -> Self {
        Self::new(
            focal_length,
            pixel_size,
            x_resolution as Decimal / 2.0,
            y_resolution as Decimal / 2.0,
            x_resolution,
            y_resolution,
        )
    }

    /// Projects a 3D ray (with `v.x > 0`, the depth direction) onto the
    /// camera sensor. `(x, 0, 0)` always lands on the principal point.
    pub fn spatial_to_camera(&self, v: Vec3) -> Vec2 {
        debug_assert!(v.x > 0.0);
        let focal_factor = self.focal_length / v.x / self.pixel_size;
        let y_pixel = v.y * focal_factor;
        let z_pixel = v.z * focal_factor;
        Vec2::new(-y_pixel + self.x_center, -z_pixel + self.y_center)
    }

    /// Back-projects a sensor point into a 3D ray with unit x-component.
    /// Callers downstream rely on the x-component always being exactly 1.
    pub fn camera_to_spatial(&self, u: Vec2) -> Vec3 {
        debug_assert!(self.in_sensor(u));
        let x_pixel = -u.x + self.x_center;
        let y_pixel = -u.y + self.y_center;
        Vec3::new(1.0, x_pixel * self.pixel_size / self.focal_length, y_pixel * self.pixel_size / self.focal_length)
    }

    /// `true` iff `u` falls within the sensor bounds (inclusive of the
    /// trailing edge).
    pub fn in_sensor(&self, u: Vec2) -> bool {
        u.x >= 0.0 && u.x <= self.x_resolution as Decimal && u.y >= 0.0 && u.y <= self.y_resolution as Decimal
    }

    pub fn x_resolution(&self) -> u32 {
        self.x_resolution
    }

    pub fn y_resolution(&self) -> u32 {
        self.y_resolution
    }

    pub fn focal_length(&self) -> Decimal {
        self.focal_length
    }

    pub fn pixel_size(&self) -> Decimal {
        self.pixel_size
    }

    pub fn set_focal_length(&mut self, focal_length: Decimal) {
        self.focal_length = focal_length;
    }

    /// The horizontal field of view, in radians. Pixel size cancels in the
    /// ratio, so this takes only the resolution and focal length; callers
    /// needing a physical pixel size should call [`focal_length_to_fov`]
    /// directly.
    pub fn fov(&self) -> Decimal {
        focal_length_to_fov(self.focal_length, self.x_resolution as Decimal, 1.0)
    }
}

/// The focal length of a camera with the given horizontal FOV and
/// resolution.
pub fn fov_to_focal_length(x_fov: Decimal, x_resolution: Decimal) -> Decimal {
    x_resolution / 2.0 / (x_fov / 2.0).tan()
}

/// The horizontal FOV of a camera with the given focal length, resolution
/// and pixel size.
pub fn focal_length_to_fov(focal_length: Decimal, x_resolution: Decimal, pixel_size: Decimal) -> Decimal {
    ((x_resolution / 2.0 * pixel_size) / focal_length).atan() * 2.0
}

#[cfg(test)]
mod ut_camera {
    use super::*;

    #[test]
    fn principal_point_maps_to_center() {
        let cam = Camera::ideal(0.05, 1e-5, 1024, 768);
        let u = cam.spatial_to_camera(Vec3::new(10.0, 0.0, 0.0));
        assert!((u.x - 512.0).abs() < 1e-6);
        assert!((u.y - 384.0).abs() < 1e-6);
    }

    #[test]
    fn camera_to_spatial_has_unit_x() {
        let cam = Camera::ideal(0.05, 1e-5, 1024, 768);
        let v = cam.camera_to_spatial(Vec2::new(100.0, 200.0));
        assert_eq!(v.x, 1.0);
    }

    #[test]
    fn round_trip() {
        let cam = Camera::ideal(0.05, 1e-5, 1024, 768);
        let v = Vec3::new(5.0, 0.3, -0.2);
        let u = cam.spatial_to_camera(v);
        let back = cam.camera_to_spatial(u);
        let scale = v.x / back.x;
        assert!((back.y * scale - v.y).abs() < 1e-6);
        assert!((back.z * scale - v.z).abs() < 1e-6);
    }

    #[test]
    fn fov_to_focal_length_round_trip() {
        let fov = 1.0;
        let res = 1024.0;
        let f = fov_to_focal_length(fov, res);
        let back = focal_length_to_fov(f, res, 1.0);
        assert!((back - fov).abs() < 1e-6);
    }
}
