/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::camera::Camera;
use crate::math::{midpoint, Decimal, Mat3, Vec2, Vec3};
use crate::pipeline::Stage;

use super::error::DistanceError;

/// Reconstructs the camera-frame Earth-centre vector from three limb rays,
/// assuming all three are tangent to a sphere of known radius (spec.md
/// SS4.5).
pub struct SphericalDistanceDetector {
    camera: Camera,
    radius: Decimal,
}

impl SphericalDistanceDetector {
    pub fn new(camera: Camera, radius: Decimal) -> Self {
        Self { camera, radius }
    }

    /// Runs the algorithm against the first three of `points`.
    pub fn run(&self, points: &[Vec2]) -> Result<Vec3, DistanceError> {
        if points.len() < 3 {
            return Err(DistanceError::InsufficientLimb);
        }

        let spats = [
            self.camera.camera_to_spatial(points[0]),
            self.camera.camera_to_spatial(points[1]),
            self.camera.camera_to_spatial(points[2]),
        ];

        let center = Self::center(&spats)?;
        // spats[0].x == 1 by construction, so this is the projected-circle
        // radius in the unit-x plane, not a Euclidean distance from the
        // camera.
        let r = (spats[0] - center).norm();
        let h = self.radius * (r * r + 1.0).sqrt() / r;

        Ok(center.normalize() * h)
    }

    /// Solves for the circle centre `C`: it lies in the plane spanned by
    /// the rays' differences, and is equidistant from each adjacent pair
    /// of rays.
    fn center(spats: &[Vec3; 3]) -> Result<Vec3, DistanceError> {
        let diff1 = spats[1] - spats[0];
        let diff2 = spats[2] - spats[1];
        let circle_normal = diff1.cross(&diff2);

        let mid1 = midpoint(&spats[0], &spats[1]);
        let mid2 = midpoint(&spats[1], &spats[2]);

        let matrix = Mat3::new(
            circle_normal.x,
            circle_normal.y,
            circle_normal.z,
            diff1.x,
            diff1.y,
            diff1.z,
            diff2.x,
            diff2.y,
            diff2.z,
        );

        let rhs = Vec3::new(circle_normal.dot(&spats[0]), diff1.dot(&mid1), diff2.dot(&mid2));

        let inverse = matrix.try_inverse().ok_or(DistanceError::DegenerateGeometry)?;
        Ok(inverse * rhs)
    }
}

impl Stage<Vec<Vec2>, Vec3> for SphericalDistanceDetector {
    fn run(&self, points: Vec<Vec2>) -> Vec3 {
        self.run(&points).expect("distance determination failed: insufficient or degenerate limb points")
    }
}

#[cfg(test)]
mod ut_spherical {
    use super::*;

    fn tangent_points(radius: Decimal, distance: Decimal, camera: &Camera) -> Vec<Vec2> {
        // Three points on a circle in the image plane, each corresponding
        // to a ray tangent to a sphere of `radius` seen from `distance`.
        let apparent_radius_angle = (radius / distance).asin();
        let focal_px = camera.focal_length() / camera.pixel_size();
        let pixel_radius = apparent_radius_angle.tan() * focal_px;
        (0..3)
            .map(|i| {
                let theta = i as Decimal * std::f64::consts::FRAC_PI_3 as Decimal * 2.0;
                Vec2::new(
                    camera.x_resolution() as Decimal / 2.0 + pixel_radius * theta.cos(),
                    camera.y_resolution() as Decimal / 2.0 + pixel_radius * theta.sin(),
                )
            })
            .collect()
    }

    #[test]
    fn recovers_approximate_distance() {
        let camera = Camera::ideal(0.05, 1e-5, 2048, 2048);
        let radius = 6_371_000.0;
        let distance = 4.0e7;
        let points = tangent_points(radius, distance, &camera);
        let detector = SphericalDistanceDetector::new(camera, radius);
        let result = detector.run(&points).unwrap();
        assert!((result.norm() - distance).abs() / distance < 0.05);
    }

    #[test]
    fn insufficient_points_fails() {
        let camera = Camera::ideal(0.05, 1e-5, 2048, 2048);
        let detector = SphericalDistanceDetector::new(camera, 6_371_000.0);
        assert_eq!(detector.run(&[Vec2::new(0.0, 0.0)]).unwrap_err(), DistanceError::InsufficientLimb);
    }

    #[test]
    fn collinear_rays_are_degenerate() {
        let camera = Camera::ideal(0.05, 1e-5, 2048, 2048);
        let detector = SphericalDistanceDetector::new(camera, 6_371_000.0);
        let points = vec![Vec2::new(1000.0, 1024.0), Vec2::new(1010.0, 1024.0), Vec2::new(1020.0, 1024.0)];
        assert_eq!(detector.run(&points).unwrap_err(), DistanceError::DegenerateGeometry);
    }
}
