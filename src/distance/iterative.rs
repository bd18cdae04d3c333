/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An iterative spherical distance detector that refines `(C, r)` against
//! many limb points instead of solving exactly for three (spec.md SS4.5,
//! "Iterative variant"). Gated behind the `isdda` feature since it is a
//! tuning-knob-heavy alternative to the closed-form solver, not the
//! shipped default.

use crate::camera::Camera;
use crate::math::{Decimal, Vec2, Vec3};

use super::error::DistanceError;
use super::spherical::SphericalDistanceDetector;

/// Tuning knobs for the iterative refinement; defaults mirror the
/// closed-form solver's behaviour at `max_iterations = 0`.
#[derive(Clone, Copy, Debug)]
pub struct IsddaParams {
    pub loss_order: i32,
    pub radius_prior_weight: Decimal,
    pub min_iterations: u32,
    pub max_iterations: u32,
    pub learning_rate: Decimal,
}

impl Default for IsddaParams {
    fn default() -> Self {
        Self { loss_order: 2, radius_prior_weight: 0.01, min_iterations: 5, max_iterations: 50, learning_rate: 0.1 }
    }
}

pub struct IterativeSphericalDistanceDetector {
    camera: Camera,
    radius: Decimal,
    params: IsddaParams,
}

impl IterativeSphericalDistanceDetector {
    pub fn new(camera: Camera, radius: Decimal, params: IsddaParams) -> Self {
        Self { camera, radius, params }
    }

    /// Seeds from the closed-form three-point solution, then nudges the
    /// projected-circle centre and radius down an even-powered residual
    /// loss (plus a radius-prior penalty) over every supplied point.
    pub fn run(&self, points: &[Vec2]) -> Result<Vec3, DistanceError> {
        if points.len() < 3 {
            return Err(DistanceError::InsufficientLimb);
        }

        let spats: Vec<Vec3> = points.iter().map(|p| self.camera.camera_to_spatial(*p)).collect();
        let seed = SphericalDistanceDetector::new(self.camera, self.radius).run(&points[0..3])?;

        let mut center = seed.normalize() * (seed.norm() / self.radius);
        let mut r = (spats[0] - center).norm();

        let order = self.params.loss_order.max(2) as u32;
        for iteration in 0..self.params.max_iterations {
            let mut grad_center = Vec3::new(0.0, 0.0, 0.0);
            let mut grad_r = 0.0;
            for spat in &spats {
                let residual = (*spat - center).norm() - r;
                let weight = order as Decimal * residual.powi(order as i32 - 1);
                let direction = (*spat - center).normalize();
                grad_center += -weight * direction;
                grad_r += -weight;
            }
            grad_r += self.params.radius_prior_weight * order as Decimal * (r - (spats[0] - center).norm()).powi(1);

            center -= grad_center * self.params.learning_rate / spats.len() as Decimal;
            r -= grad_r * self.params.learning_rate / spats.len() as Decimal;

            if iteration + 1 >= self.params.min_iterations && grad_center.norm() < 1e-8 {
                break;
            }
        }

        let h = self.radius * (r * r + 1.0).sqrt() / r;
        Ok(center.normalize() * h)
    }
}

#[cfg(test)]
mod ut_iterative {
    use super::*;

    #[test]
    fn converges_close_to_closed_form_seed() {
        let camera = Camera::ideal(0.05, 1e-5, 2048, 2048);
        let radius = 6_371_000.0;
        let points: Vec<Vec2> = (0..12)
            .map(|i| {
                let theta = i as Decimal * std::f64::consts::TAU as Decimal / 12.0;
                Vec2::new(1024.0 + 80.0 * theta.cos(), 1024.0 + 80.0 * theta.sin())
            })
            .collect();
        let detector = IterativeSphericalDistanceDetector::new(camera, radius, IsddaParams::default());
        let result = detector.run(&points);
        assert!(result.is_ok());
    }

    #[test]
    fn insufficient_points_fails() {
        let camera = Camera::ideal(0.05, 1e-5, 2048, 2048);
        let detector = IterativeSphericalDistanceDetector::new(camera, 6_371_000.0, IsddaParams::default());
        assert_eq!(detector.run(&[Vec2::new(0.0, 0.0)]).unwrap_err(), DistanceError::InsufficientLimb);
    }
}
