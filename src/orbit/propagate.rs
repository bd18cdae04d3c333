/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::datafile::LocationRecord;
use crate::math::{Decimal, Vec3};

use super::error::OrbitError;

/// Fixed-step classical RK4 two-body orbit propagation (spec.md SS4.9).
/// `radius` is informational only -- it plays no part in the integration,
/// only in downstream altitude reporting.
pub struct OrbitPropagator {
    pub mu: Decimal,
    pub radius: Decimal,
    pub dt: Decimal,
    pub t_total: Decimal,
}

impl OrbitPropagator {
    pub fn new(mu: Decimal, radius: Decimal, dt: Decimal, t_total: Decimal) -> Self {
        Self { mu, radius, dt, t_total }
    }

    fn acceleration(&self, r: Vec3) -> Vec3 {
        let norm = r.norm();
        r * (-self.mu / (norm * norm * norm))
    }

    /// Integrates `r̈ = -μ·r/|r|³` from the last of `history` for
    /// `floor(t_total / dt)` steps, estimating the seed velocity from the
    /// two most recent records.
    pub fn run(&self, history: &[LocationRecord]) -> Result<Vec<LocationRecord>, OrbitError> {
        if history.len() < 2 {
            return Err(OrbitError::InsufficientHistory);
        }
        let last = history[history.len() - 1];
        let prev = history[history.len() - 2];
        let dt_hist = last.timestamp - prev.timestamp;
        if dt_hist == 0.0 {
            return Err(OrbitError::ZeroTimeDelta);
        }

        let v0 = (last.position - prev.position) / dt_hist;
        let steps = (self.t_total / self.dt).floor() as u64;

        let mut r = last.position;
        let mut v = v0;
        let mut t = last.timestamp;
        let mut out = Vec::with_capacity(steps as usize);

        for _ in 0..steps {
            let (r_new, v_new) = self.rk4_step(r, v);
            r = r_new;
            v = v_new;
            t += self.dt;
            out.push(LocationRecord::new(r, t));
        }

        Ok(out)
    }

    fn rk4_step(&self, r: Vec3, v: Vec3) -> (Vec3, Vec3) {
        let dt = self.dt;
        let half = dt / 2.0;

        let k1 = v;
        let l1 = self.acceleration(r);

        let k2 = v + l1 * half;
        let l2 = self.acceleration(r + k1 * half);

        let k3 = v + l2 * half;
        let l3 = self.acceleration(r + k2 * half);

        let k4 = v + l3 * dt;
        let l4 = self.acceleration(r + k3 * dt);

        let r_new = r + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);
        let v_new = v + (l1 + l2 * 2.0 + l3 * 2.0 + l4) * (dt / 6.0);
        (r_new, v_new)
    }
}
