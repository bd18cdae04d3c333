/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use snafu::Snafu;

/// Errors raised by distance determination (spec.md SS4.5).
#[derive(Debug, Snafu, PartialEq, Eq, Clone, Copy)]
pub enum DistanceError {
    /// Fewer than three limb points were supplied.
    #[snafu(display("distance determination requires at least three limb points"))]
    InsufficientLimb,

    /// The three back-projected rays are coplanar with the camera origin,
    /// so the linear system for the circle center is singular.
    #[snafu(display("limb rays are degenerate (coplanar with the camera origin)"))]
    DegenerateGeometry,
}
