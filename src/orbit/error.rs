/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use snafu::Snafu;

/// Errors raised by orbit propagation (spec.md SS4.9).
#[derive(Debug, Snafu, PartialEq, Eq, Clone, Copy)]
pub enum OrbitError {
    /// Fewer than two location records were supplied, so an initial
    /// velocity cannot be estimated.
    #[snafu(display("orbit propagation requires at least two location records"))]
    InsufficientHistory,

    /// The two most recent records share a timestamp, so the velocity
    /// estimate's denominator is zero.
    #[snafu(display("the two most recent records share a timestamp"))]
    ZeroTimeDelta,
}
