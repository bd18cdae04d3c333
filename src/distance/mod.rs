/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reconstructing the camera-frame Earth-centre vector from limb rays
//! (spec.md SS4.5).

pub mod error;
pub mod spherical;

#[cfg(feature = "isdda")]
pub mod iterative;

pub use error::DistanceError;
pub use spherical::SphericalDistanceDetector;

#[cfg(feature = "isdda")]
pub use iterative::{IsddaParams, IterativeSphericalDistanceDetector};
