/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod attitude;
mod dcm;
mod euler;
mod quaternion;

pub use attitude::Attitude;
pub use dcm::DCM;
pub use euler::{spherical_to_quaternion, EulerAngles};
pub use quaternion::Quaternion;
