/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Command-line argument definitions (spec.md SS6).

pub mod args;

pub use args::{CalibrationArgs, Cli, Command, DistanceAlgo, DistanceArgs, OrbitArgs};
