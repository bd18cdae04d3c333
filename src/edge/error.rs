/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use snafu::Snafu;

/// Errors raised by edge detection (spec.md SS4.4).
#[derive(Debug, Snafu, PartialEq, Eq, Clone, Copy)]
pub enum EdgeError {
    /// The image has zero width or height, so there is nothing to scan.
    #[snafu(display("image has zero width or height"))]
    EmptyImage,
}
