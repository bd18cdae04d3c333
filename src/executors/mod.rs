/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Glue between the CLI and the core pipelines: one executor per
//! subcommand (spec.md SS6).

pub mod calibration;
pub mod distance;
pub mod orbit;

use crate::errors::FoundError;

pub(crate) fn io_error(path: &std::path::Path, source: std::io::Error) -> FoundError {
    FoundError::Io {
        path: path.display().to_string(),
        source: Box::new(source),
    }
}
