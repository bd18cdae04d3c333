/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use snafu::Snafu;

/// Errors raised by the pipeline and stage machinery (spec.md SS4.3).
#[derive(Debug, Snafu, PartialEq, Eq, Clone, Copy)]
#[snafu(visibility(pub(crate)))]
pub enum PipelineError {
    /// `Run` was called before `Complete`.
    #[snafu(display("pipeline is not complete"))]
    NotReady,

    /// `AddStage` or `Complete` was called after `Complete` already
    /// terminated the pipeline.
    #[snafu(display("pipeline is already complete"))]
    AlreadyReady,

    /// A registered stage's input type does not match what the pipeline
    /// expects at that position.
    #[snafu(display("stage input type does not match the expected type"))]
    InputTypeMismatch,
}
