/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A small composable pipeline framework (spec.md SS4.3), modeled on the
//! `Action`/`Stage` hierarchy: a stage is a pure `Run(I) -> O` function
//! slotted into a chain; a pipeline wires each stage's product directly
//! into the next stage's resource so no copies occur between them.

pub mod error;
pub mod modifying;
pub mod sequential;

pub use error::PipelineError;
pub use modifying::{ModifyingPipeline, ModifyingStage};
pub use sequential::SequentialPipeline;

/// The default number of stages a pipeline can hold before `Complete`.
pub const DEFAULT_NUM_STAGES: usize = crate::DEFAULT_NUM_STAGES;

/// The minimal polymorphic operation: runs using already-stored state.
pub trait Action {
    fn do_action(&self);
}

/// A pure single-input, single-output computation pluggable into a
/// [`SequentialPipeline`].
pub trait Stage<I, O> {
    fn run(&self, input: I) -> O;
}

impl<I, O, F> Stage<I, O> for F
where
    F: Fn(I) -> O,
{
    fn run(&self, input: I) -> O {
        self(input)
    }
}
