/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{PipelineError, Stage, DEFAULT_NUM_STAGES};

/// A stage that mutates its resource in place, for pipelines whose input
/// and output share a type and copying between stages would be wasteful
/// (spec.md SS4.3).
pub trait ModifyingStage<T> {
    fn run(&self, resource: &mut T);
}

impl<T, F> ModifyingStage<T> for F
where
    F: Fn(&mut T),
{
    fn run(&self, resource: &mut T) {
        self(resource)
    }
}

/// Threads a single resource through an ordered list of [`ModifyingStage`]s.
/// `Run` copies the input into an owned slot and runs every registered
/// stage against it in order.
pub struct ModifyingPipeline<T, const N: usize = DEFAULT_NUM_STAGES> {
    stages: Vec<Box<dyn ModifyingStage<T>>>,
    ready: bool,
}

impl<T, const N: usize> Default for ModifyingPipeline<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> ModifyingPipeline<T, N> {
    pub fn new() -> Self {
        Self { stages: Vec::new(), ready: false }
    }

    pub fn add_stage(&mut self, stage: impl ModifyingStage<T> + 'static) -> Result<&mut Self, PipelineError> {
        self.push(stage)?;
        Ok(self)
    }

    pub fn complete(&mut self, stage: impl ModifyingStage<T> + 'static) -> Result<&mut Self, PipelineError> {
        self.push(stage)?;
        self.ready = true;
        Ok(self)
    }

    fn push(&mut self, stage: impl ModifyingStage<T> + 'static) -> Result<(), PipelineError> {
        if self.ready {
            return Err(PipelineError::AlreadyReady);
        }
        assert!(self.stages.len() < N, "pipeline stage count exceeds its N bound");
        self.stages.push(Box::new(stage));
        Ok(())
    }

    pub fn try_run(&self, input: T) -> Result<T, PipelineError> {
        if !self.ready {
            return Err(PipelineError::NotReady);
        }
        let mut resource = input;
        for stage in &self.stages {
            stage.run(&mut resource);
        }
        Ok(resource)
    }
}

/// May be nested inside a [`super::SequentialPipeline`] at any position.
impl<T, const N: usize> Stage<T, T> for ModifyingPipeline<T, N> {
    fn run(&self, input: T) -> T {
        self.try_run(input).expect("nested modifying pipeline was not complete")
    }
}

#[cfg(test)]
mod ut_modifying {
    use super::*;

    #[test]
    fn mutates_resource_in_order() {
        let mut pipeline: ModifyingPipeline<Vec<i32>> = ModifyingPipeline::new();
        pipeline.add_stage(|v: &mut Vec<i32>| v.push(1)).unwrap();
        pipeline.complete(|v: &mut Vec<i32>| v.push(2)).unwrap();
        assert_eq!(pipeline.try_run(vec![0]).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn run_before_complete_fails() {
        let mut pipeline: ModifyingPipeline<i32> = ModifyingPipeline::new();
        pipeline.add_stage(|x: &mut i32| *x += 1).unwrap();
        assert_eq!(pipeline.try_run(1).unwrap_err(), PipelineError::NotReady);
    }
}
