/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use super::{Action, PipelineError, Stage, DEFAULT_NUM_STAGES};

type Slot = Rc<RefCell<Option<Box<dyn Any>>>>;

fn empty_slot() -> Slot {
    Rc::new(RefCell::new(None))
}

/// A stage with its input/output types erased so a [`SequentialPipeline`]
/// can hold a chain of stages with different `(I, O)` pairs.
struct ErasedStage<S, I, O> {
    stage: S,
    input: Slot,
    output: Slot,
    _marker: PhantomData<(I, O)>,
}

impl<I: 'static, O: 'static, S: Stage<I, O>> Action for ErasedStage<S, I, O> {
    fn do_action(&self) {
        let boxed = self.input.borrow_mut().take().expect("stage resource was never set");
        let input = *boxed.downcast::<I>().expect("pipeline wiring produced a mismatched type");
        let output = self.stage.run(input);
        *self.output.borrow_mut() = Some(Box::new(output));
    }
}

/// Chains up to `N` stages, feeding the product of each directly into the
/// resource slot of the next (spec.md SS4.3). Registered via [`Self::add_stage`],
/// terminated by [`Self::complete`]; `Run` then requires the chain be
/// complete.
pub struct SequentialPipeline<I, O, const N: usize = DEFAULT_NUM_STAGES> {
    stages: Vec<Box<dyn Action>>,
    first_input: Option<Slot>,
    last_output: Option<Slot>,
    last_output_type: Option<TypeId>,
    ready: bool,
    _marker: PhantomData<(I, O)>,
}

impl<I, O, const N: usize> std::fmt::Debug for SequentialPipeline<I, O, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequentialPipeline")
            .field("stages", &self.stages.len())
            .field("ready", &self.ready)
            .finish()
    }
}

impl<I: 'static, O: 'static, const N: usize> Default for SequentialPipeline<I, O, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: 'static, O: 'static, const N: usize> SequentialPipeline<I, O, N> {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            first_input: None,
            last_output: None,
            last_output_type: None,
            ready: false,
            _marker: PhantomData,
        }
    }

    /// Registers `stage`, wiring it after the last-registered stage. The
    /// first call's `SI` must equal `I`; later calls' `SI` must equal the
    /// previous stage's `SO`.
    pub fn add_stage<SI, SO, S>(&mut self, stage: S) -> Result<&mut Self, PipelineError>
    where
        SI: 'static,
        SO: 'static,
        S: Stage<SI, SO> + 'static,
    {
        self.wire(stage)?;
        Ok(self)
    }

    /// Registers `stage` as the pipeline's final stage and marks it ready.
    /// `SO` must equal `O`.
    pub fn complete<SI, SO, S>(&mut self, stage: S) -> Result<&mut Self, PipelineError>
    where
        SI: 'static,
        SO: 'static,
        S: Stage<SI, SO> + 'static,
    {
        if self.ready {
            return Err(PipelineError::AlreadyReady);
        }
        if TypeId::of::<SO>() != TypeId::of::<O>() {
            return Err(PipelineError::InputTypeMismatch);
        }
        self.wire(stage)?;
        self.ready = true;
        Ok(self)
    }

    fn wire<SI, SO, S>(&mut self, stage: S) -> Result<(), PipelineError>
    where
        SI: 'static,
        SO: 'static,
        S: Stage<SI, SO> + 'static,
    {
        if self.ready {
            return Err(PipelineError::AlreadyReady);
        }
        assert!(self.stages.len() < N, "pipeline stage count exceeds its N bound");

        let input_slot = if self.stages.is_empty() {
            if TypeId::of::<SI>() != TypeId::of::<I>() {
                return Err(PipelineError::InputTypeMismatch);
            }
            let slot = empty_slot();
            self.first_input = Some(slot.clone());
            slot
        } else {
            if Some(TypeId::of::<SI>()) != self.last_output_type {
                return Err(PipelineError::InputTypeMismatch);
            }
            self.last_output.clone().expect("a non-empty pipeline always has a last output slot")
        };

        let output_slot = empty_slot();
        self.stages.push(Box::new(ErasedStage::<S, SI, SO> {
            stage,
            input: input_slot,
            output: output_slot.clone(),
            _marker: PhantomData,
        }));
        self.last_output = Some(output_slot);
        self.last_output_type = Some(TypeId::of::<SO>());
        Ok(())
    }

    /// Runs every stage in order and returns the final product. Requires
    /// [`Self::complete`] to have been called.
    pub fn try_run(&self, input: I) -> Result<O, PipelineError> {
        if !self.ready {
            return Err(PipelineError::NotReady);
        }
        *self.first_input.as_ref().expect("a ready pipeline always has a first input slot").borrow_mut() =
            Some(Box::new(input));
        for stage in &self.stages {
            stage.do_action();
        }
        let boxed = self
            .last_output
            .as_ref()
            .expect("a ready pipeline always has a last output slot")
            .borrow_mut()
            .take()
            .expect("the final stage always writes its product");
        Ok(*boxed.downcast::<O>().expect("complete() already checked the final stage's output type"))
    }
}

/// A pipeline is itself a stage, so it may be composed inside another
/// pipeline: the outer pipeline's wiring writes directly into this
/// pipeline's own internal product slot, with no extra allocation.
impl<I: 'static, O: 'static, const N: usize> Stage<I, O> for SequentialPipeline<I, O, N> {
    fn run(&self, input: I) -> O {
        self.try_run(input).expect("nested pipeline was not complete")
    }
}

#[cfg(test)]
mod ut_sequential {
    use super::*;

    #[test]
    fn runs_stages_in_order() {
        let mut pipeline: SequentialPipeline<i32, String> = SequentialPipeline::new();
        pipeline.add_stage(|x: i32| x * 2).unwrap();
        pipeline.complete(|x: i32| format!("value={x}")).unwrap();
        assert_eq!(pipeline.try_run(5).unwrap(), "value=10");
    }

    #[test]
    fn run_before_complete_fails() {
        let mut pipeline: SequentialPipeline<i32, i32> = SequentialPipeline::new();
        pipeline.add_stage(|x: i32| x + 1).unwrap();
        assert_eq!(pipeline.try_run(1).unwrap_err(), PipelineError::NotReady);
    }

    #[test]
    fn add_stage_after_complete_fails() {
        let mut pipeline: SequentialPipeline<i32, i32> = SequentialPipeline::new();
        pipeline.complete(|x: i32| x).unwrap();
        assert_eq!(pipeline.add_stage(|x: i32| x).unwrap_err(), PipelineError::AlreadyReady);
    }

    #[test]
    fn mismatched_first_input_fails() {
        let mut pipeline: SequentialPipeline<i32, i32> = SequentialPipeline::new();
        assert_eq!(pipeline.add_stage(|x: String| x.len() as i32).unwrap_err(), PipelineError::InputTypeMismatch);
    }

    #[test]
    fn nested_pipeline_composes_as_a_stage() {
        let mut inner: SequentialPipeline<i32, i32> = SequentialPipeline::new();
        inner.complete(|x: i32| x + 1).unwrap();

        let mut outer: SequentialPipeline<i32, String> = SequentialPipeline::new();
        outer.add_stage(inner).unwrap();
        outer.complete(|x: i32| format!("{x}")).unwrap();
        assert_eq!(outer.try_run(1).unwrap(), "2");
    }
}
