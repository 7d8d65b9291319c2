//! Pipeline Module
//!
//! The four-step recipe generation pipeline and its runner. Steps execute in
//! a fixed sequence (persist, generate text, generate image, notify), each
//! consuming the previous step's payload and producing an augmented one.
//!
//! Failure policy: errors in the first three steps are fatal and abort the
//! run; the notification step converts its own failures into a `FAILED`
//! notification record and completes normally.

pub mod prompt;
pub mod runner;
pub mod steps;

pub use runner::{DispatchError, Dispatcher, PipelineRunner, spawn_dispatcher};

use async_trait::async_trait;
use barback_core::domain::payload::PipelinePayload;
use std::fmt;

/// States of a pipeline run
///
/// The run advances through the first four states in order; `Failed` is
/// reachable from every state except `Notifying`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Persisting,
    GeneratingText,
    GeneratingImage,
    Notifying,
    Complete,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Persisting => "Persisting",
            RunState::GeneratingText => "GeneratingText",
            RunState::GeneratingImage => "GeneratingImage",
            RunState::Notifying => "Notifying",
            RunState::Complete => "Complete",
            RunState::Failed => "Failed",
        };
        f.write_str(name)
    }
}

/// One unit of pipeline work with a payload-in, payload-out contract
///
/// Implementations must be append-only with respect to the payload: add new
/// fields, never mutate what an earlier step wrote.
#[async_trait]
pub trait PipelineStep: Send + Sync {
    /// The run state this step executes under
    fn state(&self) -> RunState;

    /// Runs the step, returning the augmented payload
    async fn run(&self, payload: PipelinePayload) -> anyhow::Result<PipelinePayload>;
}

/// Terminal outcome of a pipeline run
#[derive(Debug)]
pub enum RunOutcome {
    /// All steps ran; the notification may still have failed recoverably
    Complete { payload: PipelinePayload },
    /// A fatal step error aborted the run
    Failed { state: RunState, error: String },
    /// The wall-clock bound elapsed before the run finished
    TimedOut,
}

impl RunOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, RunOutcome::Complete { .. })
    }
}
