//! Pipeline runner and dispatcher
//!
//! The runner chains the four steps in a fixed order under one wall-clock
//! timeout. The dispatcher is the intake endpoint's non-blocking handle: it
//! enqueues the initial payload and returns immediately, so caller-observed
//! latency is decoupled from pipeline duration. Runs for different recipe
//! identifiers execute in parallel with no shared mutable state.

use barback_core::domain::payload::PipelinePayload;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, error, info, warn};

use crate::pipeline::steps::{GenerateImageStep, GenerateTextStep, NotifyStep, PersistStep};
use crate::pipeline::{PipelineStep, RunOutcome, RunState};
use crate::repository::RecipeStore;
use barback_clients::{ArtifactStore, ImageGenerator, Mailer, SecretStore, TextGenerator};

/// Executes pipeline runs step by step
pub struct PipelineRunner {
    steps: Vec<Arc<dyn PipelineStep>>,
    timeout: Duration,
}

impl PipelineRunner {
    /// Wires the four steps in execution order from the capability handles
    ///
    /// Each step receives only the handles it needs.
    pub fn new(
        store: Arc<dyn RecipeStore>,
        text_generator: Arc<dyn TextGenerator>,
        image_generator: Arc<dyn ImageGenerator>,
        artifacts: Arc<dyn ArtifactStore>,
        secrets: Arc<dyn SecretStore>,
        mailer: Arc<dyn Mailer>,
        timeout: Duration,
    ) -> Self {
        let steps: Vec<Arc<dyn PipelineStep>> = vec![
            Arc::new(PersistStep::new(store)),
            Arc::new(GenerateTextStep::new(text_generator, artifacts.clone())),
            Arc::new(GenerateImageStep::new(image_generator, artifacts.clone())),
            Arc::new(NotifyStep::new(secrets, artifacts, mailer)),
        ];

        Self { steps, timeout }
    }

    /// Runs one pipeline for the given initial payload
    ///
    /// The whole run is bounded by the configured timeout; exceeding it aborts
    /// the run without rolling back already-committed side effects.
    pub async fn run(&self, payload: PipelinePayload) -> RunOutcome {
        let recipe_id = payload.recipe_id;
        info!("Starting pipeline run for recipe {}", recipe_id);

        match tokio::time::timeout(self.timeout, self.run_steps(payload)).await {
            Ok(Ok(payload)) => {
                info!("Pipeline run for recipe {} completed", recipe_id);
                RunOutcome::Complete { payload }
            }
            Ok(Err((state, error))) => {
                error!(
                    "Pipeline run for recipe {} failed during {}: {:#}",
                    recipe_id, state, error
                );
                RunOutcome::Failed {
                    state,
                    error: format!("{error:#}"),
                }
            }
            Err(_) => {
                error!(
                    "Pipeline run for recipe {} timed out after {:?}",
                    recipe_id, self.timeout
                );
                RunOutcome::TimedOut
            }
        }
    }

    async fn run_steps(
        &self,
        mut payload: PipelinePayload,
    ) -> Result<PipelinePayload, (RunState, anyhow::Error)> {
        for step in &self.steps {
            let state = step.state();
            debug!("Recipe {} entering {}", payload.recipe_id, state);

            payload = step.run(payload).await.map_err(|e| (state, e))?;
        }

        Ok(payload)
    }
}

/// Failure to enqueue a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The dispatch queue is at capacity
    QueueFull,
    /// The pipeline worker has stopped
    Closed,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::QueueFull => write!(f, "pipeline dispatch queue is full"),
            DispatchError::Closed => write!(f, "pipeline worker is not running"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Non-blocking handle for starting pipeline runs
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::Sender<PipelinePayload>,
}

impl Dispatcher {
    /// Creates a dispatcher and the receiving end of its queue
    pub fn bounded(capacity: usize) -> (Self, mpsc::Receiver<PipelinePayload>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Enqueues a pipeline run without waiting for it
    pub fn dispatch(&self, payload: PipelinePayload) -> Result<(), DispatchError> {
        match self.tx.try_send(payload) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(DispatchError::QueueFull),
            Err(TrySendError::Closed(_)) => Err(DispatchError::Closed),
        }
    }
}

/// Spawns the pipeline worker and returns its dispatcher
///
/// The worker receives dispatched payloads and spawns one independent task
/// per run, so runs execute in parallel while steps within a run stay
/// strictly sequential.
pub fn spawn_dispatcher(
    runner: Arc<PipelineRunner>,
    queue_size: usize,
) -> (Dispatcher, tokio::task::JoinHandle<()>) {
    let (dispatcher, mut rx) = Dispatcher::bounded(queue_size);

    let handle = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            let runner = Arc::clone(&runner);

            tokio::spawn(async move {
                let recipe_id = payload.recipe_id;

                match runner.run(payload).await {
                    RunOutcome::Complete { payload } => {
                        if let Some(notification) = payload.notification {
                            debug!(
                                "Recipe {} notification status: {:?}",
                                recipe_id, notification.status
                            );
                        }
                    }
                    RunOutcome::Failed { state, error } => {
                        warn!("Recipe {} run failed during {}: {}", recipe_id, state, error);
                    }
                    RunOutcome::TimedOut => {
                        warn!("Recipe {} run timed out", recipe_id);
                    }
                }
            });
        }

        info!("Dispatch queue closed, pipeline worker stopping");
    });

    (dispatcher, handle)
}
