//! Index-preserving batch generation.
//!
//! Fans a list of prompts out to the gateway concurrently and fans the
//! responses back in so that `responses[i]` always answers `prompts[i]`,
//! whatever order the calls finish in.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use std::sync::Arc;
use subquery_domain::Stage;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Generate one response per prompt, concurrently.
///
/// Every prompt gets its own task. The first failure fails the whole batch;
/// the tasks still in flight are aborted when the `JoinSet` is dropped.
/// An empty prompt list completes immediately with an empty result.
pub async fn generate_batch(
    gateway: &Arc<dyn LlmGateway>,
    prompts: Vec<String>,
    stage: Stage,
    progress: &dyn ProgressNotifier,
) -> Result<Vec<String>, GatewayError> {
    let total = prompts.len();
    debug!("Dispatching batch of {} prompts for {}", total, stage.as_str());

    let mut join_set = JoinSet::new();

    for (index, prompt) in prompts.into_iter().enumerate() {
        let gateway = Arc::clone(gateway);
        join_set.spawn(async move {
            let result = gateway.generate(&prompt).await;
            (index, result)
        });
    }

    let mut slots: Vec<Option<String>> = vec![None; total];

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, Ok(text))) => {
                debug!("Batch item {} completed ({} bytes)", index, text.len());
                progress.on_task_complete(stage, index, true);
                slots[index] = Some(text);
            }
            Ok((index, Err(e))) => {
                warn!("Batch item {} failed: {}", index, e);
                progress.on_task_complete(stage, index, false);
                return Err(e);
            }
            Err(e) => {
                warn!("Task join error: {}", e);
                return Err(GatewayError::Other(format!("batch task failed: {}", e)));
            }
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| GatewayError::Other(format!("batch item {} produced no result", index)))
        })
        .collect()
}
