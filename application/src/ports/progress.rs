//! Progress notification port
//!
//! Defines the interface for reporting progress during a pipeline run.

use subquery_domain::Stage;

/// Callback for progress updates during a pipeline run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts with the number of model calls it makes
    fn on_stage_start(&self, stage: Stage, total_tasks: usize);

    /// Called when one model call of a stage finishes
    ///
    /// `index` is the position of the call within the stage (the
    /// sub-question index for [`Stage::Answer`]).
    fn on_task_complete(&self, stage: Stage, index: usize, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total_tasks: usize) {}
    fn on_task_complete(&self, _stage: Stage, _index: usize, _success: bool) {}
    fn on_stage_complete(&self, _stage: Stage) {}
}
