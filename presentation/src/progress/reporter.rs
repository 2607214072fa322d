//! Progress reporting for pipeline runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use subquery_application::ProgressNotifier;
use subquery_domain::Stage;

/// Reports progress with one indicatif bar per stage
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn stage_label(stage: Stage) -> String {
        format!("Stage {}: {}", stage.number(), stage.display_name())
    }

    fn task_label(stage: Stage, index: usize) -> String {
        match stage {
            Stage::Answer => format!("sub-question {}", index + 1),
            _ => stage.as_str().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        let pb = ProgressBar::new(total_tasks as u64);
        pb.set_style(Self::stage_style());
        pb.set_prefix(Self::stage_label(stage));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.stage_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, stage: Stage, index: usize, success: bool) {
        if let Ok(slot) = self.stage_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let mark = if success { "v".green() } else { "x".red() };
            pb.set_message(format!("{} {}", mark, Self::task_label(stage, index)));
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: Stage) {
        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete", stage.display_name()).green().to_string());
        }
    }
}

/// Simple line-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        eprintln!(
            "{} {} ({} calls)",
            "->".cyan(),
            ProgressReporter::stage_label(stage).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, stage: Stage, index: usize, success: bool) {
        let label = ProgressReporter::task_label(stage, index);
        if success {
            eprintln!("  {} {}", "v".green(), label);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), label);
        }
    }

    fn on_stage_complete(&self, _stage: Stage) {}
}
