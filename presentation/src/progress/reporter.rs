//! Progress reporting for fan-out fetches

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use jokes_application::FetchProgressNotifier;
use jokes_domain::ExecutionStrategy;
use std::sync::Mutex;

/// Reports progress with one progress bar per batch
pub struct ProgressReporter {
    multi: MultiProgress,
    batch_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            batch_bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, strategy: ExecutionStrategy, total: usize) {
        let pb = self.multi.add(ProgressBar::new(total as u64));
        pb.set_style(Self::batch_style());
        pb.set_prefix(strategy.to_string());
        pb.set_message("fetching...");

        if let Ok(mut bar) = self.batch_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_fetch_complete(&self, _strategy: ExecutionStrategy, success: bool) {
        if let Ok(bar) = self.batch_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            if !success {
                pb.set_message(format!("{} request failed", "x".red()));
            }
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, strategy: ExecutionStrategy, success: bool) {
        if let Ok(mut bar) = self.batch_bar.lock()
            && let Some(pb) = bar.take()
        {
            if success {
                pb.finish_with_message(format!("{} complete!", strategy.as_str().green()));
            } else {
                pb.abandon_with_message(format!("{} failed", strategy.as_str().red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so stdout only carries the jokes themselves.
pub struct SimpleProgress;

impl FetchProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, strategy: ExecutionStrategy, total: usize) {
        eprintln!(
            "{} {} ({} requests)",
            "->".cyan(),
            strategy.description().bold(),
            total
        );
    }

    fn on_fetch_complete(&self, _strategy: ExecutionStrategy, success: bool) {
        if !success {
            eprintln!("  {} request failed", "x".red());
        }
    }

    fn on_batch_complete(&self, strategy: ExecutionStrategy, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), strategy);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), strategy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_tracks_one_batch_at_a_time() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(indicatif::ProgressDrawTarget::hidden());

        reporter.on_batch_start(ExecutionStrategy::Threads, 3);
        for _ in 0..3 {
            reporter.on_fetch_complete(ExecutionStrategy::Threads, true);
        }
        {
            let bar = reporter.batch_bar.lock().unwrap();
            assert_eq!(bar.as_ref().unwrap().position(), 3);
        }

        reporter.on_batch_complete(ExecutionStrategy::Threads, true);
        assert!(reporter.batch_bar.lock().unwrap().is_none());
    }
}
