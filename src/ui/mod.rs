//! UI/Progress presentation layer
//!
//! All step reporting goes through the [`ProgressReporter`] trait so the
//! provisioner does not care whether a spinner is drawn. Dry runs use the
//! silent reporter, since the printed commands are the output.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for sequential provisioning steps
pub trait ProgressReporter {
    /// A step with the given description has started
    fn start_step(&mut self, description: &str);

    /// The current step succeeded
    fn finish_step(&mut self);

    /// The current step failed; no further steps will follow
    fn fail_step(&mut self);
}

/// Spinner per step, left on screen with a check mark or cross when done
#[derive(Default)]
pub struct InteractiveProgressReporter {
    current: Option<(ProgressBar, String)>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_step(&mut self, description: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(description.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.current = Some((pb, description.to_string()));
    }

    fn finish_step(&mut self) {
        if let Some((pb, description)) = self.current.take() {
            pb.finish_with_message(format!("{} {}", style("✓").green(), description));
        }
    }

    fn fail_step(&mut self) {
        if let Some((pb, description)) = self.current.take() {
            pb.abandon_with_message(format!("{} {}", style("✗").red(), description));
        }
    }
}

/// No-op reporter for dry runs and tests
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_step(&mut self, _description: &str) {
        // No-op for silent mode
    }

    fn finish_step(&mut self) {
        // No-op for silent mode
    }

    fn fail_step(&mut self) {
        // No-op for silent mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_reporter_no_ops() {
        let mut reporter = SilentProgressReporter;

        // All methods should do nothing and not panic
        reporter.start_step("Creating namespace ketchup");
        reporter.finish_step();
        reporter.fail_step();
    }

    #[test]
    fn test_interactive_progress_reporter_creation() {
        let reporter = InteractiveProgressReporter::new();
        assert!(reporter.current.is_none());
    }

    #[test]
    fn test_interactive_progress_reporter_step_lifecycle() {
        let mut reporter = InteractiveProgressReporter::new();
        reporter.start_step("Creating namespace ketchup");
        assert_eq!(
            reporter.current.as_ref().map(|(_, d)| d.as_str()),
            Some("Creating namespace ketchup")
        );

        reporter.finish_step();
        assert!(reporter.current.is_none());
    }

    #[test]
    fn test_interactive_progress_reporter_fail_clears_step() {
        let mut reporter = InteractiveProgressReporter::new();
        reporter.start_step("Creating role ketchup/tiller-manager");
        reporter.fail_step();
        assert!(reporter.current.is_none());

        // Finishing with nothing in flight is harmless
        reporter.finish_step();
    }
}
