//! Progress notification port
//!
//! Defines the interface for reporting progress during a research run.

use scout_domain::{Domain, Phase};

/// Callback for progress updates during research execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when an agent finishes within the agents phase
    fn on_agent_complete(&self, domain: &Domain, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_agent_complete(&self, _domain: &Domain, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
