//! Run progress sinks
//!
//! The engine reports progress through an injected observer instead of
//! writing to the console directly, so embedders can reroute the output and
//! tests can assert on emitted events without capturing stdout.

use std::sync::{Arc, Mutex};

use colored::Colorize;

use crate::reporting::CaseResult;

/// Receives run progress events as they happen
pub trait RunObserver: Send + Sync {
    /// The run has started; `timestamp_ms` is milliseconds since the Unix epoch
    fn run_started(&self, timestamp_ms: u64) {
        let _ = timestamp_ms;
    }

    /// A case finished and its result was recorded
    fn case_finished(&self, result: &CaseResult) {
        let _ = result;
    }

    /// The last suite finished; the report is about to be delivered
    fn run_finished(&self, duration_secs: f64, failed: usize) {
        let _ = (duration_secs, failed);
    }

    /// A non-fatal condition worth surfacing (deprecations, reporter misconfiguration)
    fn warning(&self, message: &str) {
        let _ = message;
    }
}

/// Prints colored progress lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl RunObserver for ConsoleObserver {
    fn run_started(&self, timestamp_ms: u64) {
        println!(
            "\n{} {}",
            "Running surface tests".blue().bold(),
            format!("at {}", timestamp_ms).dimmed()
        );
    }

    fn case_finished(&self, result: &CaseResult) {
        if result.passed {
            println!("{}", result.message.green());
        } else {
            println!("{}", result.message.red());
        }
    }

    fn run_finished(&self, duration_secs: f64, failed: usize) {
        if failed == 0 {
            println!(
                "\n{} {}\n",
                "✓".green().bold(),
                format!("All tests passed in {:.2}s", duration_secs)
                    .green()
                    .bold()
            );
        } else {
            println!(
                "\n{} {}\n",
                "✗".red().bold(),
                format!("{} test(s) failed in {:.2}s", failed, duration_secs)
                    .red()
                    .bold()
            );
        }
    }

    fn warning(&self, message: &str) {
        println!("{}", format!("Warning: {}", message).yellow());
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RunObserver for NullObserver {}

/// One event as seen by a [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    RunStarted { timestamp_ms: u64 },
    CaseFinished { description: String, passed: bool },
    RunFinished { duration_secs: f64, failed: usize },
    Warning(String),
}

/// Records events for later inspection
///
/// Clones share the same event log, so keep one clone and hand the other to
/// the harness.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObservedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.lock().clone()
    }

    /// True when no event has been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ObservedEvent>> {
        // An observer that panicked mid-push leaves the log readable.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RunObserver for RecordingObserver {
    fn run_started(&self, timestamp_ms: u64) {
        self.lock().push(ObservedEvent::RunStarted { timestamp_ms });
    }

    fn case_finished(&self, result: &CaseResult) {
        self.lock().push(ObservedEvent::CaseFinished {
            description: result.description.clone(),
            passed: result.passed,
        });
    }

    fn run_finished(&self, duration_secs: f64, failed: usize) {
        self.lock().push(ObservedEvent::RunFinished {
            duration_secs,
            failed,
        });
    }

    fn warning(&self, message: &str) {
        self.lock().push(ObservedEvent::Warning(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_clones_share_the_log() {
        let observer = RecordingObserver::new();
        let handle = observer.clone();

        observer.warning("check the reporter");
        handle.run_finished(0.5, 0);

        assert_eq!(
            observer.events(),
            vec![
                ObservedEvent::Warning("check the reporter".to_string()),
                ObservedEvent::RunFinished {
                    duration_secs: 0.5,
                    failed: 0
                },
            ]
        );
    }
}
