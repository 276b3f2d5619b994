//! Sequential execution engine
//!
//! One `Harness` performs exactly one run: it walks the declared suites in
//! order, drives each matching case through the reset/setup/resync/execute
//! lifecycle, accumulates results, and hands the finished report to the
//! configured reporter. Case failures are absorbed into results; report
//! delivery failures are not.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::time::Instant;

use crate::common::{HarnessConfig, Result};
use crate::reporting::{CaseResult, Reporter, ResultFragment, RunReport, RunSummary};
use crate::subject::Subject;
use crate::suite::{TagFilter, TestCase, TestSuite};

use super::delay::pause;
use super::observer::{ConsoleObserver, RunObserver};

/// Drives declared test suites against a live surface
pub struct Harness {
    subject: Box<dyn Subject>,
    suites: Vec<TestSuite>,
    start_delay: Option<Duration>,
    reporter: Reporter,
    filter: Option<TagFilter>,
    send_report: Option<bool>,
    observer: Box<dyn RunObserver>,
    results: Vec<CaseResult>,
    failure_count: usize,
}

impl Harness {
    /// Build a harness over the given subject and suites
    ///
    /// Defaults: no start delay, no filter, unconfigured reporter, console
    /// observer.
    pub fn new(subject: impl Subject + 'static, suites: Vec<TestSuite>) -> Self {
        Self {
            subject: Box::new(subject),
            suites,
            start_delay: None,
            reporter: Reporter::default(),
            filter: None,
            send_report: None,
            observer: Box::new(ConsoleObserver),
            results: Vec::new(),
            failure_count: 0,
        }
    }

    /// Wait this long before the first suite starts
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = Some(delay);
        self
    }

    /// Configure where the finished report goes
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Run only cases whose tag is in the filter
    ///
    /// Untagged cases never match a filter; an empty filter runs zero cases.
    /// Run everything by not installing a filter at all.
    pub fn with_filter(mut self, filter: TagFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Legacy report toggle
    #[deprecated(note = "configure a `Reporter` instead; `false` skips the run entirely")]
    pub fn with_send_report(mut self, send_report: bool) -> Self {
        self.send_report = Some(send_report);
        self
    }

    /// Replace the console observer with another progress sink
    pub fn with_observer(mut self, observer: impl RunObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Apply the file-loadable settings from a config
    pub fn with_config(mut self, config: &HarnessConfig) -> Self {
        if let Some(ms) = config.run.start_delay_ms {
            self.start_delay = Some(Duration::from_millis(ms));
        }
        if let Some(send_report) = config.run.send_report {
            self.send_report = Some(send_report);
        }
        if let Some(filter) = &config.filter {
            self.filter = Some(TagFilter::new(filter.tags.iter().cloned()));
        }
        self
    }

    /// Execute the run
    ///
    /// Waits the optional start delay, then walks every suite exactly once.
    /// Consuming `self` makes a second run on the same harness unrepresentable.
    /// The returned summary carries counts only; the structured artifact is
    /// the report delivered to the reporter.
    #[tracing::instrument(skip_all)]
    pub async fn run(mut self) -> Result<RunSummary> {
        if let Some(delay) = self.start_delay {
            tracing::debug!(delay_ms = delay.as_millis() as u64, "waiting before first suite");
            pause(delay).await;
        }
        self.run_suites().await
    }

    async fn run_suites(&mut self) -> Result<RunSummary> {
        // Legacy carve-out: the old toggle set to false means the caller never
        // wanted a report, so nothing runs and nothing is constructed.
        if self.send_report == Some(false) {
            let message =
                "send_report(false) is deprecated; the run was skipped and no report will be delivered";
            self.observer.warning(message);
            tracing::warn!("{}", message);
            return Ok(RunSummary {
                executed: 0,
                failed: 0,
                duration_secs: 0.0,
            });
        }

        let timestamp = epoch_ms();
        let started = Instant::now();
        self.observer.run_started(timestamp);
        tracing::info!(suites = self.suites.len(), timestamp_ms = timestamp, "run started");

        let suites = std::mem::take(&mut self.suites);
        for suite in &suites {
            for case in suite.cases() {
                if let Some(filter) = &self.filter {
                    if !filter.matches(case.tag()) {
                        continue;
                    }
                }
                self.run_case(suite, case).await?;
            }
        }

        let duration = started.elapsed().as_secs_f64();
        self.observer.run_finished(duration, self.failure_count);
        tracing::info!(
            duration_secs = duration,
            executed = self.results.len(),
            failed = self.failure_count,
            "run finished"
        );

        let summary = RunSummary {
            executed: self.results.len(),
            failed: self.failure_count,
            duration_secs: duration,
        };

        let report = RunReport::new(std::mem::take(&mut self.results), timestamp, duration);
        self.deliver(report).await?;

        Ok(summary)
    }

    /// Run one case through its lifecycle and record the outcome
    ///
    /// Any error from the lifecycle becomes a failed result here and never
    /// reaches the suite loop. Errors from the realtime sink do propagate,
    /// after the result is recorded.
    async fn run_case(&mut self, suite: &TestSuite, case: &TestCase) -> Result<()> {
        let started = Instant::now();
        let outcome = self.case_lifecycle(suite, case).await;
        let time = started.elapsed().as_secs_f64();

        let result = match outcome {
            Ok(()) => CaseResult::passed(suite.label(), case.label(), time),
            Err(error) => {
                self.failure_count += 1;
                CaseResult::failed(suite.label(), case.label(), &error.to_string(), time)
            }
        };

        self.observer.case_finished(&result);
        tracing::debug!(
            case = %result.description,
            passed = result.passed,
            time_secs = result.time,
            "case finished"
        );

        let fragment = ResultFragment::of(&result);
        self.results.push(result);
        if let Reporter::Realtime(sink) = &mut self.reporter {
            sink.send(fragment).await?;
        }

        Ok(())
    }

    /// The fixed per-case order: reset, setup hook, resync, body
    async fn case_lifecycle(&self, suite: &TestSuite, case: &TestCase) -> Result<()> {
        self.subject.clear_state().await?;
        if let Some(hook) = suite.setup_hook() {
            hook(suite.scope()).await?;
        }
        self.subject.resync().await?;
        case.execute(suite.scope()).await
    }

    async fn deliver(&mut self, report: RunReport) -> Result<()> {
        tracing::debug!(shape = self.reporter.shape(), "delivering report");
        match &mut self.reporter {
            Reporter::Callback(callback) => callback(report).await,
            Reporter::Realtime(sink) => sink.on_finish(report).await,
            Reporter::Deferred(sink) => sink.send(report).await,
            Reporter::Unconfigured => {
                let message = "no reporter configured, so the report was dropped; \
                     supported shapes are callback, realtime, and deferred (see the \
                     surface-harness documentation)";
                self.observer.warning(message);
                tracing::warn!("{}", message);
                Ok(())
            }
        }
    }
}

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
