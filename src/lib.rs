//! Surface Harness - an embedded sequential test engine for live UI surfaces
//!
//! Declares suites of async test cases, runs them one at a time against a
//! running application surface, and delivers the aggregated report to a
//! pluggable reporter (callback, realtime stream, or deferred batch).

pub mod common;
pub mod reporting;
pub mod runner;
pub mod subject;
pub mod suite;

// Re-export the embedding surface
pub use common::{Error, HarnessConfig, Result};
pub use reporting::{CaseResult, Reporter, ResultFragment, RunReport, RunSummary};
pub use runner::{Harness, RunObserver};
pub use subject::{StaticSubject, Subject};
pub use suite::{SuiteScope, TagFilter, TestSuite};
