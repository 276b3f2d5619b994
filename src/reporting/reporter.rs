//! Report delivery shapes
//!
//! The engine is handed exactly one reporter at construction time. The shape
//! is fixed up front as an enum variant instead of probing the value at
//! delivery time, so an unrecognized reporter is an explicit state rather
//! than a silent fall-through.

use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use super::report::RunReport;
use super::result::ResultFragment;
use crate::common::Result;

/// One-shot report consumer invoked at end of run
pub type ReportCallback = Box<dyn Fn(RunReport) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Streaming consumer fed one fragment per finished case
#[async_trait]
pub trait RealtimeSink: Send + Sync {
    /// Deliver one case outcome as soon as it is recorded
    async fn send(&mut self, fragment: ResultFragment) -> Result<()>;
    /// Deliver the full report once the last suite has finished
    async fn on_finish(&mut self, report: RunReport) -> Result<()>;
}

/// Batch consumer that only ever sees the finished report
#[async_trait]
pub trait BatchSink: Send + Sync {
    async fn send(&mut self, report: RunReport) -> Result<()>;
}

/// Where the run's results go
#[derive(Default)]
pub enum Reporter {
    /// Await a plain async function with the report
    Callback(ReportCallback),
    /// Stream per-case fragments, then the report
    Realtime(Box<dyn RealtimeSink>),
    /// Hand over the report in one piece
    Deferred(Box<dyn BatchSink>),
    /// No consumer configured; the run still executes and logs
    #[default]
    Unconfigured,
}

impl Reporter {
    /// Wrap an async function as a callback-shaped reporter
    pub fn callback<F, Fut>(f: F) -> Self
    where
        F: Fn(RunReport) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self::Callback(Box::new(move |report| Box::pin(f(report))))
    }

    /// Adopt a streaming sink
    pub fn realtime(sink: impl RealtimeSink + 'static) -> Self {
        Self::Realtime(Box::new(sink))
    }

    /// Adopt a batch sink
    pub fn deferred(sink: impl BatchSink + 'static) -> Self {
        Self::Deferred(Box::new(sink))
    }

    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Self::Callback(_) => "callback",
            Self::Realtime(_) => "realtime",
            Self::Deferred(_) => "deferred",
            Self::Unconfigured => "unconfigured",
        }
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("shape", &self.shape())
            .finish()
    }
}
