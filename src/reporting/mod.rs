//! Result records, the aggregated report, and the delivery shapes

mod report;
mod reporter;
mod result;

pub use report::{FullResults, RunReport, RunSummary};
pub use reporter::{BatchSink, RealtimeSink, ReportCallback, Reporter};
pub use result::{CaseResult, ResultFragment};
