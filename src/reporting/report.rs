//! Aggregated run report

use serde::{Deserialize, Serialize};

use super::result::CaseResult;

/// Aggregated outcome of an entire run, built once after the last suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Every executed case, in execution order
    pub results: Vec<CaseResult>,
    pub full_results: FullResults,
    /// Number of failed cases
    pub error_count: usize,
    /// Total run duration in seconds
    pub duration: f64,
}

/// Run-level envelope report collectors expect alongside the flat results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullResults {
    /// Total run duration in seconds
    pub time: f64,
    /// Run start time, milliseconds since the Unix epoch
    pub timestamp: u64,
    /// The same sequence as [`RunReport::results`]
    pub test_cases: Vec<CaseResult>,
}

impl RunReport {
    /// Assemble the report from the accumulated results
    ///
    /// The failure count is derived here rather than tracked separately so
    /// it cannot drift from the results it describes.
    pub fn new(results: Vec<CaseResult>, timestamp: u64, duration: f64) -> Self {
        let error_count = results.iter().filter(|r| !r.passed).count();
        let full_results = FullResults {
            time: duration,
            timestamp,
            test_cases: results.clone(),
        };
        Self {
            results,
            full_results,
            error_count,
            duration,
        }
    }
}

/// What the embedder gets back from a completed run
///
/// The structured artifact for external consumers is [`RunReport`]; this is
/// the in-process digest, handy for choosing an exit code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Cases that matched the filter and ran
    pub executed: usize,
    /// Cases that ran and failed
    pub failed: usize,
    /// Total run duration in seconds
    pub duration_secs: f64,
}

impl RunSummary {
    /// True when every executed case passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_count_is_derived_from_results() {
        let results = vec![
            CaseResult::passed("deck", "a", 0.1),
            CaseResult::failed("deck", "b", "boom", 0.1),
            CaseResult::failed("deck", "c", "bust", 0.1),
        ];
        let report = RunReport::new(results, 1_700_000_000_000, 0.3);
        assert_eq!(report.error_count, 2);
        assert_eq!(report.full_results.test_cases, report.results);
        assert_eq!(report.full_results.time, report.duration);
    }

    #[test]
    fn test_report_wire_shape() {
        let report = RunReport::new(vec![CaseResult::passed("deck", "a", 0.1)], 42, 0.1);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errorCount"], 0);
        assert_eq!(json["fullResults"]["timestamp"], 42);
        assert!(json["fullResults"]["testCases"].is_array());
    }
}
