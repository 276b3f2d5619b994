//! Per-case outcome records

use serde::{Deserialize, Serialize};

/// Recorded outcome of one executed case
///
/// Immutable once built. The serialized field names follow the wire shape
/// report collectors already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    /// Label of the suite the case belongs to
    pub describe_label: String,
    /// `"{describe_label}: {label}"`
    pub description: String,
    /// Human-readable pass/fail line, glyph included
    pub message: String,
    /// Underlying failure text, only present on failed cases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub passed: bool,
    /// Case wall time in seconds
    pub time: f64,
}

impl CaseResult {
    /// Build the record for a case that completed without error
    pub fn passed(describe_label: &str, label: &str, time: f64) -> Self {
        let description = format!("{describe_label}: {label}");
        let message = format!("{description}  ✅");
        Self {
            describe_label: describe_label.to_string(),
            description,
            message,
            error_message: None,
            passed: true,
            time,
        }
    }

    /// Build the record for a case that failed anywhere in its lifecycle
    pub fn failed(describe_label: &str, label: &str, error: &str, time: f64) -> Self {
        let description = format!("{describe_label}: {label}");
        let message = format!("{description}  ❌\n   {error}");
        Self {
            describe_label: describe_label.to_string(),
            description,
            message,
            error_message: Some(error.to_string()),
            passed: false,
            time,
        }
    }
}

/// Minimal per-case record streamed to realtime sinks as cases finish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultFragment {
    pub message: String,
    pub passed: bool,
}

impl ResultFragment {
    pub(crate) fn of(result: &CaseResult) -> Self {
        Self {
            message: result.message.clone(),
            passed: result.passed,
        }
    }
}
