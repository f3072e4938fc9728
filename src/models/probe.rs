//! Per-probe outcome types
//!
//! Each network probe produces a [`ProbeReport`] so callers and tests can
//! inspect which probe succeeded or failed without re-parsing the findings
//! text.

use serde::Serialize;

/// The three network probes, in their fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    Dns,
    Certificate,
    DomainAge,
}

/// Outcome of a single probe. A probe always yields at least one finding,
/// whether it succeeded, failed, or was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub kind: ProbeKind,
    pub succeeded: bool,
    pub findings: Vec<String>,
}

impl ProbeReport {
    /// Create a successful probe report
    pub fn success(kind: ProbeKind, finding: impl Into<String>) -> Self {
        Self {
            kind,
            succeeded: true,
            findings: vec![finding.into()],
        }
    }

    /// Create a failed probe report
    pub fn failure(kind: ProbeKind, finding: impl Into<String>) -> Self {
        Self {
            kind,
            succeeded: false,
            findings: vec![finding.into()],
        }
    }
}
