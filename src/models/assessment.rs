//! Complete assessment result returned by the façade

use super::Verdict;
use serde::Serialize;

/// Result of a single URL assessment.
///
/// `findings` preserves evaluation order: lexical rules first, then the
/// probes in DNS, certificate, domain-age order. Duplicate strings are
/// kept as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub score: u32,
    pub verdict: Verdict,
    pub findings: Vec<String>,
}

impl Assessment {
    pub fn new(score: u32, findings: Vec<String>) -> Self {
        Self {
            score,
            verdict: Verdict::from_score(score),
            findings,
        }
    }
}
