//! Data models for linkshield
//!
//! This module contains the data structures shared between the engine and
//! its callers.

pub mod assessment;
pub mod probe;
pub mod verdict;

pub use assessment::Assessment;
pub use probe::{ProbeKind, ProbeReport};
pub use verdict::Verdict;
