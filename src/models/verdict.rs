//! Three-tier risk verdict derived from the lexical score

use serde::Serialize;
use std::fmt;

/// Risk classification for an assessed URL.
///
/// Derived solely from the lexical score; probe outcomes contribute
/// findings but never move the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Safe,
    Suspicious,
    Phishing,
}

impl Verdict {
    /// Map a score onto a verdict using the fixed thresholds:
    /// `<= 2` safe, `3..=4` suspicious, `>= 5` phishing.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => Verdict::Safe,
            3..=4 => Verdict::Suspicious,
            _ => Verdict::Phishing,
        }
    }

    /// Whether a caller may offer an "open this URL" affordance.
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Safe => "SAFE",
            Verdict::Suspicious => "SUSPICIOUS",
            Verdict::Phishing => "PHISHING",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_boundaries() {
        assert_eq!(Verdict::from_score(0), Verdict::Safe);
        assert_eq!(Verdict::from_score(2), Verdict::Safe);
        assert_eq!(Verdict::from_score(3), Verdict::Suspicious);
        assert_eq!(Verdict::from_score(4), Verdict::Suspicious);
        assert_eq!(Verdict::from_score(5), Verdict::Phishing);
        assert_eq!(Verdict::from_score(10), Verdict::Phishing);
    }

    #[test]
    fn only_safe_permits_opening() {
        assert!(Verdict::Safe.is_safe());
        assert!(!Verdict::Suspicious.is_safe());
        assert!(!Verdict::Phishing.is_safe());
    }
}
