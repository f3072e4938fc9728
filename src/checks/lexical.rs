//! Lexical rule evaluator
//!
//! Pure string heuristics over the raw URL. No I/O, never fails; malformed
//! input is only ever inspected as a substring. Rules run in a fixed order
//! and each contributes independently to the score.

use regex::Regex;
use std::sync::LazyLock;

/// Keywords commonly used on credential-harvesting pages
const SUSPICIOUS_KEYWORDS: [&str; 9] = [
    "login", "verify", "secure", "account", "update", "bank", "confirm", "reset", "signin",
];

/// Brands frequently impersonated in phishing URLs
const TRUSTED_BRANDS: [&str; 6] = [
    "paypal",
    "google",
    "amazon",
    "bankofamerica",
    "apple",
    "microsoft",
];

/// Symbols that legitimate URLs rarely repeat more than twice
const FLOOD_SYMBOLS: [char; 4] = ['@', '-', '%', '='];

/// URLs longer than this are flagged
const MAX_URL_LENGTH: usize = 75;

static IPV4_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").unwrap());

static SUSPICIOUS_TLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(tk|xyz|cf|gq|ml|cn)\b").unwrap());

/// Evaluate the lexical rules against a URL.
///
/// Returns the accumulated score and the findings in rule order.
pub fn evaluate(url: &str) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut findings = Vec::new();
    let lower = url.to_lowercase();

    if !lower.starts_with("https://") {
        score += 2;
        findings.push("does not use https".to_string());
    } else {
        findings.push("uses https".to_string());
    }

    let keywords: Vec<&str> = SUSPICIOUS_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lower.contains(kw))
        .collect();
    if !keywords.is_empty() {
        score += 2;
        findings.push(format!(
            "suspicious keywords found: {}",
            keywords.join(", ").to_uppercase()
        ));
    }

    let brands: Vec<&str> = TRUSTED_BRANDS
        .iter()
        .copied()
        .filter(|brand| lower.contains(brand))
        .collect();
    if !brands.is_empty() && !keywords.is_empty() {
        score += 2;
        findings.push(format!(
            "possible brand impersonation: {}",
            brands.join(", ").to_uppercase()
        ));
    }

    if IPV4_LITERAL.is_match(url) {
        score += 2;
        findings.push("uses ip address instead of domain".to_string());
    }

    if SUSPICIOUS_TLD.is_match(url) {
        score += 1;
        findings.push("suspicious domain extension detected".to_string());
    }

    for symbol in FLOOD_SYMBOLS {
        if url.chars().filter(|&c| c == symbol).count() > 2 {
            score += 1;
            findings.push(format!("too many '{}' symbols detected", symbol));
        }
    }

    if url.len() > MAX_URL_LENGTH {
        score += 1;
        findings.push("url length is unusually long".to_string());
    }

    (score, findings)
}
