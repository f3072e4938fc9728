//! Assessment engine
//!
//! The single entry point callers use: validate the URL, run the lexical
//! rules, run the three network probes concurrently, and map the score to
//! a verdict. Probe failures never escape this module; each one becomes a
//! finding and the assessment completes normally.

use crate::checks::{
    lexical, CertificateChecker, CertificateExpiry, DnsChecker, RegistrationInfo, WhoisChecker,
};
use crate::config::Settings;
use crate::models::{Assessment, ProbeKind, ProbeReport};
use crate::utils::{DnsError, ProbeSetError, TlsError, ValidationError, WhoisError};
use chrono::{DateTime, Utc};
use std::net::IpAddr;
use url::Url;

/// Domains registered fewer than this many days ago are flagged
const VERY_NEW_DOMAIN_DAYS: i64 = 180;

/// URL risk assessment engine.
///
/// Stateless across calls; safe to share behind a reference and invoke
/// concurrently for independent URLs.
pub struct Engine {
    dns: DnsChecker,
    tls: CertificateChecker,
    whois: WhoisChecker,
}

impl Engine {
    /// Create an engine from settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            dns: DnsChecker::new(&settings.dns),
            tls: CertificateChecker::new(&settings.tls),
            whois: WhoisChecker::new(&settings.whois),
        }
    }

    /// Assess a URL: lexical rules, then network probes, then verdict.
    ///
    /// Fails only on invalid input, before any network activity. Every
    /// probe failure is converted into a finding instead.
    pub async fn assess(&self, url: &str) -> Result<Assessment, ValidationError> {
        let url = validate(url)?;
        tracing::debug!(url, "assessing url");

        let (score, mut findings) = lexical::evaluate(url);

        match self.probe_url(url).await {
            Ok(reports) => {
                for report in reports {
                    findings.extend(report.findings);
                }
            }
            // Host extraction failed; the probes never ran
            Err(e) => findings.push(format!("check error: {}", e.to_string().to_uppercase())),
        }

        let assessment = Assessment::new(score, findings);
        tracing::debug!(score = assessment.score, verdict = %assessment.verdict, "assessment complete");
        Ok(assessment)
    }

    /// Run the three network probes for a URL and return one report per
    /// probe, always in DNS, certificate, domain-age order.
    ///
    /// The probes run concurrently and are isolated from each other: a
    /// failure or timeout in one never cancels the rest.
    pub async fn probe_url(&self, url: &str) -> Result<Vec<ProbeReport>, ProbeSetError> {
        let parsed = Url::parse(url)?;
        let host = parsed
            .host_str()
            .ok_or(ProbeSetError::MissingHost)?
            .to_string();
        let https = parsed.scheme() == "https";

        let (dns, certificate, registration) = tokio::join!(
            self.dns.resolve(&host),
            async {
                if https {
                    Some(self.tls.check(&host).await)
                } else {
                    None
                }
            },
            self.whois.lookup(&host),
        );

        let now = Utc::now();
        Ok(vec![
            dns_report(dns),
            certificate_report(certificate, now),
            domain_age_report(registration, now),
        ])
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/// Validate the raw URL string, returning the trimmed URL on success
fn validate(url: &str) -> Result<&str, ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let lower = url.to_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(ValidationError::MissingScheme {
            url: url.to_string(),
        });
    }

    Ok(url)
}

fn dns_report(result: Result<IpAddr, DnsError>) -> ProbeReport {
    match result {
        Ok(ip) => ProbeReport::success(ProbeKind::Dns, format!("resolves to ip: {}", ip)),
        Err(e) => {
            tracing::debug!(error = %e, "dns probe failed");
            ProbeReport::failure(ProbeKind::Dns, "dns resolution failed")
        }
    }
}

fn certificate_report(
    result: Option<Result<CertificateExpiry, TlsError>>,
    now: DateTime<Utc>,
) -> ProbeReport {
    match result {
        None => ProbeReport::success(ProbeKind::Certificate, "no ssl certificate (non-https url)"),
        Some(Ok(expiry)) => {
            let days = expiry.days_remaining(now);
            if days > 0 {
                ProbeReport::success(
                    ProbeKind::Certificate,
                    format!("ssl cert valid (expires in {} days)", days),
                )
            } else {
                ProbeReport::success(ProbeKind::Certificate, "ssl certificate expired")
            }
        }
        Some(Err(e)) => {
            tracing::debug!(error = %e, "certificate probe failed");
            ProbeReport::failure(ProbeKind::Certificate, "ssl certificate check failed")
        }
    }
}

fn domain_age_report(result: Result<RegistrationInfo, WhoisError>, now: DateTime<Utc>) -> ProbeReport {
    match result {
        Ok(info) => match info.age_days(now) {
            Some(age) if age < VERY_NEW_DOMAIN_DAYS => ProbeReport::success(
                ProbeKind::DomainAge,
                format!("domain age: {} days (very new - suspicious)", age),
            ),
            Some(age) => {
                ProbeReport::success(ProbeKind::DomainAge, format!("domain age: {} days", age))
            }
            None => ProbeReport::success(ProbeKind::DomainAge, "domain age: unknown"),
        },
        Err(e) => {
            tracing::debug!(error = %e, "whois probe failed");
            ProbeReport::failure(ProbeKind::DomainAge, "whois lookup failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn validation_rejects_empty_and_whitespace() {
        assert_eq!(validate(""), Err(ValidationError::EmptyUrl));
        assert_eq!(validate("   "), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn validation_rejects_missing_scheme() {
        assert!(matches!(
            validate("example.com"),
            Err(ValidationError::MissingScheme { .. })
        ));
        assert!(matches!(
            validate("ftp://example.com"),
            Err(ValidationError::MissingScheme { .. })
        ));
    }

    #[test]
    fn validation_accepts_both_schemes() {
        assert_eq!(validate("http://example.com"), Ok("http://example.com"));
        assert_eq!(
            validate("  https://example.com  "),
            Ok("https://example.com")
        );
    }

    #[test]
    fn expired_certificate_finding() {
        let now = Utc::now();
        let report = certificate_report(
            Some(Ok(CertificateExpiry {
                not_after: now - Duration::days(1),
            })),
            now,
        );
        assert_eq!(report.findings, vec!["ssl certificate expired".to_string()]);
    }

    #[test]
    fn non_https_skips_certificate_probe() {
        let report = certificate_report(None, Utc::now());
        assert_eq!(
            report.findings,
            vec!["no ssl certificate (non-https url)".to_string()]
        );
    }

    #[test]
    fn very_new_domain_flagged() {
        let now = Utc::now();
        let recent = RegistrationInfo {
            created: Some(now - Duration::days(30)),
        };
        let report = domain_age_report(Ok(recent), now);
        assert_eq!(
            report.findings,
            vec!["domain age: 30 days (very new - suspicious)".to_string()]
        );

        let old = RegistrationInfo {
            created: Some(now - Duration::days(4000)),
        };
        let report = domain_age_report(Ok(old), now);
        assert_eq!(report.findings, vec!["domain age: 4000 days".to_string()]);
    }

    #[test]
    fn unknown_domain_age() {
        let report = domain_age_report(Ok(RegistrationInfo { created: None }), Utc::now());
        assert_eq!(report.findings, vec!["domain age: unknown".to_string()]);
    }
}
