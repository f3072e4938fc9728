//! WHOIS domain registration probe
//!
//! Performs WHOIS queries using the `whois-rust` crate with an embedded
//! servers.json database, then extracts the domain creation date from the
//! raw response to derive the registration age.

use crate::config::settings::WhoisSettings;
use crate::utils::WhoisError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::time::Duration;
use whois_rust::{WhoIs, WhoIsLookupOptions};

/// Embedded WHOIS server database (node-whois format)
const SERVERS_JSON: &str = include_str!("servers.json");

/// Registration information extracted from a WHOIS response
#[derive(Debug, Clone)]
pub struct RegistrationInfo {
    /// Domain creation date, if the registry exposes one.
    /// When a response carries multiple creation lines, the first wins.
    pub created: Option<DateTime<Utc>>,
}

impl RegistrationInfo {
    /// Registration age in whole days, if a creation date is known
    pub fn age_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.created.map(|created| (now - created).num_days())
    }
}

/// WHOIS checker
pub struct WhoisChecker {
    timeout: Duration,
    retry_count: u32,
    backoff_base: Duration,
}

impl WhoisChecker {
    /// Create a new WHOIS checker
    pub fn new(settings: &WhoisSettings) -> Self {
        Self {
            timeout: settings.timeout(),
            retry_count: settings.retry_count.max(1),
            backoff_base: settings.backoff_base(),
        }
    }

    /// Perform a WHOIS lookup for the given host.
    /// Automatically strips subdomains so the query targets the
    /// registrable domain (e.g. `www.example.com` -> `example.com`).
    pub async fn lookup(&self, host: &str) -> Result<RegistrationInfo, WhoisError> {
        let domain = extract_registered_domain(host);
        let mut last_error = None;

        for attempt in 0..self.retry_count {
            if attempt > 0 {
                let delay = self.backoff_base * 2u32.pow(attempt - 1);
                tokio::time::sleep(delay).await;
            }

            match self.do_lookup(&domain).await {
                Ok(info) => return Ok(info),
                Err(e) => {
                    tracing::debug!(domain = %domain, attempt, error = %e, "whois attempt failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| WhoisError::LookupFailed {
            domain,
            message: "unknown error".to_string(),
        }))
    }

    async fn do_lookup(&self, domain: &str) -> Result<RegistrationInfo, WhoisError> {
        let domain_owned = domain.to_string();
        let timeout = self.timeout;

        let raw = tokio::time::timeout(timeout, async {
            let domain_clone = domain_owned.clone();
            let timeout_ms = timeout.as_millis() as u64;
            tokio::task::spawn_blocking(move || {
                let whois =
                    WhoIs::from_string(SERVERS_JSON).map_err(|e| WhoisError::LookupFailed {
                        domain: domain_clone.clone(),
                        message: format!("failed to load WHOIS servers: {}", e),
                    })?;

                let mut options = WhoIsLookupOptions::from_string(&domain_clone).map_err(|e| {
                    WhoisError::LookupFailed {
                        domain: domain_clone.clone(),
                        message: format!("invalid domain: {}", e),
                    }
                })?;
                options.timeout = Some(Duration::from_millis(timeout_ms));

                whois.lookup(options).map_err(|e| WhoisError::LookupFailed {
                    domain: domain_clone,
                    message: e.to_string(),
                })
            })
            .await
            .map_err(|e| WhoisError::LookupFailed {
                domain: domain_owned.clone(),
                message: format!("task join error: {}", e),
            })?
        })
        .await
        .map_err(|_| WhoisError::Timeout {
            domain: domain.to_string(),
        })??;

        Ok(parse_registration_info(&raw))
    }
}

/// Extract the creation date from a raw WHOIS response
fn parse_registration_info(raw: &str) -> RegistrationInfo {
    let mut created = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if created.is_none()
            && (lower.starts_with("creation date:")
                || lower.starts_with("created:")
                || lower.starts_with("created on:")
                || lower.starts_with("registration date:")
                || lower.starts_with("registered on:"))
        {
            created = extract_full_value(trimmed)
                .filter(|s| !s.is_empty())
                .and_then(|s| parse_creation_date(&s));
        }
    }

    RegistrationInfo { created }
}

/// Parse a registry creation-date string across the common formats
fn parse_creation_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y.%m.%d %H:%M:%S",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%b-%Y", "%Y.%m.%d", "%d/%m/%Y"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Extract the registered domain from a full host name.
/// e.g. `www.example.com` -> `example.com`, `sub.example.co.uk` -> `example.co.uk`
fn extract_registered_domain(host: &str) -> String {
    let host = host.trim().trim_end_matches('.');

    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() <= 2 {
        return host.to_string();
    }

    // Public suffix approximation for common two-part TLDs
    let two_part_tlds = [
        "co.uk", "org.uk", "ac.uk", "gov.uk", "co.jp", "ne.jp", "com.au", "net.au", "co.nz",
        "com.br", "com.cn", "net.cn", "co.in", "com.mx", "co.za", "com.tr", "com.ua",
    ];

    let lower = host.to_lowercase();
    for tld in &two_part_tlds {
        if lower.ends_with(tld) {
            if parts.len() >= 3 {
                return parts[parts.len() - 3..].join(".");
            }
            return host.to_string();
        }
    }

    parts[parts.len() - 2..].join(".")
}

/// Extract the value after the first colon (preserving colons in timestamps)
fn extract_full_value(line: &str) -> Option<String> {
    let pos = line.find(':')?;
    Some(line[pos + 1..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_icann_creation_date() {
        let raw = "Domain Name: EXAMPLE.COM\nCreation Date: 1995-08-14T04:00:00Z\nRegistry Expiry Date: 2026-08-13T04:00:00Z\n";
        let info = parse_registration_info(raw);
        let created = info.created.unwrap();
        assert_eq!(created.year(), 1995);
        assert_eq!(created.month(), 8);
    }

    #[test]
    fn first_creation_line_wins() {
        let raw = "Creation Date: 2001-01-01T00:00:00Z\nCreation Date: 2015-06-01T00:00:00Z\n";
        let info = parse_registration_info(raw);
        assert_eq!(info.created.unwrap().year(), 2001);
    }

    #[test]
    fn parses_legacy_date_formats() {
        assert_eq!(parse_creation_date("14-aug-1995").unwrap().year(), 1995);
        assert_eq!(parse_creation_date("2003-03-28").unwrap().year(), 2003);
        assert_eq!(
            parse_creation_date("2010.05.12 09:30:00").unwrap().year(),
            2010
        );
        assert!(parse_creation_date("not a date").is_none());
    }

    #[test]
    fn missing_creation_date_yields_none() {
        let raw = "Domain Name: EXAMPLE.DE\nStatus: connect\n";
        let info = parse_registration_info(raw);
        assert!(info.created.is_none());
        assert!(info.age_days(Utc::now()).is_none());
    }

    #[test]
    fn age_in_days() {
        let now = Utc::now();
        let info = RegistrationInfo {
            created: Some(now - chrono::Duration::days(30)),
        };
        assert_eq!(info.age_days(now), Some(30));
    }

    #[test]
    fn strips_subdomains() {
        assert_eq!(extract_registered_domain("www.example.com"), "example.com");
        assert_eq!(
            extract_registered_domain("sub.example.co.uk"),
            "example.co.uk"
        );
        assert_eq!(extract_registered_domain("example.org"), "example.org");
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn lookup_known_domain() {
        let checker = WhoisChecker::new(&WhoisSettings::default());
        let info = checker.lookup("google.com").await.unwrap();
        assert!(info.created.is_some());
    }
}
