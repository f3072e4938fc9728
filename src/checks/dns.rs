//! DNS resolution probe
//!
//! Resolves the URL host to an address using the system resolver with a
//! bounded query timeout. No retries.

use crate::config::settings::DnsSettings;
use crate::utils::DnsError;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::Resolver;
use std::net::IpAddr;
use std::time::Duration;

/// Type alias for the Tokio async resolver
type TokioResolver = Resolver<TokioConnectionProvider>;

/// DNS checker backed by the system resolver
pub struct DnsChecker {
    timeout: Duration,
}

impl DnsChecker {
    /// Create a new DNS checker
    pub fn new(settings: &DnsSettings) -> Self {
        Self {
            timeout: settings.timeout(),
        }
    }

    /// Resolve a domain to its first address
    pub async fn resolve(&self, domain: &str) -> Result<IpAddr, DnsError> {
        let resolver: TokioResolver = match TokioResolver::builder_tokio() {
            Ok(builder) => builder.build(),
            Err(e) => {
                return Err(DnsError::ResolutionFailed {
                    domain: domain.to_string(),
                    message: format!("failed to create system resolver: {}", e),
                });
            }
        };

        match tokio::time::timeout(self.timeout, resolver.lookup_ip(domain)).await {
            Ok(Ok(lookup)) => lookup.iter().next().ok_or_else(|| DnsError::NoRecords {
                domain: domain.to_string(),
            }),
            Ok(Err(e)) => Err(DnsError::ResolutionFailed {
                domain: domain.to_string(),
                message: e.to_string(),
            }),
            Err(_) => Err(DnsError::Timeout {
                domain: domain.to_string(),
            }),
        }
    }
}
