//! TLS certificate expiry probe
//!
//! Opens a TLS connection to the host on port 443 with strict certificate
//! chain validation against the webpki trust roots, then reads the leaf
//! certificate's `notAfter` timestamp.

use crate::config::settings::TlsSettings;
use crate::utils::TlsError;
use chrono::{DateTime, TimeZone, Utc};
use rustls::pki_types::ServerName;
use rustls::ClientConfig;
use std::sync::Arc;
use tokio::net::TcpStream;
use x509_parser::prelude::*;

const HTTPS_PORT: u16 = 443;

/// Expiry information extracted from a validated leaf certificate
#[derive(Debug, Clone)]
pub struct CertificateExpiry {
    /// End of the certificate's validity period
    pub not_after: DateTime<Utc>,
}

impl CertificateExpiry {
    /// Whole days remaining until expiry; negative once expired.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.not_after - now).num_days()
    }
}

/// TLS certificate checker
pub struct CertificateChecker {
    settings: TlsSettings,
}

impl CertificateChecker {
    /// Create a new certificate checker
    pub fn new(settings: &TlsSettings) -> Self {
        // Ensure the ring crypto provider is installed before building
        // any rustls client config
        let _ = rustls::crypto::ring::default_provider().install_default();
        Self {
            settings: settings.clone(),
        }
    }

    /// Connect to `host:443`, validate the certificate chain against the
    /// default trust store, and return the leaf certificate expiry.
    pub async fn check(&self, host: &str) -> Result<CertificateExpiry, TlsError> {
        let root_store =
            rustls::RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();
        let connector = tokio_rustls::TlsConnector::from(Arc::new(config));

        let stream = tokio::time::timeout(
            self.settings.connect_timeout(),
            TcpStream::connect((host, HTTPS_PORT)),
        )
        .await
        .map_err(|_| TlsError::ConnectTimeout {
            host: host.to_string(),
        })?
        .map_err(|e| TlsError::ConnectionFailed {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        let server_name = ServerName::try_from(host.to_string()).map_err(|_| {
            TlsError::InvalidServerName {
                host: host.to_string(),
            }
        })?;

        let tls_stream = tokio::time::timeout(
            self.settings.handshake_timeout(),
            connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| TlsError::HandshakeFailed {
            host: host.to_string(),
            message: "TLS handshake timed out".to_string(),
        })?
        .map_err(|e| TlsError::HandshakeFailed {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        let (_, client_connection) = tls_stream.get_ref();
        let leaf = client_connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .ok_or_else(|| TlsError::HandshakeFailed {
                host: host.to_string(),
                message: "no peer certificate presented".to_string(),
            })?;

        let not_after = parse_not_after(leaf.as_ref())?;
        Ok(CertificateExpiry { not_after })
    }
}

/// Parse a DER-encoded certificate and extract its `notAfter` timestamp
fn parse_not_after(der: &[u8]) -> Result<DateTime<Utc>, TlsError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| TlsError::CertificateParse {
        message: format!("{:?}", e),
    })?;

    let timestamp = cert.validity().not_after.timestamp();
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| TlsError::CertificateParse {
            message: "invalid notAfter timestamp in certificate".to_string(),
        })
}
