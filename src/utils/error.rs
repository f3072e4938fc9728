//! Custom error types for linkshield
//!
//! This module defines domain-specific error types using `thiserror` for
//! the different failure modes that can occur during a URL assessment.
//! Only [`ValidationError`] ever crosses the assessment façade; every
//! probe-level error is absorbed into the findings list.

use thiserror::Error;

/// Input validation errors, surfaced directly by [`crate::Engine::assess`]
/// before any rule or probe runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("url is empty")]
    EmptyUrl,

    #[error("url must start with http:// or https://: {url}")]
    MissingScheme { url: String },
}

/// DNS resolution errors
#[derive(Error, Debug)]
pub enum DnsError {
    #[error("no DNS records found for domain: {domain}")]
    NoRecords { domain: String },

    #[error("DNS query timed out for {domain}")]
    Timeout { domain: String },

    #[error("DNS resolution failed for {domain}: {message}")]
    ResolutionFailed { domain: String, message: String },
}

/// TLS connection and certificate inspection errors
#[derive(Error, Debug)]
pub enum TlsError {
    #[error("TCP connection to {host}:443 timed out")]
    ConnectTimeout { host: String },

    #[error("TCP connection to {host}:443 failed: {message}")]
    ConnectionFailed { host: String, message: String },

    #[error("TLS handshake with {host} failed: {message}")]
    HandshakeFailed { host: String, message: String },

    #[error("invalid server name: {host}")]
    InvalidServerName { host: String },

    #[error("failed to parse certificate: {message}")]
    CertificateParse { message: String },

    #[error("TLS configuration error: {message}")]
    ConfigurationError { message: String },
}

/// WHOIS lookup errors
#[derive(Error, Debug)]
pub enum WhoisError {
    #[error("WHOIS query timed out for {domain}")]
    Timeout { domain: String },

    #[error("WHOIS lookup failed for {domain}: {message}")]
    LookupFailed { domain: String, message: String },
}

/// Errors from the logic surrounding the probes (host extraction).
/// Converted into a single catch-all finding at the probe-set boundary.
#[derive(Error, Debug)]
pub enum ProbeSetError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("url has no host component")]
    MissingHost,
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse configuration: {message}")]
    ParseError { message: String },
}
