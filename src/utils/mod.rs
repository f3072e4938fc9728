//! Utility modules for linkshield
//!
//! This module contains the error types shared across the crate.

pub mod error;

pub use error::{
    ConfigError, DnsError, ProbeSetError, TlsError, ValidationError, WhoisError,
};
