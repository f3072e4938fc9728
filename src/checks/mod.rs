//! Check modules for linkshield
//!
//! `lexical` is the pure string-rule evaluator; `dns`, `tls` and `whois`
//! implement the three bounded network probes.

pub mod dns;
pub mod lexical;
pub mod tls;
pub mod whois;

pub use dns::DnsChecker;
pub use tls::{CertificateChecker, CertificateExpiry};
pub use whois::{RegistrationInfo, WhoisChecker};
