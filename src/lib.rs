//! linkshield library
//!
//! Rule-based URL phishing risk assessment:
//! - Lexical heuristics over the raw URL string (scheme, keywords, brand
//!   impersonation, IP literals, suspicious TLDs, symbol flooding, length)
//! - Live network probes: DNS resolution, TLS certificate expiry, WHOIS
//!   domain age, each bounded by a timeout and isolated from the others
//! - A three-tier verdict (SAFE / SUSPICIOUS / PHISHING) derived from the
//!   lexical score
//!
//! # Usage
//!
//! ```rust,ignore
//! use linkshield::Engine;
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = Engine::default();
//!     let assessment = engine.assess("https://example.com").await.unwrap();
//!     println!("{}: {}", assessment.verdict, assessment.findings.join("; "));
//! }
//! ```

pub mod checks;
pub mod config;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use engine::Engine;
pub use models::{Assessment, ProbeKind, ProbeReport, Verdict};
pub use utils::ValidationError;
