//! Application settings configuration
//!
//! Defines per-probe timeouts and other runtime configuration.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// DNS probe settings
#[derive(Debug, Clone, Deserialize)]
pub struct DnsSettings {
    pub timeout_secs: u64,
}

impl Default for DnsSettings {
    fn default() -> Self {
        Self { timeout_secs: 5 }
    }
}

impl DnsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// TLS probe settings
#[derive(Debug, Clone, Deserialize)]
pub struct TlsSettings {
    pub connect_timeout_secs: u64,
    pub handshake_timeout_secs: u64,
}

impl Default for TlsSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 3,
            handshake_timeout_secs: 3,
        }
    }
}

impl TlsSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }
}

/// WHOIS probe settings
#[derive(Debug, Clone, Deserialize)]
pub struct WhoisSettings {
    pub timeout_secs: u64,
    pub retry_count: u32,
    pub backoff_base_ms: u64,
}

impl Default for WhoisSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            retry_count: 2,
            backoff_base_ms: 500,
        }
    }
}

impl WhoisSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dns: DnsSettings,
    #[serde(default)]
    pub tls: TlsSettings,
    #[serde(default)]
    pub whois: WhoisSettings,
}

impl Settings {
    /// Load settings from the default config file, falling back to
    /// built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}
