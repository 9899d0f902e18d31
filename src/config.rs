//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Listen address
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! If `LISTEN` is not set, it is built from `HOST` (default `0.0.0.0`) and
//! `PORT` (default `3000`), so platforms that only inject `PORT` work as-is.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DNS_CHECK` - Resolve hostnames of submitted URLs (default: `true`; only
//!   `false`, `0`, `no` or `off` disable it)
//! - `DNS_TIMEOUT_MS` - Hostname lookup timeout (default: 5000, max: 60000)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When false, every hostname is accepted without a lookup.
    pub dns_check: bool,
    /// Upper bound on a single hostname lookup, in milliseconds.
    pub dns_timeout_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dns_check = env::var("DNS_CHECK")
            .map(|v| !is_disabled(&v))
            .unwrap_or(true);

        let dns_timeout_ms = env::var("DNS_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5_000);

        Self {
            listen_addr,
            log_level,
            log_format,
            dns_check,
            dns_timeout_ms,
        }
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. Constructed from `HOST` and `PORT`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port` with a numeric port
    /// - `log_format` is not `text` or `json`
    /// - `dns_timeout_ms` is outside `1..=60000`
    pub fn validate(&self) -> Result<()> {
        // Validate listen address format
        let port = self
            .listen_addr
            .rsplit_once(':')
            .map(|(_, port)| port)
            .unwrap_or_default();
        if port.parse::<u16>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.dns_timeout_ms == 0 || self.dns_timeout_ms > 60_000 {
            anyhow::bail!(
                "DNS_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.dns_timeout_ms
            );
        }

        Ok(())
    }

    /// Hostname lookup timeout as a [`Duration`].
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        if self.dns_check {
            tracing::info!("  Hostname check: enabled ({} ms)", self.dns_timeout_ms);
        } else {
            tracing::info!("  Hostname check: disabled");
        }
    }
}

/// Whether a switch value explicitly turns a feature off.
///
/// Unrecognized values keep the feature on, so a typo cannot silently disable
/// the hostname check.
fn is_disabled(value: &str) -> bool {
    ["false", "0", "no", "off"]
        .iter()
        .any(|off| value.trim().eq_ignore_ascii_case(off))
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
