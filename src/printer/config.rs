//! # Printer Configuration
//!
//! Where and how to reach an ePOS-Print capable printer.
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `host` | (required) | IP address or host name, optionally with `:port` |
//! | `use_https` | `false` | use `https://` instead of `http://` |
//! | `devid` | `local_printer` | device id configured on the printer |
//! | `timeout_ms` | `5000` | job timeout the printer applies |
//! | `path` | `/cgi-bin/epos/service.cgi` | service endpoint |
//! | `request_timeout_ms` | `30000` | HTTP request timeout on our side |
//! | `escape_newlines` | `false` | write `\n` in text as `&#10;` |
//!
//! ## Usage
//!
//! ```
//! use epos::printer::PrinterConfig;
//!
//! let config = PrinterConfig::new("10.0.0.12");
//! assert_eq!(config.endpoint(), "http://10.0.0.12/cgi-bin/epos/service.cgi");
//!
//! let config = PrinterConfig::from_json(r#"{"host": "10.0.0.12", "use_https": true}"#).unwrap();
//! assert_eq!(config.endpoint(), "https://10.0.0.12/cgi-bin/epos/service.cgi");
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EposError;

/// Default device id
pub const DEFAULT_DEVID: &str = "local_printer";

/// Default service path
pub const DEFAULT_PATH: &str = "/cgi-bin/epos/service.cgi";

/// Default job timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

/// Default HTTP request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

fn default_devid() -> String {
    DEFAULT_DEVID.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

/// Connection settings for one printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterConfig {
    pub host: String,
    #[serde(default)]
    pub use_https: bool,
    #[serde(default = "default_devid")]
    pub devid: String,
    /// Job timeout sent to the printer as the `timeout` query parameter.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
    #[serde(default = "default_path")]
    pub path: String,
    /// Upper bound for the whole HTTP exchange.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default)]
    pub escape_newlines: bool,
}

impl PrinterConfig {
    /// Configuration for `host` with every other field at its default.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            use_https: false,
            devid: default_devid(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            path: default_path(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            escape_newlines: false,
        }
    }

    /// Load and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, EposError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can form a request URL.
    pub fn validate(&self) -> Result<(), EposError> {
        if self.host.trim().is_empty() {
            return Err(EposError::Config("host must not be empty".to_string()));
        }
        if self.host.contains('/') {
            return Err(EposError::Config(format!(
                "host must not contain a path or scheme: {}",
                self.host
            )));
        }
        if !self.path.starts_with('/') {
            return Err(EposError::Config(format!(
                "path must start with '/': {}",
                self.path
            )));
        }
        Ok(())
    }

    pub fn scheme(&self) -> &'static str {
        if self.use_https { "https" } else { "http" }
    }

    /// Full service URL without query string.
    pub fn endpoint(&self) -> String {
        format!("{}://{}{}", self.scheme(), self.host, self.path)
    }

    /// Query parameters sent with every job.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("devid", self.devid.clone()),
            ("timeout", self.timeout_ms.to_string()),
        ]
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

// ============================================================================
// TESTS
// ============================================================================
