//! Configuration for the mock server.
//!
//! Defines endpoints, error-injection rules, authentication, and request
//! logging settings, loaded from a YAML or JSON file.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating a configuration file.
///
/// All of these are fatal at startup; no request is served from a
/// configuration that failed to load.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} as YAML: {source}", path.display())]
    Yaml {
        path: std::path::PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse {} as JSON: {source}", path.display())]
    Json {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    fn invalid(reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            reason: reason.into(),
        }
    }
}

/// Top-level mock server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// TCP port the server listens on
    #[serde(default)]
    pub port: u16,

    /// Configured endpoints, one exact-path route each
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,

    /// Request logging settings
    #[serde(default)]
    pub logging: LogConfig,
}

impl Config {
    /// Load a configuration file. `.yaml` and `.yml` files are parsed as
    /// YAML, everything else as JSON. The result is normalized and
    /// validated; any failure is fatal.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let mut config: Self = if matches!(extension, "yaml" | "yml") {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Apply load-time defaults: zero endpoint status becomes 200, zero
    /// count becomes 1, logging format and output fall back to
    /// `plain`/`stdout`.
    pub fn normalize(&mut self) {
        for endpoint in &mut self.endpoints {
            if endpoint.status == 0 {
                endpoint.status = 200;
            }
            if endpoint.count == 0 {
                endpoint.count = 1;
            }
        }
        if self.logging.format.is_empty() {
            self.logging.format = "plain".to_string();
        }
        if self.logging.output.is_empty() {
            self.logging.output = "stdout".to_string();
        }
    }

    /// Validate the configuration. Expects `normalize` to have run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::invalid("port must be set"));
        }

        let mut seen = HashSet::new();
        for endpoint in &self.endpoints {
            endpoint.validate()?;
            if !seen.insert(endpoint.path.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate endpoint path {}",
                    endpoint.path
                )));
            }
        }
        Ok(())
    }
}

/// A single mock endpoint definition. Immutable once loaded; one instance
/// per configured route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Endpoint {
    /// Request path, matched exactly (no patterns, no trailing-slash
    /// normalization)
    pub path: String,

    /// Expected HTTP method, compared exactly; use canonical upper-case
    /// names
    pub method: String,

    /// Schema for generated records: a JSON mapping from field name to a
    /// type tag. Any other content selects the generic fallback shape.
    #[serde(default)]
    pub data: String,

    /// Default number of records per response (0 = default 1)
    #[serde(default)]
    pub count: usize,

    /// Static file served instead of generated data; bypasses everything
    /// but authentication
    #[serde(default)]
    pub file: String,

    /// Response status code (0 = default 200)
    #[serde(default)]
    pub status: u16,

    /// Artificial delay before responding: "500ms", "2s", "3m", or a
    /// compound duration like "1m30s"
    #[serde(default)]
    pub delay: String,

    /// Additional response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Ordered error-injection rules; evaluated first to last, first
    /// trigger wins
    #[serde(default)]
    pub errors: Vec<ErrorRule>,

    /// Credential check applied before anything else is done
    #[serde(default)]
    pub auth: Option<AuthRule>,
}

impl Endpoint {
    /// Validate one endpoint definition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.path.starts_with('/') {
            return Err(ConfigError::invalid(format!(
                "endpoint path {:?} must start with '/'",
                self.path
            )));
        }
        if self.method.is_empty() {
            return Err(ConfigError::invalid(format!(
                "endpoint {}: method cannot be empty",
                self.path
            )));
        }
        if !(100..=599).contains(&self.status) {
            return Err(ConfigError::invalid(format!(
                "endpoint {}: status {} out of range",
                self.path, self.status
            )));
        }
        for rule in &self.errors {
            rule.validate(&self.path)?;
        }
        Ok(())
    }
}

/// Probabilistic error response rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorRule {
    /// Per-request trigger probability, 0.0 to 1.0. Rules are checked
    /// independently; probabilities are not normalized across the list.
    #[serde(default)]
    pub probability: f64,

    /// Status code returned when the rule fires
    #[serde(default)]
    pub status: u16,

    /// Response message, sent as `{"error": message}`; empty sends no body
    #[serde(default)]
    pub message: String,
}

impl ErrorRule {
    fn validate(&self, endpoint_path: &str) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(ConfigError::invalid(format!(
                "endpoint {}: error probability {} out of range",
                endpoint_path, self.probability
            )));
        }
        if !(100..=599).contains(&self.status) {
            return Err(ConfigError::invalid(format!(
                "endpoint {}: error status {} out of range",
                endpoint_path, self.status
            )));
        }
        Ok(())
    }
}

/// Endpoint authentication rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthRule {
    /// Auth scheme: "basic" or "bearer", matched case-insensitively.
    /// Anything else fails every request on the endpoint.
    #[serde(rename = "type")]
    pub kind: String,

    /// Expected token for bearer auth
    #[serde(default)]
    pub token: String,

    /// Expected username for basic auth
    #[serde(default)]
    pub username: String,

    /// Expected password for basic auth
    #[serde(default)]
    pub password: String,
}

/// Request logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Master switch; when disabled every log call is a no-op
    #[serde(default)]
    pub enabled: bool,

    /// Line format: "json" or "plain" (anything else falls back to plain)
    #[serde(default)]
    pub format: String,

    /// Destination: "stdout" or a file path opened in append mode
    #[serde(default)]
    pub output: String,
}

/// Parse an endpoint delay string.
///
/// Accepts a bare integer with an `ms`, `s`, or `m` suffix, or a compound
/// duration such as "1m30s", "1.5s", or "250us". Empty or unparsable input
/// yields no delay.
pub fn parse_delay(input: &str) -> Option<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(ms) = input
        .strip_suffix("ms")
        .and_then(|n| n.parse::<u64>().ok())
    {
        return Some(Duration::from_millis(ms));
    }
    if let Some(secs) = input.strip_suffix('s').and_then(|n| n.parse::<u64>().ok()) {
        return Some(Duration::from_secs(secs));
    }
    if let Some(mins) = input.strip_suffix('m').and_then(|n| n.parse::<u64>().ok()) {
        return Some(Duration::from_secs(mins.checked_mul(60)?));
    }

    parse_compound(input)
}

/// Parse a compound duration: one or more (decimal number, unit) pairs,
/// e.g. "1m30s" or "1.5s". Units: ns, us/µs, ms, s, m, h.
fn parse_compound(input: &str) -> Option<Duration> {
    let mut total = Duration::ZERO;
    let mut rest = input;

    while !rest.is_empty() {
        let number_end = rest.find(|c: char| !c.is_ascii_digit() && c != '.')?;
        if number_end == 0 {
            return None;
        }
        let value: f64 = rest[..number_end].parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        rest = &rest[number_end..];

        // Two-letter units first so "ms" is not read as minutes.
        let (unit_len, nanos_per_unit) = if rest.starts_with("ns") {
            ("ns".len(), 1.0)
        } else if rest.starts_with("us") {
            ("us".len(), 1e3)
        } else if rest.starts_with("µs") {
            ("µs".len(), 1e3)
        } else if rest.starts_with("ms") {
            ("ms".len(), 1e6)
        } else if rest.starts_with('s') {
            (1, 1e9)
        } else if rest.starts_with('m') {
            (1, 60.0 * 1e9)
        } else if rest.starts_with('h') {
            (1, 3600.0 * 1e9)
        } else {
            return None;
        };
        rest = &rest[unit_len..];

        total = total.checked_add(Duration::from_nanos((value * nanos_per_unit) as u64))?;
    }

    Some(total)
}
