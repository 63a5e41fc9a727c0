//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront starts with sensible defaults.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 5000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: <http://localhost:5000>)
//! - `STOREFRONT_SESSION_SECRET` - Session cookie signing secret (min 64 chars, high entropy).
//!   When unset, a random key is generated at startup and sessions do not survive restarts.
//! - `STOREFRONT_CATALOG` - `classic`, `gallery`, or a path to a YAML catalog (default: classic)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use crate::catalog::CatalogSource;

/// Minimum secret length; the cookie signing key needs 64 bytes.
pub const MIN_SESSION_SECRET_LENGTH: usize = 64;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Session cookie signing secret
    pub session_secret: Option<SecretString>,
    /// Most sessions held in memory at once
    pub session_capacity: u64,
    /// Where the product catalog comes from
    pub catalog: CatalogSource,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed or if the session
    /// secret fails validation (length, placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontConfig::from_env`].
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_env(&get, "STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env(&get, "STOREFRONT_PORT", "5000")?;

        let base_url = get_or_default(&get, "STOREFRONT_BASE_URL", "http://localhost:5000");
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
        })?;

        let session_secret = match get("STOREFRONT_SESSION_SECRET") {
            Some(value) => {
                let secret = SecretString::from(value);
                check_session_secret(&secret)?;
                Some(secret)
            }
            None => None,
        };

        let session_capacity = parse_env(&get, "STOREFRONT_SESSION_CAPACITY", "10000")?;
        if session_capacity == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_SESSION_CAPACITY".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let catalog = CatalogSource::parse(&get_or_default(&get, "STOREFRONT_CATALOG", "classic"));
        let static_dir = PathBuf::from(get_or_default(
            &get,
            "STOREFRONT_STATIC_DIR",
            "crates/storefront/static",
        ));

        Ok(Self {
            host,
            port,
            base_url,
            session_secret,
            session_capacity,
            catalog,
            static_dir,
            sentry_dsn: get("SENTRY_DSN"),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_env(&get, "SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: parse_env(&get, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS (marks cookies `Secure`).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            base_url: "http://localhost:5000".to_string(),
            session_secret: None,
            session_capacity: 10_000,
            catalog: CatalogSource::default(),
            static_dir: PathBuf::from("crates/storefront/static"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

/// Check a candidate `STOREFRONT_SESSION_SECRET` value.
///
/// # Errors
///
/// Returns [`ConfigError::InsecureSecret`] if the secret is too short, looks
/// like a placeholder, or has low entropy.
pub fn check_session_secret(secret: &SecretString) -> Result<(), ConfigError> {
    validate_session_secret(secret, "STOREFRONT_SESSION_SECRET")?;
    validate_secret_strength(secret.expose_secret(), "STOREFRONT_SESSION_SECRET")
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(get: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get(key).unwrap_or_else(|| default.to_string())
}

/// Get and parse a variable, falling back to `default` when unset.
fn parse_env<T>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_or_default(get, key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use `ds-cli session-secret generate`."
            ),
        ));
    }

    Ok(())
}
