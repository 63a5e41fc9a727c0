//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The session id travels in
//! a signed cookie; the session data (the cart) stays in a [`SessionCache`]
//! and is evicted when the session expires or the cache is full.

use secrecy::ExposeSecret;
use thiserror::Error;
use tower_sessions::cookie::Key;
use tower_sessions::{Expiry, SessionManagerLayer};

use super::session_cache::SessionCache;
use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "dogshop_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Errors building the cookie signing key.
#[derive(Debug, Error)]
pub enum SessionKeyError {
    #[error("session secret is not usable as a signing key: {0}")]
    InvalidSecret(String),
    #[error("failed to generate a random session key")]
    Generate,
}

/// Derive the cookie signing key from configuration.
///
/// Without a configured secret a random key is generated, so cookies issued
/// by a previous process are no longer accepted.
///
/// # Errors
///
/// Returns [`SessionKeyError`] if the secret is too short or the system
/// random source is unavailable.
pub fn session_key(config: &StorefrontConfig) -> Result<Key, SessionKeyError> {
    match &config.session_secret {
        Some(secret) => Key::try_from(secret.expose_secret().as_bytes())
            .map_err(|e| SessionKeyError::InvalidSecret(e.to_string())),
        None => {
            tracing::warn!(
                "STOREFRONT_SESSION_SECRET not set; using a random key (sessions reset on restart)"
            );
            Key::try_generate().ok_or(SessionKeyError::Generate)
        }
    }
}

/// Create the session layer with a bounded in-memory store.
///
/// # Arguments
///
/// * `config` - Storefront configuration (`Secure` cookie flag, store capacity)
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<SessionCache> {
    let store = SessionCache::new(config.session_capacity);

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn test_random_key_when_secret_unset() {
        let config = StorefrontConfig::default();
        assert!(session_key(&config).is_ok());
    }

    #[test]
    fn test_key_from_configured_secret_is_stable() {
        let config = StorefrontConfig {
            session_secret: Some(SecretString::from("k".repeat(64))),
            ..StorefrontConfig::default()
        };

        let first = session_key(&config).unwrap();
        let second = session_key(&config).unwrap();
        assert_eq!(first.master(), second.master());
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = StorefrontConfig {
            session_secret: Some(SecretString::from("too short")),
            ..StorefrontConfig::default()
        };

        assert!(matches!(
            session_key(&config),
            Err(SessionKeyError::InvalidSecret(_))
        ));
    }
}
