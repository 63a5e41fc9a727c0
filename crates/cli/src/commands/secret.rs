//! Session secret generation.

use dogshop_storefront::config::{MIN_SESSION_SECRET_LENGTH, check_session_secret};
use rand::{Rng, distr::Alphanumeric};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MAX_ATTEMPTS: usize = 16;

#[derive(Debug, Error)]
#[error("could not generate a secret that passes validation")]
pub struct GenerateError;

/// Print a random secret suitable for `STOREFRONT_SESSION_SECRET`.
///
/// # Errors
///
/// Returns [`GenerateError`] if no candidate passes the storefront's checks.
pub fn generate() -> Result<(), GenerateError> {
    let secret = new_secret()?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", secret.expose_secret());
    }
    Ok(())
}

/// Draw candidates until one passes the same checks the storefront applies.
fn new_secret() -> Result<SecretString, GenerateError> {
    let mut rng = rand::rng();
    for _ in 0..MAX_ATTEMPTS {
        let candidate: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(MIN_SESSION_SECRET_LENGTH)
            .map(char::from)
            .collect();
        let candidate = SecretString::from(candidate);
        match check_session_secret(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) => tracing::debug!("Discarding candidate: {e}"),
        }
    }
    Err(GenerateError)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_secret_length_and_charset() {
        let secret = new_secret().unwrap();
        let value = secret.expose_secret();
        assert_eq!(value.len(), MIN_SESSION_SECRET_LENGTH);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_new_secret_passes_storefront_checks() {
        let secret = new_secret().unwrap();
        assert!(check_session_secret(&secret).is_ok());
    }

    #[test]
    fn test_secrets_differ() {
        let a = new_secret().unwrap();
        let b = new_secret().unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }
}
