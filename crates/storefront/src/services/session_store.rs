//! Key-value view of a client session.
//!
//! Services talk to the session through [`SessionKv`] rather than to
//! `tower_sessions::Session` directly, so cart logic does not care whether the
//! session travels as a signed cookie, a bearer token, or anything else.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;
use tower_sessions::Session;

/// Session backend failure.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session backend error: {0}")]
    Backend(#[from] tower_sessions::session::Error),
}

/// Per-session key-value storage.
pub trait SessionKv: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Value>, SessionStoreError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: Value) -> impl Future<Output = Result<(), SessionStoreError>> + Send;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), SessionStoreError>> + Send;
}

impl SessionKv for Session {
    async fn get(&self, key: &str) -> Result<Option<Value>, SessionStoreError> {
        Ok(Self::get::<Value>(self, key).await?)
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), SessionStoreError> {
        Ok(self.insert(key, value).await?)
    }

    async fn delete(&self, key: &str) -> Result<(), SessionStoreError> {
        self.remove_value(key).await?;
        Ok(())
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::middleware::SessionCache;

    fn session() -> Session {
        Session::new(None, Arc::new(SessionCache::new(16)), None)
    }

    #[tokio::test]
    async fn test_tower_session_get_put_delete() {
        let session = session();

        assert_eq!(SessionKv::get(&session, "cart").await.unwrap(), None);

        SessionKv::put(&session, "cart", json!({"1": 2})).await.unwrap();
        assert_eq!(
            SessionKv::get(&session, "cart").await.unwrap(),
            Some(json!({"1": 2}))
        );

        SessionKv::delete(&session, "cart").await.unwrap();
        assert_eq!(SessionKv::get(&session, "cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let session = session();
        assert!(SessionKv::delete(&session, "cart").await.is_ok());
    }
}
