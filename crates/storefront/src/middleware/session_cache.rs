//! Bounded in-memory session store.
//!
//! Session records live in a `moka` cache. Each entry's time-to-live follows
//! the record's own expiry date, so an expired session (and the cart in it)
//! is dropped from memory, not just hidden. The cache also has a capacity
//! bound; once it is full, older or rarely used sessions are evicted.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::{Expiry, future::Cache};
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};

/// Session store backed by a capacity-bounded, expiring cache.
#[derive(Clone)]
pub struct SessionCache {
    cache: Cache<Id, Record>,
}

impl SessionCache {
    /// Create a store holding at most `max_sessions` sessions.
    #[must_use]
    pub fn new(max_sessions: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_sessions)
            .expire_after(RecordExpiry)
            .build();
        Self { cache }
    }

    /// Approximate number of sessions currently held.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

#[async_trait]
impl SessionStore for SessionCache {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.cache.contains_key(&record.id) {
            record.id = Id::default();
        }
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(self
            .cache
            .get(session_id)
            .await
            .filter(|record| record.expiry_date > OffsetDateTime::now_utc()))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.cache.invalidate(session_id).await;
        Ok(())
    }
}

/// Expires each cache entry at its record's expiry date.
struct RecordExpiry;

impl RecordExpiry {
    fn time_left(record: &Record) -> Duration {
        Duration::try_from(record.expiry_date - OffsetDateTime::now_utc()).unwrap_or(Duration::ZERO)
    }
}

impl Expiry<Id, Record> for RecordExpiry {
    fn expire_after_create(&self, _id: &Id, record: &Record, _created_at: Instant) -> Option<Duration> {
        Some(Self::time_left(record))
    }

    fn expire_after_update(
        &self,
        _id: &Id,
        record: &Record,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(Self::time_left(record))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use tower_sessions::cookie::time;

    use super::*;

    fn record(expires_in: time::Duration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::from([("cart".to_string(), serde_json::json!({"1": 1}))]),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_save_load_delete() {
        let store = SessionCache::new(10);
        let record = record(time::Duration::hours(1));

        store.save(&record).await.unwrap();
        let loaded = store.load(&record.id).await.unwrap().unwrap();
        assert_eq!(loaded.data, record.data);

        store.delete(&record.id).await.unwrap();
        assert!(store.load(&record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_keeps_existing_sessions() {
        let store = SessionCache::new(10);
        let existing = record(time::Duration::hours(1));
        store.save(&existing).await.unwrap();

        let mut colliding = record(time::Duration::hours(1));
        colliding.id = existing.id;
        colliding.data.clear();
        store.create(&mut colliding).await.unwrap();

        assert_ne!(colliding.id, existing.id);
        let kept = store.load(&existing.id).await.unwrap().unwrap();
        assert_eq!(kept.data, existing.data);
    }

    #[tokio::test]
    async fn test_expired_session_is_evicted() {
        let store = SessionCache::new(10);
        let expired = record(-time::Duration::minutes(1));

        store.save(&expired).await.unwrap();
        store.cache.run_pending_tasks().await;

        assert!(store.load(&expired.id).await.unwrap().is_none());
        assert_eq!(store.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_saving_past_expiry_evicts_live_session() {
        let store = SessionCache::new(10);
        let mut session = record(time::Duration::hours(1));
        store.save(&session).await.unwrap();

        session.expiry_date = OffsetDateTime::now_utc() - time::Duration::seconds(1);
        store.save(&session).await.unwrap();
        store.cache.run_pending_tasks().await;

        assert!(store.load(&session.id).await.unwrap().is_none());
        assert_eq!(store.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_capacity_bounds_sessions() {
        let store = SessionCache::new(3);

        for _ in 0..50 {
            store.save(&record(time::Duration::hours(1))).await.unwrap();
        }
        store.cache.run_pending_tasks().await;

        assert!(store.entry_count() <= 3, "held {}", store.entry_count());
    }
}
