use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::error::AppResult;
use crate::feed::client::EventSource;
use crate::feed::events::FeedSnapshot;

type SharedSnapshot = Arc<RwLock<Option<Arc<FeedSnapshot>>>>;

/// In-memory cache of the last successful feed fetch.
///
/// The slot holds either nothing or one complete snapshot; refresh swaps the
/// whole snapshot under the write lock, so readers never see a partial update.
/// A failed refresh leaves the previous snapshot in place.
#[derive(Clone)]
pub struct EventCache {
    source: Arc<dyn EventSource>,
    slot: SharedSnapshot,
}

impl EventCache {
    pub fn new(source: Arc<dyn EventSource>) -> EventCache {
        EventCache {
            source,
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Cached snapshot, fetching once from upstream if the cache is still
    /// empty. A populated cache never triggers a network call.
    pub async fn get_events(&self) -> AppResult<Arc<FeedSnapshot>> {
        if let Some(snapshot) = self.snapshot() {
            return Ok(snapshot);
        }
        // Bootstrap fetch on first read
        self.fetch_and_publish().await
    }

    /// Re-fetch from upstream and swap in the new snapshot, returning the new
    /// event count and fetch timestamp. On error the cache is untouched.
    pub async fn refresh(&self) -> AppResult<(usize, DateTime<Utc>)> {
        let snapshot = self.fetch_and_publish().await?;
        Ok((snapshot.events.len(), snapshot.timestamp))
    }

    pub fn snapshot(&self) -> Option<Arc<FeedSnapshot>> {
        self.slot.read().unwrap().clone()
    }

    async fn fetch_and_publish(&self) -> AppResult<Arc<FeedSnapshot>> {
        let events = self.source.fetch().await?;
        let snapshot = Arc::new(FeedSnapshot::new(events));
        *self.slot.write().unwrap() = Some(snapshot.clone());
        Ok(snapshot)
    }
}
