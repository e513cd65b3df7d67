use crate::{
    config,
    error::{AppError, AppResult},
    feed::events::Event,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Anything the cache can pull a fresh event list from.
/// Lets tests stand in for the real feed.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch(&self) -> AppResult<Vec<Event>>;
}

pub struct FeedClient {
    http_client: Client,
    feed_url: String,
}

impl FeedClient {
    pub fn new() -> Self {
        let settings = &config::SETTINGS;
        Self::with_url(settings.feed_url.clone(), settings.feed_timeout_sec)
    }

    pub fn with_url(feed_url: String, timeout_sec: u64) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::new(timeout_sec, 0))
            .build()
            .unwrap();
        Self {
            http_client,
            feed_url,
        }
    }

    async fn get(&self) -> AppResult<String> {
        let response = self.http_client.get(&self.feed_url).send().await?;

        match response.status() {
            StatusCode::OK => response
                .text()
                .await
                .map_err(|e| AppError::Unavailable(e.to_string())),
            status => Err(AppError::Unavailable(format!("{}", status))),
        }
    }

    fn parse_events(body: &str) -> AppResult<Vec<Event>> {
        let events = serde_json::from_str::<Vec<Event>>(body)?;
        Ok(events)
    }
}

#[async_trait]
impl EventSource for FeedClient {
    /// One GET against the feed, no retries.
    async fn fetch(&self) -> AppResult<Vec<Event>> {
        let body = self.get().await?;
        let events = FeedClient::parse_events(&body)?;
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_events_accepts_a_feed_document() {
        let body = r#"[
            {"eventID": "e1", "name": "Spotlight Hour", "start": "2024-07-02T18:00:00.000", "end": "2024-07-02T19:00:00.000"},
            {"eventID": "e2", "name": "Raid Day"}
        ]"#;
        let events = FeedClient::parse_events(body).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_id.as_deref(), Some("e1"));
        assert_eq!(events[1].start, None);
    }

    #[test]
    fn parse_events_rejects_non_array_documents() {
        let err = FeedClient::parse_events(r#"{"events": []}"#).unwrap_err();
        assert!(matches!(err, AppError::Malformed(_)));
    }

    #[test]
    fn parse_events_rejects_invalid_json() {
        let err = FeedClient::parse_events("<html>503</html>").unwrap_err();
        assert!(matches!(err, AppError::Malformed(_)));
    }
}
