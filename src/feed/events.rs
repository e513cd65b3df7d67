use chrono::{naive::NaiveDateTime, DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One upcoming game event, as published by the ScrapedDuck feed.
/// Fields are passed through untouched; only JSON decoding is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, rename = "eventID")]
    pub event_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    // Feed-local timestamps without timezone, kept as strings.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub extra_data: Option<serde_json::Value>,
}

/// One complete fetch result. Immutable once published to the cache.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub timestamp: DateTime<Utc>,
    pub events: Vec<Event>,
}

impl FeedSnapshot {
    pub fn new(events: Vec<Event>) -> Self {
        FeedSnapshot {
            timestamp: Utc::now(),
            events,
        }
    }
}

/// Dashboard view of an event, consumed by the slideshow widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub value: String,
    pub url: Option<String>,
}

impl Slide {
    fn from_event(event: &Event) -> Self {
        let start = format_feed_time(event.start.as_deref());
        let end = format_feed_time(event.end.as_deref());
        Slide {
            title: event.name.clone(),
            subtitle: event.heading.clone(),
            image_url: event.image.clone(),
            value: format!("{} - {}", start, end),
            url: event.link.clone(),
        }
    }
}

/// Derive the slideshow from a snapshot: drop events that already ended,
/// order the rest chronologically and keep the first `max_slides`.
/// Events whose end time cannot be parsed are skipped entirely.
pub fn upcoming_slides(events: &[Event], now: NaiveDateTime, max_slides: usize) -> Vec<Slide> {
    events
        .iter()
        .filter(|event| {
            event
                .end
                .as_deref()
                .and_then(parse_feed_time)
                .map(|end| end > now)
                .unwrap_or(false)
        })
        .sorted_by(|a, b| a.start.cmp(&b.start))
        .take(max_slides)
        .map(Slide::from_event)
        .collect()
}

// The feed usually publishes local wall-clock times without an offset.
// Accept both forms and compare on the wall-clock value.
fn parse_feed_time(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

fn format_feed_time(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match parse_feed_time(value) {
        Some(dt) => dt.format("%b %d, %H:%M").to_string(),
        // Unparseable timestamps are displayed as-is
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(id: &str, start: &str, end: &str) -> Event {
        Event {
            event_id: Some(id.to_string()),
            name: Some(format!("Event {}", id)),
            event_type: Some("community-day".to_string()),
            heading: Some("Heading".to_string()),
            link: Some(format!("https://leekduck.com/events/{}", id)),
            image: Some(format!("https://cdn.leekduck.com/{}.jpg", id)),
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            extra_data: None,
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn ended_events_are_dropped() {
        let events = vec![
            event("past", "2024-06-01T10:00:00.000", "2024-06-02T20:00:00.000"),
            event("live", "2024-06-15T10:00:00.000", "2024-06-15T20:00:00.000"),
        ];
        let slides = upcoming_slides(&events, now(), 10);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title.as_deref(), Some("Event live"));
    }

    #[test]
    fn slides_are_ordered_by_start_and_capped() {
        let events = vec![
            event("b", "2024-07-02T10:00:00.000", "2024-07-02T20:00:00.000"),
            event("a", "2024-07-01T10:00:00.000", "2024-07-01T20:00:00.000"),
            event("c", "2024-07-03T10:00:00.000", "2024-07-03T20:00:00.000"),
        ];
        let slides = upcoming_slides(&events, now(), 2);
        assert_eq!(
            slides
                .iter()
                .map(|s| s.title.clone().unwrap())
                .collect::<Vec<_>>(),
            vec!["Event a", "Event b"]
        );
    }

    #[test]
    fn unparseable_end_means_skipped() {
        let events = vec![event("bad", "2024-07-01T10:00:00.000", "whenever")];
        assert!(upcoming_slides(&events, now(), 10).is_empty());
    }

    #[test]
    fn slide_value_formats_the_time_range() {
        let events = vec![event(
            "cd",
            "2024-07-01T14:00:00.000",
            "2024-07-01T17:00:00.000",
        )];
        let slides = upcoming_slides(&events, now(), 10);
        assert_eq!(slides[0].value, "Jul 01, 14:00 - Jul 01, 17:00");
    }

    #[test]
    fn offset_timestamps_are_accepted() {
        assert_eq!(
            parse_feed_time("2024-07-01T14:00:00+02:00"),
            NaiveDate::from_ymd_opt(2024, 7, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
        );
    }

    #[test]
    fn event_decodes_feed_field_names() {
        let raw = r#"{
            "eventID": "uf2024",
            "name": "Ultra Frenzy",
            "eventType": "event",
            "heading": "Special Event",
            "link": "https://leekduck.com/events/uf2024",
            "image": "https://cdn.leekduck.com/uf.jpg",
            "start": "2024-07-01T10:00:00.000",
            "end": "2024-07-03T20:00:00.000",
            "extraData": {"spotlight": true}
        }"#;
        let event: Event = serde_json::from_str(raw).unwrap();
        assert_eq!(event.event_id.as_deref(), Some("uf2024"));
        assert_eq!(event.event_type.as_deref(), Some("event"));
        assert!(event.extra_data.is_some());
    }
}
