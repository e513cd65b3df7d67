use crate::feed::events::Slide;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct SlidesResponse {
    pub slides: Vec<Slide>,
}

#[derive(Deserialize, Serialize)]
pub struct RefreshResponse {
    pub count: usize,
    pub last_updated: DateTime<Utc>,
}

#[derive(Deserialize, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
}

#[derive(Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
