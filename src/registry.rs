use crate::config;
use crate::web::SERVICE_ID;
use serde::Serialize;
use std::time::Duration;
use tokio::time;
use tracing::{error, info};

/// Descriptor the dashboard registry expects for a slideshow widget.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceDescriptor {
    id: String,
    name: String,
    url: String,
    api_url: String,
    #[serde(rename = "type")]
    kind: String,
    size: String,
}

/// Announce this service to the dashboard registry, once, after giving the
/// server a moment to come up. A failure is logged and not retried.
pub async fn register_service() {
    let settings = &config::SETTINGS;
    let Some(registry_url) = settings.registry_url.as_deref() else {
        info!("No registry configured, skipping service registration");
        return;
    };

    time::sleep(Duration::from_secs(5)).await;

    let descriptor = ServiceDescriptor {
        id: String::from(SERVICE_ID),
        name: String::from("Pokemon Go Events"),
        url: settings.service_base_url.clone(),
        api_url: format!("{}/api/events", settings.service_base_url),
        kind: String::from("slideshow"),
        size: String::from("1x1"),
    };

    let client = reqwest::Client::new();
    match client.post(registry_url).json(&descriptor).send().await {
        Ok(_) => info!("Registered service with dashboard registry"),
        Err(e) => error!("Failed to register service: {e}"),
    }
}
