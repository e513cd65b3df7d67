use pogo_events::config::SETTINGS;
use pogo_events::feed::client::FeedClient;
use pogo_events::registry::register_service;
use pogo_events::storage::EventCache;
use pogo_events::web::run_http_server;

use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(SETTINGS.get_trace_level())
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    let cache = EventCache::new(Arc::new(FeedClient::new()));

    // Announce ourselves to the dashboard once the server is up.
    // Scheduled refreshes come from an external timer hitting /api/refresh.
    tokio::spawn(register_service());

    info!("Starting events API server.");
    run_http_server(cache).await
}
